use crate::layout::args::LayoutArgs;
use crate::output::args::OutputArgs;
use clap::{ArgAction, Parser};

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a JSON ECU map description into an XDF definition")]
pub struct Args {
    #[command(flatten)]
    pub layout: LayoutArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
