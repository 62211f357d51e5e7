use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(index = 2, value_name = "XDF_FILE", help = "Path of the XDF file to create")]
    pub xdf_file: String,

    #[arg(long, help = "Show detailed conversion statistics")]
    pub stats: bool,

    #[arg(short, long, help = "Suppress the completion message")]
    pub quiet: bool,
}
