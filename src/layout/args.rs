use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    #[arg(
        index = 1,
        value_name = "JSON_FILE",
        help = "Path to the input map description (json, yaml or toml)"
    )]
    pub json_file: String,

    #[arg(
        long = "baseoffset",
        value_name = "HEX",
        default_value = "0x0",
        allow_hyphen_values = true,
        help = "Hexadecimal BASEOFFSET subtracted from every address (e.g. 0x200000)"
    )]
    pub base_offset: String,
}
