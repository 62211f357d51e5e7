pub mod convert;
pub mod stats;

use crate::args::Args;
use crate::error::ConversionError;
use stats::ConversionStats;

pub fn run(args: &Args) -> Result<ConversionStats, ConversionError> {
    convert::convert(
        &args.layout.json_file,
        &args.output.xdf_file,
        &args.layout.base_offset,
    )
}
