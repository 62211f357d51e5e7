//! Conversion of JSON ECU map descriptions into XDF tuning definitions.

pub mod args;
pub mod commands;
pub mod error;
pub mod layout;
pub mod output;
pub mod visuals;
pub mod writer;
pub mod xdf;

pub use commands::convert::convert;
pub use error::{ConversionError, ErrorKind};
