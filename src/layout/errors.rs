use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Input file not found: {0}.")]
    InputNotFound(String),

    #[error("Failed to read input file {path}: {source}")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} format in {path}: {message}")]
    InputParseError {
        path: String,
        format: &'static str,
        message: String,
    },

    #[error("Invalid hexadecimal format for BASEOFFSET: '{0}'.")]
    InvalidOffset(String),
}
