use thiserror::Error;

use crate::layout::errors::LayoutError;
use crate::output::errors::OutputError;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Coarse failure classes a caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    InputParseError,
    InvalidOffset,
    OutputWriteError,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::Layout(LayoutError::InputNotFound(_))
            | ConversionError::Layout(LayoutError::InputUnreadable { .. }) => {
                ErrorKind::InputNotFound
            }
            ConversionError::Layout(LayoutError::InputParseError { .. }) => {
                ErrorKind::InputParseError
            }
            ConversionError::Layout(LayoutError::InvalidOffset(_)) => ErrorKind::InvalidOffset,
            ConversionError::Output(_) => ErrorKind::OutputWriteError,
        }
    }
}
