use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("XDF rendering failed: {0}.")]
    RenderError(String),

    #[error("Failed to write {path}: {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
