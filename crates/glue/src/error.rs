use glue_path::PathError;
use thiserror::Error;

/// Error type observers may return; anything boxable converts into it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum GlueError {
    #[error("path error: {0}")]
    Path(#[from] PathError),
    #[error("no array at `{0}`")]
    MissingArray(String),
    #[error("value at `{0}` is not an array")]
    NotAnArray(String),
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
    #[error("observer failed: {0}")]
    Observer(#[source] BoxError),
}

impl GlueError {
    /// Wrap an arbitrary error raised inside an observer callback.
    pub fn observer(err: impl Into<BoxError>) -> Self {
        GlueError::Observer(err.into())
    }
}
