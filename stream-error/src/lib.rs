use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreamError>;

/// Error type shared by the streaming crates.
///
/// `SourceUnavailable` and `ReadFault` are recoverable at the per-source
/// level: a multi-file run reports them and moves on to the next source.
/// Everything else aborts the invocation.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open {0}: {1}")]
    SourceUnavailable(String, String),
    #[error("read fault on {0}: {1}")]
    ReadFault(String, String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StreamError {
    /// True for errors that should not stop a multi-source run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StreamError::SourceUnavailable(..) | StreamError::ReadFault(..)
        )
    }
}
