use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FlogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("cannot write log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlogError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FlogError::InvalidArgument(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, FlogError::Io { .. })
    }
}
