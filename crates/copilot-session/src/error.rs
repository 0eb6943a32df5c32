use thiserror::Error;

/// Errors raised while setting up the controller or its logger
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to create async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
