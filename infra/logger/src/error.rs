use thiserror::Error;

/// A specialized [`LoggerError`] enum of this crate.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid logger configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to build rolling file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("failed to install global subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
