use std::io;

/// Combined error type for common errors in the webserver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("unknown timezone {name}: {reason}")]
    Timezone { name: String, reason: String },

    #[error("logging setup failed: {0}")]
    Logging(String),
}
