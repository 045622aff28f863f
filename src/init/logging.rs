use crate::err::Error;
use std::{fs::OpenOptions, sync::Mutex};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route all `tracing` output to `log_file`, appending to whatever is already there.
///
/// The level defaults to `info` and can be changed with `RUST_LOG`.
pub fn init_logging(log_file: &str) -> Result<(), Error> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| Error::Logging(e.to_string()))?;

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("PID={} starting up", std::process::id());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("application.log");
        assert!(matches!(
            init_logging(&path.display().to_string()),
            Err(Error::Io(_))
        ));
    }
}
