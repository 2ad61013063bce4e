use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

/// Initialize the global tracing subscriber. With a log path, events go
/// to that file without ANSI escapes; otherwise they fall back to
/// stderr. Safe to call more than once; later calls are no-ops.
pub fn init(log_path: Option<&Path>) -> io::Result<()> {
    match log_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::INFO)
                .with_writer(io::stderr)
                .with_target(false)
                .try_init();
        }
    }
    Ok(())
}
