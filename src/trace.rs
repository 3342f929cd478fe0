//! File-backed diagnostics.
//!
//! The terminal is owned by the UI, so tracing output goes to
//! `~/.local/share/<app>/<app>.log`. Setup failures are swallowed:
//! the apps run fine without diagnostics.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn data_dir(app: &str) -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app)
}

/// Initialize the global tracing subscriber. `RUST_LOG` overrides the
/// configured level. Idempotent: a second call is a no-op.
pub fn init(app: &str, enabled: bool, level: &str) {
    if !enabled {
        return;
    }

    let dir = data_dir(app);
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", app)))
    {
        Ok(f) => f,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
