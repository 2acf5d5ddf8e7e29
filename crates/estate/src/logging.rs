//! Logging setup for the native and web builds.
//!
//! Native builds write to `{data_dir}/estate.log`; the web build writes to the
//! browser console.

#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::path::Path;

#[cfg(feature = "native")]
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "estate.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// How much of the log survives between runs.
///
/// A log longer than `max_len` bytes is cut down to roughly its last
/// `keep_len` bytes, starting on a whole line.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRetention {
    pub max_len: u64,
    pub keep_len: u64,
}

#[cfg(feature = "native")]
impl Default for LogRetention {
    fn default() -> Self {
        Self {
            max_len: 4 * 1024 * 1024,
            keep_len: 512 * 1024,
        }
    }
}

#[cfg(feature = "native")]
impl LogRetention {
    /// Header line written at the top of a trimmed log
    pub const TRIMMED_MARKER: &'static str = "# earlier entries discarded\n";

    /// Cut the log at `path` down if it has grown too long.
    ///
    /// Returns whether anything was discarded. A missing file is left alone.
    pub fn apply(&self, path: &Path) -> std::io::Result<bool> {
        let contents = match fs::read(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        let len = contents.len() as u64;
        if len <= self.max_len {
            return Ok(false);
        }

        let cut = usize::try_from(len.saturating_sub(self.keep_len)).unwrap_or(contents.len());
        let tail = &contents[cut..];
        let tail = match tail.iter().position(|&b| b == b'\n') {
            Some(newline) if cut > 0 && contents[cut - 1] != b'\n' => &tail[newline + 1..],
            _ => tail,
        };

        let mut kept = Vec::with_capacity(Self::TRIMMED_MARKER.len() + tail.len());
        kept.extend_from_slice(Self::TRIMMED_MARKER.as_bytes());
        kept.extend_from_slice(tail);

        let staging = path.with_extension("log.trim");
        fs::write(&staging, kept)?;
        fs::rename(&staging, path)?;
        Ok(true)
    }
}

/// Initialize logging to a file in the data directory.
///
/// The level applies to this crate; the game core logs at `warn` unless
/// `RUST_LOG` says otherwise.
#[cfg(feature = "native")]
pub fn init_logging(data_dir: &Path, level: &str) -> Result<(), LoggingError> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let trimmed = LogRetention::default().apply(&log_path).unwrap_or_else(|e| {
        eprintln!("Warning: could not trim {}: {}", log_path.display(), e);
        false
    });

    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);

    let default_filter = format!("estate={level},estate_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(log_path = %log_path.display(), trimmed, "estate logging initialized");
    Ok(())
}

/// Route `tracing` output to the browser console.
#[cfg(feature = "web")]
pub fn init_web_logging() {
    tracing_wasm::set_as_global_default();
}
