//! Log sink module
//!
//! Every log line is written to stdout and, when available, appended to
//! the application log file inside the logs volume. A missing or
//! unwritable logs volume downgrades logging to stdout only, it never
//! stops the service.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Global log sink instance
static LOG_SINK: OnceLock<LogSink> = OnceLock::new();

/// Thread-safe tee over stdout and the optional log file
pub struct LogSink {
    file: Option<Mutex<File>>,
    debug_enabled: bool,
}

impl LogSink {
    /// Write one formatted line to every target
    pub fn write_line(&self, line: &str) {
        println!("{line}");
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{line}");
            }
        }
    }

    pub const fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub const fn has_file(&self) -> bool {
        self.file.is_some()
    }
}

/// Resolve the log file target: a directory gets `app.log` inside it,
/// any other value is treated as the file path itself.
fn resolve_log_file(log_path: &str) -> PathBuf {
    let path = Path::new(log_path);
    if path.is_dir() {
        path.join("app.log")
    } else {
        path.to_path_buf()
    }
}

/// Initialize the global log sink
///
/// Should be called once at application startup. The sink is installed
/// even when the log file cannot be opened; the open error is returned
/// so the caller can report the downgrade.
pub fn init(log_path: &str, debug_enabled: bool) -> io::Result<()> {
    let target = resolve_log_file(log_path);
    let (file, result) = match OpenOptions::new().create(true).append(true).open(&target) {
        Ok(f) => (Some(Mutex::new(f)), Ok(())),
        Err(e) => (None, Err(e)),
    };

    let sink = LogSink {
        file,
        debug_enabled,
    };
    if LOG_SINK.set(sink).is_err() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log sink already initialized",
        ));
    }
    result
}

/// Get the global log sink
///
/// Panics if `init()` has not been called.
pub fn get() -> &'static LogSink {
    LOG_SINK
        .get()
        .expect("Log sink not initialized. Call logger::writer::init() first.")
}

/// Check if the log sink has been initialized
pub fn is_initialized() -> bool {
    LOG_SINK.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_directory_appends_app_log() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_log_file(dir.path().to_str().unwrap());
        assert_eq!(resolved, dir.path().join("app.log"));
    }

    #[test]
    fn test_resolve_non_directory_is_used_verbatim() {
        let resolved = resolve_log_file("/nonexistent/podboard-test/app.log");
        assert_eq!(resolved, Path::new("/nonexistent/podboard-test/app.log"));
    }

    #[test]
    fn test_sink_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let sink = LogSink {
            file: Some(Mutex::new(file)),
            debug_enabled: false,
        };

        sink.write_line("first line");
        sink.write_line("second line");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn test_sink_without_file_does_not_panic() {
        let sink = LogSink {
            file: None,
            debug_enabled: true,
        };
        sink.write_line("stdout only");
        assert!(!sink.has_file());
        assert!(sink.debug_enabled());
    }
}
