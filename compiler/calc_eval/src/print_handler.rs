//! Destinations for `print` output.
//!
//! Each executed `print` emits one line: the decimal value and a newline.
//! - `Stdout`: the process's standard output (default)
//! - `Buffer`: captured in memory for tests and embedders
//! - `Silent`: discarded
//!
//! Enum dispatch rather than a trait object; the set of destinations is
//! closed.

use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed values go.
pub enum PrintHandler {
    /// Writes each line to stdout.
    Stdout,
    /// Appends each line to an in-memory buffer.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandler {
    /// Emit one printed value as a line.
    pub fn emit(&self, value: i64) {
        match self {
            Self::Stdout => println!("{value}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(&value.to_string());
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output so far.
    ///
    /// Empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Captured output parsed back into the printed values, in order.
    pub fn printed_values(&self) -> Vec<i64> {
        self.output()
            .lines()
            .filter_map(|line| line.parse().ok())
            .collect()
    }

    /// Clear captured output. No-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }

    /// Whether output is kept in memory.
    pub fn captures(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }
}

/// Print handler shared between an evaluator and the evaluators it spawns
/// for calls.
pub type SharedPrintHandler = Arc<PrintHandler>;

/// Create a stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

/// Create a print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
