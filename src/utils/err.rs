//! Small `unwrap`-with-context helpers, in the spirit of the error handling
//! used throughout the rest of this crate: fatal startup/IO conditions print a
//! module-tagged diagnostic to stderr and exit, rather than unwinding through
//! an opaque panic.

use std::fmt::Display;
use std::process::exit;

/// Extension trait for turning a `Result` into a value or a fatal exit.
pub trait ResultWithErrorContext<T> {
    /// Unwraps `self`, or prints `message` with the underlying error and exits
    /// the process with a nonzero status.
    fn unwrap_or_die(self, message: &str) -> T;
}

impl<T, E: Display> ResultWithErrorContext<T> for Result<T, E> {
    #[inline]
    fn unwrap_or_die(self, message: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("Error: {message}\n  Caused by: {e}");
                exit(1);
            }
        }
    }
}

/// Extension trait for attaching a file path to an I/O-shaped result's error.
pub(crate) trait WithFileContext<T> {
    fn with_file_context(self, path: impl Display) -> std::io::Result<T>;
}

impl<T> WithFileContext<T> for std::io::Result<T> {
    #[inline]
    fn with_file_context(self, path: impl Display) -> std::io::Result<T> {
        self.map_err(|e| std::io::Error::other(format!("{path}: {e}")))
    }
}
