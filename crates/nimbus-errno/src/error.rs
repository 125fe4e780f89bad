//! Unified filesystem error type.

use std::backtrace::Backtrace;

use thiserror::Error;

use crate::errno::Errno;

/// Boxed error payload carried as an error's underlying cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// `derive(Error)` special-cases fields spelled `Backtrace` and generates
// nightly-only `provide` support; the alias hides the type so the crate
// builds on stable.
type Trace = Backtrace;

/// Result type for filesystem operations.
pub type ErrnoResult<T> = Result<T, ErrnoError>;

/// The error every Nimbus filesystem operation surfaces.
///
/// Callers dispatch on [`errno`](Self::errno) rather than on the message
/// text; the message, path, and syscall fields exist for diagnostics only.
/// Construct one with [`new`](Self::new) or [`with`](Self::with), then hand
/// it to the caller that raises it.
#[derive(Debug, Error)]
#[error("{}: {message}{}", .errno.code(), path_suffix(.path.as_deref()))]
pub struct ErrnoError {
    errno: Errno,
    message: String,
    path: Option<String>,
    syscall: Option<String>,
    trace: Trace,
    #[source]
    cause: Option<BoxError>,
}

impl ErrnoError {
    /// Builds an error with an explicit message, capturing a trace at the
    /// call site.
    #[must_use]
    pub fn new(
        errno: Errno,
        message: impl Into<String>,
        path: Option<&str>,
        syscall: Option<&str>,
    ) -> Self {
        Self {
            errno,
            message: message.into(),
            path: path.map(str::to_owned),
            syscall: syscall.map(str::to_owned),
            trace: Backtrace::capture(),
            cause: None,
        }
    }

    /// Builds an error carrying the strerror-style default message for
    /// `errno`.
    #[must_use]
    pub fn with(errno: Errno, path: Option<&str>, syscall: Option<&str>) -> Self {
        Self::new(errno, errno.message(), path, syscall)
    }

    /// Replaces the captured trace with one recorded at the original raise
    /// site.
    #[must_use]
    pub fn with_trace(mut self, trace: Backtrace) -> Self {
        self.trace = trace;
        self
    }

    /// Attaches the underlying error that led to this one.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The POSIX code classifying this failure.
    #[must_use]
    pub fn errno(&self) -> Errno {
        self.errno
    }

    /// The symbolic name of the code (`"ENOENT"`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.errno.code()
    }

    /// The human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The filesystem path implicated in the failure, if one was known.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The filesystem operation that failed, if one was known.
    #[must_use]
    pub fn syscall(&self) -> Option<&str> {
        self.syscall.as_deref()
    }

    /// The trace captured where the error was raised. Whether it holds
    /// frames is controlled by the environment (`RUST_BACKTRACE`).
    #[must_use]
    pub fn trace(&self) -> &Backtrace {
        &self.trace
    }
}

fn path_suffix(path: Option<&str>) -> String {
    match path {
        Some(path) => format!(", '{path}'"),
        None => String::new(),
    }
}
