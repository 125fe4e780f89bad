use std::backtrace::Backtrace;

use nimbus_errno::BoxError;
use thiserror::Error;

// `derive(Error)` special-cases fields spelled `Backtrace` and generates
// nightly-only `provide` support; the alias hides the type so the crate
// builds on stable.
type Trace = Backtrace;

/// A structured exception reported by the host platform.
///
/// The name vocabulary belongs to the host and is open-ended: hosts mint new
/// exception names over time, so the name is carried as a string and never
/// as a closed enumeration. Classification into the POSIX vocabulary happens
/// in [`crate::convert`].
#[derive(Debug, Error)]
#[error("{name}: {message}")]
pub struct HostException {
    name: String,
    message: String,
    trace: Trace,
    #[source]
    cause: Option<BoxError>,
}

impl HostException {
    /// Builds an exception, capturing a trace at the call site.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            trace: Backtrace::capture(),
            cause: None,
        }
    }

    /// Attaches the underlying error that triggered the exception.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The host-defined symbolic name (`"NotFoundError"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The trace captured where the exception was raised.
    #[must_use]
    pub fn trace(&self) -> &Backtrace {
        &self.trace
    }

    pub(crate) fn into_parts(self) -> (String, String, Option<BoxError>, Backtrace) {
        (self.name, self.message, self.cause, self.trace)
    }
}
