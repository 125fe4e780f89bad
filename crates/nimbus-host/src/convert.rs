use nimbus_errno::{BoxError, Errno, ErrnoError};
use thiserror::Error;
use tracing::trace;

use crate::exception::HostException;

/// The shapes of failure a backend can catch at the host boundary.
///
/// [`normalize`] accepts anything convertible into this; the `From` impls
/// cover the two structured shapes, and [`CaughtError::other`] wraps plain
/// errors and string messages.
#[derive(Debug, Error)]
pub enum CaughtError {
    /// An error already in the unified vocabulary.
    #[error(transparent)]
    Errno(#[from] ErrnoError),

    /// A structured exception from the host platform.
    #[error(transparent)]
    Host(#[from] HostException),

    /// Any other error-like value.
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl CaughtError {
    /// Wraps a plain error-like value (string messages included).
    #[must_use]
    pub fn other(error: impl Into<BoxError>) -> Self {
        Self::Other(error.into())
    }
}

/// Maps a host exception name to the POSIX code Nimbus reports for it.
///
/// The match is exact and case-sensitive. The host's name vocabulary is
/// open-ended, so any name without a more specific mapping classifies as
/// [`Errno::EIO`].
#[must_use]
pub fn errno_for_exception(name: &str) -> Errno {
    match name {
        "IndexSizeError"
        | "HierarchyRequestError"
        | "InvalidCharacterError"
        | "InvalidStateError"
        | "SyntaxError"
        | "NamespaceError"
        | "TypeMismatchError"
        | "ConstraintError"
        | "VersionError"
        | "URLMismatchError"
        | "InvalidNodeTypeError" => Errno::EINVAL,
        "WrongDocumentError" => Errno::EXDEV,
        "NoModificationAllowedError"
        | "InvalidModificationError"
        | "InvalidAccessError"
        | "SecurityError"
        | "NotAllowedError" => Errno::EACCES,
        "NotFoundError" => Errno::ENOENT,
        "NotSupportedError" => Errno::ENOTSUP,
        "InUseAttributeError" => Errno::EBUSY,
        "NetworkError" => Errno::ENETDOWN,
        "AbortError" => Errno::EINTR,
        "QuotaExceededError" => Errno::ENOSPC,
        "TimeoutError" => Errno::ETIMEDOUT,
        "ReadOnlyError" => Errno::EROFS,
        // DataCloneError, EncodingError, NotReadableError, DataError,
        // TransactionInactiveError, OperationError, and UnknownError carry
        // no more specific filesystem meaning, and hosts mint new names
        // over time.
        _ => Errno::EIO,
    }
}

/// Normalizes anything caught at the host boundary into an [`ErrnoError`].
///
/// An [`ErrnoError`] input passes through unchanged, `path` and `syscall`
/// arguments included (they describe this call site, not the error's own
/// raise site). A [`HostException`] is classified by name; its message,
/// trace, and cause move into the result. Anything else reports as
/// [`Errno::EIO`] with the input's rendered message and the input itself
/// attached as the cause.
///
/// Never fails. The caller decides whether to raise the result.
#[must_use]
pub fn normalize(
    error: impl Into<CaughtError>,
    path: Option<&str>,
    syscall: Option<&str>,
) -> ErrnoError {
    match error.into() {
        CaughtError::Errno(err) => err,
        CaughtError::Host(exception) => {
            let (name, message, cause, trace) = exception.into_parts();
            let errno = errno_for_exception(&name);
            trace!(name = %name, errno = %errno, "classified host exception");
            let err = ErrnoError::new(errno, message, path, syscall).with_trace(trace);
            match cause {
                Some(cause) => err.with_cause(cause),
                None => err,
            }
        },
        CaughtError::Other(error) => {
            trace!(error = %error, "no classification for error, reporting EIO");
            let message = error.to_string();
            ErrnoError::new(Errno::EIO, message, path, syscall).with_cause(error)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    const MAPPING: &[(&str, Errno)] = &[
        ("IndexSizeError", Errno::EINVAL),
        ("HierarchyRequestError", Errno::EINVAL),
        ("InvalidCharacterError", Errno::EINVAL),
        ("InvalidStateError", Errno::EINVAL),
        ("SyntaxError", Errno::EINVAL),
        ("NamespaceError", Errno::EINVAL),
        ("TypeMismatchError", Errno::EINVAL),
        ("ConstraintError", Errno::EINVAL),
        ("VersionError", Errno::EINVAL),
        ("URLMismatchError", Errno::EINVAL),
        ("InvalidNodeTypeError", Errno::EINVAL),
        ("WrongDocumentError", Errno::EXDEV),
        ("NoModificationAllowedError", Errno::EACCES),
        ("InvalidModificationError", Errno::EACCES),
        ("InvalidAccessError", Errno::EACCES),
        ("SecurityError", Errno::EACCES),
        ("NotAllowedError", Errno::EACCES),
        ("NotFoundError", Errno::ENOENT),
        ("NotSupportedError", Errno::ENOTSUP),
        ("InUseAttributeError", Errno::EBUSY),
        ("NetworkError", Errno::ENETDOWN),
        ("AbortError", Errno::EINTR),
        ("QuotaExceededError", Errno::ENOSPC),
        ("TimeoutError", Errno::ETIMEDOUT),
        ("ReadOnlyError", Errno::EROFS),
        ("DataCloneError", Errno::EIO),
        ("EncodingError", Errno::EIO),
        ("NotReadableError", Errno::EIO),
        ("DataError", Errno::EIO),
        ("TransactionInactiveError", Errno::EIO),
        ("OperationError", Errno::EIO),
        ("UnknownError", Errno::EIO),
    ];

    #[test]
    fn test_classification_table() {
        for (name, expected) in MAPPING {
            assert_eq!(errno_for_exception(name), *expected, "{name}");
        }
    }

    #[test]
    fn test_unknown_names_default_to_eio() {
        assert_eq!(errno_for_exception("BogusError"), Errno::EIO);
        assert_eq!(errno_for_exception(""), Errno::EIO);
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(errno_for_exception("notfounderror"), Errno::EIO);
        assert_eq!(errno_for_exception("NOTFOUNDERROR"), Errno::EIO);
    }

    #[test]
    fn test_normalize_returns_unified_errors_unchanged() {
        let original = ErrnoError::new(Errno::EEXIST, "already there", Some("/a"), Some("mkdir"));
        let err = normalize(original, Some("/ignored"), Some("unlink"));
        assert_eq!(err.errno(), Errno::EEXIST);
        assert_eq!(err.message(), "already there");
        assert_eq!(err.path(), Some("/a"));
        assert_eq!(err.syscall(), Some("mkdir"));
    }

    #[test]
    fn test_normalize_classifies_host_exception() {
        let ex = HostException::new("NotFoundError", "missing");
        let err = normalize(ex, Some("/tmp/x"), Some("open"));
        assert_eq!(err.errno(), Errno::ENOENT);
        assert_eq!(i32::from(err.errno()), 2);
        assert_eq!(err.message(), "missing");
        assert_eq!(err.path(), Some("/tmp/x"));
        assert_eq!(err.syscall(), Some("open"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_normalize_reports_generic_errors_as_eio() {
        let err = normalize(CaughtError::other("boom"), Some("/a"), Some("read"));
        assert_eq!(err.errno(), Errno::EIO);
        assert_eq!(err.message(), "boom");
        assert_eq!(err.path(), Some("/a"));
        assert_eq!(err.syscall(), Some("read"));
    }

    #[test]
    fn test_normalize_keeps_generic_error_as_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = normalize(CaughtError::other(io), None, Some("write"));
        assert_eq!(err.errno(), Errno::EIO);
        assert_eq!(err.message(), "pipe closed");
        let source = err.source().unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_normalize_preserves_host_exception_cause() {
        let inner = std::io::Error::other("device lost");
        let ex = HostException::new("NotReadableError", "read failed").with_cause(inner);
        let err = normalize(ex, Some("/blob"), Some("read"));
        assert_eq!(err.errno(), Errno::EIO);
        assert_eq!(err.source().unwrap().to_string(), "device lost");
    }

    #[test]
    fn test_normalize_without_context_leaves_fields_unset() {
        let ex = HostException::new("TimeoutError", "lock wait timed out");
        let err = normalize(ex, None, None);
        assert_eq!(err.errno(), Errno::ETIMEDOUT);
        assert_eq!(err.path(), None);
        assert_eq!(err.syscall(), None);
    }

    #[test]
    fn test_normalize_always_carries_a_trace() {
        let from_host = normalize(HostException::new("AbortError", "interrupted"), None, None);
        let from_other = normalize(CaughtError::other("boom"), None, None);
        let _ = from_host.trace();
        let _ = from_other.trace();
    }

    #[test]
    fn test_caught_error_display_is_transparent() {
        let caught = CaughtError::from(HostException::new("NetworkError", "fetch failed"));
        assert_eq!(caught.to_string(), "NetworkError: fetch failed");
        let caught = CaughtError::other("boom");
        assert_eq!(caught.to_string(), "boom");
    }
}
