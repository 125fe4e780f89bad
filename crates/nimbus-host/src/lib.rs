//! Host platform exception normalization for the Nimbus virtual filesystem.
//!
//! Browser-like host environments report failures as structured exceptions
//! identified by name (`"NotFoundError"`, `"QuotaExceededError"`, ...).
//! Nimbus backends built on host storage APIs catch those exceptions at the
//! host boundary and hand them to [`normalize`], which classifies them into
//! the POSIX vocabulary of `nimbus-errno` and attaches the path and syscall
//! context of the failed operation.
//!
//! # Example
//!
//! ```rust
//! use nimbus_host::{Errno, HostException, normalize};
//!
//! let ex = HostException::new("QuotaExceededError", "storage quota exceeded");
//! let err = normalize(ex, Some("/cache/blob"), Some("write"));
//!
//! assert_eq!(err.errno(), Errno::ENOSPC);
//! assert_eq!(err.to_string(), "ENOSPC: storage quota exceeded, '/cache/blob'");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// Exception-name classification and error normalization.
pub mod convert;
/// Host platform exception type.
pub mod exception;

pub use convert::{CaughtError, errno_for_exception, normalize};
pub use exception::HostException;
pub use nimbus_errno::{BoxError, Errno, ErrnoError, ErrnoResult};
