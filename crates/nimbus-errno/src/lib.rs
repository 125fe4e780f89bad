//! POSIX-style error vocabulary for the Nimbus virtual filesystem.
//!
//! Every failure a Nimbus backend surfaces is an [`ErrnoError`]: a POSIX
//! error code plus the message, path, and syscall context a caller needs for
//! uniform, code-based handling. This crate defines that vocabulary and
//! nothing else; the normalization that produces it from host platform
//! exceptions lives in `nimbus-host`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod errno;
pub mod error;

pub use errno::Errno;
pub use error::{BoxError, ErrnoError, ErrnoResult};
