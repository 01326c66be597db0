//! Version-pinning shim for the glibc `fcntl` symbol family.
//!
//! Linking against a recent glibc can bind the `fcntl`/`fcntl64` names to
//! symbol versions that older systems do not export (glibc 2.28 introduced
//! `fcntl64`), so the produced binary refuses to load there. This crate
//! rebinds both names to the oldest version tag each architecture provides
//! and exposes `__wrap_fcntl`/`__wrap_fcntl64` entry points for the linker's
//! `--wrap` redirection, so callers elsewhere in the program transparently
//! reach the pinned implementation.
//!
//! The `portable` cargo feature applies the `--wrap` flags to this crate's
//! own test binaries; a larger build enabling the same redirection for its
//! final link is an external concern.

mod arg;
#[cfg(all(target_os = "linux", target_env = "gnu"))]
mod call;
mod error;
#[cfg(all(target_os = "linux", target_env = "gnu"))]
mod lookup;
#[cfg(all(target_os = "linux", target_env = "gnu"))]
mod pin;

pub use arg::FcntlArg;
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub use call::{descriptor_flags, dup_fd_at_least, fcntl, set_descriptor_flags};
pub use error::{CompatError, Result};
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub use lookup::{FcntlFn, pinned_fallback, resolve_versioned};
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub use pin::{PINNED_VERSION, __wrap_fcntl, __wrap_fcntl64};
