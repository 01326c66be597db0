//! Typed wrappers over the pinned entry points.
//!
//! The ABI wrappers forward everything verbatim; this layer only translates
//! the -1/errno convention into `Result` for Rust callers. Return values
//! and errno are never altered on the way through.

use std::ffi::c_int;

use crate::arg::FcntlArg;
use crate::error::{CompatError, Result};
use crate::pin::__wrap_fcntl;

/// Performs `cmd` on `fd` through the version-pinned implementation.
///
/// # Safety
///
/// For pointer-taking commands `arg` must satisfy the command's pointer
/// contract, as with `fcntl(2)` itself. Integer and argument-less commands
/// have no extra requirements beyond what errno already reports.
pub unsafe fn fcntl(fd: c_int, cmd: c_int, arg: FcntlArg) -> Result<c_int> {
    // SAFETY: caller upholds the command's argument contract.
    let ret = unsafe { __wrap_fcntl(fd, cmd, arg.into_slot()) };
    if ret == -1 {
        return Err(CompatError::Fcntl {
            fd,
            cmd,
            source: std::io::Error::last_os_error(),
        });
    }
    Ok(ret)
}

/// Duplicates `fd` onto the lowest free descriptor numbered `min_fd` or
/// higher (`F_DUPFD`). The caller owns the returned descriptor.
pub fn dup_fd_at_least(fd: c_int, min_fd: c_int) -> Result<c_int> {
    // SAFETY: F_DUPFD reads only the integer slot.
    unsafe { fcntl(fd, libc::F_DUPFD, FcntlArg::Int(min_fd)) }
}

/// Returns the file status flag bitmask for `fd` (`F_GETFL`).
pub fn descriptor_flags(fd: c_int) -> Result<c_int> {
    // SAFETY: F_GETFL ignores the argument slot.
    unsafe { fcntl(fd, libc::F_GETFL, FcntlArg::None) }
}

/// Replaces the settable file status flags of `fd` (`F_SETFL`).
pub fn set_descriptor_flags(fd: c_int, flags: c_int) -> Result<()> {
    // SAFETY: F_SETFL reads only the integer slot.
    unsafe { fcntl(fd, libc::F_SETFL, FcntlArg::Int(flags)) }.map(|_| ())
}

#[cfg(test)]
mod tests {
    use std::os::fd::AsRawFd;

    use super::*;

    #[test]
    fn duplicate_lands_at_or_above_the_requested_minimum() {
        let file = tempfile::tempfile().expect("tempfile");
        let dup = dup_fd_at_least(file.as_raw_fd(), 64).expect("F_DUPFD");
        assert!(dup >= 64);
        // SAFETY: dup was returned to us by F_DUPFD.
        unsafe { libc::close(dup) };
    }

    #[test]
    fn reports_read_write_access_mode_for_tempfiles() {
        let file = tempfile::tempfile().expect("tempfile");
        let flags = descriptor_flags(file.as_raw_fd()).expect("F_GETFL");
        assert_eq!(flags & libc::O_ACCMODE, libc::O_RDWR);
    }

    #[test]
    fn toggles_nonblocking_flag() {
        let file = tempfile::tempfile().expect("tempfile");
        let fd = file.as_raw_fd();

        let flags = descriptor_flags(fd).expect("F_GETFL");
        set_descriptor_flags(fd, flags | libc::O_NONBLOCK).expect("F_SETFL");
        assert_ne!(descriptor_flags(fd).expect("F_GETFL") & libc::O_NONBLOCK, 0);

        set_descriptor_flags(fd, flags).expect("F_SETFL");
        assert_eq!(descriptor_flags(fd).expect("F_GETFL") & libc::O_NONBLOCK, 0);
    }

    #[test]
    fn invalid_descriptor_surfaces_ebadf_unchanged() {
        let err = descriptor_flags(-1).expect_err("F_GETFL on fd -1");
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));
        let rendered = err.to_string();
        assert!(rendered.contains("fd -1"), "unexpected message: {rendered}");
    }
}
