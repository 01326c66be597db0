//! Declarative version pinning for `fcntl` and `fcntl64`.
//!
//! An undefined ELF symbol named `name@version` is a reference to exactly
//! that version of the symbol; it is what the assembler's `.symver`
//! directive lowers to, and `link_name` can spell it directly. The binding
//! is fixed at link time, with no runtime branching, and the produced
//! binary records a dependency on the named version: a runtime too old to
//! export it fails to load instead of silently substituting a different
//! implementation.
//!
//! Both wrappers are targets for `-Wl,--wrap=fcntl` / `-Wl,--wrap=fcntl64`.
//! The `--wrap` rewrite matches the plain names only, never the versioned
//! reference below, so the forward cannot recurse into the wrapper.

use std::ffi::{c_int, c_void};

/// Version tag the `fcntl` family is pinned to: the oldest tag the target
/// ABI ever shipped. 2.2.5 on x86_64, 2.17 on aarch64, 2.0 on the 32-bit
/// architectures.
#[cfg(target_arch = "x86_64")]
pub const PINNED_VERSION: &str = "GLIBC_2.2.5";
#[cfg(target_arch = "aarch64")]
pub const PINNED_VERSION: &str = "GLIBC_2.17";
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub const PINNED_VERSION: &str = "GLIBC_2.0";

unsafe extern "C" {
    #[cfg(target_arch = "x86_64")]
    #[link_name = "fcntl@GLIBC_2.2.5"]
    fn fcntl_pinned(fd: c_int, cmd: c_int, ...) -> c_int;

    #[cfg(target_arch = "aarch64")]
    #[link_name = "fcntl@GLIBC_2.17"]
    fn fcntl_pinned(fd: c_int, cmd: c_int, ...) -> c_int;

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    #[link_name = "fcntl@GLIBC_2.0"]
    fn fcntl_pinned(fd: c_int, cmd: c_int, ...) -> c_int;
}

/// Receives calls the linker redirected from the plain `fcntl` name.
///
/// glibc reads the optional argument as a pointer via `va_arg` even for
/// commands the manual documents as taking an int, so the slot is declared
/// and forwarded as a pointer-sized value unconditionally. On the supported
/// targets a fixed three-argument signature is call-compatible with the
/// variadic ABI; two-argument callers leave garbage in the slot, which the
/// pinned implementation ignores for those commands exactly as the real
/// entry point does.
///
/// # Safety
///
/// Same contract as `fcntl(2)`: for pointer-taking commands `arg` must be a
/// valid pointer of the type the command expects. Descriptor and command
/// validation is the underlying implementation's job, reported through the
/// usual -1/errno convention.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __wrap_fcntl(fd: c_int, cmd: c_int, arg: *mut c_void) -> c_int {
    // SAFETY: forwards the redirected call frame unchanged; the caller
    // upholds the command's argument contract.
    unsafe { fcntl_pinned(fd, cmd, arg) }
}

/// Receives calls the linker redirected from the `fcntl64` name.
///
/// `fcntl64` exists because glibc 2.28 routes `_FILE_OFFSET_BITS=64` builds
/// to it; no `off_t` appears anywhere in the command set, so both names map
/// onto the same pinned implementation rather than onto a wide-offset
/// variant absent from older runtimes. That the operation family really has
/// no offset-width-dependent behavior is assumed here, not verified.
///
/// # Safety
///
/// Same contract as [`__wrap_fcntl`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __wrap_fcntl64(fd: c_int, cmd: c_int, arg: *mut c_void) -> c_int {
    // SAFETY: same contract as `__wrap_fcntl`.
    unsafe { fcntl_pinned(fd, cmd, arg) }
}
