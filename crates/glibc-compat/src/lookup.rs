//! Runtime lookup of versioned `fcntl` entry points.
//!
//! On toolchains without a declarative version-pinning facility the
//! alternative strategy is to resolve `fcntl@<version>` through the dynamic
//! loader once and cache the pointer. The pinned build never takes this
//! path at runtime; tests use it as an independent oracle for the wrappers,
//! and [`pinned_fallback`] keeps the strategy available to embedders.

use std::ffi::{CStr, CString, c_int, c_void};
use std::mem;
use std::sync::OnceLock;

use crate::error::{CompatError, Result};
use crate::pin::PINNED_VERSION;

/// Signature of a resolved `fcntl`-family entry point.
pub type FcntlFn = unsafe extern "C" fn(c_int, c_int, ...) -> c_int;

/// Resolves `symbol` at exactly `version` in the already-loaded libc.
///
/// Returns `None` when the loaded runtime does not export that version of
/// the symbol.
pub fn resolve_versioned(symbol: &CStr, version: &CStr) -> Option<FcntlFn> {
    // SAFETY: dlvsym only reads the two NUL-terminated names.
    let pointer = unsafe { libc::dlvsym(libc::RTLD_DEFAULT, symbol.as_ptr(), version.as_ptr()) };
    if pointer.is_null() {
        None
    } else {
        // SAFETY: a non-null result names an fcntl-family entry point whose
        // calling convention matches FcntlFn.
        Some(unsafe { mem::transmute::<*mut c_void, FcntlFn>(pointer) })
    }
}

/// The pinned-version `fcntl`, resolved through the loader once and cached.
pub fn pinned_fallback() -> Result<FcntlFn> {
    static CACHE: OnceLock<Option<FcntlFn>> = OnceLock::new();
    let resolved = CACHE.get_or_init(|| {
        let version = CString::new(PINNED_VERSION).ok()?;
        resolve_versioned(c"fcntl", &version)
    });
    (*resolved).ok_or_else(|| CompatError::MissingVersion {
        symbol: "fcntl".to_string(),
        version: PINNED_VERSION.to_string(),
    })
}
