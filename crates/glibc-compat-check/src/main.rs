//! Packaging-level probe for the fcntl version-pinning shim.
//!
//! Runs the wrapped `fcntl` path against a real descriptor and reports what
//! it sees. On a runtime older than the pinned version tag this binary does
//! not get this far: the loader refuses it with an unresolved-version
//! error, which is the intended failure mode.

use std::process::ExitCode;

#[cfg(all(target_os = "linux", target_env = "gnu"))]
mod probe;

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn main() -> ExitCode {
    probe::run()
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
fn main() -> ExitCode {
    eprintln!("glibc-compat-check only targets GNU/Linux");
    ExitCode::from(2)
}
