use std::ffi::c_int;
use std::os::fd::AsRawFd;
use std::process::ExitCode;
use std::ptr;

use glibc_compat::{
    FcntlArg, PINNED_VERSION, __wrap_fcntl, __wrap_fcntl64, descriptor_flags, dup_fd_at_least,
    pinned_fallback,
};

fn usage() {
    eprintln!("usage: glibc-compat-check [fd]");
}

fn check_descriptor(fd: c_int) -> Result<(), String> {
    let flags = descriptor_flags(fd).map_err(|err| err.to_string())?;
    println!("status_flags: {flags:#o}");

    let dup = dup_fd_at_least(fd, 100).map_err(|err| err.to_string())?;
    if dup < 100 {
        return Err(format!("F_DUPFD returned {dup}, expected >= 100"));
    }
    println!("dup_at_least_100: {dup}");
    // SAFETY: dup was handed to us by F_DUPFD.
    unsafe { libc::close(dup) };

    let plain = unsafe { __wrap_fcntl(fd, libc::F_GETFL, ptr::null_mut()) };
    let large = unsafe { __wrap_fcntl64(fd, libc::F_GETFL, ptr::null_mut()) };
    if plain != large {
        return Err(format!("wrapper disagreement: fcntl={plain} fcntl64={large}"));
    }
    println!("fcntl64_matches_fcntl: true");

    // The plain libc name; redirected into the wrapper when this probe was
    // linked with the portable feature. A smoke test of the path only: the
    // wrapper is transparent, so the values also agree in a non-portable
    // link, and a missing redirection is caught by inspecting the binary's
    // versioned symbol table rather than by this comparison.
    let via_libc = unsafe { libc::fcntl(fd, libc::F_GETFL) };
    if via_libc != plain {
        return Err(format!("libc path disagreement: libc={via_libc} wrapper={plain}"));
    }
    println!("libc_path_matches_wrapper: true");

    let direct = pinned_fallback().map_err(|err| err.to_string())?;
    // SAFETY: F_GETFL ignores the argument slot.
    let via_direct = unsafe { direct(fd, libc::F_GETFL) };
    if via_direct != plain {
        return Err(format!("pinned symbol disagreement: direct={via_direct} wrapper={plain}"));
    }
    println!("pinned_symbol_matches_wrapper: true");

    // Exercise the integer slot with a value that must come back out intact.
    let min = 33;
    let dup2 = unsafe { __wrap_fcntl(fd, libc::F_DUPFD, FcntlArg::Int(min).into_slot()) };
    if dup2 < min {
        return Err(format!("F_DUPFD via slot returned {dup2}, expected >= {min}"));
    }
    // SAFETY: as above.
    unsafe { libc::close(dup2) };
    println!("integer_slot_forwarding: ok");

    Ok(())
}

pub fn run() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        usage();
        return ExitCode::from(2);
    }

    println!("pinned_version: {PINNED_VERSION}");

    let probe_file;
    let fd = match args.get(1) {
        Some(raw) => match raw.parse::<c_int>() {
            Ok(fd) if fd >= 0 => fd,
            _ => {
                usage();
                return ExitCode::from(2);
            }
        },
        None => {
            probe_file = match tempfile::tempfile() {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("cannot create probe file: {err}");
                    return ExitCode::from(1);
                }
            };
            probe_file.as_raw_fd()
        }
    };

    match check_descriptor(fd) {
        Ok(()) => {
            println!("result: ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("check failed: {err}");
            ExitCode::from(1)
        }
    }
}
