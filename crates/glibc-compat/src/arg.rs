//! Third-argument representation for the `fcntl` call frame.
//!
//! The manual documents the optional argument as an int for some commands
//! and a pointer for others, but the implementation reads the slot as a
//! pointer either way, so the boundary carries one pointer-sized value and
//! nothing else. Values are copied through the slot, never retained.

use std::ffi::{c_int, c_void};
use std::ptr;

/// Optional third argument to an `fcntl` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FcntlArg {
    /// Two-argument command; the callee ignores the slot.
    None,
    /// Integer-argument command (`F_DUPFD`, `F_SETFL`, `F_SETFD`, ...).
    Int(c_int),
    /// Pointer-argument command (`F_GETLK`, `F_SETLK`, ...).
    Ptr(*mut c_void),
}

impl FcntlArg {
    /// Collapses the argument into the pointer-sized slot value the ABI
    /// reserves for it. Integers are sign-extended so the callee reads the
    /// same numeric value back out of the slot.
    pub fn into_slot(self) -> *mut c_void {
        match self {
            FcntlArg::None => ptr::null_mut(),
            FcntlArg::Int(value) => value as isize as *mut c_void,
            FcntlArg::Ptr(pointer) => pointer,
        }
    }

    /// Recovers an integer previously stored with [`FcntlArg::into_slot`].
    pub fn int_from_slot(slot: *mut c_void) -> c_int {
        slot as isize as c_int
    }
}

impl From<c_int> for FcntlArg {
    fn from(value: c_int) -> Self {
        FcntlArg::Int(value)
    }
}

impl From<*mut c_void> for FcntlArg {
    fn from(pointer: *mut c_void) -> Self {
        FcntlArg::Ptr(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_round_trip_through_the_slot() {
        for value in [0, 1, 7, 1024, c_int::MAX] {
            assert_eq!(FcntlArg::int_from_slot(FcntlArg::Int(value).into_slot()), value);
        }
    }

    #[test]
    fn negative_integers_round_trip_through_the_slot() {
        for value in [-1, -2, -4096, c_int::MIN] {
            assert_eq!(FcntlArg::int_from_slot(FcntlArg::Int(value).into_slot()), value);
        }
    }

    #[test]
    fn absent_argument_maps_to_null_slot() {
        assert!(FcntlArg::None.into_slot().is_null());
    }

    #[test]
    fn pointers_pass_through_unchanged() {
        let mut lock: libc::flock = unsafe { std::mem::zeroed() };
        let raw = (&raw mut lock).cast::<c_void>();
        assert_eq!(FcntlArg::Ptr(raw).into_slot(), raw);
        assert_eq!(FcntlArg::from(raw), FcntlArg::Ptr(raw));
    }

    #[test]
    fn integer_conversion_is_ergonomic() {
        assert_eq!(FcntlArg::from(42), FcntlArg::Int(42));
    }
}
