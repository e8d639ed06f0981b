//! Unsafe, centralized operations on the `MaybeUninit<T>` storage cell.
//!
//! `OptionalValue` keeps its contents in a single inline slot. These helpers are
//! the only place that:
//! - constructs into the slot (`write`)
//! - converts the slot to references (`assume_init_ref` / `assume_init_mut`)
//! - moves out of the slot (`read`)
//! - destroys the slot's contents (`drop_in_place`)
//!
//! ## Core invariant
//! The caller's presence flag is `true` *exactly when* the slot holds a live `T`.
//! Every helper below states which side of that invariant it expects; the
//! caller is responsible for updating the flag around the call.

use core::mem::MaybeUninit;

/// Constructs `value` in the slot and returns a reference to it.
///
/// Any previous contents are overwritten without being dropped, so the slot
/// must be logically empty (never written, already read out, or already dropped).
#[inline(always)]
pub(crate) fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Interprets a live slot as `&T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is live.
    unsafe { slot.assume_init_ref() }
}

/// Interprets a live slot as `&mut T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is live; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves the value out of a live slot.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - Afterwards the slot is logically empty: the caller must clear its
///   presence flag and never drop or read the old bytes again.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts liveness and takes over ownership.
    unsafe { slot.assume_init_read() }
}

/// Runs the destructor of a live slot.
///
/// Trivially destructible types skip the call entirely.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - Must not be called more than once for the same value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    if core::mem::needs_drop::<T>() {
        // SAFETY: caller asserts liveness and drop uniqueness.
        unsafe { slot.assume_init_drop() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn write_then_read_moves_ownership() {
        let mut slot = MaybeUninit::uninit();
        *write(&mut slot, String::from("abc")) += "def";
        let s = unsafe { read(&slot) };
        assert_eq!(s, "abcdef");
    }

    #[test]
    fn drop_in_place_releases_value() {
        let rc = Rc::new(());
        let mut slot = MaybeUninit::uninit();
        write(&mut slot, Rc::clone(&rc));
        assert_eq!(Rc::strong_count(&rc), 2);
        unsafe { drop_in_place(&mut slot) };
        assert_eq!(Rc::strong_count(&rc), 1);
    }

    #[test]
    fn refs_alias_the_slot() {
        let mut slot = MaybeUninit::uninit();
        write(&mut slot, 7u32);
        let addr = slot.as_ptr();
        unsafe {
            *assume_init_mut(&mut slot) += 1;
            assert_eq!(*assume_init_ref(&slot), 8);
            assert!(core::ptr::eq(assume_init_ref(&slot), addr));
        }
    }
}
