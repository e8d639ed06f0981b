//! `OptionalValue` — zero or one `T`, stored inline (no heap).
//!
//! The value lives in a `MaybeUninit<T>` slot owned by the wrapper; a presence
//! flag records whether that slot currently holds a live `T`. All slot access
//! goes through [`crate::raw::slot`].
//!
//! ## Invariants
//! - `has_value` is `true` iff `value` holds a live `T`. The flag is set only
//!   after a new value has been fully produced and written, and cleared before
//!   the old value is dropped, so a panicking constructor or destructor can
//!   never leave a half-initialized state behind.
//! - The slot is part of the wrapper itself: its address is the wrapper's
//!   address for as long as the wrapper is not moved.
//!
//! ## Moves
//! Moving the whole wrapper is an ordinary Rust move. The explicit move
//! operations (`take`, `take_value`, `move_from`, and `swap` with one empty
//! side) always leave the source empty; there is no "moved-from but present"
//! state.

mod serialize;
mod traits;

use core::mem::MaybeUninit;

use crate::marker::{InPlace, NoValue};
use crate::raw::slot;
use crate::EmptyAccess;

/// A value that may or may not be present, stored inline.
///
/// # Example
///
/// ```rust
/// use inline_optional::{OptionalValue, NO_VALUE};
///
/// let mut a = OptionalValue::<i32>::new();
/// assert!(!a.has_value());
///
/// a.assign(42);
/// assert_eq!(a.value(), Ok(&42));
///
/// a.assign_none(NO_VALUE);
/// assert!(a.value().is_err());
/// ```
pub struct OptionalValue<T> {
    // Layout: value first; the flag sits in tail padding where possible.
    value: MaybeUninit<T>,
    has_value: bool,
}

impl<T> OptionalValue<T> {
    /// Creates an empty `OptionalValue`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            has_value: false,
        }
    }

    /// Creates an empty `OptionalValue` from the [`NO_VALUE`](crate::NO_VALUE) marker.
    #[inline]
    pub const fn from_none(_: NoValue) -> Self {
        Self::new()
    }

    /// Creates an `OptionalValue` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            has_value: true,
        }
    }

    /// Constructs the contained value from `args`.
    ///
    /// Multi-argument constructors are reached through a tuple `From` impl.
    #[inline]
    pub fn in_place<A>(_: InPlace, args: A) -> Self
    where
        T: From<A>,
    {
        Self::some(T::from(args))
    }

    /// Constructs the contained value by running `init`.
    #[inline]
    pub fn in_place_with<F>(_: InPlace, init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::some(init())
    }

    /// Constructs the contained value from a list of elements.
    pub fn in_place_from_iter<I>(_: InPlace, iter: I) -> Self
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        Self::some(iter.into_iter().collect())
    }

    // ------------------------------------------------------------------
    // Assignment
    // ------------------------------------------------------------------

    /// Destroys the contained value, if any. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        trace_op!("reset", T, had_value = self.has_value);
        self.destruct();
    }

    /// Assigns the empty state. Same as [`reset`](Self::reset).
    #[inline]
    pub fn assign_none(&mut self, _: NoValue) {
        self.reset();
    }

    /// Assigns a bare value.
    ///
    /// Assigns into the existing value when one is present (the old value is
    /// dropped by the assignment); otherwise constructs a new one.
    ///
    /// `value` is generic over `Into<T>`, so an unsuffixed integer literal
    /// falls back to `i32`: write `opt.assign(1u64)` for an
    /// `OptionalValue<u64>`.
    pub fn assign<U>(&mut self, value: U) -> &mut T
    where
        U: Into<T>,
    {
        let value = value.into();
        if self.has_value {
            // SAFETY: `has_value` is true.
            let current = unsafe { slot::assume_init_mut(&mut self.value) };
            *current = value;
            current
        } else {
            self.construct(value)
        }
    }

    /// Copy-assigns from `other`.
    ///
    /// | `self` | `other` | effect |
    /// |---|---|---|
    /// | value | value | `T::clone_from` into the existing value |
    /// | value | empty | drop own value |
    /// | empty | value | clone `other`'s value into the slot |
    /// | empty | empty | nothing |
    pub fn assign_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        match (self.has_value, other.as_ref()) {
            (true, Some(source)) => {
                // SAFETY: `has_value` is true.
                unsafe { slot::assume_init_mut(&mut self.value) }.clone_from(source);
            }
            (true, None) => self.destruct(),
            (false, Some(source)) => {
                self.construct(source.clone());
            }
            (false, None) => {}
        }
    }

    /// Move-assigns from `other`, leaving `other` empty.
    ///
    /// Follows the same four-way matrix as [`assign_from`](Self::assign_from),
    /// with moves in place of clones.
    pub fn move_from(&mut self, other: &mut Self) {
        trace_op!(
            "move_from",
            T,
            dst_has_value = self.has_value,
            src_has_value = other.has_value
        );
        match (self.has_value, other.has_value) {
            (true, true) => {
                // SAFETY: both flags are true; `other` is cleared by `take_unchecked`.
                unsafe {
                    let value = other.take_unchecked();
                    *slot::assume_init_mut(&mut self.value) = value;
                }
            }
            (true, false) => self.destruct(),
            (false, true) => {
                // SAFETY: `other.has_value` is true.
                let value = unsafe { other.take_unchecked() };
                self.construct(value);
            }
            (false, false) => {}
        }
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Returns `true` if a value is present.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.has_value
    }

    /// Returns `true` if no value is present.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.has_value
    }

    /// Borrows the contained value, if any.
    ///
    /// Mirrors [`Option::as_ref`]; the result is an `Option`, not `&T`, so
    /// `AsRef` cannot express it.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        if self.has_value {
            // SAFETY: `has_value` is true.
            Some(unsafe { slot::assume_init_ref(&self.value) })
        } else {
            None
        }
    }

    /// Mutably borrows the contained value, if any.
    ///
    /// Mirrors [`Option::as_mut`].
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        if self.has_value {
            // SAFETY: `has_value` is true.
            Some(unsafe { slot::assume_init_mut(&mut self.value) })
        } else {
            None
        }
    }

    /// Returns the contained value without checking for presence.
    ///
    /// # Safety
    /// A value must be present. Only debug builds check this.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.has_value, "get_unchecked on an empty OptionalValue");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_ref(&self.value) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    /// A value must be present. Only debug builds check this.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value, "get_unchecked_mut on an empty OptionalValue");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_mut(&mut self.value) }
    }

    /// Moves the contained value out without checking, leaving `self` empty.
    ///
    /// # Safety
    /// A value must be present. Only debug builds check this.
    #[inline]
    pub unsafe fn take_unchecked(&mut self) -> T {
        debug_assert!(self.has_value, "take_unchecked on an empty OptionalValue");
        self.has_value = false;
        // SAFETY: caller guarantees presence; the flag is already cleared so the
        // value is not dropped again.
        unsafe { slot::read(&self.value) }
    }

    /// Consumes `self` and returns the contained value without checking.
    ///
    /// # Safety
    /// A value must be present. Only debug builds check this.
    #[inline]
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        // SAFETY: forwarded to the caller.
        unsafe { self.take_unchecked() }
    }

    /// Returns the contained value.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if no value is present.
    #[inline]
    pub fn value(&self) -> Result<&T, EmptyAccess> {
        self.as_ref().ok_or(EmptyAccess)
    }

    /// Returns the contained value mutably.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if no value is present.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
        self.as_mut().ok_or(EmptyAccess)
    }

    /// Moves the contained value out, leaving `self` empty.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if no value is present.
    pub fn take_value(&mut self) -> Result<T, EmptyAccess> {
        if self.has_value {
            // SAFETY: `has_value` is true.
            Ok(unsafe { self.take_unchecked() })
        } else {
            Err(EmptyAccess)
        }
    }

    /// Consumes `self` and returns the contained value.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if no value is present.
    #[inline]
    pub fn into_value(mut self) -> Result<T, EmptyAccess> {
        self.take_value()
    }

    /// Returns a copy of the contained value, or `default` if empty.
    ///
    /// Takes `T` itself, like [`Option::unwrap_or`], so integer literals infer
    /// the contained type.
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.as_ref() {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Returns a copy of the contained value, or the result of `f` if empty.
    pub fn value_or_else<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self.as_ref() {
            Some(value) => value.clone(),
            None => f(),
        }
    }

    /// Consumes `self`, returning the contained value or `default`.
    pub fn into_value_or(self, default: T) -> T {
        self.into_value().unwrap_or(default)
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into_value().ok()
    }

    /// Raw pointer to the storage cell. Valid for reads only while a value is present.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    /// Mutable raw pointer to the storage cell.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }

    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    /// Exchanges contents with `other`.
    ///
    /// Two present values are swapped in place. When exactly one side holds a
    /// value it is moved across and the source is left empty.
    pub fn swap(&mut self, other: &mut Self) {
        trace_op!(
            "swap",
            T,
            lhs_has_value = self.has_value,
            rhs_has_value = other.has_value
        );
        match (self.has_value, other.has_value) {
            (true, true) => {
                // SAFETY: both flags are true.
                unsafe {
                    core::mem::swap(
                        slot::assume_init_mut(&mut self.value),
                        slot::assume_init_mut(&mut other.value),
                    );
                }
            }
            (true, false) => other.move_from(self),
            (false, true) => self.move_from(other),
            (false, false) => {}
        }
    }

    /// Destroys any current value, then constructs a new one from `args`.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Destroys any current value, then constructs a new one by running `init`.
    ///
    /// The old value is always dropped first. If `init` panics, `self` is left
    /// empty.
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        trace_op!("emplace", T, had_value = self.has_value);
        self.destruct();
        let value = init();
        self.construct(value)
    }

    /// Destroys any current value, then collects a new one from `iter`.
    pub fn emplace_from_iter<I>(&mut self, iter: I) -> &mut T
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        self.emplace_with(|| iter.into_iter().collect())
    }

    /// Moves the contents into a new `OptionalValue`, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        match self.take_value() {
            Ok(value) => Self::some(value),
            Err(EmptyAccess) => Self::new(),
        }
    }

    /// Stores `value`, returning the previous contents.
    pub fn replace(&mut self, value: T) -> Self {
        let previous = self.take();
        self.construct(value);
        previous
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Writes `value` into an empty slot and marks it present.
    #[inline]
    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.has_value, "construct over a live value");
        let value = slot::write(&mut self.value, value);
        self.has_value = true;
        value
    }

    /// Drops the contained value, if any, and marks the slot empty.
    #[inline]
    fn destruct(&mut self) {
        if self.has_value {
            self.has_value = false;
            // SAFETY: the slot was live; the flag is cleared first so a
            // panicking destructor cannot lead to a second drop.
            unsafe { slot::drop_in_place(&mut self.value) };
        }
    }
}

impl<T> Drop for OptionalValue<T> {
    fn drop(&mut self) {
        self.destruct();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IN_PLACE;
    use std::cell::Cell;

    struct Noisy<'a> {
        drops: &'a Cell<u32>,
    }

    impl Drop for Noisy<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn construct_sets_flag_after_write() {
        let mut opt = OptionalValue::new();
        let value = opt.construct(3u8);
        *value += 1;
        assert_eq!(opt.value(), Ok(&4));
    }

    #[test]
    fn destruct_is_idempotent() {
        let drops = Cell::new(0);
        let mut opt = OptionalValue::some(Noisy { drops: &drops });
        opt.destruct();
        opt.destruct();
        assert!(opt.is_empty());
        drop(opt);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn take_unchecked_does_not_double_drop() {
        let drops = Cell::new(0);
        let mut opt = OptionalValue::in_place_with(IN_PLACE, || Noisy { drops: &drops });
        let inner = unsafe { opt.take_unchecked() };
        assert!(opt.is_empty());
        drop(opt);
        assert_eq!(drops.get(), 0);
        drop(inner);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn panicking_destructor_leaves_wrapper_empty() {
        struct Bomb;
        impl Drop for Bomb {
            fn drop(&mut self) {
                panic!("boom");
            }
        }

        let mut opt = OptionalValue::some(Bomb);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| opt.reset()));
        assert!(result.is_err());
        assert!(opt.is_empty());
    }
}
