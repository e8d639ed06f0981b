//! # `inline_optional` - Inline Optional Values
//!
//! A value that may or may not be present, stored inside the wrapper itself.
//! No heap allocation is ever performed by the wrapper; the storage cell is a
//! `MaybeUninit<T>` slot whose lifetime is the wrapper's lifetime.
//!
//! ## Guarantees
//!
//! - **Presence invariant**: the presence flag is `true` exactly when the slot
//!   holds a live `T`. There is no observable half-constructed state, even when
//!   a constructor or destructor of `T` panics.
//! - **Explicit lifecycle**: construction, copy/move assignment, in-place
//!   emplacement and destruction each have a defined effect for every
//!   combination of present/empty operands.
//! - **Checked and unchecked access**: checked accessors return
//!   [`EmptyAccess`]; unchecked accessors are `unsafe` and only debug-asserted.
//!
//! ## Architecture
//!
//! 1. **`raw::slot`**: the audited unsafe operations on the storage cell.
//! 2. **`optional`**: [`OptionalValue`], which owns the slot and the flag.
//! 3. **`marker`**: [`NO_VALUE`] and [`IN_PLACE`] tags selecting constructors.
//!
//! ## Example
//!
//! ```rust
//! use inline_optional::{OptionalValue, IN_PLACE, NO_VALUE};
//!
//! let mut a = OptionalValue::some(5);
//! let mut b = OptionalValue::some(9);
//! a.swap(&mut b);
//! assert_eq!((a.value(), b.value()), (Ok(&9), Ok(&5)));
//!
//! let mut s: OptionalValue<String> = OptionalValue::in_place(IN_PLACE, "hi");
//! s.emplace_from_iter(['o', 'k']);
//! assert_eq!(s.value().map(String::as_str), Ok("ok"));
//!
//! s.assign_none(NO_VALUE);
//! assert_eq!(s.value_or("fallback".into()), "fallback");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod error;
pub mod marker;
pub mod optional;
pub(crate) mod raw;

pub use error::EmptyAccess;
pub use marker::{InPlace, NoValue, IN_PLACE, NO_VALUE};
pub use optional::OptionalValue;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Markers are ZSTs.
    assert!(mem::size_of::<NoValue>() == 0);
    assert!(mem::size_of::<InPlace>() == 0);

    // Storage is inline: alignment is the value's own, and the flag costs at
    // most one extra alignment unit.
    assert!(mem::align_of::<OptionalValue<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<OptionalValue<u64>>() <= 2 * mem::size_of::<u64>());
    assert!(mem::size_of::<OptionalValue<u8>>() == 2);
    assert!(mem::size_of::<OptionalValue<()>>() == 1);
};
