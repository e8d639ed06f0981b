//! Raw storage building blocks.
//!
//! This layer concentrates every unsafe `MaybeUninit` operation in one module
//! so the safety conditions can be audited in a single place. Higher layers
//! (`optional::*`) track the presence flag and call into `slot` only.

pub(crate) mod slot;
