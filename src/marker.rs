//! Zero-sized tag values that select a constructor or assignment.

/// Tag type for "no value". Use [`NO_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoValue;

/// Tag type for in-place construction. Use [`IN_PLACE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InPlace;

/// Explicitly constructs or assigns the empty state.
pub const NO_VALUE: NoValue = NoValue;

/// Selects the construct-from-arguments constructors over value construction.
pub const IN_PLACE: InPlace = InPlace;
