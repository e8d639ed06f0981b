//! Error type for checked access.

/// The error returned by checked accessors on an empty [`OptionalValue`].
///
/// [`OptionalValue`]: crate::OptionalValue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyAccess;

impl core::fmt::Display for EmptyAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad optional access")
    }
}

impl std::error::Error for EmptyAccess {}
