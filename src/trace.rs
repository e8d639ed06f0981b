//! Structured trace events for slow-path mutations.
//!
//! Compiled to nothing unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
macro_rules! trace_op {
    ($op:literal, $ty:ty $(, $key:ident = $val:expr)* $(,)?) => {
        tracing::trace!(
            target: "inline_optional",
            op = $op,
            ty = core::any::type_name::<$ty>()
            $(, $key = $val)*
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_op {
    ($op:literal, $ty:ty $(, $key:ident = $val:expr)* $(,)?) => {};
}
