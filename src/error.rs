use std::any;

/// Returned by [`Variant::get`](crate::Variant::get) when the variant holds a different
/// alternative than the one asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("type mismatch: requested `{requested}` but the variant holds `{active}`")]
pub struct TypeMismatch {
    /// The type that was asked for.
    pub requested: &'static str,
    /// The type the variant actually holds.
    pub active: &'static str,
}

impl TypeMismatch {
    pub(crate) fn new<T>(active: &'static str) -> Self {
        TypeMismatch {
            requested: any::type_name::<T>(),
            active,
        }
    }
}
