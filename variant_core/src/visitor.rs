use crate::registry::Alternatives;

/// One case of a handler: what to do when the variant holds a `T`.
///
/// A handler for a set of alternatives implements `Case` once per alternative. Missing
/// cases are reported when the handler is passed to `accept`, not at run time.
pub trait Case<T: ?Sized> {
    fn visit(&mut self, value: &T);
}

/// Implemented by every type that has a [`Case`] for each alternative of `S`.
///
/// This is never implemented by hand: a blanket impl exists for each arity.
pub trait Visits<S: Alternatives> {
    /// Erases `self` into the handler object the operations table dispatches on.
    fn as_visitor(&mut self) -> &mut S::Visitor<'_>;
}
