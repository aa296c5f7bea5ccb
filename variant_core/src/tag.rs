use std::any;
use std::fmt;
use std::ptr;

use crate::cell::Storage;
use crate::index::Position;
use crate::registry::{Alternatives, Member};

/// The signature of the function behind [`Tag::dispatch`].
///
/// The second argument points at a `&mut S::Visitor<'_>`, erased to a thin pointer.
pub type Dispatch<S> = unsafe fn(&Storage<S>, *mut ());

/// The operations table of one alternative of `S`.
///
/// There is exactly one `Tag` per alternative, reachable as [`Member::TAG`]. A variant
/// stores a `&'static Tag<S>` next to its storage, and every operation that depends on
/// the live type goes through it.
///
/// Tags are compared by [`index`](Tag::index), never by address.
pub struct Tag<S: Alternatives> {
    index: usize,
    type_name: fn() -> &'static str,
    move_construct: unsafe fn(&mut Storage<S>, &mut Storage<S>),
    destroy: unsafe fn(&mut Storage<S>),
    dispatch: Dispatch<S>,
}

unsafe fn move_construct<S: Alternatives, T>(src: &mut Storage<S>, dst: &mut Storage<S>) {
    dst.write(src.read::<T>())
}

unsafe fn destroy<S: Alternatives, T>(storage: &mut Storage<S>) {
    ptr::drop_in_place(storage.as_mut_ptr::<T>())
}

impl<S: Alternatives> Tag<S> {
    pub(crate) const fn new<T: 'static>(index: usize, dispatch: Dispatch<S>) -> Self {
        Tag {
            index,
            type_name: any::type_name::<T>,
            move_construct: move_construct::<S, T>,
            destroy: destroy::<S, T>,
            dispatch,
        }
    }

    /// The discriminant: the position of the alternative inside `S`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The name of the alternative, as given by [`std::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Returns `true` if this is the tag of `T`.
    #[inline]
    pub fn is<T, I>(&self) -> bool
    where
        T: Member<S, I>,
        I: Position,
    {
        self.index == I::INDEX
    }

    /// Relocates the value in `src` into `dst`. `src` is left logically uninitialised.
    ///
    /// # Safety
    ///
    /// `src` must hold a live value of this tag's alternative, and `dst` must not.
    #[inline]
    pub unsafe fn move_construct(&self, src: &mut Storage<S>, dst: &mut Storage<S>) {
        (self.move_construct)(src, dst)
    }

    /// Drops the value in `storage` in place.
    ///
    /// # Safety
    ///
    /// `storage` must hold a live value of this tag's alternative. It is uninitialised
    /// afterwards.
    #[inline]
    pub unsafe fn destroy(&self, storage: &mut Storage<S>) {
        (self.destroy)(storage)
    }

    /// Hands the value in `storage` to the matching case of `visitor`.
    ///
    /// # Safety
    ///
    /// `storage` must hold a live value of this tag's alternative.
    #[inline]
    pub unsafe fn dispatch(&self, storage: &Storage<S>, visitor: &mut S::Visitor<'_>) {
        let mut visitor = visitor;
        let erased = &mut visitor as *mut &mut S::Visitor<'_> as *mut ();
        (self.dispatch)(storage, erased)
    }
}

impl<S: Alternatives> fmt::Debug for Tag<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Tag")
            .field("index", &self.index)
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// The alternative that stands for "no value".
///
/// A variant can only be empty if `Empty` is one of its declared alternatives; its tag
/// is the empty tag. Operations that need a null state, like `reset` and `take`, are
/// only available on such variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null")
    }
}
