use std::fmt;
use std::mem::ManuallyDrop;

use variant_core::{Alternatives, Case, Empty, Member, Position, Storage, Tag, Visits};

use crate::apply::Apply;
use crate::error::TypeMismatch;
use crate::matching::Match;

/// A value of exactly one of the alternatives in `S`.
///
/// `S` is a tuple of types, for example `Variant<(i64, String)>`. The variant stores the
/// value inline, next to a reference to the [`Tag`] of its alternative. There is no
/// allocation, and the size is that of the largest alternative plus one pointer.
///
/// A variant can only be empty if [`Empty`] is one of its alternatives. For such sets,
/// [`empty`](Variant::empty), [`reset`](Variant::reset) and [`take`](Variant::take)
/// become available.
///
/// ```
/// use tagged_variant::Variant;
///
/// let v = Variant::<(i64, String)>::new(101i64);
///
/// assert_eq!(v.get::<i64, _>(), Ok(&101));
/// assert_eq!(v.try_get::<String, _>(), None);
/// ```
pub struct Variant<S: Alternatives> {
    tag: &'static Tag<S>,
    storage: Storage<S>,
}

impl<S: Alternatives> Variant<S> {
    /// Creates a variant holding `value`.
    ///
    /// `T` must be one of the alternatives:
    ///
    /// ```compile_fail
    /// use tagged_variant::Variant;
    ///
    /// let v = Variant::<(i64, String)>::new(1u8);
    /// ```
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        T: Member<S, I>,
        I: Position,
    {
        Variant {
            tag: <T as Member<S, I>>::TAG,
            storage: Storage::new::<T, I>(value),
        }
    }

    /// Creates an empty variant.
    ///
    /// Only sets that declare [`Empty`] have an empty state:
    ///
    /// ```
    /// use tagged_variant::{Empty, Variant};
    ///
    /// assert!(Variant::<(i64, String, Empty)>::empty().is_empty());
    /// ```
    ///
    /// ```compile_fail
    /// use tagged_variant::Variant;
    ///
    /// let v = Variant::<(i64, String)>::empty();
    /// ```
    #[inline]
    pub fn empty<I>() -> Self
    where
        Empty: Member<S, I>,
        I: Position,
    {
        Self::new::<Empty, I>(Empty)
    }

    /// Returns `true` if the variant holds [`Empty`].
    #[inline]
    pub fn is_empty<I>(&self) -> bool
    where
        Empty: Member<S, I>,
        I: Position,
    {
        self.is::<Empty, I>()
    }

    /// Returns `true` if the variant holds a `T`.
    #[inline]
    pub fn is<T, I>(&self) -> bool
    where
        T: Member<S, I>,
        I: Position,
    {
        self.tag.is::<T, I>()
    }

    /// The position of the active alternative.
    #[inline]
    pub fn index(&self) -> usize {
        self.tag.index()
    }

    /// The name of the active alternative's type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.tag.type_name()
    }

    /// The operations table of the live alternative.
    #[inline]
    pub fn tag(&self) -> &'static Tag<S> {
        self.tag
    }

    /// Calls the case of `visitor` that matches the active alternative.
    #[inline]
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: Visits<S>,
    {
        self.accept_dyn(<V as Visits<S>>::as_visitor(visitor))
    }

    /// Like [`accept`](Variant::accept), for a handler that is already a trait object.
    #[inline]
    pub fn accept_dyn(&self, visitor: &mut S::Visitor<'_>) {
        unsafe { self.tag.dispatch(&self.storage, visitor) }
    }

    /// Runs the overload of `functor` for the active alternative and returns its result.
    #[inline]
    pub fn apply<F, Args>(&self, functor: &mut F, args: Args) -> F::Output
    where
        F: Apply<S, Args>,
    {
        functor.apply_to(self, args)
    }

    /// Runs the closure for the active alternative. See [`match_with`](crate::match_with).
    #[inline]
    pub fn match_with<M>(&self, cases: M) -> M::Output
    where
        M: Match<S>,
    {
        cases.match_variant(self)
    }

    /// Borrows the value if it is a `T`.
    #[inline]
    pub fn try_get<T, I>(&self) -> Option<&T>
    where
        T: Member<S, I>,
        I: Position,
    {
        if self.is::<T, I>() {
            Some(unsafe { self.storage.get::<T>() })
        } else {
            None
        }
    }

    /// Borrows the value as a `T`, or reports which alternative is active instead.
    #[inline]
    pub fn get<T, I>(&self) -> Result<&T, TypeMismatch>
    where
        T: Member<S, I>,
        I: Position,
    {
        self.try_get::<T, I>()
            .ok_or_else(|| TypeMismatch::new::<T>(self.type_name()))
    }

    /// Moves the value out if it is a `T`, and hands the variant back otherwise.
    pub fn into_inner<T, I>(self) -> Result<T, Self>
    where
        T: Member<S, I>,
        I: Position,
    {
        if !self.is::<T, I>() {
            return Err(self);
        }

        let this = ManuallyDrop::new(self);
        Ok(unsafe { this.storage.read::<T>() })
    }

    /// Replaces the value with `value`, dropping the old one.
    #[inline]
    pub fn assign<T, I>(&mut self, value: T)
    where
        T: Member<S, I>,
        I: Position,
    {
        *self = Self::new::<T, I>(value);
    }

    /// Drops the value and leaves the variant empty.
    #[inline]
    pub fn reset<I>(&mut self)
    where
        Empty: Member<S, I>,
        I: Position,
    {
        *self = Self::empty::<I>();
    }

    /// Moves the value into a new variant, leaving this one empty.
    pub fn take<I>(&mut self) -> Self
    where
        Empty: Member<S, I>,
        I: Position,
    {
        let mut taken = Variant {
            tag: self.tag,
            storage: Storage::uninit(),
        };

        unsafe { self.tag.move_construct(&mut self.storage, &mut taken.storage) };
        self.tag = <Empty as Member<S, I>>::TAG;

        taken
    }

    /// # Safety
    ///
    /// The variant must hold a `T`.
    #[inline]
    pub(crate) unsafe fn get_unchecked<T>(&self) -> &T {
        self.storage.get::<T>()
    }

    /// Pairs `storage` with `tag`.
    ///
    /// # Safety
    ///
    /// `storage` must hold a live value of `tag`'s alternative.
    #[inline]
    pub(crate) unsafe fn from_raw_parts(tag: &'static Tag<S>, storage: Storage<S>) -> Self {
        Variant { tag, storage }
    }
}

impl<S: Alternatives> Drop for Variant<S> {
    fn drop(&mut self) {
        unsafe { self.tag.destroy(&mut self.storage) }
    }
}

/// Clones the visited value into fresh storage.
pub(crate) struct Cloner<S: Alternatives> {
    pub(crate) storage: Storage<S>,
}

impl<S: Alternatives, T: Clone> Case<T> for Cloner<S> {
    fn visit(&mut self, value: &T) {
        unsafe { self.storage.write(value.clone()) }
    }
}

impl<S: Alternatives> Cloner<S> {
    pub(crate) fn clone_of(variant: &Variant<S>) -> Variant<S>
    where
        Self: Visits<S>,
    {
        let mut cloner = Cloner {
            storage: Storage::uninit(),
        };
        variant.accept(&mut cloner);

        unsafe { Variant::from_raw_parts(variant.tag, cloner.storage) }
    }
}

pub(crate) struct Debugger<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl<'a, 'b> Debugger<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Debugger { f, result: Ok(()) }
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.result
    }
}

impl<'a, 'b, T: fmt::Debug> Case<T> for Debugger<'a, 'b> {
    fn visit(&mut self, value: &T) {
        self.result = value.fmt(self.f);
    }
}

/// Compares the visited value with the same alternative in `other`.
pub(crate) struct Comparer<'a, S: Alternatives> {
    other: &'a Variant<S>,
    equal: bool,
}

impl<'a, S: Alternatives> Comparer<'a, S> {
    pub(crate) fn equal(lhs: &Variant<S>, rhs: &'a Variant<S>) -> bool
    where
        Self: Visits<S>,
    {
        if lhs.index() != rhs.index() {
            return false;
        }

        let mut comparer = Comparer {
            other: rhs,
            equal: false,
        };
        lhs.accept(&mut comparer);
        comparer.equal
    }
}

impl<'a, S: Alternatives, T: PartialEq> Case<T> for Comparer<'a, S> {
    fn visit(&mut self, value: &T) {
        self.equal = value == unsafe { self.other.get_unchecked::<T>() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    type Value = Variant<(i64, String, Empty)>;

    #[test]
    fn empty_by_default() {
        let v = Value::empty();

        assert!(v.is_empty());
        assert_eq!(v.index(), 2);
        assert_eq!(v.try_get::<i64, _>(), None);
    }

    #[test]
    fn new_from_value() {
        let s = Value::new(String::from("hello"));

        assert!(!s.is_empty());
        assert!(s.is::<String, _>());
        assert_eq!(s.get::<String, _>().map(String::as_str), Ok("hello"));
    }

    #[test]
    fn take_leaves_the_donor_empty() {
        let mut donor = Value::new(String::from("hello"));
        let taken = donor.take();

        assert!(donor.is_empty());
        assert_eq!(taken.try_get::<String, _>().map(String::as_str), Some("hello"));
    }

    #[test]
    fn take_from_empty() {
        let mut donor = Value::empty();
        let taken = donor.take();

        assert!(donor.is_empty());
        assert!(taken.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let mut a = Variant::<(Vec<u8>, Empty)>::new(vec![1, 2, 3]);
        let b = a.clone();

        a.assign(vec![4]);

        assert_eq!(a.try_get::<Vec<u8>, _>(), Some(&vec![4]));
        assert_eq!(b.try_get::<Vec<u8>, _>(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn clone_from_overwrites() {
        let a = Value::new(101i64);
        let mut b = Value::new(String::from("overwritten"));

        b.clone_from(&a);

        assert_eq!(b.get::<i64, _>(), Ok(&101));
    }

    #[test]
    fn type_names_and_swap() {
        let mut a = Value::new(101i64);
        let mut b = Value::new(String::from("hello"));

        assert_eq!(a.type_name(), "i64");
        assert_eq!(b.type_name(), "alloc::string::String");

        std::mem::swap(&mut a, &mut b);

        assert_eq!(a.type_name(), "alloc::string::String");
        assert_eq!(b.type_name(), "i64");
    }

    #[test]
    fn get_reports_the_mismatch() {
        let v = Value::new(101i64);
        let err = v.get::<String, _>().unwrap_err();

        assert_eq!(err.requested, "alloc::string::String");
        assert_eq!(err.active, "i64");
        assert_eq!(
            err.to_string(),
            "type mismatch: requested `alloc::string::String` but the variant holds `i64`"
        );
    }

    #[test]
    fn reset() {
        let mut v = Value::new(String::from("hello"));
        v.reset();

        assert!(v.is_empty());
    }

    #[test]
    fn into_inner() {
        let v = Value::new(String::from("hello"));
        let v = v.into_inner::<i64, _>().unwrap_err();

        assert_eq!(v.into_inner::<String, _>().ok(), Some(String::from("hello")));
    }

    #[test]
    fn debug_and_eq_see_through() {
        let a = Value::new(101i64);

        assert_eq!(format!("{:?}", a), "101");
        assert_eq!(format!("{:?}", Value::empty()), "Empty");
        assert_eq!(a, Value::new(101i64));
        assert!(a != Value::new(102i64));
        assert!(a != Value::new(String::from("101")));
    }

    struct Dropper(Rc<Cell<usize>>);

    impl Drop for Dropper {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl Clone for Dropper {
        fn clone(&self) -> Self {
            Dropper(Rc::clone(&self.0))
        }
    }

    #[test]
    fn every_payload_is_dropped_once() {
        let drops = Rc::new(Cell::new(0));

        {
            let mut v = Variant::<(Dropper, u8, Empty)>::new(Dropper(Rc::clone(&drops)));
            let copy = v.clone();

            v.assign(1u8);
            assert_eq!(drops.get(), 1);

            let mut moved = copy;
            let taken = moved.take();
            assert_eq!(drops.get(), 1);

            drop(moved);
            assert_eq!(drops.get(), 1);

            let inner = taken.into_inner::<Dropper, _>().ok();
            assert_eq!(drops.get(), 1);

            drop(inner);
            assert_eq!(drops.get(), 2);

            v.assign(Dropper(Rc::clone(&drops)));
            v.reset();
            assert_eq!(drops.get(), 3);

            v.assign(Dropper(Rc::clone(&drops)));
        }

        assert_eq!(drops.get(), 4);
    }

    #[derive(Default)]
    struct Keeper {
        int: Option<i64>,
        text: Option<String>,
        empties: usize,
    }

    impl Case<i64> for Keeper {
        fn visit(&mut self, value: &i64) {
            self.int = Some(*value);
        }
    }

    impl Case<String> for Keeper {
        fn visit(&mut self, value: &String) {
            self.text = Some(value.clone());
        }
    }

    impl Case<Empty> for Keeper {
        fn visit(&mut self, _: &Empty) {
            self.empties += 1;
        }
    }

    #[test]
    fn accept_calls_one_case() {
        let mut keeper = Keeper::default();

        Value::new(101i64).accept(&mut keeper);
        assert_eq!(keeper.int, Some(101));
        assert_eq!(keeper.text, None);

        Value::new(String::from("hello")).accept(&mut keeper);
        assert_eq!(keeper.text.as_deref(), Some("hello"));
        assert_eq!(keeper.empties, 0);

        Value::empty().accept(&mut keeper);
        assert_eq!(keeper.empties, 1);
    }

    #[test]
    fn accept_through_a_trait_object() {
        let mut keeper = Keeper::default();
        let handler: &mut dyn variant_core::Visitor3<i64, String, Empty> = &mut keeper;

        Value::new(7i64).accept_dyn(handler);

        assert_eq!(keeper.int, Some(7));
    }
}
