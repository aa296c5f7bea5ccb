use std::any::TypeId;
use std::marker::PhantomData;
use std::mem;

use crate::cell::{Cell1, Cell2, Cell3, Cell4, Cell5, Cell6, Cell7, Cell8, Storage};
use crate::index::{At0, At1, At2, At3, At4, At5, At6, At7, Position};
use crate::tag::Tag;
use crate::visitor::{Case, Visits};

/// Returns the larger of `a` and `b`, at compile time.
pub const fn static_max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the TypeId of `T`
pub fn type_id<T: 'static>() -> TypeId {
    TypeId::of::<T>()
}

#[macro_export]
macro_rules! contains_type {
    ($T:ty, [$($O:ty),*]) => (
        false $(|| $crate::registry::type_id::<$T>() == $crate::registry::type_id::<$O>())*
    )
}

/// A closed, ordered set of alternatives, spelled as a tuple `(A, B, ..)`.
///
/// Implemented for tuples of one up to eight `'static` types. The types should be
/// distinct; a duplicate makes its position ambiguous and it can't be constructed.
///
/// # Safety
///
/// `Cell` must be large and aligned enough for every alternative, with each one
/// readable at offset 0.
pub unsafe trait Alternatives: Sized + 'static {
    /// The raw storage union.
    type Cell;

    /// The handler object: a trait object with one [`Case`] per alternative.
    type Visitor<'v>: ?Sized + 'v;

    /// The number of alternatives.
    const LEN: usize;

    /// The largest `size_of` among the alternatives.
    const MAX_SIZE: usize;

    /// The largest `align_of` among the alternatives.
    const MAX_ALIGN: usize;

    /// Returns `true` if `T` is one of the alternatives.
    fn contains<T: 'static>() -> bool;
}

/// Proof that `Self` is the alternative at position `I` of `S`.
///
/// `I` is almost always left to inference: `Variant::new(5u8)` finds the single
/// position where `u8` appears. Asking for a type that is not an alternative fails to
/// compile.
///
/// # Safety
///
/// `TAG` must operate on `Self`, with `I::INDEX` as its index.
pub unsafe trait Member<S: Alternatives, I: Position>: 'static {
    /// The operations table for this alternative.
    const TAG: &'static Tag<S>;
}

/// Namespace for the per-position dispatch functions stored in each [`Tag`].
#[allow(dead_code)]
struct Dispatcher<S, I>(PhantomData<(S, I)>);

macro_rules! impl_member {
    (
        VISITOR = $visitor:ident,
        NAMES = [$name:ident $(,$names:ident)*],
        GENERICS = [$current:ident $(,$generics:ident)*],
        COPIES = [$($copies:ident),*]
    ) => (
        impl<$($copies: 'static),*> Dispatcher<($($copies,)*), $name> {
            /// `visitor` must point at a live `&mut dyn` handler for this tuple.
            unsafe fn dispatch(storage: &Storage<($($copies,)*)>, visitor: *mut ()) {
                let visitor = &mut *(visitor as *mut &mut (dyn $visitor<$($copies),*> + '_));
                Case::<$current>::visit(&mut **visitor, storage.get::<$current>())
            }
        }

        unsafe impl<$($copies: 'static),*> Member<($($copies,)*), $name> for $current {
            const TAG: &'static Tag<($($copies,)*)> = &Tag::new::<$current>(
                <$name as Position>::INDEX,
                Dispatcher::<($($copies,)*), $name>::dispatch,
            );
        }

        impl_member!(
            VISITOR = $visitor,
            NAMES = [$($names),*],
            GENERICS = [$($generics),*],
            COPIES = [$($copies),*]
        );
    );

    (
        VISITOR = $visitor:ident,
        NAMES = [],
        GENERICS = [],
        COPIES = [$($copies:ident),*]
    ) => ();
}

macro_rules! alternatives {
    (
        VISITOR = $visitor:ident,
        CELL = $cell:ident,
        LEN = $len:expr,
        NAMES = [$($names:ident),+],
        GENERICS = [$first:ident $(,$rest:ident)*]
    ) => (
        doc_comment!(
            concat!(
                "A handler with a case for each of ",
                stringify!($first $(, $rest)*),
                ".\n\nImplemented for every type that has all of those cases. ",
                "`dyn ", stringify!($visitor), "` is the handler object the operations table dispatches on."
            ),
            pub trait $visitor<$first $(, $rest)*>: Case<$first> $(+ Case<$rest>)* {}
        );

        impl<Vis, $first $(, $rest)*> $visitor<$first $(, $rest)*> for Vis
        where
            Vis: Case<$first> $(+ Case<$rest>)*
        {}

        unsafe impl<$first: 'static $(, $rest: 'static)*> Alternatives for ($first, $($rest,)*) {
            type Cell = $cell<$first $(, $rest)*>;
            type Visitor<'v> = dyn $visitor<$first $(, $rest)*> + 'v;

            const LEN: usize = $len;

            const MAX_SIZE: usize = {
                let max = mem::size_of::<$first>();
                $(let max = static_max(max, mem::size_of::<$rest>());)*
                max
            };

            const MAX_ALIGN: usize = {
                let max = mem::align_of::<$first>();
                $(let max = static_max(max, mem::align_of::<$rest>());)*
                max
            };

            #[inline]
            fn contains<T: 'static>() -> bool {
                contains_type!(T, [$first $(, $rest)*])
            }
        }

        impl<Vis, $first: 'static $(, $rest: 'static)*> Visits<($first, $($rest,)*)> for Vis
        where
            Vis: Case<$first> $(+ Case<$rest>)*
        {
            #[inline]
            fn as_visitor(&mut self) -> &mut (dyn $visitor<$first $(, $rest)*> + '_) {
                self
            }
        }

        impl_member!(
            VISITOR = $visitor,
            NAMES = [$($names),+],
            GENERICS = [$first $(, $rest)*],
            COPIES = [$first $(, $rest)*]
        );
    );
}

alternatives!(VISITOR = Visitor1, CELL = Cell1, LEN = 1, NAMES = [At0], GENERICS = [A]);
alternatives!(VISITOR = Visitor2, CELL = Cell2, LEN = 2, NAMES = [At0, At1], GENERICS = [A, B]);
alternatives!(
    VISITOR = Visitor3,
    CELL = Cell3,
    LEN = 3,
    NAMES = [At0, At1, At2],
    GENERICS = [A, B, C]
);
alternatives!(
    VISITOR = Visitor4,
    CELL = Cell4,
    LEN = 4,
    NAMES = [At0, At1, At2, At3],
    GENERICS = [A, B, C, D]
);
alternatives!(
    VISITOR = Visitor5,
    CELL = Cell5,
    LEN = 5,
    NAMES = [At0, At1, At2, At3, At4],
    GENERICS = [A, B, C, D, E]
);
alternatives!(
    VISITOR = Visitor6,
    CELL = Cell6,
    LEN = 6,
    NAMES = [At0, At1, At2, At3, At4, At5],
    GENERICS = [A, B, C, D, E, F]
);
alternatives!(
    VISITOR = Visitor7,
    CELL = Cell7,
    LEN = 7,
    NAMES = [At0, At1, At2, At3, At4, At5, At6],
    GENERICS = [A, B, C, D, E, F, G]
);
alternatives!(
    VISITOR = Visitor8,
    CELL = Cell8,
    LEN = 8,
    NAMES = [At0, At1, At2, At3, At4, At5, At6, At7],
    GENERICS = [A, B, C, D, E, F, G, H]
);

sa::const_assert_eq!(<(u8, u64, [u8; 12]) as Alternatives>::MAX_SIZE, 12);
sa::const_assert_eq!(<(u8, u64, [u8; 12]) as Alternatives>::MAX_ALIGN, 8);
sa::const_assert_eq!(<(u8, u16, u32, u64, (), bool, char, i8) as Alternatives>::LEN, 8);
sa::const_assert_eq!(<([u16; 3],) as Alternatives>::MAX_SIZE, 6);
sa::const_assert_eq!(<([u16; 3],) as Alternatives>::MAX_ALIGN, 2);
