//! Impls that need one copy per arity of the alternative tuple.

use std::fmt;

use crate::apply::{Applier, Apply, Handle, Unary, WithLhs, WithRhs};
use crate::binary::{ApplyBoth, ApplyRight, Handle2, MatchRow};
use crate::matching::{Match, Match2};
use crate::variant::{Cloner, Comparer, Debugger, Variant};
use variant_core::Alternatives;

macro_rules! impl_arity {
    (
        INDICES = [$($idx:tt),+],
        GENERICS = [$($G:ident),+],
        CASES = [$($F:ident),+]
    ) => (
        impl<$($G: Clone + 'static),+> Clone for Variant<($($G,)+)> {
            #[inline]
            fn clone(&self) -> Self {
                Cloner::clone_of(self)
            }
        }

        impl<$($G: fmt::Debug + 'static),+> fmt::Debug for Variant<($($G,)+)> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut debugger = Debugger::new(f);
                self.accept(&mut debugger);
                debugger.finish()
            }
        }

        impl<$($G: PartialEq + 'static),+> PartialEq for Variant<($($G,)+)> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                Comparer::equal(self, other)
            }
        }

        impl<$($G: Eq + 'static),+> Eq for Variant<($($G,)+)> {}

        impl<Fun, Args, $($G: 'static),+> Apply<($($G,)+), Args> for Fun
        where
            $(Fun: Handle<$G, Args>,)+
        {
            #[inline]
            fn apply_to(&mut self, variant: &Variant<($($G,)+)>, args: Args) -> Self::Output {
                Applier::new(self, Unary, args).run(variant)
            }
        }

        impl<Fun, Lhs, Args, $($G: 'static),+> ApplyRight<Lhs, ($($G,)+), Args> for Fun
        where
            $(Fun: Handle2<Lhs, $G, Args>,)+
        {
            #[inline]
            fn apply_right(
                &mut self,
                lhs: &Lhs,
                rhs: &Variant<($($G,)+)>,
                args: Args,
            ) -> Self::Output {
                Applier::new(self, WithLhs(lhs), args).run(rhs)
            }
        }

        impl<Fun, Rhs, Args, $($G: 'static),+> ApplyBoth<($($G,)+), Rhs, Args> for Fun
        where
            Rhs: Alternatives,
            $(Fun: ApplyRight<$G, Rhs, Args>,)+
        {
            #[inline]
            fn apply_both(
                &mut self,
                lhs: &Variant<($($G,)+)>,
                rhs: &Variant<Rhs>,
                args: Args,
            ) -> Self::Output {
                Applier::new(self, WithRhs(rhs), args).run(lhs)
            }
        }

        impl<Out, $($G: 'static,)+ $($F,)+> Match<($($G,)+)> for ($($F,)+)
        where
            $($F: FnOnce(&$G) -> Out,)+
        {
            type Output = Out;

            #[inline]
            fn match_variant(self, variant: &Variant<($($G,)+)>) -> Out {
                match variant.index() {
                    $($idx => (self.$idx)(unsafe { variant.get_unchecked::<$G>() }),)+
                    _ => unreachable!(),
                }
            }
        }

        impl<Lhs, Out, $($G: 'static,)+ $($F,)+> MatchRow<Lhs, ($($G,)+)> for ($($F,)+)
        where
            $($F: FnOnce(&Lhs, &$G) -> Out,)+
        {
            type Output = Out;

            #[inline]
            fn match_row(self, lhs: &Lhs, rhs: &Variant<($($G,)+)>) -> Out {
                match rhs.index() {
                    $($idx => (self.$idx)(lhs, unsafe { rhs.get_unchecked::<$G>() }),)+
                    _ => unreachable!(),
                }
            }
        }

        impl<Rhs, Out, $($G: 'static,)+ $($F,)+> Match2<($($G,)+), Rhs> for ($($F,)+)
        where
            Rhs: Alternatives,
            $($F: MatchRow<$G, Rhs, Output = Out>,)+
        {
            type Output = Out;

            #[inline]
            fn match_pair(self, lhs: &Variant<($($G,)+)>, rhs: &Variant<Rhs>) -> Out {
                match lhs.index() {
                    $($idx => self.$idx.match_row(unsafe { lhs.get_unchecked::<$G>() }, rhs),)+
                    _ => unreachable!(),
                }
            }
        }
    );
}

impl_arity!(INDICES = [0], GENERICS = [A], CASES = [FA]);
impl_arity!(INDICES = [0, 1], GENERICS = [A, B], CASES = [FA, FB]);
impl_arity!(INDICES = [0, 1, 2], GENERICS = [A, B, C], CASES = [FA, FB, FC]);
impl_arity!(
    INDICES = [0, 1, 2, 3],
    GENERICS = [A, B, C, D],
    CASES = [FA, FB, FC, FD]
);
impl_arity!(
    INDICES = [0, 1, 2, 3, 4],
    GENERICS = [A, B, C, D, E],
    CASES = [FA, FB, FC, FD, FE]
);
impl_arity!(
    INDICES = [0, 1, 2, 3, 4, 5],
    GENERICS = [A, B, C, D, E, F],
    CASES = [FA, FB, FC, FD, FE, FF]
);
impl_arity!(
    INDICES = [0, 1, 2, 3, 4, 5, 6],
    GENERICS = [A, B, C, D, E, F, G],
    CASES = [FA, FB, FC, FD, FE, FF, FG]
);
impl_arity!(
    INDICES = [0, 1, 2, 3, 4, 5, 6, 7],
    GENERICS = [A, B, C, D, E, F, G, H],
    CASES = [FA, FB, FC, FD, FE, FF, FG, FH]
);
