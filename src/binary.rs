//! Dispatch on a pair of variants.
//!
//! A binary functor has one [`Handle2`] overload per pair of alternatives. It is run
//! as two chained single dispatches: the left variant is visited first, and inside
//! that case the right one is visited with the left operand in hand.

use variant_core::Alternatives;

use crate::apply::Functor;
use crate::matching::Match2;
use crate::variant::Variant;

/// The overload of a binary functor for the pair `(L, R)`.
pub trait Handle2<L, R, Args = ()>: Functor {
    fn handle_pair(&mut self, lhs: &L, rhs: &R, args: Args) -> Self::Output;
}

/// The inner dispatch: a known left operand against every alternative of `R`.
///
/// Implemented for every functor with a [`Handle2<L, Rj, Args>`] impl for each
/// alternative `Rj` of `R`.
pub trait ApplyRight<L, R: Alternatives, Args = ()>: Functor {
    fn apply_right(&mut self, lhs: &L, rhs: &Variant<R>, args: Args) -> Self::Output;
}

/// The outer dispatch: every alternative of `L` against every alternative of `R`.
pub trait ApplyBoth<L: Alternatives, R: Alternatives, Args = ()>: Functor {
    fn apply_both(&mut self, lhs: &Variant<L>, rhs: &Variant<R>, args: Args) -> Self::Output;
}

/// Runs the overload of `functor` for the alternatives `lhs` and `rhs` hold.
///
/// All pairs must be covered; a missing overload is a compile error.
///
/// ```compile_fail
/// use tagged_variant::{apply2, Functor, Handle2, Variant};
///
/// struct Sum;
///
/// impl Functor for Sum {
///     type Output = i64;
/// }
///
/// impl Handle2<i64, i64> for Sum {
///     fn handle_pair(&mut self, l: &i64, r: &i64, _: ()) -> i64 {
///         l + r
///     }
/// }
///
/// impl Handle2<i64, u8> for Sum {
///     fn handle_pair(&mut self, l: &i64, r: &u8, _: ()) -> i64 {
///         l + i64::from(*r)
///     }
/// }
///
/// impl Handle2<u8, i64> for Sum {
///     fn handle_pair(&mut self, l: &u8, r: &i64, _: ()) -> i64 {
///         i64::from(*l) + r
///     }
/// }
///
/// type Num = Variant<(i64, u8)>;
///
/// // `(u8, u8)` has no overload.
/// let sum = apply2(&mut Sum, &Num::new(1i64), &Num::new(2u8), ());
/// ```
#[inline]
pub fn apply2<L, R, F, Args>(
    functor: &mut F,
    lhs: &Variant<L>,
    rhs: &Variant<R>,
    args: Args,
) -> F::Output
where
    L: Alternatives,
    R: Alternatives,
    F: ApplyBoth<L, R, Args>,
{
    functor.apply_both(lhs, rhs, args)
}

/// One row of a binary match: closures for a fixed left alternative `L`, one per
/// alternative of `R`, in declaration order.
pub trait MatchRow<L, R: Alternatives>: Sized {
    type Output;

    fn match_row(self, lhs: &L, rhs: &Variant<R>) -> Self::Output;
}

/// Runs the closure for the pair of alternatives `lhs` and `rhs` hold.
///
/// `rows` has one tuple per alternative of `lhs`, each holding one closure per
/// alternative of `rhs`. The [`match_pair!`](crate::match_pair!) macro spells this out
/// with less punctuation.
///
/// ```
/// use tagged_variant::{match_pair, Variant};
///
/// type Num = Variant<(i64, String)>;
///
/// let sum = match_pair(
///     &Num::new(1i64),
///     &Num::new(String::from("2")),
///     (
///         (
///             |l: &i64, r: &i64| l + r,
///             |l: &i64, r: &String| l + r.parse::<i64>().unwrap_or(0),
///         ),
///         (
///             |l: &String, r: &i64| l.parse::<i64>().unwrap_or(0) + r,
///             |l: &String, r: &String| format!("{}{}", l, r).parse::<i64>().unwrap_or(0),
///         ),
///     ),
/// );
///
/// assert_eq!(sum, 3);
/// ```
#[inline]
pub fn match_pair<L, R, M>(lhs: &Variant<L>, rhs: &Variant<R>, rows: M) -> M::Output
where
    L: Alternatives,
    R: Alternatives,
    M: Match2<L, R>,
{
    rows.match_pair(lhs, rhs)
}
