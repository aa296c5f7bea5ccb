//! Matching a variant against a tuple of closures.

use variant_core::Alternatives;

use crate::variant::Variant;

/// A tuple of closures, one per alternative of `S` in declaration order.
///
/// Implemented for `(FnOnce(&A) -> R, FnOnce(&B) -> R, ..)`. The closure that runs is
/// picked by the variant's discriminant; the others are dropped unused.
pub trait Match<S: Alternatives>: Sized {
    type Output;

    fn match_variant(self, variant: &Variant<S>) -> Self::Output;
}

/// Like [`Match`], over two variants: one [`MatchRow`](crate::MatchRow) per
/// alternative of `L`.
pub trait Match2<L: Alternatives, R: Alternatives>: Sized {
    type Output;

    fn match_pair(self, lhs: &Variant<L>, rhs: &Variant<R>) -> Self::Output;
}

/// Runs the closure in `cases` that belongs to the alternative `variant` holds.
///
/// Closure parameters need their types spelled out, since the closures are checked
/// before the tuple is matched against the alternatives.
///
/// ```
/// use tagged_variant::{match_with, Variant};
///
/// let v = Variant::<(i64, String)>::new(1i64);
/// let kind = match_with(&v, (|_: &i64| "int", |_: &String| "text"));
///
/// assert_eq!(kind, "int");
/// ```
///
/// Every alternative needs its closure:
///
/// ```compile_fail
/// use tagged_variant::{match_with, Variant};
///
/// let v = Variant::<(i64, String, bool)>::new(1i64);
/// let kind = match_with(&v, (|_: &i64| "int", |_: &String| "text"));
/// ```
#[inline]
pub fn match_with<S, M>(variant: &Variant<S>, cases: M) -> M::Output
where
    S: Alternatives,
    M: Match<S>,
{
    cases.match_variant(variant)
}

/// Matches a variant against one closure per alternative.
///
/// `match_variant!(v, a, b, c)` is `match_with(&v, (a, b, c))`.
///
/// ```compile_fail
/// use tagged_variant::{match_variant, Variant};
///
/// let v = Variant::<(i64, String)>::new(1i64);
/// let kind = match_variant!(v, |_: &i64| "int");
/// ```
#[macro_export]
macro_rules! match_variant {
    ($variant:expr, $($case:expr),+ $(,)?) => {
        $crate::match_with(&$variant, ($($case,)+))
    };
}

/// Matches a pair of variants against a grid of closures.
///
/// Each bracketed row belongs to one alternative of the left variant and holds one
/// closure per alternative of the right variant.
///
/// ```
/// use tagged_variant::{match_pair, Variant};
///
/// type Value = Variant<(i64, String)>;
///
/// let (l, r) = (Value::new(101i64), Value::new(String::from("202")));
/// let written = match_pair!(l, r,
///     [|l: &i64, r: &i64| format!("{}, {}", l, r), |l: &i64, r: &String| format!("{}, {}", l, r)],
///     [|l: &String, r: &i64| format!("{}, {}", l, r), |l: &String, r: &String| format!("{}, {}", l, r)],
/// );
///
/// assert_eq!(written, "101, 202");
/// ```
///
/// A row with a closure missing is rejected:
///
/// ```compile_fail
/// use tagged_variant::{match_pair, Variant};
///
/// type Value = Variant<(i64, String)>;
///
/// let (l, r) = (Value::new(101i64), Value::new(String::from("202")));
/// let written = match_pair!(l, r,
///     [|l: &i64, r: &i64| format!("{}, {}", l, r), |l: &i64, r: &String| format!("{}, {}", l, r)],
///     [|l: &String, r: &i64| format!("{}, {}", l, r)],
/// );
/// ```
#[macro_export]
macro_rules! match_pair {
    ($lhs:expr, $rhs:expr, $([$($case:expr),+ $(,)?]),+ $(,)?) => {
        $crate::match_pair(&$lhs, &$rhs, ($(($($case,)+),)+))
    };
}
