//! Applying a set of overloads to a variant.
//!
//! A functor is any type with a [`Handle`] impl per alternative. Overloads can be
//! written one per type, or as a single generic impl that covers several:
//!
//! ```
//! use tagged_variant::{apply, Functor, Handle, Variant};
//!
//! struct Describe;
//!
//! impl Functor for Describe {
//!     type Output = String;
//! }
//!
//! impl<T: std::fmt::Debug> Handle<T> for Describe {
//!     fn handle(&mut self, value: &T, _: ()) -> String {
//!         format!("{:?}", value)
//!     }
//! }
//!
//! let v = Variant::<(i64, String)>::new(String::from("hi"));
//! assert_eq!(apply(&mut Describe, &v, ()), "\"hi\"");
//! ```

use variant_core::{Alternatives, Case, Visits};

use crate::binary::{ApplyRight, Handle2};
use crate::variant::Variant;

/// Declares what every overload of a functor returns.
///
/// Overloads that have nothing to return use `()`.
pub trait Functor {
    type Output;
}

/// The overload of a functor for alternative `T`.
///
/// `Args` are the extra arguments passed to [`apply`], as one value. Use a tuple for
/// several, or `()` for none.
pub trait Handle<T, Args = ()>: Functor {
    fn handle(&mut self, value: &T, args: Args) -> Self::Output;
}

/// Implemented by every functor with a [`Handle`] impl for each alternative of `S`.
///
/// This is never implemented by hand.
pub trait Apply<S: Alternatives, Args = ()>: Functor {
    fn apply_to(&mut self, variant: &Variant<S>, args: Args) -> Self::Output;
}

/// Runs the overload of `functor` for the alternative `variant` holds.
///
/// A functor that lacks an overload for one of the alternatives is rejected at compile
/// time:
///
/// ```compile_fail
/// use tagged_variant::{apply, Functor, Handle, Variant};
///
/// struct Double;
///
/// impl Functor for Double {
///     type Output = i64;
/// }
///
/// impl Handle<i64> for Double {
///     fn handle(&mut self, n: &i64, _: ()) -> i64 {
///         n * 2
///     }
/// }
///
/// let v = Variant::<(i64, String)>::new(21i64);
/// let doubled = apply(&mut Double, &v, ());
/// ```
#[inline]
pub fn apply<S, F, Args>(functor: &mut F, variant: &Variant<S>, args: Args) -> F::Output
where
    S: Alternatives,
    F: Apply<S, Args>,
{
    functor.apply_to(variant, args)
}

/// No context: the visited value is the only operand.
pub(crate) struct Unary;

/// The left operand of a binary functor, fixed while the right one is visited.
pub(crate) struct WithLhs<'a, L>(pub(crate) &'a L);

/// The right variant of a binary functor, visited once the left operand is known.
pub(crate) struct WithRhs<'a, R: Alternatives>(pub(crate) &'a Variant<R>);

/// A transient handler that forwards the visited value to a functor.
///
/// The extra arguments are moved into the one case that runs, and the result comes
/// back through `ret`.
pub(crate) struct Applier<'f, F: Functor, C, Args> {
    functor: &'f mut F,
    context: C,
    args: Option<Args>,
    ret: Option<F::Output>,
}

impl<'f, F: Functor, C, Args> Applier<'f, F, C, Args> {
    pub(crate) fn new(functor: &'f mut F, context: C, args: Args) -> Self {
        Applier {
            functor,
            context,
            args: Some(args),
            ret: None,
        }
    }

    pub(crate) fn run<S>(mut self, variant: &Variant<S>) -> F::Output
    where
        S: Alternatives,
        Self: Visits<S>,
    {
        variant.accept(&mut self);

        match self.ret {
            Some(ret) => ret,
            None => unreachable!("no case ran for `{}`", variant.type_name()),
        }
    }
}

impl<'f, F, Args, T> Case<T> for Applier<'f, F, Unary, Args>
where
    F: Functor + Handle<T, Args>,
{
    fn visit(&mut self, value: &T) {
        if let Some(args) = self.args.take() {
            self.ret = Some(self.functor.handle(value, args));
        }
    }
}

impl<'f, 'a, F, L, Args, T> Case<T> for Applier<'f, F, WithLhs<'a, L>, Args>
where
    F: Functor + Handle2<L, T, Args>,
{
    fn visit(&mut self, value: &T) {
        if let Some(args) = self.args.take() {
            self.ret = Some(self.functor.handle_pair(self.context.0, value, args));
        }
    }
}

impl<'f, 'a, F, R, Args, T> Case<T> for Applier<'f, F, WithRhs<'a, R>, Args>
where
    R: Alternatives,
    F: Functor + ApplyRight<T, R, Args>,
{
    fn visit(&mut self, value: &T) {
        if let Some(args) = self.args.take() {
            self.ret = Some(self.functor.apply_right(value, self.context.0, args));
        }
    }
}
