//! A closed tagged union over a tuple of alternatives.
//!
//! [`Variant<(A, B, ..)>`](Variant) holds exactly one value of one of the listed types,
//! inline and without allocating. The set is fixed at compile time, so every way of
//! looking inside is checked for exhaustiveness by the compiler:
//!
//! * [`Variant::accept`] calls a handler with a [`Case`] per alternative,
//! * [`apply`] runs a [`Functor`] with a [`Handle`] overload per alternative, with extra
//!   arguments and a shared result type,
//! * [`match_with`] and [`match_variant!`] pick one closure out of a tuple,
//! * [`apply2`], [`match_pair`] and [`match_pair!`] do the same for a pair of variants.
//!
//! ```
//! use tagged_variant::{match_variant, Empty, Variant};
//!
//! type Value = Variant<(i64, String, Empty)>;
//!
//! let mut v = Value::new(String::from("hello"));
//! let moved = v.take();
//!
//! assert!(v.is_empty());
//! assert_eq!(
//!     match_variant!(moved, |_: &i64| "int", |_: &String| "text", |_: &Empty| "null"),
//!     "text"
//! );
//! ```
//!
//! Emptiness is opt-in: only a variant that lists [`Empty`] as an alternative can be
//! empty, and only such a variant has [`Variant::empty`], [`Variant::reset`] and
//! [`Variant::take`].

pub mod apply;
pub mod binary;
pub mod error;
pub mod matching;
pub mod variant;

mod macros;

pub use variant_core::{
    Alternatives, At0, At1, At2, At3, At4, At5, At6, At7, Case, Empty, Member, Position, Tag,
    Visits,
};

pub use apply::{apply, Apply, Functor, Handle};
pub use binary::{apply2, match_pair, ApplyBoth, ApplyRight, Handle2, MatchRow};
pub use error::TypeMismatch;
pub use matching::{match_with, Match, Match2};
pub use variant::Variant;
