//! The storage and dispatch machinery behind a closed tagged union.
//!
//! A set of alternatives is spelled as a tuple, `(A, B, C)`. For every such set this
//! crate provides:
//!
//! * a raw [`Storage`](cell::Storage) cell, sized and aligned for the largest alternative,
//! * one operations table, a [`Tag`](tag::Tag), per alternative, which knows how to move,
//!   destroy and dispatch the value in a cell,
//! * a handler trait with a [`Case`](visitor::Case) for every alternative.
//!
//! Nothing here allocates, and nothing here knows which alternative a cell holds; the
//! container that pairs a cell with its tag lives one layer up.

extern crate static_assertions as sa;

macro_rules! doc_comment {
    ($x:expr, $($tt:tt)*) => {
        #[doc = $x]
        $($tt)*
    };
}

pub mod index;
pub mod registry;
pub mod tag;
pub mod visitor;
pub mod cell;

pub use cell::Storage;
pub use index::{At0, At1, At2, At3, At4, At5, At6, At7, Position};
pub use registry::{
    Alternatives, Member, Visitor1, Visitor2, Visitor3, Visitor4, Visitor5, Visitor6, Visitor7,
    Visitor8,
};
pub use tag::{Empty, Tag};
pub use visitor::{Case, Visits};
