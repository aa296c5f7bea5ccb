/// A type-level position inside a tuple of alternatives.
///
/// The marker types are never constructed by users. They exist so the compiler can
/// infer *which* alternative a type is, turning "T is alternative number i of S" into a
/// trait bound.
pub trait Position {
    /// The zero-based position, which doubles as the discriminant of the alternative.
    const INDEX: usize;
}

macro_rules! IndexStruct {
    ($index:expr => $name:ident $(, $indices:expr => $names:ident)*) => (
        doc_comment!(
            concat!("Marks the alternative at position ", stringify!($index), " of a tuple."),
            #[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
            pub struct $name;
        );

        impl Position for $name {
            const INDEX: usize = $index;
        }

        IndexStruct!($($indices => $names),*);
    );

    () => ();
}

IndexStruct!(0 => At0, 1 => At1, 2 => At2, 3 => At3, 4 => At4, 5 => At5, 6 => At6, 7 => At7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_zero_based() {
        assert_eq!(At0::INDEX, 0);
        assert_eq!(At3::INDEX, 3);
        assert_eq!(At7::INDEX, 7);
    }
}
