use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr;

use crate::index::Position;
use crate::registry::{Alternatives, Member};

macro_rules! Cell {
    (
        pub union $name:ident {
        $($fieldnames:ident: $generics:ident),*
    }) => (
        doc_comment!(
            concat!(
                "Raw storage that is large and aligned enough for any of: ",
                stringify!($($generics),*),
                ". Every field lives at offset 0."
            ),
            #[repr(C)]
            pub union $name<$($generics),*> {
                $($fieldnames: ManuallyDrop<$generics>,)*
            }
        );
    )
}

macro_rules! GenCell {
    (
        NAMES = [],
        FIELDS = []
    ) => ();

    (
        NAMES = [$name:ident $(,$names:ident)*],
        FIELDS = [$fieldname:ident: $generic:ident $(,$fieldnames:ident: $generics:ident)*]
    ) => {
        Cell!(
            pub union $name {
            $fieldname: $generic
            $(, $fieldnames: $generics)*
        });

        GenCell!(
            NAMES = [$($names),*],
            FIELDS = [$($fieldnames: $generics),*]
        );
    };
}

GenCell!(
    NAMES = [Cell8, Cell7, Cell6, Cell5, Cell4, Cell3, Cell2, Cell1],
    FIELDS = [
        _a: A,
        _b: B,
        _c: C,
        _d: D,
        _e: E,
        _f: F,
        _g: G,
        _h: H
    ]
);

sa::assert_eq_size!(Cell2<u8, u64>, u64);
sa::assert_eq_align!(Cell2<u8, u64>, u64);
sa::assert_eq_size!(Cell3<[u8; 3], u16, ()>, [u16; 2]);
sa::assert_eq_size!(Cell1<()>, ());

/// Uninitialised memory for one alternative of `S`.
///
/// `Storage` does not know which alternative it holds, and never drops its contents.
/// Keeping track of the live type is the job of whoever owns it.
pub struct Storage<S: Alternatives> {
    cell: MaybeUninit<S::Cell>,
}

impl<S: Alternatives> Storage<S> {
    /// Returns storage that holds nothing yet.
    #[inline]
    pub fn uninit() -> Self {
        Storage {
            cell: MaybeUninit::uninit(),
        }
    }

    /// Creates storage holding `value`.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        T: Member<S, I>,
        I: Position,
    {
        let mut storage = Self::uninit();
        unsafe { storage.write(value) };
        storage
    }

    /// The storage as a pointer to `T`. Reading through it requires a live `T`.
    #[inline]
    pub fn as_ptr<T>(&self) -> *const T {
        self.cell.as_ptr() as *const T
    }

    /// The storage as a mutable pointer to `T`.
    #[inline]
    pub fn as_mut_ptr<T>(&mut self) -> *mut T {
        self.cell.as_mut_ptr() as *mut T
    }

    /// Writes `value` to the storage without dropping what was there.
    ///
    /// # Safety
    ///
    /// `T` must be one of the alternatives of `S`.
    #[inline]
    pub unsafe fn write<T>(&mut self, value: T) {
        ptr::write(self.as_mut_ptr::<T>(), value)
    }

    /// Borrows the contents as a `T`.
    ///
    /// # Safety
    ///
    /// The storage must currently hold an initialised `T`.
    #[inline]
    pub unsafe fn get<T>(&self) -> &T {
        &*self.as_ptr::<T>()
    }

    /// Moves a `T` out of the storage. Afterwards the storage must be treated as
    /// uninitialised.
    ///
    /// # Safety
    ///
    /// The storage must currently hold an initialised `T`.
    #[inline]
    pub unsafe fn read<T>(&self) -> T {
        ptr::read(self.as_ptr::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn storage_has_the_layout_of_its_largest_alternative() {
        assert_eq!(mem::size_of::<Storage<(u8, u32, [u8; 6])>>(), 8);
        assert_eq!(mem::align_of::<Storage<(u8, u32, [u8; 6])>>(), 4);
        assert_eq!(mem::size_of::<Storage<(u8, ())>>(), 1);
    }

    #[test]
    fn write_then_read() {
        let mut storage = Storage::<(u64, String)>::uninit();

        unsafe {
            storage.write(String::from("hello"));
            assert_eq!(storage.get::<String>(), "hello");

            let s = storage.read::<String>();
            assert_eq!(s, "hello");

            storage.write(7u64);
            assert_eq!(*storage.get::<u64>(), 7);
        }
    }

    #[test]
    fn new_picks_the_member() {
        let storage = Storage::<(u8, String)>::new(String::from("hi"));
        let s = unsafe { storage.read::<String>() };

        assert_eq!(s, "hi");
    }
}
