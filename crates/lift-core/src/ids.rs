//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash`.  The inner integer is `pub` so stores can
//! index their `Vec`s directly, but callers should prefer `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an elevator car.  Cars are always processed in ascending
    /// `CarId` order within a tick.
    pub struct CarId(u16);
}

typed_id! {
    /// Index of a building level, 0 = ground floor.
    pub struct FloorId(u16);
}

impl FloorId {
    pub const GROUND: FloorId = FloorId(0);

    /// The floor directly above, or `None` if `self` is the top floor of a
    /// building with `num_floors` levels.
    #[inline]
    pub fn above(self, num_floors: usize) -> Option<FloorId> {
        let next = self.index() + 1;
        (next < num_floors).then(|| FloorId(self.0 + 1))
    }

    /// The floor directly below, or `None` at the ground floor.
    #[inline]
    pub fn below(self) -> Option<FloorId> {
        self.0.checked_sub(1).map(FloorId)
    }
}
