use serde::{ser::Serializer, Serialize};
use std::fmt;

/// Largest grid the solver handles: 4 variables, 16 cells.
pub const MAX_CELLS: usize = 16;

/// A set of cell indices of a grid with at most [`MAX_CELLS`] cells.
///
/// Bit `d` is set iff cell `d` is a member. Used as the identity of a group.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::BitAnd,
    derive_more::BitOr,
    derive_more::BitOrAssign,
)]
pub struct CellSet(pub u16);

impl CellSet {
    pub fn new() -> Self {
        Default::default()
    }

    /// The set of all cells of a grid with `cell_count` cells.
    pub fn full(cell_count: usize) -> Self {
        debug_assert!(cell_count <= MAX_CELLS);
        if cell_count >= MAX_CELLS {
            Self(u16::MAX)
        } else {
            Self((1u16 << cell_count) - 1)
        }
    }

    pub fn insert(&mut self, decimal: usize) {
        debug_assert!(decimal < MAX_CELLS);
        self.0 |= 1 << decimal;
    }

    pub fn contains(&self, decimal: usize) -> bool {
        decimal < MAX_CELLS && self.0 & (1 << decimal) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(&self, other: &CellSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_strict_subset(&self, other: &CellSet) -> bool {
        self != other && self.is_subset(other)
    }

    pub fn has_intersection(&self, other: &CellSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Cell indices in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_CELLS).filter(move |&d| self.contains(d))
    }
}

impl FromIterator<usize> for CellSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl Serialize for CellSet {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.iter())
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, d) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "}}")
    }
}
