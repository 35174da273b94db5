//! The sorting routines under measurement: [bubble_sort()], [insertion_sort()] & [quick_sort()].\
//! All of them borrow the caller's sequence and return a new, independently owned, non-decreasingly sorted copy
//! -- the input is never mutated.

mod bubble;
mod insertion;
mod quick;

pub use {
    bubble::bubble_sort,
    insertion::insertion_sort,
    quick::quick_sort,
};

use std::fmt::{Display, Formatter};


/// The sorting algorithms this crate knows how to run & measure.\
/// Allows callers to select an algorithm at runtime -- see [crate::api::builder::SortMeasurer].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Quick,
}

impl SortAlgorithm {

    /// Every variant, in declaration order
    pub const ALL: [SortAlgorithm; 3] = [Self::Bubble, Self::Insertion, Self::Quick];

    /// Runs the selected algorithm over `sequence`, returning a sorted copy of it
    pub fn sort<T: Ord + Clone>(&self, sequence: &[T]) -> Vec<T> {
        match self {
            Self::Bubble    => bubble_sort(sequence),
            Self::Insertion => insertion_sort(sequence),
            Self::Quick     => quick_sort(sequence),
        }
    }

    /// name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble    => "bubble sort",
            Self::Insertion => "insertion sort",
            Self::Quick     => "quick sort",
        }
    }

    /// Tells if equal elements are guaranteed to keep their relative input order.\
    /// Quick sort keeps equal elements together in a single block, which is stable for total orders
    /// over plain integers, but the guarantee is only documented for bubble & insertion sorts.
    pub fn is_stable(&self) -> bool {
        match self {
            Self::Bubble | Self::Insertion => true,
            Self::Quick                    => false,
        }
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Testing oracle: `true` if `sequence` is in non-decreasing order
pub fn is_sorted<T: Ord>(sequence: &[T]) -> bool {
    sequence.windows(2).all(|pair| pair[0] <= pair[1])
}
