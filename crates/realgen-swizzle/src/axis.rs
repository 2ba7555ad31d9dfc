// SPDX-License-Identifier: MIT
//
// Axis — one component slot of a vector of up to four components.

use std::fmt;

/// Number of vector components a swizzle can address.
pub const AXIS_COUNT: usize = 4;

/// A component index in `0..4`.
///
/// Axis 0 is the first component (`x`/`r`/`s`), axis 3 the fourth
/// (`w`/`a`/`q`). Values outside that range cannot be constructed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Axis(u8);

impl Axis {
    /// First component.
    pub const FIRST: Self = Self(0);
    /// Second component.
    pub const SECOND: Self = Self(1);
    /// Third component.
    pub const THIRD: Self = Self(2);
    /// Fourth component.
    pub const FOURTH: Self = Self(3);

    /// All axes in index order.
    pub const ALL: [Self; AXIS_COUNT] = [Self::FIRST, Self::SECOND, Self::THIRD, Self::FOURTH];

    /// Create an axis from its index. Returns `None` for `index >= 4`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < AXIS_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The zero-based component index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
