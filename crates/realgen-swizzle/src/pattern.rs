// SPDX-License-Identifier: MIT
//
// Pattern and PatternSet — the unit of output and its deduplicating container.
//
// A Pattern is an ordered selection of axes, `xzx` being [0, 2, 0]. Two
// patterns with the same components in a different order are different
// swizzles. PatternSet keeps first-insertion order and drops repeats, so
// the generated header is reproducible from run to run.

use std::collections::HashSet;
use std::fmt;

use crate::alphabet::Alphabet;
use crate::axis::{AXIS_COUNT, Axis};

/// Shortest swizzle. Single components are plain member access.
pub const MIN_LEN: usize = 2;

/// Longest swizzle: one slot per vector component.
pub const MAX_LEN: usize = AXIS_COUNT;

// ─── Pattern ────────────────────────────────────────────────────────────────

/// An ordered sequence of 2 to 4 axes, repetition allowed.
///
/// Stored inline. Unused slots are always `Axis::FIRST`, so derived equality
/// and hashing only see the meaningful prefix plus constant padding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    axes: [Axis; MAX_LEN],
    len: u8,
}

// A pattern is never empty, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl Pattern {
    /// Build a pattern from a slice of axes.
    ///
    /// Returns `None` unless `MIN_LEN <= axes.len() <= MAX_LEN`.
    #[must_use]
    pub fn new(axes: &[Axis]) -> Option<Self> {
        if !(MIN_LEN..=MAX_LEN).contains(&axes.len()) {
            return None;
        }
        let len = u8::try_from(axes.len()).ok()?;
        let mut slots = [Axis::FIRST; MAX_LEN];
        slots[..axes.len()].copy_from_slice(axes);
        Some(Self { axes: slots, len })
    }

    /// Build a pattern from raw indices. Returns `None` if any index is out
    /// of range or the length is not in `2..=4`.
    #[must_use]
    pub fn from_indices(indices: &[u8]) -> Option<Self> {
        let axes: Option<Vec<Axis>> = indices.iter().map(|&i| Axis::new(i)).collect();
        Self::new(&axes?)
    }

    /// The axes in order.
    #[inline]
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes[..self.len as usize]
    }

    /// Number of components selected (2, 3 or 4).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Spell the pattern in an alphabet: `[0, 1, 2]` → `"xyz"`.
    #[must_use]
    pub fn spell(&self, alphabet: Alphabet) -> String {
        self.axes().iter().map(|&axis| alphabet.letter(axis)).collect()
    }

    /// Read a spelled pattern back. Returns `None` if a letter is not in the
    /// alphabet or the length is out of range.
    #[must_use]
    pub fn unspell(name: &str, alphabet: Alphabet) -> Option<Self> {
        let axes: Option<Vec<Axis>> = name.chars().map(|ch| alphabet.axis_of(ch)).collect();
        Self::new(&axes?)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.axes()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spell(Alphabet::Positional))
    }
}

// ─── PatternSet ─────────────────────────────────────────────────────────────

/// Insertion-ordered set of patterns.
///
/// `insert` of a pattern already present is a no-op and keeps its original
/// position. Iteration yields patterns in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    order: Vec<Pattern>,
    seen: HashSet<Pattern>,
}

impl PatternSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern. Returns `true` if it was not already present.
    pub fn insert(&mut self, pattern: Pattern) -> bool {
        if self.seen.insert(pattern) {
            self.order.push(pattern);
            true
        } else {
            false
        }
    }

    /// Whether `pattern` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.seen.contains(pattern)
    }

    /// Number of distinct patterns.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Patterns in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Pattern] {
        &self.order
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.order.iter()
    }

    /// Same members, ignoring order.
    #[must_use]
    pub fn same_members(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Pattern> for PatternSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut set = Self::new();
        for pattern in iter {
            set.insert(pattern);
        }
        set
    }
}

impl Extend<Pattern> for PatternSet {
    fn extend<I: IntoIterator<Item = Pattern>>(&mut self, iter: I) {
        for pattern in iter {
            self.insert(pattern);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
