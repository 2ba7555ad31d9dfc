// SPDX-License-Identifier: MIT
//
// Naming alphabets — the letter sets that spell a swizzle.
//
// The same axis pattern is spelled three ways, one per convention used in
// shading languages:
//
//   | Alphabet   | Letters   | Used for              |
//   |------------|-----------|-----------------------|
//   | Positional | x y z w   | positions, directions |
//   | Color      | r g b a   | colors                |
//   | Texture    | s t p q   | texture coordinates   |

use std::fmt;

use crate::axis::{AXIS_COUNT, Axis};

// ─── Alphabet ───────────────────────────────────────────────────────────────

/// One naming alphabet: a fixed mapping from [`Axis`] to a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `x y z w`.
    Positional,
    /// `r g b a`.
    Color,
    /// `s t p q`.
    Texture,
}

impl Alphabet {
    /// The four letters, indexed by axis.
    #[must_use]
    pub const fn letters(self) -> [char; AXIS_COUNT] {
        match self {
            Self::Positional => ['x', 'y', 'z', 'w'],
            Self::Color => ['r', 'g', 'b', 'a'],
            Self::Texture => ['s', 't', 'p', 'q'],
        }
    }

    /// The letter naming `axis` in this alphabet.
    #[inline]
    #[must_use]
    pub const fn letter(self, axis: Axis) -> char {
        self.letters()[axis.index()]
    }

    /// The axis a letter names, or `None` if the letter is not in this alphabet.
    #[must_use]
    pub fn axis_of(self, letter: char) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| self.letter(axis) == letter)
    }

    /// Short name: the four letters in axis order (`"xyzw"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positional => "xyzw",
            Self::Color => "rgba",
            Self::Texture => "stpq",
        }
    }

    /// Parse an alphabet from its short name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|a| a.name() == lower).copied()
    }

    /// The comment line that opens this alphabet's block in the header.
    #[must_use]
    pub fn header(self) -> String {
        format!("// {} swizzles", self.name())
    }

    /// All alphabets in the canonical emission order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Positional, Self::Color, Self::Texture]
    }

    /// The flag selecting this alphabet in an [`Alphabets`] set.
    #[must_use]
    pub const fn flag(self) -> Alphabets {
        match self {
            Self::Positional => Alphabets::POSITIONAL,
            Self::Color => Alphabets::COLOR,
            Self::Texture => Alphabets::TEXTURE,
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Alphabets ──────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// A selection of naming alphabets to emit.
    ///
    /// Blocks are always emitted in canonical order regardless of how the
    /// set was built:
    ///
    /// ```
    /// use realgen_swizzle::{Alphabet, Alphabets};
    ///
    /// let set = Alphabets::TEXTURE | Alphabets::POSITIONAL;
    /// let order: Vec<Alphabet> = set.alphabets().collect();
    /// assert_eq!(order, vec![Alphabet::Positional, Alphabet::Texture]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Alphabets: u8 {
        /// `xyzw` block.
        const POSITIONAL = 1 << 0;
        /// `rgba` block.
        const COLOR      = 1 << 1;
        /// `stpq` block.
        const TEXTURE    = 1 << 2;
    }
}

impl Default for Alphabets {
    fn default() -> Self {
        Self::all()
    }
}

impl Alphabets {
    /// The selected alphabets in canonical order.
    pub fn alphabets(self) -> impl Iterator<Item = Alphabet> {
        Alphabet::all()
            .iter()
            .copied()
            .filter(move |a| self.contains(a.flag()))
    }

    /// Parse a comma-separated list of alphabet names (`"xyzw,stpq"`).
    ///
    /// Whitespace around names is ignored. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAlphabet`] for an unrecognized or empty name.
    pub fn parse_list(list: &str) -> Result<Self, UnknownAlphabet> {
        let mut set = Self::empty();
        for name in list.split(',') {
            let name = name.trim();
            let alphabet =
                Alphabet::from_name(name).ok_or_else(|| UnknownAlphabet(name.to_string()))?;
            set |= alphabet.flag();
        }
        Ok(set)
    }
}

/// An alphabet name that is not one of `xyzw`, `rgba`, `stpq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlphabet(pub String);

impl fmt::Display for UnknownAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown alphabet '{}' (expected xyzw, rgba or stpq)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlphabet {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
