// SPDX-License-Identifier: MIT
//
// Staleness check — compare a parsed header against generated output.

use std::collections::HashSet;
use std::fmt;

use crate::alphabet::{Alphabet, Alphabets};
use crate::parse::Header;
use crate::pattern::{Pattern, PatternSet};

/// One way a header differs from what would be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    /// A selected alphabet has no block.
    MissingBlock(Alphabet),
    /// A block for an alphabet that was not selected.
    UnexpectedBlock(Alphabet),
    /// Blocks are present but not in canonical order.
    BlockOrder,
    /// Patterns that should be in the block but are not.
    MissingMacros { alphabet: Alphabet, names: Vec<String> },
    /// Patterns in the block that should not be there (including repeats).
    UnexpectedMacros { alphabet: Alphabet, names: Vec<String> },
    /// Same members, different order. `index` is the first differing position.
    MacroOrder { alphabet: Alphabet, index: usize },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBlock(a) => write!(f, "missing '{a}' block"),
            Self::UnexpectedBlock(a) => write!(f, "unexpected '{a}' block"),
            Self::BlockOrder => f.write_str("blocks are out of order"),
            Self::MissingMacros { alphabet, names } => {
                write!(f, "{alphabet}: {} missing: {}", names.len(), preview(names))
            }
            Self::UnexpectedMacros { alphabet, names } => {
                write!(f, "{alphabet}: {} unexpected: {}", names.len(), preview(names))
            }
            Self::MacroOrder { alphabet, index } => {
                write!(f, "{alphabet}: macros out of order from entry {}", index + 1)
            }
        }
    }
}

/// First few names, comma-separated, with an ellipsis when truncated.
fn preview(names: &[String]) -> String {
    const SHOWN: usize = 8;
    let mut out = names
        .iter()
        .take(SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > SHOWN {
        out.push_str(", ...");
    }
    out
}

/// Compare `header` with the blocks that `expected` and `alphabets` would
/// render. An empty result means the header is current.
#[must_use]
pub fn compare(header: &Header, expected: &PatternSet, alphabets: Alphabets) -> Vec<Discrepancy> {
    let mut found = Vec::new();

    for alphabet in alphabets.alphabets() {
        if header.block(alphabet).is_none() {
            found.push(Discrepancy::MissingBlock(alphabet));
        }
    }
    for block in &header.blocks {
        if !alphabets.contains(block.alphabet.flag()) {
            found.push(Discrepancy::UnexpectedBlock(block.alphabet));
        }
    }

    let present: Vec<Alphabet> = header
        .blocks
        .iter()
        .map(|b| b.alphabet)
        .filter(|a| alphabets.contains(a.flag()))
        .collect();
    let canonical: Vec<Alphabet> = alphabets
        .alphabets()
        .filter(|a| present.contains(a))
        .collect();
    if present != canonical {
        found.push(Discrepancy::BlockOrder);
    }

    for alphabet in alphabets.alphabets() {
        if let Some(block) = header.block(alphabet) {
            compare_block(alphabet, &block.patterns, expected, &mut found);
        }
    }

    found
}

fn compare_block(
    alphabet: Alphabet,
    actual: &[Pattern],
    expected: &PatternSet,
    found: &mut Vec<Discrepancy>,
) {
    let mut seen = HashSet::new();
    let unexpected: Vec<String> = actual
        .iter()
        .filter(|&p| !expected.contains(p) || !seen.insert(*p))
        .map(|p| p.spell(alphabet))
        .collect();
    let present: HashSet<Pattern> = actual.iter().copied().collect();
    let missing: Vec<String> = expected
        .iter()
        .filter(|p| !present.contains(*p))
        .map(|p| p.spell(alphabet))
        .collect();

    let clean = missing.is_empty() && unexpected.is_empty();
    if !missing.is_empty() {
        found.push(Discrepancy::MissingMacros {
            alphabet,
            names: missing,
        });
    }
    if !unexpected.is_empty() {
        found.push(Discrepancy::UnexpectedMacros {
            alphabet,
            names: unexpected,
        });
    }
    if clean {
        if let Some(index) = actual
            .iter()
            .zip(expected.iter())
            .position(|(a, e)| a != e)
        {
            found.push(Discrepancy::MacroOrder { alphabet, index });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_header;
    use crate::{enumerate, render};

    fn header_for(alphabets: Alphabets) -> Header {
        let text = render::render(&enumerate::generate(), alphabets);
        parse_header(&text).unwrap()
    }

    #[test]
    fn fresh_header_is_current() {
        let set = enumerate::generate();
        let header = header_for(Alphabets::all());
        assert!(compare(&header, &set, Alphabets::all()).is_empty());
    }

    #[test]
    fn missing_and_unexpected_blocks() {
        let set = enumerate::generate();
        let header = header_for(Alphabets::POSITIONAL | Alphabets::COLOR);
        let found = compare(&header, &set, Alphabets::POSITIONAL | Alphabets::TEXTURE);
        assert!(found.contains(&Discrepancy::MissingBlock(Alphabet::Texture)));
        assert!(found.contains(&Discrepancy::UnexpectedBlock(Alphabet::Color)));
    }

    #[test]
    fn swapped_blocks_are_out_of_order() {
        let set = enumerate::generate();
        let mut header = header_for(Alphabets::all());
        header.blocks.swap(0, 2);
        assert_eq!(
            compare(&header, &set, Alphabets::all()),
            vec![Discrepancy::BlockOrder]
        );
    }

    #[test]
    fn dropped_macro_is_missing() {
        let set = enumerate::generate();
        let mut header = header_for(Alphabets::COLOR);
        header.blocks[0].patterns.retain(|p| p.spell(Alphabet::Color) != "rgb");
        let found = compare(&header, &set, Alphabets::COLOR);
        assert_eq!(
            found,
            vec![Discrepancy::MissingMacros {
                alphabet: Alphabet::Color,
                names: vec!["rgb".to_string()],
            }]
        );
    }

    #[test]
    fn repeated_macro_is_unexpected() {
        let set = enumerate::generate();
        let mut header = header_for(Alphabets::POSITIONAL);
        let first = header.blocks[0].patterns[0];
        header.blocks[0].patterns.push(first);
        let found = compare(&header, &set, Alphabets::POSITIONAL);
        assert_eq!(
            found,
            vec![Discrepancy::UnexpectedMacros {
                alphabet: Alphabet::Positional,
                names: vec!["xx".to_string()],
            }]
        );
    }

    #[test]
    fn reordered_macros_report_first_position() {
        let set = enumerate::generate();
        let mut header = header_for(Alphabets::TEXTURE);
        header.blocks[0].patterns.swap(3, 4);
        let found = compare(&header, &set, Alphabets::TEXTURE);
        assert_eq!(
            found,
            vec![Discrepancy::MacroOrder {
                alphabet: Alphabet::Texture,
                index: 3,
            }]
        );
        assert_eq!(found[0].to_string(), "stpq: macros out of order from entry 4");
    }

    #[test]
    fn preview_truncates() {
        let names: Vec<String> = (0..10).map(|i| format!("n{i}")).collect();
        assert_eq!(preview(&names), "n0, n1, n2, n3, n4, n5, n6, n7, ...");
    }
}
