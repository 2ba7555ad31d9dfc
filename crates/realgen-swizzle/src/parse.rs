// SPDX-License-Identifier: MIT
//
// Header reader — turns generated swizzle text back into patterns.
//
// Accepted line forms:
//
//   // <alphabet> swizzles      opens a block (xyzw, rgba or stpq)
//   #define NAME NAME()         one swizzle in the open block
//   (blank)                     ignored
//
// Anything else is a parse error carrying its 1-based line number. Names are
// mapped back to axes through the block's alphabet, so a header can be
// compared pattern-by-pattern with freshly generated output.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::alphabet::Alphabet;
use crate::pattern::Pattern;

static BLOCK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//\s*([a-z]{4})\s+swizzles\s*$").expect("valid regex"));

static DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#define\s+([A-Za-z_]\w*)\s+([A-Za-z_]\w*)\(\)\s*$").expect("valid regex")
});

// ─── Types ──────────────────────────────────────────────────────────────────

/// One alphabet block read from a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Alphabet named by the block's comment line.
    pub alphabet: Alphabet,
    /// 1-based line number of the comment line.
    pub line: usize,
    /// Patterns in file order.
    pub patterns: Vec<Pattern>,
}

/// A parsed header: its blocks in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub blocks: Vec<Block>,
}

impl Header {
    /// The block for `alphabet`, if present.
    #[must_use]
    pub fn block(&self, alphabet: Alphabet) -> Option<&Block> {
        self.blocks.iter().find(|b| b.alphabet == alphabet)
    }
}

/// Errors from [`parse_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line is neither a block comment, a define, nor blank.
    Malformed { line: usize, text: String },
    /// Block comment names an alphabet other than xyzw/rgba/stpq.
    UnknownAlphabet { line: usize, name: String },
    /// Same alphabet opened twice.
    DuplicateBlock { line: usize, alphabet: Alphabet },
    /// A define before any block comment.
    OutsideBlock { line: usize },
    /// `#define a b()` where the two names differ.
    BodyMismatch { line: usize, name: String, body: String },
    /// Name uses letters outside the block's alphabet, or has a bad length.
    NotASwizzle { line: usize, name: String, alphabet: Alphabet },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { line, text } => write!(f, "line {line}: unrecognized line '{text}'"),
            Self::UnknownAlphabet { line, name } => {
                write!(f, "line {line}: unknown alphabet '{name}'")
            }
            Self::DuplicateBlock { line, alphabet } => {
                write!(f, "line {line}: second '{alphabet}' block")
            }
            Self::OutsideBlock { line } => {
                write!(f, "line {line}: #define before any swizzle block")
            }
            Self::BodyMismatch { line, name, body } => {
                write!(f, "line {line}: macro '{name}' expands to '{body}()'")
            }
            Self::NotASwizzle { line, name, alphabet } => {
                write!(f, "line {line}: '{name}' is not a {alphabet} swizzle")
            }
        }
    }
}

impl std::error::Error for ParseError {}

// ─── Parsing ────────────────────────────────────────────────────────────────

/// Parse header text into blocks.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_header(text: &str) -> Result<Header, ParseError> {
    let mut header = Header::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = BLOCK_HEADER.captures(trimmed) {
            let name = &caps[1];
            let alphabet = Alphabet::from_name(name).ok_or_else(|| ParseError::UnknownAlphabet {
                line,
                name: name.to_string(),
            })?;
            if header.block(alphabet).is_some() {
                return Err(ParseError::DuplicateBlock { line, alphabet });
            }
            header.blocks.push(Block {
                alphabet,
                line,
                patterns: Vec::new(),
            });
            continue;
        }

        if let Some(caps) = DEFINE.captures(trimmed) {
            let (name, body) = (&caps[1], &caps[2]);
            let block = header
                .blocks
                .last_mut()
                .ok_or(ParseError::OutsideBlock { line })?;
            if name != body {
                return Err(ParseError::BodyMismatch {
                    line,
                    name: name.to_string(),
                    body: body.to_string(),
                });
            }
            let pattern =
                Pattern::unspell(name, block.alphabet).ok_or_else(|| ParseError::NotASwizzle {
                    line,
                    name: name.to_string(),
                    alphabet: block.alphabet,
                })?;
            block.patterns.push(pattern);
            continue;
        }

        return Err(ParseError::Malformed {
            line,
            text: trimmed.to_string(),
        });
    }

    Ok(header)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
