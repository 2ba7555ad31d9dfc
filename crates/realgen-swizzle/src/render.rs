// SPDX-License-Identifier: MIT
//
// Header rendering.
//
// Output layout, one block per selected alphabet, blank line between blocks:
//
//   // xyzw swizzles
//   #define xx xx()
//   #define xxx xxx()
//   ...
//
//   // rgba swizzles
//   #define rr rr()
//   ...
//
// Every line, including the last, ends with '\n'. The text is built in
// memory first and handed to the writer in one `write_all`.

use std::io::{self, Write};

use crate::alphabet::{Alphabet, Alphabets};
use crate::pattern::{Pattern, PatternSet};

/// One `#define NAME NAME()` line (without the trailing newline).
#[must_use]
pub fn macro_line(pattern: &Pattern, alphabet: Alphabet) -> String {
    let name = pattern.spell(alphabet);
    format!("#define {name} {name}()")
}

/// Render the full header text for the selected alphabets.
#[must_use]
pub fn render(set: &PatternSet, alphabets: Alphabets) -> String {
    let mut out = String::new();
    for (i, alphabet) in alphabets.alphabets().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&alphabet.header());
        out.push('\n');
        for pattern in set {
            out.push_str(&macro_line(pattern, alphabet));
            out.push('\n');
        }
    }
    out
}

/// Render the header and write it to `w`.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn write_header(w: &mut impl Write, set: &PatternSet, alphabets: Alphabets) -> io::Result<()> {
    w.write_all(render(set, alphabets).as_bytes())?;
    w.flush()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
