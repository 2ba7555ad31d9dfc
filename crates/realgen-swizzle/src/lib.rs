// SPDX-License-Identifier: MIT
//
// realgen-swizzle — swizzle accessor macros for RealEngine vector types.
//
// Generates the `#define` list that the engine's vector headers include to
// get GLSL-style swizzle syntax (`v.xyz`, `c.bgra`, `t.ts`). Every ordered
// selection of 2 to 4 components, repetition allowed, gets one macro per
// naming alphabet.
//
// Pipeline:
//
//   enumerate.rs: count tuples → multisets → permutations → PatternSet
//       │
//       ▼
//   render.rs:    PatternSet × Alphabets → header text
//       │
//       ▼
//   parse.rs / check.rs: header text → blocks → staleness report
//
// The computation is closed and tiny (336 patterns), so everything is
// recomputed on each run. Nothing is cached.

pub mod alphabet;
pub mod axis;
pub mod check;
pub mod enumerate;
pub mod parse;
pub mod pattern;
pub mod render;

pub use alphabet::{Alphabet, Alphabets};
pub use axis::Axis;
pub use pattern::{Pattern, PatternSet};
