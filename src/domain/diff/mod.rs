//! Line and token level comparison
//!
//! This module implements the two-level diff engine:
//!
//! - `alignment`: minimum edit distance with backtracking, shared by both levels
//! - `line_diff`: line alignment and numbering into side-by-side rows
//! - `token`: splitting a line into letter/digit/whitespace/punctuation runs
//! - `token_diff`: token alignment and span merging for modified lines
//! - `comparison`: sequencing of the above for two serialized values
//!
//! Lines are aligned with a delete-preferred tie-break that can pair two
//! differing lines as a replace; tokens are aligned with an insert-preferred
//! tie-break and never pair differing tokens.

pub mod alignment;
pub mod comparison;
pub mod line_diff;
pub mod token;
pub mod token_diff;
