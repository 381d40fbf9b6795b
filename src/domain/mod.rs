//! Comparison engine and the collaborators feeding it
//!
//! - `diff`: the line and token diff engine
//! - `serializer`: canonical text lines for structured values
//! - `input`: reading and validating JSON documents
//! - `differ`: a comparison session owning configuration and output

pub mod diff;
pub mod differ;
pub mod input;
pub mod serializer;
