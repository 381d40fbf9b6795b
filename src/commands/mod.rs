//! Command implementations
//!
//! - `compare`: load two documents, compare them and render the result

pub mod compare;
