#![allow(dead_code)]

pub mod command;
pub mod file;

/// Strip the summary footer printed after split and inline listings.
pub fn rows(output: &str) -> Vec<&str> {
    let mut rows: Vec<&str> = output.lines().collect();
    rows.pop();
    rows
}
