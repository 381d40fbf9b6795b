use crate::domain::diff::alignment::{
    Change, DiffAlgorithm, Edit, EditDistance, Neighbours, TieBreak,
};
use serde::Serialize;
use tracing::{Level, span};

/// Line-level tie-break: on equal cost, delete wins over insert, insert over replace.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeletePreferred;

impl TieBreak for DeletePreferred {
    fn resolve(&self, n: Neighbours) -> Change {
        if n.delete <= n.insert && n.delete <= n.replace {
            Change::Delete
        } else if n.insert <= n.replace {
            Change::Insert
        } else {
            Change::Replace
        }
    }
}

/// Align two line sequences by exact text equality.
pub fn align_lines<'d, S>(left: &'d [S], right: &'d [S]) -> Vec<Edit<&'d S>>
where
    S: AsRef<str> + PartialEq,
{
    let span = span!(
        Level::DEBUG,
        "align_lines",
        left = left.len(),
        right = right.len()
    );
    let _guard = span.enter();

    EditDistance::new(left, right, DeletePreferred).diff()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DiffStatus::Unchanged => "unchanged",
            DiffStatus::Added => "added",
            DiffStatus::Removed => "removed",
            DiffStatus::Modified => "modified",
        };
        write!(f, "{label}")
    }
}

/// One row of a side-by-side comparison.
///
/// `left_number` is `None` exactly for added rows and `right_number` exactly for
/// removed rows. Numbers are 1-based and count only the rows present on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    pub left_number: Option<usize>,
    pub right_number: Option<usize>,
    pub left: String,
    pub right: String,
    pub status: DiffStatus,
}

/// Number an edit script into [`DiffLine`] rows.
pub fn build_diff_lines<I, T>(edits: I) -> Vec<DiffLine>
where
    I: IntoIterator<Item = Edit<T>>,
    T: AsRef<str>,
{
    fn next(counter: &mut usize) -> Option<usize> {
        let number = *counter;
        *counter += 1;
        Some(number)
    }

    let mut left_counter = 1;
    let mut right_counter = 1;

    edits
        .into_iter()
        .map(|edit| match edit {
            Edit::Match { left, right } => DiffLine {
                left_number: next(&mut left_counter),
                right_number: next(&mut right_counter),
                left: left.as_ref().to_string(),
                right: right.as_ref().to_string(),
                status: DiffStatus::Unchanged,
            },
            Edit::Delete { left } => DiffLine {
                left_number: next(&mut left_counter),
                right_number: None,
                left: left.as_ref().to_string(),
                right: String::new(),
                status: DiffStatus::Removed,
            },
            Edit::Insert { right } => DiffLine {
                left_number: None,
                right_number: next(&mut right_counter),
                left: String::new(),
                right: right.as_ref().to_string(),
                status: DiffStatus::Added,
            },
            Edit::Replace { left, right } => DiffLine {
                left_number: next(&mut left_counter),
                right_number: next(&mut right_counter),
                left: left.as_ref().to_string(),
                right: right.as_ref().to_string(),
                status: DiffStatus::Modified,
            },
        })
        .collect()
}
