use crate::domain::diff::alignment::{
    Change, DiffAlgorithm, Edit, EditDistance, Neighbours, TieBreak,
};
use crate::domain::diff::token::{Token, tokenize};
use serde::Serialize;
use tracing::{Level, span, trace};

/// Token-level tie-break: insert whenever it is no more expensive than delete.
///
/// Never records a replace, so two differing tokens come out as a removed part
/// followed by an added part.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertPreferred;

impl TieBreak for InsertPreferred {
    fn resolve(&self, n: Neighbours) -> Change {
        if n.insert <= n.delete {
            Change::Insert
        } else {
            Change::Delete
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Unchanged,
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDiffPart {
    pub text: String,
    pub kind: SpanKind,
}

impl TokenDiffPart {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Align two token sequences and merge the result into presentation spans.
pub fn align_tokens(left: &[Token<'_>], right: &[Token<'_>]) -> Vec<TokenDiffPart> {
    let span = span!(
        Level::TRACE,
        "align_tokens",
        left = left.len(),
        right = right.len()
    );
    let _guard = span.enter();

    let parts = EditDistance::new(left, right, InsertPreferred)
        .diff()
        .into_iter()
        .flat_map(|edit| match edit {
            Edit::Match { left, .. } => vec![TokenDiffPart::new(left.text, SpanKind::Unchanged)],
            Edit::Delete { left } => vec![TokenDiffPart::new(left.text, SpanKind::Removed)],
            Edit::Insert { right } => vec![TokenDiffPart::new(right.text, SpanKind::Added)],
            Edit::Replace { left, right } => vec![
                TokenDiffPart::new(left.text, SpanKind::Removed),
                TokenDiffPart::new(right.text, SpanKind::Added),
            ],
        });

    let merged = merge_spans(parts);
    trace!(spans = merged.len(), "merged token spans");
    merged
}

/// Tokenize both lines and align them.
pub fn diff_tokens(left: &str, right: &str) -> Vec<TokenDiffPart> {
    align_tokens(&tokenize(left), &tokenize(right))
}

/// Coalesce adjacent parts of the same kind by concatenating their text.
pub fn merge_spans<I>(parts: I) -> Vec<TokenDiffPart>
where
    I: IntoIterator<Item = TokenDiffPart>,
{
    let mut merged: Vec<TokenDiffPart> = Vec::new();

    for part in parts {
        match merged.last_mut() {
            Some(last) if last.kind == part.kind => last.text.push_str(&part.text),
            _ => merged.push(part),
        }
    }

    merged
}
