use crate::domain::diff::line_diff::{DiffLine, DiffStatus, align_lines, build_diff_lines};
use crate::domain::diff::token_diff::{SpanKind, TokenDiffPart, diff_tokens};
use crate::domain::serializer::LineSerializer;
use anyhow::Context;
use derive_new::new;
use serde::Serialize;
use tracing::{Level, debug, info, span};

/// A [`DiffLine`] together with its intra-line highlights.
///
/// `highlights` is present exactly when the line is modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparedLine {
    #[serde(flatten)]
    pub line: DiffLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<TokenDiffPart>>,
}

impl ComparedLine {
    pub fn from_line(line: DiffLine) -> Self {
        let highlights = match line.status {
            DiffStatus::Modified => Some(diff_tokens(&line.left, &line.right)),
            DiffStatus::Unchanged | DiffStatus::Added | DiffStatus::Removed => None,
        };

        Self { line, highlights }
    }

    pub fn status(&self) -> DiffStatus {
        self.line.status
    }

    /// Spans to draw on the left side: everything but added parts.
    pub fn left_spans(&self) -> Vec<TokenDiffPart> {
        self.side_spans(&self.line.left, SpanKind::Added)
    }

    /// Spans to draw on the right side: everything but removed parts.
    pub fn right_spans(&self) -> Vec<TokenDiffPart> {
        self.side_spans(&self.line.right, SpanKind::Removed)
    }

    fn side_spans(&self, text: &str, hidden: SpanKind) -> Vec<TokenDiffPart> {
        match &self.highlights {
            Some(parts) => parts
                .iter()
                .filter(|part| part.kind != hidden)
                .cloned()
                .collect(),
            None if text.is_empty() => Vec::new(),
            None => vec![TokenDiffPart::new(text, SpanKind::Unchanged)],
        }
    }
}

/// Compare two already serialized line sequences.
pub fn compare_lines<S>(left: &[S], right: &[S]) -> Vec<ComparedLine>
where
    S: AsRef<str> + PartialEq,
{
    build_diff_lines(align_lines(left, right))
        .into_iter()
        .map(ComparedLine::from_line)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl ComparisonSummary {
    pub fn of(lines: &[ComparedLine]) -> Self {
        lines
            .iter()
            .fold(Self::default(), |mut summary, line| {
                match line.status() {
                    DiffStatus::Unchanged => summary.unchanged += 1,
                    DiffStatus::Added => summary.added += 1,
                    DiffStatus::Removed => summary.removed += 1,
                    DiffStatus::Modified => summary.modified += 1,
                }
                summary
            })
    }

    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

impl std::fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} modified, {} unchanged",
            self.added, self.removed, self.modified, self.unchanged
        )
    }
}

/// Serializes two values and compares the resulting lines.
///
/// `max_lines` bounds each side before any alignment work, since the cost tables
/// grow with the product of both line counts.
#[derive(Debug, Clone, new)]
pub struct Comparator<S> {
    serializer: S,
    max_lines: Option<usize>,
}

impl<S: LineSerializer> Comparator<S> {
    pub fn compare<L, R>(&self, left: &L, right: &R) -> anyhow::Result<Vec<ComparedLine>>
    where
        L: Serialize + ?Sized,
        R: Serialize + ?Sized,
    {
        let span = span!(Level::DEBUG, "compare");
        let _guard = span.enter();

        let left_lines = self
            .serializer
            .serialize_lines(left)
            .context("failed to serialize left input")?;
        let right_lines = self
            .serializer
            .serialize_lines(right)
            .context("failed to serialize right input")?;
        debug!(
            left = left_lines.len(),
            right = right_lines.len(),
            "serialized inputs"
        );

        if let Some(limit) = self.max_lines {
            for (side, lines) in [("left", &left_lines), ("right", &right_lines)] {
                if lines.len() > limit {
                    anyhow::bail!(
                        "input too large: {side} input has {} lines, the limit is {limit}",
                        lines.len()
                    );
                }
            }
        }

        let lines = compare_lines(&left_lines, &right_lines);
        info!(summary = %ComparisonSummary::of(&lines), "compared inputs");

        Ok(lines)
    }
}
