use crate::config::OutputFormat;
use crate::domain::diff::comparison::{ComparedLine, ComparisonSummary};
use crate::domain::diff::line_diff::DiffStatus;
use crate::domain::diff::token_diff::{SpanKind, TokenDiffPart};
use crate::domain::differ::Differ;
use crate::domain::input::{STDIN_PATH, load_json};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct DiffReport<'r> {
    diffs: &'r [ComparedLine],
}

impl Differ {
    pub fn compare(&self, left: &Path, right: &Path) -> anyhow::Result<ComparisonSummary> {
        if left == Path::new(STDIN_PATH) && right == Path::new(STDIN_PATH) {
            anyhow::bail!("only one input can be read from stdin");
        }

        let left_value = load_json(left)?;
        let right_value = load_json(right)?;
        let lines = self.comparator().compare(&left_value, &right_value)?;

        self.print_comparison(&lines, left, right)?;

        Ok(ComparisonSummary::of(&lines))
    }

    pub fn print_comparison(
        &self,
        lines: &[ComparedLine],
        left: &Path,
        right: &Path,
    ) -> anyhow::Result<()> {
        match self.config().format {
            OutputFormat::Split => {
                self.print_split(lines)?;
                self.print_summary(lines)?;
            }
            OutputFormat::Inline => {
                self.print_inline(lines, left, right)?;
                self.print_summary(lines)?;
            }
            OutputFormat::Json => self.print_json(lines)?,
        }

        self.writer().flush()?;
        Ok(())
    }

    fn print_split(&self, lines: &[ComparedLine]) -> anyhow::Result<()> {
        let layout = SplitLayout::of(lines);

        for line in lines {
            writeln!(self.writer(), "{}", layout.row(line))?;
        }

        Ok(())
    }

    fn print_inline(&self, lines: &[ComparedLine], left: &Path, right: &Path) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", left.display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", right.display()).bold()
        )?;

        for line in lines {
            for row in inline_rows(line) {
                writeln!(self.writer(), "{row}")?;
            }
        }

        Ok(())
    }

    fn print_json(&self, lines: &[ComparedLine]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *self.writer(), &DiffReport { diffs: lines })?;
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_summary(&self, lines: &[ComparedLine]) -> anyhow::Result<()> {
        let summary = ComparisonSummary::of(lines);
        let text = if summary.is_identical() {
            "no differences".to_string()
        } else {
            summary.to_string()
        };

        writeln!(self.writer(), "{}", text.dimmed())?;
        Ok(())
    }
}

fn paint(part: &TokenDiffPart) -> ColoredString {
    match part.kind {
        SpanKind::Unchanged => part.text.normal(),
        SpanKind::Removed => part.text.black().on_red(),
        SpanKind::Added => part.text.black().on_green(),
    }
}

fn render_spans(spans: &[TokenDiffPart]) -> String {
    spans.iter().map(|part| paint(part).to_string()).collect()
}

fn left_cell(line: &ComparedLine) -> String {
    match line.status() {
        DiffStatus::Removed => line.line.left.red().to_string(),
        DiffStatus::Unchanged | DiffStatus::Added | DiffStatus::Modified => {
            render_spans(&line.left_spans())
        }
    }
}

fn right_cell(line: &ComparedLine) -> String {
    match line.status() {
        DiffStatus::Added => line.line.right.green().to_string(),
        DiffStatus::Unchanged | DiffStatus::Removed | DiffStatus::Modified => {
            render_spans(&line.right_spans())
        }
    }
}

/// Column marker between the two sides, as `sdiff` draws it.
fn marker(status: DiffStatus) -> ColoredString {
    match status {
        DiffStatus::Unchanged => " ".normal(),
        DiffStatus::Removed => "<".red(),
        DiffStatus::Added => ">".green(),
        DiffStatus::Modified => "|".yellow(),
    }
}

struct SplitLayout {
    number_width: usize,
    column_width: usize,
}

impl SplitLayout {
    fn of(lines: &[ComparedLine]) -> Self {
        let highest = lines
            .iter()
            .flat_map(|line| [line.line.left_number, line.line.right_number])
            .flatten()
            .max()
            .unwrap_or(0);

        Self {
            number_width: highest.to_string().len(),
            column_width: lines
                .iter()
                .map(|line| line.line.left.chars().count())
                .max()
                .unwrap_or(0),
        }
    }

    fn row(&self, line: &ComparedLine) -> String {
        let number = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();
        let padding = self
            .column_width
            .saturating_sub(line.line.left.chars().count());

        format!(
            "{:>nw$}  {}{} {} {:>nw$}  {}",
            number(line.line.left_number).dimmed(),
            left_cell(line),
            " ".repeat(padding),
            marker(line.status()),
            number(line.line.right_number).dimmed(),
            right_cell(line),
            nw = self.number_width,
        )
        .trim_end()
        .to_string()
    }
}

fn inline_rows(line: &ComparedLine) -> Vec<String> {
    match line.status() {
        DiffStatus::Unchanged => vec![format!(" {}", line.line.left)],
        DiffStatus::Removed => vec![format!("-{}", line.line.left).red().to_string()],
        DiffStatus::Added => vec![format!("+{}", line.line.right).green().to_string()],
        DiffStatus::Modified => vec![
            format!("{}{}", "-".red(), render_spans(&line.left_spans())),
            format!("{}{}", "+".green(), render_spans(&line.right_spans())),
        ],
    }
}
