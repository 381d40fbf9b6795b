use crate::domain::serializer::DEFAULT_INDENT;
use clap::{Args, ValueEnum};
use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Side-by-side table with both line numbers
    #[default]
    Split,
    /// Unified-style listing with -/+ prefixes
    Inline,
    /// Machine readable {"diffs": [...]} document
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Applies the choice process-wide for every `colored` string.
    pub fn apply(self) {
        colored::control::set_override(self.enabled(std::io::stdout().is_terminal()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct DiffConfig {
    #[arg(
        short,
        long,
        value_enum,
        env = "JDIFF_FORMAT",
        default_value_t = OutputFormat::Split,
        help = "How to render the comparison"
    )]
    pub format: OutputFormat,
    #[arg(
        long,
        value_enum,
        env = "JDIFF_COLOR",
        default_value_t = ColorMode::Auto,
        help = "When to use colors"
    )]
    pub color: ColorMode,
    #[arg(
        long,
        env = "JDIFF_INDENT",
        default_value_t = DEFAULT_INDENT,
        help = "Spaces per nesting level when pretty-printing the inputs"
    )]
    pub indent: usize,
    #[arg(
        long,
        env = "JDIFF_MAX_LINES",
        help = "Refuse inputs that pretty-print to more lines than this"
    )]
    pub max_lines: Option<usize>,
    #[arg(long, help = "Page the output when writing to a terminal")]
    pub pager: bool,
    #[arg(long, help = "Exit with status 1 when the inputs differ")]
    pub exit_code: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ColorMode::default(),
            indent: DEFAULT_INDENT,
            max_lines: None,
            pager: false,
            exit_code: false,
        }
    }
}
