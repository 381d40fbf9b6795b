//! Output destinations for rendered comparisons.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Lets a [`Differ`](crate::domain::differ::Differ) render into the pager.
///
/// Comparison rows are pushed into the pager as UTF-8 text and stay buffered
/// until [`Output::finish`] displays them.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where the comparison is written: stdout directly, or a pager.
pub enum Output {
    Stdout,
    Paged(Pager),
}

impl Output {
    /// Uses the pager only when asked to and stdout is an interactive terminal.
    pub fn select(pager: bool) -> Self {
        if pager && io::stdout().is_terminal() {
            Output::Paged(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Displays the paged output; a no-op for stdout.
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            Output::Stdout => Ok(()),
            Output::Paged(pager) => Ok(minus::page_all(pager)?),
        }
    }
}
