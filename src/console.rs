//! Terminal I/O behind an explicit handle.
//!
//! Construct one [`Console`] at startup and pass it to whatever needs the
//! terminal. Colours follow the Windows console attribute layout and are
//! emitted as ANSI escape sequences.

use crate::config::{self, terminal};
use crate::size::Size;
use anyhow::{anyhow, bail, Context};
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;
use terminal_size::{Height, Width};

/// Prints every argument back to back on a [`Console`].
#[macro_export]
macro_rules! cprint {
    ($console:expr, $($value:expr),+ $(,)?) => {
        $console.print_all(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    // unconsumed tail of the last line `input` read from
    pending: Option<String>,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: None,
        }
    }

    pub fn print<D: Display>(&mut self, value: D) -> anyhow::Result<()> {
        write!(self.writer, "{value}").context("failed to write to console")?;
        self.flush()
    }

    pub fn print_all(&mut self, values: &[&dyn Display]) -> anyhow::Result<()> {
        for value in values {
            write!(self.writer, "{value}").context("failed to write to console")?;
        }
        self.flush()
    }

    /// Reads one line without its line terminator.
    ///
    /// Whatever a previous [`input`](Self::input) call left of its line is
    /// returned as-is instead, spacing included.
    pub fn read_line(&mut self) -> anyhow::Result<String> {
        if let Some(rest) = self.pending.take() {
            return Ok(rest);
        }
        match self.next_line()? {
            Some(line) => Ok(line),
            None => bail!("end of input while reading a line"),
        }
    }

    /// Shows `prompt`, then parses the next whitespace-delimited token as `T`.
    pub fn input<T>(&mut self, prompt: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        if !prompt.is_empty() {
            self.print(prompt)?;
        }
        let token = loop {
            if let Some(line) = self.pending.take() {
                let rest = line.trim_start();
                if !rest.is_empty() {
                    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    let (token, tail) = rest.split_at(end);
                    if !tail.is_empty() {
                        self.pending = Some(tail.to_owned());
                    }
                    break token.to_owned();
                }
            }
            let line = self
                .next_line()?
                .ok_or_else(|| anyhow!("end of input while waiting for a value"))?;
            self.pending = Some(line);
        };
        token
            .parse()
            .with_context(|| format!("could not parse {token:?}"))
    }

    /// Sets the colour from a Windows console attribute: bits 0-3 are the
    /// foreground, bits 4-7 the background.
    pub fn set_color(&mut self, code: u16) -> anyhow::Result<()> {
        if code > 0xff {
            log::warn!("colour attribute {code:#x} has bits above the background nibble, ignoring them");
        }
        let (fg, bg) = ansi_colors(code);
        write!(self.writer, "\x1b[{fg};{bg}m").context("failed to set console colour")?;
        self.flush()
    }

    /// Back to attribute [`config::DEFAULT_COLOR`].
    pub fn reset_color(&mut self) -> anyhow::Result<()> {
        log::trace!("resetting console colour to {:#x}", config::DEFAULT_COLOR);
        self.writer
            .write_all(b"\x1b[0m")
            .context("failed to reset console colour")?;
        self.flush()
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.writer
            .write_all(b"\x1b[2J\x1b[H")
            .context("failed to clear console")?;
        self.flush()
    }

    /// Visible size in character cells.
    ///
    /// Asks the terminal attached to stdout first, then `COLUMNS`/`LINES`,
    /// then falls back to [`terminal::FALLBACK_WIDTH`] x [`terminal::FALLBACK_HEIGHT`].
    pub fn size(&self) -> Size {
        let tty = || terminal_size::terminal_size().map(|(Width(w), Height(h))| (w, h));
        size_from(tty, |name| std::env::var(name).ok())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush().context("failed to flush console")
    }

    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

// Windows orders the colour bits blue, green, red; ANSI orders them red, green, blue.
fn ansi_index(bits: u16) -> u16 {
    ((bits & 0b001) << 2) | (bits & 0b010) | ((bits & 0b100) >> 2)
}

fn ansi_colors(code: u16) -> (u16, u16) {
    let fg = code & 0x0f;
    let bg = (code >> 4) & 0x0f;
    let fg_base = if fg & 0b1000 != 0 { 90 } else { 30 };
    let bg_base = if bg & 0b1000 != 0 { 100 } else { 40 };
    (fg_base + ansi_index(fg & 0b111), bg_base + ansi_index(bg & 0b111))
}

fn size_from(tty: impl FnOnce() -> Option<(u16, u16)>, lookup: impl Fn(&str) -> Option<String>) -> Size {
    if let Some((width, height)) = tty().filter(|&(w, h)| w > 0 && h > 0) {
        return Size::new(i32::from(width), i32::from(height));
    }
    log::debug!("stdout is not a terminal, looking up the size in the environment");
    let cells = |name: &str| {
        lookup(name)
            .and_then(|v| v.trim().parse::<i32>().ok())
            .filter(|&n| n > 0)
    };
    match (cells(terminal::COLUMNS_VAR), cells(terminal::LINES_VAR)) {
        (Some(width), Some(height)) => Size::new(width, height),
        _ => {
            log::debug!(
                "terminal size not reported by {}/{}, assuming {}x{}",
                terminal::COLUMNS_VAR,
                terminal::LINES_VAR,
                terminal::FALLBACK_WIDTH,
                terminal::FALLBACK_HEIGHT
            );
            Size::new(terminal::FALLBACK_WIDTH, terminal::FALLBACK_HEIGHT)
        }
    }
}
