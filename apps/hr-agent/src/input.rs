//! Line sources for the interactive loop.
//!
//! The terminal goes through rustyline (line editing, recall of earlier questions);
//! scripted input goes through any `BufRead`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub trait LineSource {
    /// Shows `prompt` and reads one trimmed line. `None` when input has ended.
    fn read_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>>;

    /// Keeps a line for later recall.
    fn remember(&mut self, _line: &str) {}
}

impl<L: LineSource> LineSource for &mut L {
    fn read_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>> {
        (**self).read_line(prompt, out)
    }

    fn remember(&mut self, line: &str) {
        (**self).remember(line)
    }
}

/// Interactive terminal input with history.
pub struct TerminalLines {
    editor: DefaultEditor,
}

impl TerminalLines {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialize readline")?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalLines {
    fn read_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>> {
        // rustyline draws the prompt itself; leading blank lines and anything
        // still buffered must land first
        let shown = prompt.trim_start_matches('\n');
        write!(out, "{}", &prompt[..prompt.len() - shown.len()])?;
        out.flush()?;
        match self.editor.readline(shown) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            // Ctrl+C / Ctrl+D
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e).context("failed to read input"),
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Input from any buffered reader. The prompt is echoed to the output.
pub struct BufReadLines<R> {
    reader: R,
}

impl<R: BufRead> BufReadLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadLines<R> {
    fn read_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
