use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::app::App;
use super::helpers::{paint, Tone};

/// Line-oriented console over any reader/writer pair. Production wires it to
/// locked stdin/stdout; tests feed a `Cursor` and capture a `Vec<u8>`.
/// Output is plain text unless styling is switched on.
pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Color status lines. Only worth enabling when the output is a terminal.
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print `label` without a newline and read one line of input. Returns
    /// `None` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }

    /// Print a status line in the given tone.
    pub(crate) fn tell(&mut self, tone: Tone, text: impl Display) -> Result<()> {
        let line = paint(tone, text, self.styled);
        self.say(line)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Drive the menu loop until the user picks Exit or input runs out.
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> Result<()> {
    loop {
        app.show_menu()?;
        let Some(selection) = app.console().prompt("Enter your choice: ")? else {
            log::info!("Input closed, saving and exiting");
            app.exit()?;
            break Ok(());
        };

        if app.handle_selection(&selection)? {
            break Ok(());
        }
    }
}
