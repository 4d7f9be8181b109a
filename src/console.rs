use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
    tty::IsTty,
};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented channel the quizzes talk through.
pub trait Console {
    /// Block until a full line is available. `Ok(None)` means input is closed.
    /// The trailing line terminator is stripped.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Clear the visible screen, if there is one.
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Production console over stdin/stdout
pub struct StdConsole {
    clear_screen: bool,
}

impl StdConsole {
    /// `clear_screen` only takes effect when stdout is a terminal.
    pub fn new(clear_screen: bool) -> Self {
        Self {
            clear_screen: clear_screen && io::stdout().is_tty(),
        }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            let mut stdout = io::stdout();
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Console fed from a fixed script, recording everything written. For tests.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Everything written so far, one line per entry.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
