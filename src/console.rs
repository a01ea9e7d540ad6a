//! Plain line-oriented front end
//!
//! Prints the menu, reads one line per prompt and echoes the session output,
//! coloured with crossterm when writing to a terminal. Used with `--plain`
//! or when stdout is not a terminal.

use crate::session::{LineKind, OutputLine, Session};
use crossterm::style::{style, Stylize};
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Console {
            input,
            output,
            color,
        }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        self.write_lines(&Session::greeting())?;

        while !session.is_finished() {
            if session.at_menu() {
                writeln!(self.output)?;
                self.write_lines(&Session::menu_lines())?;
            }

            write!(self.output, "{}", session.prompt())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                let lines = session.cancel();
                self.write_lines(&lines)?;
                log::info!("Input closed, leaving session");
                break;
            }

            let lines = session.submit(&line);
            self.write_lines(&lines)?;
        }

        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_lines(&mut self, lines: &[OutputLine]) -> io::Result<()> {
        for line in lines {
            if line.kind == LineKind::Heading {
                writeln!(self.output)?;
            }
            if !self.color {
                writeln!(self.output, "{}", line.text)?;
                continue;
            }
            let text = style(line.text.as_str());
            let styled = match line.kind {
                LineKind::Heading => text.bold().cyan(),
                LineKind::Text => text,
                LineKind::Record => text.white(),
                LineKind::Success => text.green(),
                LineKind::Error => text.red(),
                LineKind::Rule => text.dark_grey(),
            };
            writeln!(self.output, "{}", styled)?;
        }
        Ok(())
    }
}
