// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildcard::{Granularity, Pattern};

// local imports
use crate::error::{Error, Result};
use crate::input::InputReference;

// ---

pub struct Options {
    pub pattern: Pattern,
    pub invert_match: bool,
    pub count: bool,
    pub line_number: bool,
    pub with_filename: bool,
}

/// Filters input lines by a wildcard pattern.
pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Processes all inputs in order and returns the total number of selected lines.
    pub fn run<W: Write>(&self, inputs: &[InputReference], output: &mut W) -> Result<usize> {
        let mut total = 0;
        for input in inputs {
            let name = input.name();
            let selected = self.process(&name, input.open()?, output)?;
            log::debug!("{}: {} line(s) selected", name, selected);
            total += selected;
        }
        output.flush()?;
        Ok(total)
    }

    /// Processes a single input and returns the number of selected lines.
    pub fn process<R: BufRead, W: Write>(&self, name: &str, mut input: R, output: &mut W) -> Result<usize> {
        let options = &self.options;
        let mut buf = Vec::new();
        let mut selected = 0;
        let mut n = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            n += 1;

            let line = trim_eol(&buf);
            if self.matches(name, n, line)? == options.invert_match {
                continue;
            }
            selected += 1;

            if options.count {
                continue;
            }
            if options.with_filename {
                write!(output, "{}:", name)?;
            }
            if options.line_number {
                write!(output, "{}:", n)?;
            }
            output.write_all(line)?;
            output.write_all(b"\n")?;
        }

        if options.count {
            if options.with_filename {
                write!(output, "{}:", name)?;
            }
            writeln!(output, "{}", selected)?;
        }

        Ok(selected)
    }

    fn matches(&self, name: &str, n: usize, line: &[u8]) -> Result<bool> {
        let pattern = &self.options.pattern;
        match pattern.granularity() {
            Granularity::Bytes => Ok(pattern.matches_bytes(line)),
            Granularity::Chars => {
                let line = std::str::from_utf8(line).map_err(|source| Error::InvalidUtf8 {
                    filename: name.to_owned(),
                    line: n,
                    source,
                })?;
                Ok(pattern.matches(line))
            }
        }
    }
}

fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
