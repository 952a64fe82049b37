// std imports
use std::fs::File;
use std::io::{self, BufRead, BufReader, stdin};
use std::path::{Path, PathBuf};

// local imports
use crate::error::{Error, Result};

// ---

pub type InputStream = Box<dyn BufRead>;

/// Reference to an input, either the standard input or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Builds input references from command line arguments, `-` stands for the standard input.
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }

        files
            .iter()
            .map(|path| {
                if path == Path::new("-") {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    /// Name used to prefix output lines and in error messages.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Opens the input for reading.
    pub fn open(&self) -> Result<InputStream> {
        match self {
            Self::Stdin => Ok(Box::new(stdin().lock())),
            Self::File(path) => {
                log::debug!("opening {}", path.display());
                let file = File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => Error::FileNotFoundError { filename: self.name() },
                    _ => Error::Io(io::Error::new(
                        e.kind(),
                        format!("failed to open {}: {}", path.display(), e),
                    )),
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_from_args() {
        assert_eq!(InputReference::from_args(&[]), vec![InputReference::Stdin]);
        assert_eq!(
            InputReference::from_args(&["-".into(), "a.log".into()]),
            vec![InputReference::Stdin, InputReference::File("a.log".into())]
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(InputReference::Stdin.name(), "<stdin>");
        assert_eq!(InputReference::File("a.log".into()).name(), "a.log");
    }

    #[test]
    fn test_open_missing() {
        let result = InputReference::File("etc/samples/missing.log".into()).open();
        assert_matches!(
            result.err(),
            Some(Error::FileNotFoundError { filename }) if filename == "etc/samples/missing.log"
        );
    }

    #[test]
    fn test_open_file() {
        let mut input = InputReference::File("etc/samples/config.toml".into()).open().unwrap();
        let mut line = String::new();
        input.read_line(&mut line).unwrap();
        assert_eq!(line, "ignore-case = true\n");
    }
}
