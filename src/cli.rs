// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;
use wildcard::Granularity;

// local imports
use crate::settings::Settings;

// ---

/// Prints lines that match a wildcard pattern as a whole.
///
/// Pattern syntax: '*' matches any number of characters, '?' matches zero or one character,
/// '.' matches exactly one character, everything else matches itself.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path.
    #[arg(long, env = "WCM_CONFIG", value_name = "FILE", overrides_with = "config")]
    pub config: Option<PathBuf>,

    /// Ignore case distinctions in the pattern and the input.
    #[arg(short, long, env = "WCM_IGNORE_CASE", overrides_with = "no_ignore_case")]
    pub ignore_case: bool,

    /// Do not ignore case distinctions, overrides --ignore-case option.
    #[arg(long, overrides_with = "ignore_case")]
    pub no_ignore_case: bool,

    /// Unit of comparison for '.' and '?', one of [bytes, chars].
    #[arg(long, env = "WCM_GRANULARITY", value_name = "UNIT", overrides_with = "granularity")]
    pub granularity: Option<Granularity>,

    /// Select non-matching lines.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only a count of selected lines per input.
    #[arg(short, long)]
    pub count: bool,

    /// Prefix each line with its line number.
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Prefix each line with the input file name, default when there is more than one input.
    #[arg(short = 'H', long, overrides_with = "no_filename")]
    pub with_filename: bool,

    /// Never prefix lines with the input file name, overrides --with-filename option.
    #[arg(long, overrides_with = "with_filename")]
    pub no_filename: bool,

    /// Wildcard pattern.
    pub pattern: String,

    /// Files to process, standard input is used if none given or for '-'.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Resolves case folding taking configured settings into account.
    pub fn ignore_case(&self, settings: &Settings) -> bool {
        if self.no_ignore_case {
            false
        } else {
            self.ignore_case || settings.ignore_case
        }
    }

    /// Resolves granularity taking configured settings into account.
    pub fn granularity(&self, settings: &Settings) -> Granularity {
        self.granularity.unwrap_or(settings.granularity)
    }

    /// Resolves whether file names should prefix output lines.
    pub fn with_filename(&self) -> bool {
        if self.no_filename {
            false
        } else {
            self.with_filename || self.files.len() > 1
        }
    }
}
