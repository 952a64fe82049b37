// std imports
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

// third-party imports
use thiserror::Error;

// local imports
use crate::{Element, fold_case, fold_case_bytes, matcher, shortcut};

// ---

/// A wildcard pattern prepared for matching many subjects.
///
/// The pattern text is folded and decoded once, at construction time.
///
/// # Examples
///
/// ```
/// use wildcard::{Case, Granularity, Pattern};
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(pattern.matches("test.log"));
///
/// let pattern = Pattern::new("?.RS").with_case(Case::Insensitive);
/// assert!(!pattern.matches("🦀.rs"));
/// assert!(pattern.with_granularity(Granularity::Chars).matches("🦀.rs"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    raw: String,
    text: String,
    chars: Vec<char>,
    case: Case,
    granularity: Granularity,
}

impl Pattern {
    /// Creates a case-sensitive pattern that matches bytes.
    ///
    /// All input strings are valid patterns.
    pub fn new(raw: impl Into<String>) -> Self {
        let mut result = Self {
            raw: raw.into(),
            ..Default::default()
        };
        result.prepare();
        result
    }

    /// Returns the pattern with the given case sensitivity.
    pub fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self.prepare();
        self
    }

    /// Shorthand for [`Pattern::with_case`] taking a flag.
    pub fn ignore_case(self, value: bool) -> Self {
        self.with_case(if value { Case::Insensitive } else { Case::Sensitive })
    }

    /// Returns the pattern with the given element granularity.
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self.prepare();
        self
    }

    pub fn case(&self) -> Case {
        self.case
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns true if the pattern contains no wildcards and matches only itself.
    pub fn is_literal(&self) -> bool {
        u8::find_wildcard(self.raw.as_bytes()).is_none()
    }

    /// Tests whether the pattern matches the whole `subject`.
    pub fn matches(&self, subject: &str) -> bool {
        let subject = match self.case {
            Case::Sensitive => Cow::Borrowed(subject),
            Case::Insensitive => Cow::Owned(fold_case(subject)),
        };

        shortcut(self.text.as_bytes(), subject.as_bytes()).unwrap_or_else(|| match self.granularity {
            Granularity::Bytes => matcher::matches(self.text.as_bytes(), subject.as_bytes()),
            Granularity::Chars => {
                let subject: Vec<char> = subject.chars().collect();
                matcher::matches(&self.chars, &subject)
            }
        })
    }

    /// Tests whether the pattern matches the whole `subject` given as raw bytes.
    ///
    /// Valid UTF-8 is matched the same way as [`Pattern::matches`] does.
    /// Otherwise, with [`Granularity::Bytes`] invalid sequences are compared as is
    /// and only the valid parts are case folded, and with [`Granularity::Chars`]
    /// invalid sequences are replaced by U+FFFD.
    pub fn matches_bytes(&self, subject: &[u8]) -> bool {
        if let Ok(subject) = std::str::from_utf8(subject) {
            return self.matches(subject);
        }

        match (self.granularity, self.case) {
            (Granularity::Bytes, Case::Sensitive) => crate::matches_bytes(self.text.as_bytes(), subject),
            (Granularity::Bytes, Case::Insensitive) => {
                crate::matches_bytes(self.text.as_bytes(), &fold_case_bytes(subject))
            }
            (Granularity::Chars, _) => self.matches(&String::from_utf8_lossy(subject)),
        }
    }

    fn prepare(&mut self) {
        self.text = match self.case {
            Case::Sensitive => self.raw.clone(),
            Case::Insensitive => fold_case(&self.raw),
        };
        self.chars = match self.granularity {
            Granularity::Bytes => Vec::new(),
            Granularity::Chars => self.text.chars().collect(),
        };
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

// ---

/// Case sensitivity of a [`Pattern`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Case {
    #[default]
    Sensitive,
    /// Both the pattern and the subject are lowercased before matching.
    Insensitive,
}

// ---

/// Unit of comparison used by a [`Pattern`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Granularity {
    /// UTF-8 code units, no decoding.
    #[default]
    Bytes,
    /// Unicode scalar values.
    Chars,
}

impl Granularity {
    pub const ALL: [Self; 2] = [Self::Bytes, Self::Chars];
    pub const NAMES: [&'static str; 2] = ["bytes", "chars"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Chars => "chars",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = UnknownGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGranularityError { value: s.to_owned() })
    }
}

/// Returned when parsing an unknown [`Granularity`] name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown granularity {value:?}, use any of {:?}", Granularity::NAMES)]
pub struct UnknownGranularityError {
    pub value: String,
}
