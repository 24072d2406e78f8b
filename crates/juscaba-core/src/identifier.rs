//! Parsing of user-supplied case identifiers: `"{number}/{year}[-{suffix}]"`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("case identifier is empty")]
    Empty,
    #[error("case identifier {0:?} has no year (expected NUMBER/YEAR[-SUFFIX])")]
    MissingYear(String),
    #[error("invalid case number {0:?}")]
    InvalidNumber(String),
    #[error("invalid year {0:?}")]
    InvalidYear(String),
    #[error("invalid suffix {0:?}")]
    InvalidSuffix(String),
}

/// A validated case identifier.
///
/// The search endpoint takes the raw text; this type only guards the CLI
/// front door and gives callers typed access to the parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaseIdentifier {
    pub number: u64,
    pub year: u32,
    pub suffix: Option<u32>,
}

impl CaseIdentifier {
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        s.parse()
    }
}

fn digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for CaseIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let (number, rest) = s
            .split_once('/')
            .ok_or_else(|| IdentifierError::MissingYear(s.to_string()))?;
        let (year, suffix) = match rest.split_once('-') {
            Some((year, suffix)) => (year, Some(suffix)),
            None => (rest, None),
        };

        let number =
            digits(number).ok_or_else(|| IdentifierError::InvalidNumber(number.to_string()))?;
        let year = digits(year).ok_or_else(|| IdentifierError::InvalidYear(year.to_string()))?;
        let suffix = match suffix {
            Some(raw) => {
                Some(digits(raw).ok_or_else(|| IdentifierError::InvalidSuffix(raw.to_string()))?)
            }
            None => None,
        };

        Ok(Self {
            number,
            year,
            suffix,
        })
    }
}

impl fmt::Display for CaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number, self.year)?;
        if let Some(suffix) = self.suffix {
            write!(f, "-{suffix}")?;
        }
        Ok(())
    }
}
