//! Prefix validation.
//!
//! Every generated line starts with a user-supplied prefix, and the prefix is
//! also embedded in the output file name. It therefore has to be safe to use
//! as part of a path on every common filesystem.

use std::fmt;
use std::str::FromStr;

/// Maximum prefix length, in characters.
pub const MAX_PREFIX_LEN: usize = 50;

/// Characters that are rejected because they are unsafe in file names.
pub const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Errors produced while validating a prefix
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixError {
    /// Prefix is empty after trimming surrounding whitespace
    #[error("prefix cannot be empty")]
    Empty,

    /// Prefix exceeds [`MAX_PREFIX_LEN`] characters
    #[error("prefix too long ({len} characters, max {max})")]
    TooLong {
        /// Length of the rejected prefix in characters
        len: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Prefix contains a path-unsafe or control character
    #[error("prefix contains invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// A validated line prefix.
///
/// Construction goes through [`Prefix::parse`], so holding a `Prefix` means
/// the value is non-empty, at most [`MAX_PREFIX_LEN`] characters long and free
/// of [`FORBIDDEN_CHARS`] and control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Validate `raw` and wrap it.
    ///
    /// Surrounding whitespace is trimmed first, matching how a line read from
    /// a terminal is cleaned up before use.
    pub fn parse(raw: &str) -> Result<Self, PrefixError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PrefixError::Empty);
        }

        let len = trimmed.chars().count();
        if len > MAX_PREFIX_LEN {
            return Err(PrefixError::TooLong {
                len,
                max: MAX_PREFIX_LEN,
            });
        }

        if let Some(c) = trimmed
            .chars()
            .find(|c| FORBIDDEN_CHARS.contains(c) || c.is_control())
        {
            return Err(PrefixError::InvalidCharacter(c));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// The prefix as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix as raw UTF-8 bytes, as written to the output
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a validated prefix is never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
