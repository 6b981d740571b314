//! Error types for Simple format parsing.
//!
//! Parsing is deliberately lenient: unparsable numbers degrade to `0`,
//! unknown sequence keys become placeholders, and blank lines are skipped.
//! Only two situations abort a parse:
//!
//! - a block-shape line without a colon, outside the pure-value sequence
//!   exception ([`Error::InvalidLine`]);
//! - an inline literal whose brackets or quotes never close
//!   ([`Error::UnbalancedInline`]).
//!
//! Serialization never fails; [`crate::stringify`] returns a plain `String`.

use thiserror::Error;

/// All errors that can occur while parsing a Simple document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A line in block position had no colon and could not be treated as a
    /// bare sequence value.
    #[error("invalid line (expected `key: value`): {line}")]
    InvalidLine { line: String },

    /// An inline `[...]` or `{...}` literal contained mismatched brackets
    /// or an unterminated quoted string.
    #[error("unbalanced brackets or unterminated string in inline literal: {text}")]
    UnbalancedInline { text: String },
}

impl Error {
    /// Creates an [`Error::InvalidLine`] for the given source line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_format::Error;
    ///
    /// let err = Error::invalid_line("foo bar");
    /// assert!(err.to_string().contains("foo bar"));
    /// ```
    pub fn invalid_line(line: &str) -> Self {
        Error::InvalidLine {
            line: line.to_string(),
        }
    }

    /// Creates an [`Error::UnbalancedInline`] for the given literal text.
    pub fn unbalanced(text: &str) -> Self {
        Error::UnbalancedInline {
            text: text.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
