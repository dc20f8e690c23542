//! Error types for record parsing.
//!
//! Every grammar violation surfaces as one logical kind of failure, a syntax
//! error carrying the line and column of the offending token and a message
//! describing what was expected versus found. Parsing is all-or-nothing:
//! there is no recovery and no partial tree.
//!
//! ## Examples
//!
//! ```rust
//! use iot_record::parse;
//!
//! // `:` is JSON's separator, not this dialect's
//! let result = parse(r#"{"key": 1}"#);
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// All failures the crate can report.
///
/// Grammar violations are `Syntax` or `UnexpectedEof`; the remaining
/// variants exist for the reader-based entry point and for serde's error
/// plumbing.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Grammar violation at a known position
    #[error("syntax error at line {line}, column {col}: {msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
    },

    /// Input ended in the middle of a production
    #[error("unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Custom error, used by typed deserialization
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iot_record::Error;
    ///
    /// let err = Error::syntax(1, 5, "expected '=' after key, found ','");
    /// assert!(err.to_string().contains("line 1"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.into(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: impl Into<String>) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.into(),
        }
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the `(line, column)` of a positioned error, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. } | Error::UnexpectedEof { line, col, .. } => {
                Some((*line, *col))
            }
            _ => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = Error::syntax(2, 7, "expected '=' after key, found ':'");
        let text = err.to_string();
        assert!(text.contains("line 2"));
        assert!(text.contains("column 7"));
        assert!(text.contains("':'"));
    }

    #[test]
    fn test_position() {
        assert_eq!(Error::syntax(3, 4, "x").position(), Some((3, 4)));
        assert_eq!(Error::unexpected_eof(1, 9, "'\"'").position(), Some((1, 9)));
        assert_eq!(Error::custom("x").position(), None);
    }
}
