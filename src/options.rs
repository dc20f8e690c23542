//! Configuration options for parsing.
//!
//! The grammar itself has no knobs; the only tunable is the nesting-depth
//! guard that protects the recursive parser's stack on adversarial input.
//!
//! ## Examples
//!
//! ```rust
//! use iot_record::{parse_with_options, ParseOptions};
//!
//! let options = ParseOptions::new().with_max_depth(8);
//! assert!(parse_with_options("{a=[1, 2]}", options).is_ok());
//! ```

/// Configuration for a parse call.
///
/// # Examples
///
/// ```rust
/// use iot_record::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// let strict = ParseOptions::new().with_max_depth(4);
/// assert_eq!(strict.max_depth, 4);
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Maximum dict/list nesting depth before the parser refuses the input.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { max_depth: 128 }
    }
}

impl ParseOptions {
    /// Creates default options (128 levels of nesting).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    ///
    /// Inputs nesting deeper than this fail with a syntax error rather than
    /// risking stack exhaustion.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
