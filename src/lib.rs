//! # iot_record
//!
//! Parser for the JSON-like record notation that AWS IoT Analytics embeds in
//! single cells of its CSV exports.
//!
//! ## What is this notation?
//!
//! It looks like JSON at a glance but differs in load-bearing ways:
//!
//! - Object pairs use `=` instead of `:` (`{cepid=CEP010}`); a `:` separator
//!   is a syntax error, not a tolerated variant
//! - Keys and scalar values are usually unquoted free tokens that may contain
//!   internal whitespace (`{label with spaces=3.14}`)
//! - Types are inferred by shape: `58` is an integer, `3.14` a float, `007`
//!   and `2022-03-12T04:32:30.124Z` stay strings
//!
//! Parsing is all-or-nothing. Malformed input produces a syntax error with
//! line/column information, never a partial tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use iot_record::parse;
//!
//! let text = "{cepid=CEP010, filename=a/b/c.json, filecount=58, loaddate=2022-03-12T04:32:30.124Z}";
//! let record = parse(text).unwrap();
//!
//! let map = record.as_dict().unwrap();
//! assert_eq!(map.get("filecount").and_then(|v| v.as_i64()), Some(58));
//! assert_eq!(
//!     map.get("loaddate").and_then(|v| v.as_str()),
//!     Some("2022-03-12T04:32:30.124Z")
//! );
//! ```
//!
//! ## Typed Extraction
//!
//! A parsed [`Value`] implements `serde::Deserializer`, so records can land
//! directly in your own types:
//!
//! ```rust
//! use serde::Deserialize;
//! use iot_record::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Manifest {
//!     cepid: String,
//!     filecount: u32,
//! }
//!
//! let m: Manifest = from_str("{cepid=CEP010, filecount=58}").unwrap();
//! assert_eq!(m, Manifest { cepid: "CEP010".to_string(), filecount: 58 });
//! ```
//!
//! ## Building Values
//!
//! ```rust
//! use iot_record::record;
//!
//! let expected = record!({
//!     "areaname" = "Kitchen 1",
//!     "alarm1" = false
//! });
//! assert_eq!(iot_record::parse("{areaname=Kitchen 1, alarm1=false}").unwrap(), expected);
//! ```
//!
//! ## Guarantees
//!
//! - No `unsafe` code
//! - Pure, synchronous parsing: no I/O, no state shared between calls, safe
//!   to call concurrently from any number of threads
//! - Time linear in input length; recursion bounded by a configurable
//!   nesting-depth limit ([`ParseOptions`])
//! - Type promotion never fails a parse: every free token resolves to some
//!   scalar

pub mod de;
pub mod error;
mod lexer;
pub mod macros;
pub mod map;
pub mod options;
mod parser;
mod promote;
pub mod value;

pub use de::from_value;
pub use error::{Error, Result};
pub use map::Map;
pub use options::ParseOptions;
pub use value::Value;

use serde::de::DeserializeOwned;
use std::io;

/// Parses one encoded record into a [`Value`] tree.
///
/// The input is the full text of one record, typically a `{...}` dict or a
/// `[...]` list, though any value production is accepted at top level.
/// Trailing non-whitespace after the value is an error.
///
/// # Examples
///
/// ```rust
/// use iot_record::{parse, Value};
///
/// let v = parse("{a=1, a=2}").unwrap();
/// assert_eq!(v.as_dict().unwrap().get("a"), Some(&Value::Int(2)));
///
/// assert!(parse(r#"{"key": 1}"#).is_err()); // JSON separator, wrong dialect
/// ```
///
/// # Errors
///
/// Returns a syntax error carrying line/column for any grammar violation:
/// unbalanced brackets, a pair missing `=`, a trailing comma, an unterminated
/// quoted string, or nesting past the depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses one encoded record with custom options.
///
/// # Examples
///
/// ```rust
/// use iot_record::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(2);
/// assert!(parse_with_options("{a=[1]}", options.clone()).is_ok());
/// assert!(parse_with_options("{a=[[1]]}", options).is_err());
/// ```
///
/// # Errors
///
/// Same conditions as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Value> {
    parser::parse_str(input, &options)
}

/// Parses one encoded record from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text is not a
/// well-formed record.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    parse(s)
}

/// Parses one encoded record from an I/O stream.
///
/// Reads the stream to the end first; the notation has no framing, so one
/// stream is one record.
///
/// # Examples
///
/// ```rust
/// use iot_record::parse_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"{x=1}");
/// let v = parse_reader(cursor).unwrap();
/// assert!(v.is_dict());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is not a well-formed record.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

/// Parses one encoded record and deserializes it into `T`.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use iot_record::from_str;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Event {
///     event: i64,
///     areaname: String,
/// }
///
/// let e: Event = from_str("{event=48, areaname=Kitchen 1}").unwrap();
/// assert_eq!(e.areaname, "Kitchen 1");
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a well-formed record or the resulting
/// tree does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(s)?)
}
