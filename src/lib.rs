//! # simple_format
//!
//! A parser and serializer for the Simple indentation-based configuration
//! notation.
//!
//! ## What is Simple?
//!
//! Simple is a compact, human-readable notation for configuration-style
//! documents. Nesting is written with indentation rather than brackets,
//! inline `[...]`/`{...}` literals are available where brevity wins, and
//! sequences support a run/range notation (`0-2: 1`) that keeps long
//! repetitive lists short.
//!
//! ## Key Features
//!
//! - **Block and inline syntax**: indentation-defined nesting with inline
//!   literals for small containers
//! - **Comments**: `// ...`, `# ...`, and `/* ... */`
//! - **Sequence reconciliation**: explicit indices, inclusive ranges, and
//!   placeholder lines all address positions in one sequence
//! - **Round-trippable**: values produced by [`parse`] survive
//!   [`stringify`] and back unchanged
//! - **Order-preserving mappings**: entry order is kept and serialized
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_format::{parse, stringify};
//!
//! let doc = parse("name: sam\nteacher: {}\n  student_ids: [20, 21, 22]").unwrap();
//! assert_eq!(doc.get("name").and_then(|v| v.as_str()), Some("sam"));
//!
//! let text = stringify(&doc);
//! assert_eq!(parse(&text).unwrap(), doc);
//! ```
//!
//! ## Building values programmatically
//!
//! ```rust
//! use simple_format::{simple, stringify};
//!
//! let doc = simple!({
//!     "name": "Alice",
//!     "scores": [1, 2, 3]
//! });
//! assert_eq!(stringify(&doc), "name: Alice\nscores: [1, 2, 3]");
//! ```
//!
//! See the [`format`] module for the full notation reference.

pub mod error;
pub mod format;
pub mod map;
pub mod options;
pub mod value;

mod de;
mod inline;
mod macros;
mod scan;
mod ser;

pub use error::{Error, Result};
pub use map::SimpleMap;
pub use options::{ArrayFormat, ParseOptions, StringifyOptions};
pub use value::Value;

/// Parses Simple text into a [`Value`] with default options (indexed
/// sequence lines).
///
/// The result is always a mapping: documents are top-level mappings even
/// when empty.
///
/// # Examples
///
/// ```rust
/// use simple_format::parse;
///
/// let doc = parse("port: 8080\nhost: localhost").unwrap();
/// assert_eq!(doc.get("port").and_then(|v| v.as_f64()), Some(8080.0));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLine`] for a block-shape line with no colon and
/// [`Error::UnbalancedInline`] for an inline literal that never closes.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses Simple text into a [`Value`] with explicit options.
///
/// # Examples
///
/// ```rust
/// use simple_format::{parse_with_options, ArrayFormat, ParseOptions, Value};
///
/// let options = ParseOptions::new().with_array_format(ArrayFormat::Values);
/// let doc = parse_with_options("seq: []\n  10\n  20", &options).unwrap();
/// assert_eq!(
///     doc.get("seq"),
///     Some(&Value::Sequence(vec![Value::from(10), Value::from(20)]))
/// );
/// ```
///
/// # Errors
///
/// Same conditions as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    de::parse_document(text, options)
}

/// Serializes a [`Value`] to Simple text with default options (2-space
/// indentation, indexed sequence lines).
///
/// Serialization never fails; every value kind has a textual form.
///
/// # Examples
///
/// ```rust
/// use simple_format::{simple, stringify};
///
/// let doc = simple!({ "name": "sam" });
/// assert_eq!(stringify(&doc), "name: sam");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    stringify_with_options(value, &StringifyOptions::default())
}

/// Serializes a [`Value`] to Simple text with explicit options.
///
/// # Examples
///
/// ```rust
/// use simple_format::{simple, stringify_with_options, StringifyOptions};
///
/// let doc = simple!({ "outer": { "a": 1, "b": 2, "c": 3, "d": 4 } });
/// let options = StringifyOptions::new().with_indent_size(4);
/// let text = stringify_with_options(&doc, &options);
/// assert!(text.starts_with("outer: {}\n    a: 1"));
/// ```
#[must_use]
pub fn stringify_with_options(value: &Value, options: &StringifyOptions) -> String {
    ser::stringify_value(value, options)
}
