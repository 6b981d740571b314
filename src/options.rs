//! Configuration options for parsing and serialization.
//!
//! - [`ParseOptions`]: controls how sequence blocks are read
//! - [`StringifyOptions`]: controls indentation and sequence output shape
//! - [`ArrayFormat`]: choice between indexed and bare-value sequence lines
//!
//! ## Examples
//!
//! ```rust
//! use simple_format::{stringify_with_options, ArrayFormat, StringifyOptions, Value};
//!
//! let seq = Value::Sequence(vec![
//!     Value::from(1), Value::from(2), Value::from(3), Value::from(4),
//! ]);
//! let mut root = simple_format::SimpleMap::new();
//! root.insert("data".to_string(), seq);
//!
//! let options = StringifyOptions::new().with_array_format(ArrayFormat::Values);
//! let text = stringify_with_options(&Value::Mapping(root), &options);
//! assert!(text.contains("data: []"));
//! ```

/// How sequence block children are written and read.
///
/// - **Indexed**: each child line carries an explicit index or inclusive
///   range key (`0: x`, `2-4: y`); this is the default and supports
///   run-length compression on output.
/// - **Values**: each child line is just the value, assigned the next free
///   index in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrayFormat {
    #[default]
    Indexed,
    Values,
}

/// Configuration for [`crate::parse_with_options`].
///
/// # Examples
///
/// ```rust
/// use simple_format::{ArrayFormat, ParseOptions};
///
/// let options = ParseOptions::new().with_array_format(ArrayFormat::Values);
/// assert_eq!(options.array_format, ArrayFormat::Values);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    pub array_format: ArrayFormat,
}

impl ParseOptions {
    /// Creates default options (indexed sequence lines).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sequence line format.
    #[must_use]
    pub fn with_array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }
}

/// Configuration for [`crate::stringify_with_options`].
///
/// # Examples
///
/// ```rust
/// use simple_format::StringifyOptions;
///
/// let options = StringifyOptions::new()
///     .with_indent_size(4)
///     .with_indent_char('\t');
/// assert_eq!(options.indent_size, 4);
/// ```
#[derive(Clone, Debug)]
pub struct StringifyOptions {
    pub indent_size: usize,
    pub indent_char: char,
    pub array_format: ArrayFormat,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        StringifyOptions {
            indent_size: 2,
            indent_char: ' ',
            array_format: ArrayFormat::default(),
        }
    }
}

impl StringifyOptions {
    /// Creates default options (2-space indent, indexed sequence lines).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of indent characters per nesting level.
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Sets the indentation character (usually `' '` or `'\t'`).
    #[must_use]
    pub fn with_indent_char(mut self, indent_char: char) -> Self {
        self.indent_char = indent_char;
        self
    }

    /// Sets the sequence line format.
    #[must_use]
    pub fn with_array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// Returns the indentation prefix for one nesting level.
    #[must_use]
    pub(crate) fn indent(&self, level: usize) -> String {
        self.indent_char
            .to_string()
            .repeat(self.indent_size * level)
    }
}
