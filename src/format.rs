//! Simple Format Reference
//!
//! This module documents the Simple notation as implemented by this
//! library.
//!
//! # Overview
//!
//! Simple is an indentation-sensitive configuration notation mapping to a
//! small value model: null, boolean, number, string, sequence, and
//! mapping. Documents mix block syntax (indentation-defined nesting) with
//! inline bracket literals, support comments, and offer a compact
//! index/range notation for sequences.
//!
//! # Core Syntax
//!
//! ## Mappings
//!
//! A document is a top-level mapping of newline-delimited `key: value`
//! lines. Nesting is written by giving a key the empty-mapping marker `{}`
//! and indenting its entries one level deeper:
//!
//! ```text
//! name: sam
//! teacher: {}
//!     student_ids: [20, 21, 22, 31]
//! ```
//!
//! Rebinding a key replaces its value; entry order is otherwise preserved.
//!
//! ## Sequences
//!
//! A key with the empty-sequence marker `[]` opens a block sequence. Child
//! lines address positions three ways:
//!
//! ```text
//! test: []
//!     1-3: 0      // one value for every index in the inclusive range
//!     5-6: 1
//!     -: 0        // placeholder: next unclaimed index (index 0 here)
//! ```
//!
//! Positions below the highest claimed index that receive no value are
//! filled with the number `0`. With the `values` array format, child lines
//! are bare values assigned in order instead of indexed.
//!
//! ## Inline literals
//!
//! Complete containers can be written on one line: `[v, v, ...]` and
//! `{k: v, k: v, ...}`. Commas inside quoted strings or nested brackets do
//! not split elements.
//!
//! ## Primitives
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | Null | `None` | `value: None` |
//! | Boolean | `true` / `false` | `active: true` |
//! | Number | optional `-`, digits, optional fraction | `price: -19.99` |
//! | String | bare or `"quoted"` / `'quoted'` | `name: sam` |
//!
//! Anything that matches nothing else is a bare string.
//!
//! ## Strings
//!
//! Escape sequences `\n`, `\r`, `\t`, `\\`, `\"` decode to their
//! characters; an unknown escape drops the backslash. A `\n` written
//! inside a quoted string embeds a real line break, which is how
//! multi-line content fits on one source line.
//!
//! On output, a string is double-quoted when it is empty, starts with a
//! digit, reads as a number token (including a leading minus), equals
//! `None`/`true`/`false`, contains a structural character
//! (`:`/`,`/`[`/`]`/`{`/`}`), a quote character, a comment introducer
//! (`#`, `//`, `/*`), or has leading or trailing whitespace. Everything
//! else stays bare.
//!
//! ## Comments
//!
//! ```text
//! a: 1        // line comment
//! b: 2        # also a line comment
//! /* block
//!    comment */
//! c: 3
//! ```
//!
//! Comment markers inside quoted strings are content, not comments.
//!
//! # Indentation
//!
//! The first indented line fixes the style for the whole document: a tab
//! anywhere in its leading whitespace means tab indentation (one tab per
//! level); otherwise the exact length of its leading space run is the
//! spaces-per-level unit. Unindented documents default to two spaces.
//! Mixing tabs and spaces in one document is unsupported.
//!
//! # Serialized shape
//!
//! - Containers with at most three entries, none a non-empty container,
//!   render inline; larger or deeper ones render as blocks.
//! - In the default indexed format, runs of consecutive structurally-equal
//!   sequence elements collapse to one `start-end: value` line.
//! - A nested block mapping opens with a `{}` marker line; the root
//!   mapping of a document opens implicitly without one.
//!
//! # Limitations
//!
//! - Mapping keys are written raw: keys containing `:` or `,` do not
//!   survive a round trip.
//! - Comments are not preserved through parse/stringify.
//! - Sequence order is positional; parsing never reports gaps, it fills
//!   them with `0`.

// This module contains only documentation; no implementation code
