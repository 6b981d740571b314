//! Scalar classification and inline literal parsing.
//!
//! A value token on a line is classified by a fixed priority chain:
//! `None`, `true`/`false`, the empty-container markers `{}`/`[]`, numbers,
//! quoted strings, inline arrays, inline objects, and finally bare strings.
//!
//! Inline `[...]` and `{...}` literals are split on top-level commas by a
//! shared scanner that tracks quoted-string state and bracket depth, so
//! nested literals and commas inside strings never split a segment.
//! Mismatched brackets or an unterminated string inside a literal abort the
//! parse with [`Error::UnbalancedInline`](crate::Error::UnbalancedInline).

use crate::{Error, Result, SimpleMap, Value};

/// Classifies a trimmed value token into a [`Value`].
///
/// First match wins; a token that looks like nothing else is a bare string
/// with its escape sequences decoded.
pub(crate) fn classify(token: &str) -> Result<Value> {
    if token == "None" {
        return Ok(Value::Null);
    }
    if token == "true" {
        return Ok(Value::Bool(true));
    }
    if token == "false" {
        return Ok(Value::Bool(false));
    }
    if token == "{}" {
        return Ok(Value::Mapping(SimpleMap::new()));
    }
    if token == "[]" {
        return Ok(Value::Sequence(Vec::new()));
    }
    if is_number_token(token) {
        // the pattern guarantees a parsable float, but degrade rather than fail
        return Ok(Value::Number(token.parse().unwrap_or(0.0)));
    }
    if let Some(inner) = quoted_content(token) {
        return Ok(Value::String(decode_escapes(inner)));
    }
    if token.starts_with('[') && token.ends_with(']') {
        return parse_inline_array(token);
    }
    if token.starts_with('{') && token.ends_with('}') {
        return parse_inline_object(token);
    }
    Ok(Value::String(decode_escapes(token)))
}

/// Whole-token match for an optional minus, digits, and an optional
/// fractional part. The serializer quotes strings matching this shape so
/// they do not reparse as numbers.
pub(crate) fn is_number_token(token: &str) -> bool {
    let rest = token.strip_prefix('-').unwrap_or(token);
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// Returns the interior of the token when it is wrapped in exactly one pair
/// of matching quotes spanning the whole token.
fn quoted_content(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let quote = bytes[0];
    if (quote != b'"' && quote != b'\'') || bytes[bytes.len() - 1] != quote {
        return None;
    }
    let inner = &token[1..token.len() - 1];
    let inner_bytes = inner.as_bytes();
    let mut i = 0;
    while i < inner_bytes.len() {
        if inner_bytes[i] == b'\\' {
            if i + 1 >= inner_bytes.len() {
                // the backslash escapes what looked like the closing quote
                return None;
            }
            i += 2;
        } else if inner_bytes[i] == quote {
            // the string closes before the end of the token
            return None;
        } else {
            i += 1;
        }
    }
    Some(inner)
}

/// Decodes two-character escape sequences in string content.
///
/// `\n`, `\r`, `\t`, `\\` and `\"` decode to their characters; any other
/// backslash-prefixed character keeps the character and drops the backslash.
pub(crate) fn decode_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Splits inline literal content on top-level commas.
///
/// Commas inside quoted strings or nested `[...]`/`{...}` do not split.
/// Content that ends inside a string or at non-zero depth is rejected.
fn split_top_level(content: &str) -> Result<Vec<&str>> {
    let mut segments = Vec::new();
    let mut in_string: Option<char> = None;
    let mut depth: i32 = 0;
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in content.char_indices() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => in_string = Some(c),
            '[' | '{' => depth += 1,
            ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                segments.push(content[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 || in_string.is_some() {
        return Err(Error::unbalanced(content));
    }
    segments.push(content[start..].trim());
    Ok(segments)
}

/// Parses an inline `[...]` literal into a sequence.
pub(crate) fn parse_inline_array(token: &str) -> Result<Value> {
    let inner = token[1..token.len() - 1].trim();
    if inner.is_empty() {
        return Ok(Value::Sequence(Vec::new()));
    }
    let mut elements = Vec::new();
    for segment in split_top_level(inner)? {
        elements.push(classify(segment)?);
    }
    Ok(Value::Sequence(elements))
}

/// Parses an inline `{...}` literal into a mapping.
///
/// Each segment splits at its first colon; segments without one are
/// silently skipped.
pub(crate) fn parse_inline_object(token: &str) -> Result<Value> {
    let inner = token[1..token.len() - 1].trim();
    if inner.is_empty() {
        return Ok(Value::Mapping(SimpleMap::new()));
    }
    let mut map = SimpleMap::new();
    for segment in split_top_level(inner)? {
        let Some((key, value_token)) = segment.split_once(':') else {
            continue;
        };
        map.insert(key.trim().to_string(), classify(value_token.trim())?);
    }
    Ok(Value::Mapping(map))
}
