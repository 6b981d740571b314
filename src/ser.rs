//! Serialization of a [`Value`] tree into Simple text.
//!
//! Containers render inline when they hold at most three entries, none of
//! which is a non-empty container; everything else renders in block form.
//! Block sequences open with a `[]` marker line; in indexed mode their
//! children collapse maximal runs of structurally-equal elements into
//! `start-end: value` lines. Block mappings are preceded by a `{}` marker
//! line, except the first mapping rendered in a call: the root mapping of a
//! document opens implicitly, tracked by a per-call context flag.
//!
//! Serialization never fails; every value kind has a textual form.

use crate::inline::is_number_token;
use crate::{ArrayFormat, SimpleMap, StringifyOptions, Value};

/// Per-call serializer state. Fresh (flag unset) at the start of every
/// stringify invocation, never reused across calls.
struct Context {
    root_mapping_rendered: bool,
}

pub(crate) fn stringify_value(value: &Value, options: &StringifyOptions) -> String {
    let mut ctx = Context {
        root_mapping_rendered: false,
    };
    match value {
        // the root mapping always renders in block form, consuming the
        // one-shot marker flag; an empty root renders as the empty string
        // so that parsing it back yields an empty document
        Value::Mapping(map) => {
            ctx.root_mapping_rendered = true;
            render_mapping_entries(map, 0, &mut ctx, options).join("\n")
        }
        other => render_value(other, 0, &mut ctx, options),
    }
}

/// Renders the text that follows `key: ` on a line at `level`. Block
/// containers return multiple lines; continuation lines carry their own
/// indentation.
fn render_value(
    value: &Value,
    level: usize,
    ctx: &mut Context,
    options: &StringifyOptions,
) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => render_string(s),
        Value::Sequence(seq) => {
            if seq.is_empty() {
                "[]".to_string()
            } else if fits_inline(seq.len(), seq.iter()) {
                let elements: Vec<String> = seq
                    .iter()
                    .map(|e| render_value(e, level, ctx, options))
                    .collect();
                format!("[{}]", elements.join(", "))
            } else {
                render_sequence_block(seq, level, ctx, options)
            }
        }
        Value::Mapping(map) => {
            if map.is_empty() {
                "{}".to_string()
            } else if fits_inline(map.len(), map.values()) {
                let entries: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, render_value(v, level, ctx, options)))
                    .collect();
                format!("{{{}}}", entries.join(", "))
            } else {
                let marker = if ctx.root_mapping_rendered {
                    "{}"
                } else {
                    ctx.root_mapping_rendered = true;
                    ""
                };
                let mut lines = vec![marker.to_string()];
                lines.extend(render_mapping_entries(map, level + 1, ctx, options));
                lines.join("\n")
            }
        }
    }
}

fn render_mapping_entries(
    map: &SimpleMap,
    level: usize,
    ctx: &mut Context,
    options: &StringifyOptions,
) -> Vec<String> {
    map.iter()
        .map(|(key, value)| {
            format!(
                "{}{}: {}",
                options.indent(level),
                key,
                render_value(value, level, ctx, options)
            )
        })
        .collect()
}

fn render_sequence_block(
    seq: &[Value],
    level: usize,
    ctx: &mut Context,
    options: &StringifyOptions,
) -> String {
    let mut lines = vec!["[]".to_string()];
    let child_indent = options.indent(level + 1);

    match options.array_format {
        ArrayFormat::Values => {
            for element in seq {
                let rendered = render_value(element, level + 1, ctx, options);
                // a bare line must reparse as a whole value token: anything
                // multi-line or containing a colon needs a placeholder key
                if rendered.contains('\n') || rendered.contains(':') {
                    lines.push(format!("{}-: {}", child_indent, rendered));
                } else {
                    lines.push(format!("{}{}", child_indent, rendered));
                }
            }
        }
        ArrayFormat::Indexed => {
            let mut start = 0;
            while start < seq.len() {
                let mut end = start + 1;
                while end < seq.len() && seq[end] == seq[start] {
                    end += 1;
                }
                let key = if end - start > 1 {
                    format!("{}-{}", start, end - 1)
                } else {
                    start.to_string()
                };
                let rendered = render_value(&seq[start], level + 1, ctx, options);
                lines.push(format!("{}{}: {}", child_indent, key, rendered));
                start = end;
            }
        }
    }
    lines.join("\n")
}

/// Inline eligibility: at most three entries, none a non-empty container.
fn fits_inline<'a>(len: usize, mut values: impl Iterator<Item = &'a Value>) -> bool {
    len <= 3 && values.all(is_scalar_or_empty)
}

fn is_scalar_or_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
    }
}

fn render_string(s: &str) -> String {
    let escaped = escape_string(s);
    if needs_quotes(s) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Quoting triggers, checked against the raw (unescaped) text.
///
/// Quote characters and comment introducers are triggers too: left bare
/// they would derail the comment stripper or the inline-literal splitter
/// on the way back in.
fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.chars().next().map_or(false, |c| c.is_ascii_digit())
        || is_number_token(s)
        || s == "None"
        || s == "true"
        || s == "false"
        || s.chars()
            .any(|c| matches!(c, ':' | ',' | '[' | ']' | '{' | '}' | '"' | '\'' | '#'))
        || s.contains("//")
        || s.contains("/*")
        || s.starts_with(char::is_whitespace)
        || s.ends_with(char::is_whitespace)
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stringify, stringify_with_options, SimpleMap};

    fn mapping(entries: Vec<(&str, Value)>) -> Value {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<SimpleMap>(),
        )
    }

    #[test]
    fn test_scalar_forms() {
        let root = mapping(vec![
            ("a", Value::Null),
            ("b", Value::Bool(true)),
            ("c", Value::Number(3.5)),
            ("d", Value::String("hi".to_string())),
        ]);
        assert_eq!(stringify(&root), "a: None\nb: true\nc: 3.5\nd: hi");
    }

    #[test]
    fn test_whole_numbers_render_without_fraction() {
        let root = mapping(vec![("n", Value::Number(3.0))]);
        assert_eq!(stringify(&root), "n: 3");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(render_string("hello"), "hello");
        assert_eq!(render_string(""), "\"\"");
        assert_eq!(render_string("21"), "\"21\"");
        assert_eq!(render_string("a: b"), "\"a: b\"");
        assert_eq!(render_string("None"), "\"None\"");
        assert_eq!(render_string(" padded "), "\" padded \"");
        assert_eq!(render_string("tab\tsep"), "tab\\tsep");
        assert_eq!(render_string("line\nbreak"), "line\\nbreak");
        assert_eq!(render_string("-5"), "\"-5\"");
        assert_eq!(render_string("-3.25"), "\"-3.25\"");
        assert_eq!(render_string("-abc"), "-abc");
        assert_eq!(render_string("it's"), "\"it's\"");
        assert_eq!(render_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(render_string("hash # tag"), "\"hash # tag\"");
        assert_eq!(render_string("path//part"), "\"path//part\"");
        assert_eq!(render_string("a/b"), "a/b");
    }

    #[test]
    fn test_inline_threshold() {
        let three = mapping(vec![(
            "s",
            Value::Sequence(vec![Value::from(1), Value::from(2), Value::from(3)]),
        )]);
        assert_eq!(stringify(&three), "s: [1, 2, 3]");

        let four = mapping(vec![(
            "s",
            Value::Sequence(vec![
                Value::from(1),
                Value::from(2),
                Value::from(3),
                Value::from(4),
            ]),
        )]);
        assert_eq!(stringify(&four), "s: []\n  0: 1\n  1: 2\n  2: 3\n  3: 4");
    }

    #[test]
    fn test_nonempty_nested_container_forces_block() {
        let root = mapping(vec![(
            "s",
            Value::Sequence(vec![Value::Sequence(vec![Value::from(1)])]),
        )]);
        assert_eq!(stringify(&root), "s: []\n  0: [1]");
    }

    #[test]
    fn test_run_length_compression() {
        let root = mapping(vec![(
            "runs",
            Value::Sequence(
                [1, 1, 1, 2, 3, 3, 4, 4, 4, 4, 5]
                    .iter()
                    .map(|&n| Value::from(n))
                    .collect(),
            ),
        )]);
        assert_eq!(
            stringify(&root),
            "runs: []\n  0-2: 1\n  3: 2\n  4-5: 3\n  6-9: 4\n  10: 5"
        );
    }

    #[test]
    fn test_run_length_uses_structural_equality() {
        let mut left = SimpleMap::new();
        left.insert("a".to_string(), Value::from(1));
        left.insert("b".to_string(), Value::from(2));
        let mut right = SimpleMap::new();
        right.insert("b".to_string(), Value::from(2));
        right.insert("a".to_string(), Value::from(1));

        let root = mapping(vec![(
            "s",
            Value::Sequence(vec![
                Value::Mapping(left),
                Value::Mapping(right),
                Value::from(9),
            ]),
        )]);
        // entry order differs but the mappings are structurally equal
        let text = stringify(&root);
        assert!(text.contains("0-1: "));
        assert!(text.contains("2: 9"));
    }

    #[test]
    fn test_values_mode_bare_lines() {
        let options = StringifyOptions::new().with_array_format(ArrayFormat::Values);
        let root = mapping(vec![(
            "s",
            Value::Sequence(vec![
                Value::from(1),
                Value::from("two"),
                Value::from(3),
                Value::Null,
            ]),
        )]);
        assert_eq!(
            stringify_with_options(&root, &options),
            "s: []\n  1\n  two\n  3\n  None"
        );
    }

    #[test]
    fn test_values_mode_falls_back_to_placeholder_key() {
        let options = StringifyOptions::new().with_array_format(ArrayFormat::Values);
        let mut inner = SimpleMap::new();
        inner.insert("a".to_string(), Value::from(1));
        let root = mapping(vec![(
            "s",
            Value::Sequence(vec![
                Value::Mapping(inner),
                Value::from("with: colon"),
                Value::from(5),
                Value::from(6),
            ]),
        )]);
        assert_eq!(
            stringify_with_options(&root, &options),
            "s: []\n  -: {a: 1}\n  -: \"with: colon\"\n  5\n  6"
        );
    }

    #[test]
    fn test_nested_block_mapping_gets_marker() {
        let mut inner = SimpleMap::new();
        for (k, v) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            inner.insert(k.to_string(), Value::from(v));
        }
        let root = mapping(vec![("m", Value::Mapping(inner))]);
        assert_eq!(
            stringify(&root),
            "m: {}\n  a: 1\n  b: 2\n  c: 3\n  d: 4"
        );
    }

    #[test]
    fn test_root_mapping_has_no_marker() {
        let root = mapping(vec![("a", Value::from(1))]);
        assert_eq!(stringify(&root), "a: 1");
    }

    #[test]
    fn test_empty_root_mapping_renders_empty() {
        assert_eq!(stringify(&Value::Mapping(SimpleMap::new())), "");
    }

    #[test]
    fn test_custom_indent() {
        let mut inner = SimpleMap::new();
        for (k, v) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            inner.insert(k.to_string(), Value::from(v));
        }
        let root = mapping(vec![("m", Value::Mapping(inner))]);
        let options = StringifyOptions::new()
            .with_indent_size(1)
            .with_indent_char('\t');
        assert_eq!(
            stringify_with_options(&root, &options),
            "m: {}\n\ta: 1\n\tb: 2\n\tc: 3\n\td: 4"
        );
    }

    #[test]
    fn test_empty_containers_inline() {
        let root = mapping(vec![
            ("a", Value::Sequence(vec![])),
            ("b", Value::Mapping(SimpleMap::new())),
        ]);
        assert_eq!(stringify(&root), "a: []\nb: {}");
    }
}
