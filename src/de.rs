//! Document parsing: logical lines to a parse tree to a [`Value`].
//!
//! The block parser keeps a stack of open containers keyed by indentation
//! level. Each line either appends a leaf to the current container or, when
//! its value token is the empty-container marker `{}`/`[]`, opens a new
//! container that collects the more-deeply-indented lines that follow.
//!
//! The materializer then walks the tree. Mapping nodes keep child order;
//! sequence nodes reconcile their children's keys: explicit indices claim a
//! position, `start-end` ranges claim every position in the inclusive
//! range, `-` placeholders take the next unclaimed position in encounter
//! order, and any position below the highest claimed index that is still
//! empty is filled with the number `0`.

use crate::inline::classify;
use crate::scan::{split_logical_lines, strip_comments, IndentStyle};
use crate::{ArrayFormat, Error, ParseOptions, Result, Value};

/// Intermediate parse tree node. Leaves carry an already-materialized
/// value; container nodes collect children from deeper-indented lines.
#[derive(Debug)]
pub(crate) enum ParseNode {
    Leaf { key: String, value: Value },
    Mapping { key: String, children: Vec<ParseNode> },
    Sequence { key: String, children: Vec<ParseNode> },
}

impl ParseNode {
    fn key(&self) -> &str {
        match self {
            ParseNode::Leaf { key, .. }
            | ParseNode::Mapping { key, .. }
            | ParseNode::Sequence { key, .. } => key,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<ParseNode>> {
        match self {
            ParseNode::Mapping { children, .. } | ParseNode::Sequence { children, .. } => {
                Some(children)
            }
            ParseNode::Leaf { .. } => None,
        }
    }
}

/// Runs the full parse pipeline over raw document text.
pub(crate) fn parse_document(text: &str, options: &ParseOptions) -> Result<Value> {
    let stripped = strip_comments(text);
    let lines = split_logical_lines(&stripped);
    let style = IndentStyle::detect(&lines);
    let root = build_tree(&lines, &style, options.array_format)?;
    Ok(materialize(root))
}

/// Builds the parse tree from leveled logical lines.
///
/// The implicit top-level mapping sits below the frame stack; frames on
/// the stack are the currently open block containers, indent levels
/// strictly increasing from bottom to top.
fn build_tree(
    lines: &[String],
    style: &IndentStyle,
    array_format: ArrayFormat,
) -> Result<ParseNode> {
    let mut root = ParseNode::Mapping {
        key: String::new(),
        children: Vec::new(),
    };
    let mut stack: Vec<(ParseNode, i64)> = Vec::new();

    for line in lines {
        let level = style.level_of(line) as i64;
        while stack.last().map_or(false, |frame| frame.1 >= level) {
            close_frame(&mut root, &mut stack);
        }

        let trimmed = line.trim();
        let Some((raw_key, raw_value)) = trimmed.split_once(':') else {
            // pure-value shape: legal only for bare lines inside an open
            // sequence when parsing in values mode
            let in_sequence = matches!(
                stack.last().map(|frame| &frame.0),
                Some(ParseNode::Sequence { .. })
            );
            if array_format == ArrayFormat::Values && in_sequence {
                let value = classify(trimmed)?;
                append_child(&mut root, &mut stack, ParseNode::Leaf {
                    key: "-".to_string(),
                    value,
                });
                continue;
            }
            return Err(Error::invalid_line(trimmed));
        };

        let key = raw_key.trim().to_string();
        let value = classify(raw_value.trim())?;
        match value {
            Value::Mapping(map) if map.is_empty() => {
                stack.push((
                    ParseNode::Mapping {
                        key,
                        children: Vec::new(),
                    },
                    level,
                ));
            }
            Value::Sequence(seq) if seq.is_empty() => {
                stack.push((
                    ParseNode::Sequence {
                        key,
                        children: Vec::new(),
                    },
                    level,
                ));
            }
            other => {
                append_child(&mut root, &mut stack, ParseNode::Leaf { key, value: other });
            }
        }
    }

    while !stack.is_empty() {
        close_frame(&mut root, &mut stack);
    }
    Ok(root)
}

/// Pops the top frame and attaches it to the frame below, or to the root
/// when it was the last open container.
fn close_frame(root: &mut ParseNode, stack: &mut Vec<(ParseNode, i64)>) {
    if let Some((node, _)) = stack.pop() {
        append_child(root, stack, node);
    }
}

fn append_child(root: &mut ParseNode, stack: &mut [(ParseNode, i64)], child: ParseNode) {
    let parent = match stack.last_mut() {
        Some((frame, _)) => frame,
        None => root,
    };
    if let Some(children) = parent.children_mut() {
        children.push(child);
    }
}

/// Converts a parse tree into the final value model.
pub(crate) fn materialize(node: ParseNode) -> Value {
    match node {
        ParseNode::Leaf { value, .. } => value,
        ParseNode::Mapping { children, .. } => {
            let mut map = crate::SimpleMap::with_capacity(children.len());
            for child in children {
                let key = child.key().to_string();
                map.insert(key, materialize(child));
            }
            Value::Mapping(map)
        }
        ParseNode::Sequence { children, .. } => reconcile_sequence(children),
    }
}

/// Resolves explicit indices, inclusive ranges, placeholders, and gaps into
/// a positional sequence.
fn reconcile_sequence(children: Vec<ParseNode>) -> Value {
    let mut slots: Vec<Option<Value>> = Vec::new();
    let mut deferred: Vec<Value> = Vec::new();

    for child in children {
        let key = child.key().to_string();
        let value = materialize(child);
        if let Some(index) = parse_index_key(&key) {
            place(&mut slots, index, value);
        } else if let Some((start, end)) = parse_range_key(&key) {
            for index in start..=end {
                place(&mut slots, index, value.clone());
            }
        } else {
            // `-` and any unrecognized key take the next free position
            deferred.push(value);
        }
    }

    let mut cursor = 0;
    for value in deferred {
        while cursor < slots.len() && slots[cursor].is_some() {
            cursor += 1;
        }
        place(&mut slots, cursor, value);
        cursor += 1;
    }

    Value::Sequence(
        slots
            .into_iter()
            .map(|slot| slot.unwrap_or(Value::Number(0.0)))
            .collect(),
    )
}

fn place(slots: &mut Vec<Option<Value>>, index: usize, value: Value) {
    if index >= slots.len() {
        slots.resize(index + 1, None);
    }
    slots[index] = Some(value);
}

/// An index of `usize::MAX` has no representable slot count; such keys
/// degrade to placeholders like any other unrecognized sequence key.
fn parse_index_key(key: &str) -> Option<usize> {
    key.parse::<usize>().ok().filter(|&index| index < usize::MAX)
}

fn parse_range_key(key: &str) -> Option<(usize, usize)> {
    let (start, end) = key.split_once('-')?;
    let start = start.trim().parse().ok()?;
    let end = end.trim().parse().ok().filter(|&end| end < usize::MAX)?;
    Some((start, end))
}
