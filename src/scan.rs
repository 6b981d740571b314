//! Text preparation for the block parser.
//!
//! Parsing runs over *logical lines* rather than raw input. Three passes
//! produce them:
//!
//! 1. [`strip_comments`] removes `//`, `#` and `/* ... */` comments while
//!    leaving quoted strings (and their escape sequences) untouched.
//! 2. [`split_logical_lines`] decodes in-string `\n`/`\t` escapes into real
//!    characters, splits on raw line breaks, and drops blank lines. A `\n`
//!    escape inside a string stays on its logical line, which is how
//!    multi-line string content is written on one source line.
//! 3. [`IndentStyle::detect`] inspects the first indented line to decide
//!    whether the document uses tabs or a fixed run of spaces.
//!
//! Mixing tabs and spaces within one document is not supported; level
//! arithmetic follows whichever style the first indented line uses.

/// Removes comments from raw document text.
///
/// Tracks quoted-string state so that `//`, `#` and `/* */` inside strings
/// survive. Escape sequences pass through undecoded.
pub(crate) fn strip_comments(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string: Option<char> = None;
    let mut in_block_comment = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_block_comment {
            if c == '*' && chars.get(i + 1) == Some(&'/') {
                in_block_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        if let Some(quote) = in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                    i += 2;
                    continue;
                }
            } else if c == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }
        match c {
            '"' | '\'' => {
                in_string = Some(c);
                out.push(c);
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                in_block_comment = true;
                i += 2;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '#' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Splits comment-stripped text into non-blank logical lines.
///
/// Inside a quoted string, `\n` and `\t` escapes are decoded into real
/// characters on the current line. A raw line break outside a string
/// terminates the current logical line; inside a string it is kept as
/// string content.
pub(crate) fn split_logical_lines(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_string: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(quote) = in_string {
            if c == '\\' {
                match chars.get(i + 1) {
                    Some('n') => {
                        current.push('\n');
                        i += 2;
                        continue;
                    }
                    Some('t') => {
                        current.push('\t');
                        i += 2;
                        continue;
                    }
                    Some(&next) => {
                        current.push('\\');
                        current.push(next);
                        i += 2;
                        continue;
                    }
                    None => {}
                }
            } else if c == quote {
                in_string = None;
            }
            current.push(c);
            i += 1;
            continue;
        }
        match c {
            '"' | '\'' => {
                in_string = Some(c);
                current.push(c);
            }
            '\n' => {
                lines.push(std::mem::take(&mut current));
            }
            '\r' => {}
            _ => current.push(c),
        }
        i += 1;
    }
    lines.push(current);

    lines.retain(|line| !line.trim().is_empty());
    lines
}

/// Whether indentation uses tabs or a fixed run of spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IndentKind {
    Tab,
    Space,
}

/// The detected indentation style of one document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IndentStyle {
    pub kind: IndentKind,
    pub size: usize,
}

impl IndentStyle {
    /// Inspects the first indented line to pick the document's style.
    ///
    /// A tab anywhere in that line's leading whitespace means tab
    /// indentation with unit size 1; otherwise the exact length of the
    /// leading space run becomes the unit. Unindented documents default to
    /// two spaces.
    pub(crate) fn detect(lines: &[String]) -> IndentStyle {
        for line in lines {
            let leading: String = line
                .chars()
                .take_while(|&c| c == ' ' || c == '\t')
                .collect();
            if leading.is_empty() {
                continue;
            }
            if leading.contains('\t') {
                return IndentStyle {
                    kind: IndentKind::Tab,
                    size: 1,
                };
            }
            return IndentStyle {
                kind: IndentKind::Space,
                size: leading.len(),
            };
        }
        IndentStyle {
            kind: IndentKind::Space,
            size: 2,
        }
    }

    /// Computes the integer indentation level of a line under this style.
    pub(crate) fn level_of(&self, line: &str) -> usize {
        match self.kind {
            IndentKind::Tab => line.chars().take_while(|&c| c == '\t').count(),
            IndentKind::Space => {
                let spaces = line.chars().take_while(|&c| c == ' ').count();
                spaces / self.size.max(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_comments() {
        let text = "a: 1 // trailing\nb: 2 # hash\nc: 3";
        let stripped = strip_comments(text);
        assert_eq!(stripped, "a: 1 \nb: 2 \nc: 3");
    }

    #[test]
    fn test_strip_block_comments() {
        let text = "a: 1 /* gone\nstill gone */ b: 2";
        let stripped = strip_comments(text);
        assert_eq!(stripped, "a: 1  b: 2");
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let text = "url: \"http://example.com\"\ntag: '#one'";
        let stripped = strip_comments(text);
        assert_eq!(stripped, text);
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let text = "a: \"say \\\"hi\\\" // not a comment\"";
        let stripped = strip_comments(text);
        assert_eq!(stripped, text);
    }

    #[test]
    fn test_split_drops_blank_lines() {
        let lines = split_logical_lines("a: 1\n\n   \nb: 2\n");
        assert_eq!(lines, vec!["a: 1", "b: 2"]);
    }

    #[test]
    fn test_split_decodes_newline_escape_in_string() {
        let lines = split_logical_lines("text: \"one\\ntwo\"");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "text: \"one\ntwo\"");
    }

    #[test]
    fn test_split_keeps_other_escapes_undecoded() {
        let lines = split_logical_lines("text: \"a\\\\b\"");
        assert_eq!(lines[0], "text: \"a\\\\b\"");
    }

    #[test]
    fn test_detect_space_style() {
        let lines: Vec<String> = vec!["a: {}".into(), "    b: 1".into()];
        let style = IndentStyle::detect(&lines);
        assert_eq!(style.kind, IndentKind::Space);
        assert_eq!(style.size, 4);
        assert_eq!(style.level_of("        c: 2"), 2);
    }

    #[test]
    fn test_detect_tab_style() {
        let lines: Vec<String> = vec!["a: {}".into(), "\tb: 1".into()];
        let style = IndentStyle::detect(&lines);
        assert_eq!(style.kind, IndentKind::Tab);
        assert_eq!(style.size, 1);
        assert_eq!(style.level_of("\t\tc: 2"), 2);
    }

    #[test]
    fn test_detect_defaults_to_two_spaces() {
        let lines: Vec<String> = vec!["a: 1".into(), "b: 2".into()];
        let style = IndentStyle::detect(&lines);
        assert_eq!(style.kind, IndentKind::Space);
        assert_eq!(style.size, 2);
    }
}
