// crates/extract_doc_comments/src/strategies.rs

//! The three line-continuation strategies. Each one receives the cursor
//! just past a matched start literal and either consumes the comment,
//! returning the new cursor and the accumulated body, or reports `None`
//! to signal that no well-formed comment starts here.

use doc_marker::MarkerSet;

/// Successful extraction: the zero-based cursor just past the comment
/// and the body with all marker literals removed.
pub(crate) struct Extracted {
    pub line: usize,
    pub column: usize,
    pub text: String,
}

/// The line content from `column` onward, or empty when the column lies
/// beyond the line or off a character boundary.
fn tail_from(line: &str, column: usize) -> &str {
    line.get(column..).unwrap_or("")
}

fn slice_between(line: &str, start: usize, end: usize) -> &str {
    if start >= end {
        ""
    } else {
        line.get(start..end).unwrap_or("")
    }
}

fn find_from(line: &str, needle: &str, column: usize) -> Option<usize> {
    tail_from(line, column).find(needle).map(|pos| column + pos)
}

/// Simple mode: no each-line literal. Continuation lines are consumed
/// from the column where the start literal began.
pub(crate) fn extract_simple(
    content: &[&str],
    line: usize,
    column: usize,
    markers: &MarkerSet,
) -> Option<Extracted> {
    let align_column = column - markers.start().len();

    match find_from(content[line], markers.end(), column) {
        Some(pos) => Some(Extracted {
            line,
            column: pos + markers.end().len(),
            text: slice_between(content[line], column, pos).to_string(),
        }),
        None => {
            let mut text = tail_from(content[line], column).to_string();
            let mut line = line + 1;

            while line < content.len() {
                match content[line].find(markers.end()) {
                    None => text.push_str(tail_from(content[line], align_column)),
                    Some(pos) => {
                        text.push_str(slice_between(content[line], align_column, pos));
                        return Some(Extracted {
                            line,
                            column: pos + markers.end().len(),
                            text,
                        });
                    }
                }
                line += 1;
            }

            // Unterminated.
            None
        }
    }
}

/// Continuous mode: the each-line literal doubles as the end literal.
/// The first line without it ends the comment, so running out of lines
/// is a positional termination rather than a failure.
pub(crate) fn extract_continuous(
    content: &[&str],
    line: usize,
    column: usize,
    markers: &MarkerSet,
) -> Option<Extracted> {
    let marker_len = markers.each_line().len();

    let mut text = tail_from(content[line], column).to_string();
    let mut line = line + 1;
    while line < content.len() {
        match content[line].find(markers.each_line()) {
            None => {
                return Some(Extracted {
                    line,
                    column: 0,
                    text,
                })
            }
            Some(pos) => text.push_str(tail_from(content[line], pos + marker_len)),
        }
        line += 1;
    }

    // Every remaining line carried the literal. A final line without a
    // terminator ends the comment on that line rather than on the next.
    if content[line - 1].ends_with('\n') {
        Some(Extracted {
            line,
            column: 0,
            text,
        })
    } else {
        let line = line - 1;
        Some(Extracted {
            line,
            column: content[line].len(),
            text,
        })
    }
}

/// Standard mode: continuation lines must carry the each-line literal
/// until the end literal appears. A continuation line with neither
/// violates the layout and abandons the comment.
pub(crate) fn extract_standard(
    content: &[&str],
    line: usize,
    column: usize,
    markers: &MarkerSet,
) -> Option<Extracted> {
    match find_from(content[line], markers.end(), column) {
        Some(pos) => Some(Extracted {
            line,
            column: pos + markers.end().len(),
            text: slice_between(content[line], column, pos).to_string(),
        }),
        None => {
            let mut text = tail_from(content[line], column).to_string();
            let mut line = line + 1;

            while line < content.len() {
                let end_pos = content[line].find(markers.end());
                let each_line_pos = content[line].find(markers.each_line());

                match end_pos {
                    None => {
                        let each_line_pos = each_line_pos?;
                        text.push_str(tail_from(
                            content[line],
                            each_line_pos + markers.each_line().len(),
                        ));
                    }
                    Some(pos) => {
                        // An each-line literal at or past the end literal
                        // contributes nothing to the body.
                        if let Some(each_pos) = each_line_pos {
                            if each_pos + 1 < pos {
                                text.push_str(slice_between(
                                    content[line],
                                    each_pos + markers.each_line().len(),
                                    pos,
                                ));
                            }
                        }
                        return Some(Extracted {
                            line,
                            column: pos + markers.end().len(),
                            text,
                        });
                    }
                }
                line += 1;
            }

            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_marker::MarkerSet;

    fn set(start: &str, each_line: &str, end: &str) -> MarkerSet {
        MarkerSet::new(start, each_line, end).unwrap()
    }

    #[test]
    fn test_simple_single_line() {
        let markers = set("/**", "", "*/");
        let content = ["/** hello */\n"];
        let found = extract_simple(&content, 0, 3, &markers).unwrap();
        assert_eq!(found.text, " hello ");
        assert_eq!((found.line, found.column), (0, 12));
    }

    #[test]
    fn test_simple_multi_line_aligns_to_start_column() {
        let markers = set("\"\"\"", "", "\"\"\"");
        let content = ["  \"\"\"summary\n", "     detail\n", "  \"\"\"\n"];
        let found = extract_simple(&content, 0, 5, &markers).unwrap();
        // Continuation lines are consumed from column 2, where the start
        // literal began.
        assert_eq!(found.text, "summary\n   detail\n");
        assert_eq!((found.line, found.column), (2, 5));
    }

    #[test]
    fn test_simple_unterminated_fails() {
        let markers = set("/**", "", "*/");
        let content = ["/** no end\n", "still no end\n"];
        assert!(extract_simple(&content, 0, 3, &markers).is_none());
    }

    #[test]
    fn test_continuous_stops_at_first_line_without_literal() {
        let markers = set("##", "##", "##");
        let content = ["## first\n", "## second\n", "code\n"];
        let found = extract_continuous(&content, 0, 2, &markers).unwrap();
        assert_eq!(found.text, " first\n second\n");
        assert_eq!((found.line, found.column), (2, 0));
    }

    #[test]
    fn test_continuous_reaching_document_end_with_terminator() {
        let markers = set("##", "##", "##");
        let content = ["## a\n", "## b\n"];
        let found = extract_continuous(&content, 0, 2, &markers).unwrap();
        assert_eq!(found.text, " a\n b\n");
        assert_eq!((found.line, found.column), (2, 0));
    }

    #[test]
    fn test_continuous_reaching_document_end_without_terminator() {
        let markers = set("##", "##", "##");
        let content = ["## a\n", "## b"];
        let found = extract_continuous(&content, 0, 2, &markers).unwrap();
        assert_eq!(found.text, " a\n b");
        // The cursor stays on the last line, at end-of-line.
        assert_eq!((found.line, found.column), (1, 4));
    }

    #[test]
    fn test_standard_strips_each_line_prefixes() {
        let markers = set("/**", "*", "*/");
        let content = ["/**\n", " * line one\n", " * line two\n", " */\n"];
        let found = extract_standard(&content, 0, 3, &markers).unwrap();
        assert_eq!(found.text, "\n line one\n line two\n");
        assert_eq!((found.line, found.column), (3, 3));
    }

    #[test]
    fn test_standard_end_line_keeps_text_between_prefix_and_end() {
        let markers = set("/**", "*", "*/");
        let content = ["/**\n", " * body */\n"];
        let found = extract_standard(&content, 0, 3, &markers).unwrap();
        assert_eq!(found.text, "\n body ");
        assert_eq!((found.line, found.column), (1, 10));
    }

    #[test]
    fn test_standard_unprefixed_continuation_fails() {
        let markers = set("/**", "*", "*/");
        let content = ["/**\n", "not prefixed\n", " */\n"];
        assert!(extract_standard(&content, 0, 3, &markers).is_none());
    }

    #[test]
    fn test_standard_unterminated_fails() {
        let markers = set("/**", "*", "*/");
        let content = ["/**\n", " * dangling\n"];
        assert!(extract_standard(&content, 0, 3, &markers).is_none());
    }
}
