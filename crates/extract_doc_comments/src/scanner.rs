// crates/extract_doc_comments/src/scanner.rs

use doc_marker::{ExtractionMode, MarkerSet};
use text_span::{TextPosition, TextRange};

use crate::catalog::MarkerCatalog;
use crate::strategies::{extract_continuous, extract_simple, extract_standard, Extracted};

/// One extracted documentation comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// The comment body with all marker literals removed. Whitespace is
    /// kept as written.
    pub text: String,
    /// The marker set that matched this occurrence.
    pub markers: MarkerSet,
    /// The exact span of the whole delimited comment, literals included.
    pub range: TextRange,
}

/// Returns a lazy iterator over every documentation comment in `content`.
///
/// `content` is an ordered sequence of source lines, each including its
/// line terminator except possibly the last. Comments are yielded in
/// document order; their ranges never overlap. Re-invoking with the same
/// inputs yields the same sequence.
pub fn extract_doc_comments<'a>(
    content: &'a [&'a str],
    catalog: &'a MarkerCatalog,
) -> DocComments<'a> {
    DocComments {
        content,
        catalog,
        line: 0,
        column: 0,
    }
}

/// The scan driver. Owns the only mutable state of a scan: the cursor.
pub struct DocComments<'a> {
    content: &'a [&'a str],
    catalog: &'a MarkerCatalog,
    line: usize,
    column: usize,
}

impl<'a> Iterator for DocComments<'a> {
    type Item = DocComment;

    fn next(&mut self) -> Option<DocComment> {
        let catalog = self.catalog;

        while self.line < self.content.len() {
            let begin = match catalog.find_begin(self.content[self.line], self.column) {
                Some(begin) => begin,
                None => {
                    self.line += 1;
                    self.column = 0;
                    continue;
                }
            };

            // Move past the start literal before trying candidates, so a
            // failed occurrence cannot be matched again.
            self.column = begin.end;
            let start_position = TextPosition::new(self.line + 1, begin.start + 1);

            for markers in begin.sets {
                let attempt = match markers.mode() {
                    ExtractionMode::Simple => {
                        extract_simple(self.content, self.line, self.column, markers)
                    }
                    ExtractionMode::Continuous => {
                        extract_continuous(self.content, self.line, self.column, markers)
                    }
                    ExtractionMode::Standard => {
                        extract_standard(self.content, self.line, self.column, markers)
                    }
                };

                if let Some(Extracted { line, column, text }) = attempt {
                    self.line = line;
                    self.column = column;
                    let end_position = TextPosition::new(line + 1, column + 1);
                    return Some(DocComment {
                        text,
                        markers: markers.clone(),
                        range: TextRange::new(start_position, end_position),
                    });
                }
            }
        }

        None
    }
}
