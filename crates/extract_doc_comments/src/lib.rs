// crates/extract_doc_comments/src/lib.rs

//! Marker-driven extraction of documentation comments from source text.
//!
//! The input is an ordered sequence of source lines (each keeping its own
//! line terminator, except possibly the last) and a priority-ordered list
//! of marker sets. The scanner walks the lines once, locates every
//! occurrence of a start literal, consumes the comment according to the
//! marker set's extraction mode, and yields one [`DocComment`] per
//! well-formed occurrence, lazily, in document order.
//!
//! Malformed or unterminated comments are not errors: the occurrence is
//! treated as plain text and scanning resumes right after the start
//! literal. All columns are UTF-8 byte offsets, so slicing the original
//! line at a record's range reproduces the delimited comment exactly.
//!
//! ```
//! use doc_marker::MarkerSet;
//! use extract_doc_comments::{extract_doc_comments, MarkerCatalog};
//!
//! let markers = [MarkerSet::new("/**", "", "*/").unwrap()];
//! let catalog = MarkerCatalog::new(&markers).unwrap();
//! let content = ["/** hello */\n"];
//!
//! let comments: Vec<_> = extract_doc_comments(&content, &catalog).collect();
//! assert_eq!(comments.len(), 1);
//! assert_eq!(comments[0].text, " hello ");
//! ```

mod catalog;
mod scanner;
mod strategies;

pub use catalog::MarkerCatalog;
pub use scanner::{extract_doc_comments, DocComment, DocComments};

// Re-export the marker and coordinate vocabulary so downstream checkers
// only need this crate.
pub use doc_marker::{ExtractionMode, MarkerSet};
pub use text_span::{TextPosition, TextRange};
