// crates/doc_marker/src/lib.rs

//! The marker vocabulary shared by the rest of the workspace: a
//! documentation comment is delimited by a *start* literal, an optional
//! *each-line* literal prefixing continuation lines, and an *end* literal.

use anyhow::{bail, Result};
use std::fmt;

/// How continuation lines of a doc-comment are consumed. Resolved once
/// from the marker literals when a [`MarkerSet`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionMode {
    /// No each-line literal; continuation lines align to the column where
    /// the start literal began.
    Simple,
    /// The each-line literal doubles as the end literal: every further
    /// line carrying it continues the comment, the first line without it
    /// terminates it.
    Continuous,
    /// Continuation lines must carry the each-line literal until the end
    /// literal appears.
    Standard,
}

/// Classifies a marker pair into its extraction mode.
///
/// This is a pure function of the literals; [`MarkerSet::new`] stores the
/// result so occurrences can dispatch on the tag without re-deriving it.
pub fn resolve_mode(each_line: &str, end: &str) -> ExtractionMode {
    if each_line.is_empty() {
        ExtractionMode::Simple
    } else if each_line == end {
        ExtractionMode::Continuous
    } else {
        ExtractionMode::Standard
    }
}

/// One doc-comment style: the (start, each-line, end) literal triple.
///
/// The start literal is never empty; the each-line literal may be. Marker
/// sets are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    start: String,
    each_line: String,
    end: String,
    mode: ExtractionMode,
}

impl MarkerSet {
    pub fn new(
        start: impl Into<String>,
        each_line: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<MarkerSet> {
        let start = start.into();
        if start.is_empty() {
            bail!("a marker set requires a non-empty start literal");
        }
        let each_line = each_line.into();
        let end = end.into();
        let mode = resolve_mode(&each_line, &end);
        Ok(MarkerSet {
            start,
            each_line,
            end,
            mode,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn each_line(&self) -> &str {
        &self.each_line
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.start, self.each_line, self.end)
    }
}
