// crates/extract_doc_comments/src/catalog.rs

use anyhow::{bail, Result};
use doc_marker::MarkerSet;
use regex::Regex;

/// A prepared, priority-ordered collection of marker sets.
///
/// Building the catalog groups the sets by start literal (sets sharing a
/// start literal keep their relative order and are tried in that order at
/// each occurrence) and compiles one alternation regex over all distinct
/// start literals. The regex crate's leftmost-first alternation keeps
/// ties at the same offset resolved by catalog priority rather than by
/// literal length.
pub struct MarkerCatalog {
    groups: Vec<(String, Vec<MarkerSet>)>,
    begin_re: Regex,
}

impl MarkerCatalog {
    pub fn new(markers: &[MarkerSet]) -> Result<MarkerCatalog> {
        if markers.is_empty() {
            bail!("a marker catalog requires at least one marker set");
        }

        let mut groups: Vec<(String, Vec<MarkerSet>)> = Vec::new();
        for set in markers {
            match groups.iter_mut().find(|(start, _)| start == set.start()) {
                Some((_, sets)) => sets.push(set.clone()),
                None => groups.push((set.start().to_string(), vec![set.clone()])),
            }
        }

        let pattern = groups
            .iter()
            .map(|(start, _)| regex::escape(start))
            .collect::<Vec<_>>()
            .join("|");
        let begin_re = Regex::new(&pattern)?;

        Ok(MarkerCatalog { groups, begin_re })
    }

    /// Finds the earliest start-literal occurrence in `line` at or after
    /// `column`, together with every marker set registered under the
    /// matched literal, in priority order.
    pub(crate) fn find_begin<'c>(&'c self, line: &str, column: usize) -> Option<BeginMatch<'c>> {
        if column > line.len() {
            return None;
        }
        let found = self.begin_re.find_at(line, column)?;
        let sets = self
            .groups
            .iter()
            .find(|(start, _)| start == found.as_str())
            .map(|(_, sets)| sets.as_slice())?;
        Some(BeginMatch {
            start: found.start(),
            end: found.end(),
            sets,
        })
    }
}

/// One start-literal occurrence: its byte span within the line and the
/// candidate marker sets registered under the literal.
pub(crate) struct BeginMatch<'c> {
    pub start: usize,
    pub end: usize,
    pub sets: &'c [MarkerSet],
}
