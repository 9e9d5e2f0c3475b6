// crates/docstyle_definition/src/lib.rs

//! Resolves the marker sets for a (language, documentation-style) pair, so
//! the extraction core never has to know where marker triples come from.
//!
//! Definitions are ini-style texts with one section per language:
//!
//! ```text
//! [java]
//! markers = (/**, *, */)
//! ```
//!
//! A `markers` setting lists one or more `(start, each-line, end)` triples
//! in priority order; an empty component denotes an empty literal.
//! Components are trimmed of surrounding whitespace and may not contain
//! `,` or `)`. The styles shipped with this crate are available through
//! [`DocstyleDefinition::load`]; on-disk `<docstyle>.docstyle` files are
//! loaded with [`DocstyleDefinition::load_from`].

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use doc_marker::MarkerSet;
use once_cell::sync::Lazy;
use regex::Regex;

mod builtin;

pub use builtin::builtin_definition;

/// The resolved marker sets for one language under one documentation
/// style.
#[derive(Debug, Clone)]
pub struct DocstyleDefinition {
    language: String,
    docstyle: String,
    markers: Vec<MarkerSet>,
}

impl DocstyleDefinition {
    /// Resolves `language` against the built-in definition for
    /// `docstyle`. Language and docstyle names are matched
    /// case-insensitively.
    pub fn load(language: &str, docstyle: &str) -> Result<DocstyleDefinition> {
        let definition = match builtin_definition(docstyle) {
            Some(text) => text,
            None => bail!("no built-in documentation style named `{}`", docstyle),
        };
        Self::from_text(definition, language, docstyle)
    }

    /// Resolves `language` against `<dir>/<docstyle>.docstyle`.
    pub fn load_from(dir: &Path, language: &str, docstyle: &str) -> Result<DocstyleDefinition> {
        let path = dir.join(format!("{}.docstyle", docstyle.to_lowercase()));
        let text = fs::read_to_string(&path).with_context(|| {
            format!(
                "no definition file for documentation style `{}` at {}",
                docstyle,
                path.display()
            )
        })?;
        Self::from_text(&text, language, docstyle)
    }

    /// Parses a definition text and picks the section for `language`.
    pub fn from_text(text: &str, language: &str, docstyle: &str) -> Result<DocstyleDefinition> {
        let wanted = language.to_lowercase();
        for (section, markers) in parse_definition(text)? {
            if section == wanted {
                return Ok(DocstyleDefinition {
                    language: wanted,
                    docstyle: docstyle.to_lowercase(),
                    markers,
                });
            }
        }
        bail!(
            "language `{}` is not defined for documentation style `{}`",
            language,
            docstyle
        );
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn docstyle(&self) -> &str {
        &self.docstyle
    }

    /// The marker sets in priority order, ready for catalog construction.
    pub fn markers(&self) -> &[MarkerSet] {
        &self.markers
    }
}

/// Maps a file extension to the language key used by the definitions.
/// Extensions are matched case-insensitively.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "py" => Some("python"),
        "java" => Some("java"),
        "c" | "h" => Some("c"),
        "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some("cpp"),
        "js" | "jsx" | "mjs" | "cjs" => Some("javascript"),
        "rs" => Some("rust"),
        "php" => Some("php"),
        "tcl" => Some("tcl"),
        "vhd" | "vhdl" => Some("vhdl"),
        "f" | "f90" | "f95" | "f03" => Some("fortran"),
        _ => None,
    }
}

// One (start, each-line, end) triple. Components cannot contain `,` or
// parentheses; none of the shipped definitions need either character.
static TRIPLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^,()]*),([^,()]*),([^,()]*)\)").unwrap());

/// Parses a whole definition text into (language, marker sets) pairs,
/// preserving section order and the in-section priority order.
fn parse_definition(text: &str) -> Result<Vec<(String, Vec<MarkerSet>)>> {
    let mut sections: Vec<(String, Vec<MarkerSet>)> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                bail!("empty section name on line {}", index + 1);
            }
            sections.push((name, Vec::new()));
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .with_context(|| format!("malformed setting on line {}: `{}`", index + 1, line))?;
        if key.trim() != "markers" {
            bail!(
                "unknown setting `{}` on line {} (only `markers` is understood)",
                key.trim(),
                index + 1
            );
        }
        let triples = parse_marker_triples(value)
            .with_context(|| format!("malformed `markers` setting on line {}", index + 1))?;
        match sections.last_mut() {
            Some((_, markers)) => markers.extend(triples),
            None => bail!(
                "`markers` setting outside any language section on line {}",
                index + 1
            ),
        }
    }

    Ok(sections)
}

/// Parses the value of a `markers` setting: one or more parenthesised
/// triples separated by commas.
fn parse_marker_triples(value: &str) -> Result<Vec<MarkerSet>> {
    let mut markers = Vec::new();
    let mut consumed_until = 0;

    for captures in TRIPLE_RE.captures_iter(value) {
        let whole = captures.get(0).unwrap();
        // Only commas and whitespace may sit between triples.
        let gap = &value[consumed_until..whole.start()];
        if !gap.chars().all(|c| c == ',' || c.is_whitespace()) {
            bail!("unexpected `{}` between marker triples", gap.trim());
        }
        consumed_until = whole.end();

        markers.push(MarkerSet::new(
            captures[1].trim(),
            captures[2].trim(),
            captures[3].trim(),
        )?);
    }

    if markers.is_empty() {
        bail!("expected at least one `(start, each-line, end)` triple, got `{}`", value.trim());
    }
    let trailing = &value[consumed_until..];
    if !trailing.chars().all(|c| c == ',' || c.is_whitespace()) {
        bail!("unexpected `{}` after marker triples", trailing.trim());
    }

    Ok(markers)
}
