// crates/extract_documentation/src/main.rs

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Library dependencies.
use docstyle_definition::{language_for_extension, DocstyleDefinition};
use extract_doc_comments::{extract_doc_comments, MarkerCatalog};

fn main() -> Result<()> {
    let matches = Command::new("extract_documentation")
        .version("0.1.0")
        .about("Extracts documentation comments from source files")
        .arg(
            Arg::new("file")
                .long("file")
                .num_args(1)
                .help("Source file to scan"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .num_args(1)
                .help("Directory tree to scan for sources with a known language"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .num_args(1)
                .help("Language key to use instead of deriving it from the file extension"),
        )
        .arg(
            Arg::new("docstyle")
                .long("docstyle")
                .num_args(1)
                .default_value("default")
                .help("Documentation style whose marker definitions to use"),
        )
        .arg(
            Arg::new("definitions_dir")
                .long("definitions-dir")
                .num_args(1)
                .help("Load docstyle definition files from this directory instead of the built-ins"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let docstyle = matches.get_one::<String>("docstyle").unwrap();
    let forced_language = matches.get_one::<String>("language").map(String::as_str);
    let definitions_dir = matches.get_one::<String>("definitions_dir").map(PathBuf::from);
    let verbose = *matches.get_one::<bool>("verbose").unwrap();

    match (
        matches.get_one::<String>("file"),
        matches.get_one::<String>("dir"),
    ) {
        (Some(file), None) => {
            let path = PathBuf::from(file);
            let language = resolve_language(&path, forced_language).with_context(|| {
                format!(
                    "cannot determine the language of {} (pass --language)",
                    path.display()
                )
            })?;
            let count = extract_from_file(
                &path,
                &language,
                docstyle,
                definitions_dir.as_deref(),
                verbose,
            )?;
            if verbose {
                eprintln!("[VERBOSE] Extracted {} doc-comment(s)", count);
            }
        }
        (None, Some(dir)) => {
            let count = extract_from_dir(
                Path::new(dir),
                forced_language,
                docstyle,
                definitions_dir.as_deref(),
                verbose,
            );
            if verbose {
                eprintln!("[VERBOSE] Extracted {} doc-comment(s) in total", count);
            }
        }
        _ => bail!("exactly one of --file or --dir is required"),
    }

    Ok(())
}

/// The language key for `path`: the forced one if given, otherwise the
/// one registered for the file extension.
fn resolve_language(path: &Path, forced: Option<&str>) -> Option<String> {
    match forced {
        Some(language) => Some(language.to_string()),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(language_for_extension)
            .map(str::to_string),
    }
}

fn load_definition(
    language: &str,
    docstyle: &str,
    definitions_dir: Option<&Path>,
) -> Result<DocstyleDefinition> {
    match definitions_dir {
        Some(dir) => DocstyleDefinition::load_from(dir, language, docstyle),
        None => DocstyleDefinition::load(language, docstyle),
    }
}

/// Extracts and prints every doc-comment in one file. Returns how many
/// were found.
fn extract_from_file(
    path: &Path,
    language: &str,
    docstyle: &str,
    definitions_dir: Option<&Path>,
    verbose: bool,
) -> Result<usize> {
    let definition = load_definition(language, docstyle, definitions_dir)?;
    let source = fs::read_to_string(path)
        .with_context(|| format!("error reading {}", path.display()))?;
    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    let catalog = MarkerCatalog::new(definition.markers())?;

    let mut count = 0;
    for comment in extract_doc_comments(&lines, &catalog) {
        println!("-- {}:{} {}", path.display(), comment.range, comment.markers);
        print!("{}", comment.text);
        if !comment.text.ends_with('\n') {
            println!();
        }
        count += 1;
    }
    if verbose {
        eprintln!(
            "[VERBOSE] {}: {} doc-comment(s) as {} ({} docstyle)",
            path.display(),
            count,
            language,
            docstyle
        );
    }
    Ok(count)
}

/// Walks a directory tree and extracts from every file whose language is
/// known. Files that cannot be read or that the chosen docstyle does not
/// cover are skipped rather than failing the whole walk.
fn extract_from_dir(
    dir: &Path,
    forced_language: Option<&str>,
    docstyle: &str,
    definitions_dir: Option<&Path>,
    verbose: bool,
) -> usize {
    let mut total = 0;
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.into_path();
        let language = match resolve_language(&path, forced_language) {
            Some(language) => language,
            None => {
                if verbose {
                    eprintln!("[VERBOSE] Skipping {} (unknown language)", path.display());
                }
                continue;
            }
        };
        match extract_from_file(&path, &language, docstyle, definitions_dir, verbose) {
            Ok(count) => total += count,
            Err(err) => {
                if verbose {
                    eprintln!("[VERBOSE] Skipping {}: {:#}", path.display(), err);
                }
            }
        }
    }
    total
}
