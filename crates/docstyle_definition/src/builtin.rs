// crates/docstyle_definition/src/builtin.rs

//! The definition texts shipped with the crate. Kept in the same format
//! as on-disk `.docstyle` files so both paths share one parser.

/// Returns the built-in definition text for `docstyle`, matched
/// case-insensitively, or `None` when no such style ships with the crate.
pub fn builtin_definition(docstyle: &str) -> Option<&'static str> {
    match docstyle.to_lowercase().as_str() {
        "default" => Some(DEFAULT),
        "doxygen" => Some(DOXYGEN),
        _ => None,
    }
}

static DEFAULT: &str = r#"# Plain per-language documentation comments.

[python]
markers = (""", , """), (''', , ''')

[java]
markers = (/**, *, */)

[c]
markers = (/**, *, */)

[cpp]
markers = (/**, *, */), (///, ///, ///)

[javascript]
markers = (/**, *, */)

[rust]
markers = (///, ///, ///), (//!, //!, //!)
"#;

static DOXYGEN: &str = r#"# Marker styles understood by the doxygen tool.

[c]
markers = (/**, *, */), (/*!, *, */), (///, ///, ///), (//!, //!, //!)

[cpp]
markers = (/**, *, */), (/*!, *, */), (///, ///, ///), (//!, //!, //!)

[java]
markers = (/**, *, */), (/*!, *, */)

[javascript]
markers = (/**, *, */), (/*!, *, */)

[php]
markers = (/**, *, */), (/*!, *, */)

[python]
markers = ("""!, , """), (##, ##, ##)

[tcl]
markers = (##, ##, ##)

[vhdl]
markers = (--!, --!, --!)

[fortran]
markers = (!>, !!, !!)
"#;
