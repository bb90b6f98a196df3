//! Sibling and companion path derivation.
//!
//! The naming convention is strict: a sibling file always shares the source
//! file's base name, with the source extension replaced by the target
//! extension. Reference paths inside the metadata block are resolved
//! relative to the source file's directory.

use std::path::{Path, PathBuf};

/// Extension of component source files.
pub const SOURCE_EXTENSION: &str = "ts";

/// Extension of extracted template siblings.
pub const TEMPLATE_EXTENSION: &str = "html";

/// Fallback stylesheet extension when no project configuration is found.
pub const DEFAULT_STYLE_EXTENSION: &str = "css";

/// Stylesheet extensions recognized for the from-stylesheet entry point.
pub const STYLE_EXTENSIONS: [&str; 4] = ["css", "scss", "sass", "less"];

/// Whether the path is a component source file (`.ts`).
pub fn is_component_source(path: &Path) -> bool {
    has_extension(path, SOURCE_EXTENSION)
}

/// Whether the path is a template file (`.html`).
pub fn is_template_file(path: &Path) -> bool {
    has_extension(path, TEMPLATE_EXTENSION)
}

/// Whether the path is a recognized stylesheet file.
pub fn is_stylesheet_file(path: &Path) -> bool {
    STYLE_EXTENSIONS.iter().any(|ext| has_extension(path, ext))
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension().is_some_and(|ext| ext == expected)
}

/// The source file's base name without extension.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sibling path: same directory, same base name, the given extension.
pub fn sibling_path(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}

/// Companion component source for a template/stylesheet file.
pub fn companion_source(path: &Path) -> PathBuf {
    path.with_extension(SOURCE_EXTENSION)
}

/// Resolve a metadata reference (`'./name.html'`) against the source
/// file's directory.
pub fn resolve_reference(source: &Path, reference: &str) -> PathBuf {
    let reference = reference.strip_prefix("./").unwrap_or(reference);
    match source.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(reference),
        _ => PathBuf::from(reference),
    }
}
