//! Extract/inline operation front doors.
//!
//! Each operation reads the target document once through the host, computes
//! the full replacement text, and applies it as a single whole-document
//! substitution. Conditions classified as warnings (missing decorator or
//! field, unparseable metadata, no surviving style files) are reported
//! through [`Host::notify`] and returned as a skipped [`OpReport`]; hard
//! failures propagate as [`MoverError`] for the caller to surface.
//!
//! [`Host::notify`]: crate::host::Host::notify

mod extract;
mod inline;

pub use extract::{extract_styles, extract_template};
pub use inline::{
    inline_styles, inline_styles_from_stylesheet, inline_template, inline_template_from_html,
};

use std::path::Path;

use crate::error::MoverError;
use crate::host::{Host, Notice};
use crate::locator::Span;
use crate::output::OpReport;
use crate::paths;

/// Reject anything but a component source file before any I/O happens.
pub(crate) fn require_component_source(path: &Path) -> Result<(), MoverError> {
    if paths::is_component_source(path) {
        Ok(())
    } else {
        Err(MoverError::wrong_file_type(
            path.display(),
            "TypeScript component (.ts)",
        ))
    }
}

/// Downgrade warning-class aborts to a skipped report.
///
/// Keeps the invariant that a warning abort has no side effects and does not
/// fail the process, while hard errors keep their code and propagate.
pub(crate) fn finish(
    host: &dyn Host,
    result: Result<OpReport, MoverError>,
) -> Result<OpReport, MoverError> {
    match result {
        Err(err) if err.is_warning() => {
            let message = err.to_string();
            host.notify(Notice::Warning, &message);
            Ok(OpReport::skipped(message))
        }
        other => other,
    }
}

/// Produce a new source text with `span` replaced by `replacement`.
///
/// Always builds a fresh string; the original buffer is never mutated.
pub(crate) fn splice(source: &str, span: Span, replacement: &str) -> String {
    let mut out = String::with_capacity(source.len() - span.len() + replacement.len());
    out.push_str(&source[..span.start]);
    out.push_str(replacement);
    out.push_str(&source[span.end..]);
    out
}
