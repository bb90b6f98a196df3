//! Project build-configuration lookup.
//!
//! Extract-Styles names its sibling after the stylesheet dialect the
//! project is built with. The dialect is read from `angular.json`
//! (first project, `architect.build.options.styles[0]`); a missing or
//! unreadable configuration falls back to the caller's default.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::paths::STYLE_EXTENSIONS;

/// Find the configured stylesheet extension for a component directory.
///
/// Walks up from `start_dir` to the nearest `angular.json` and reads the
/// first project's build styles entry. Returns `None` when no configuration
/// is found or it does not name a recognized stylesheet extension.
pub fn style_extension(start_dir: &Path) -> Option<String> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join("angular.json");
        if candidate.is_file() {
            return read_style_extension(&candidate);
        }
    }
    None
}

fn read_style_extension(path: &Path) -> Option<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "unreadable angular.json");
            return None;
        }
    };
    let json: Value = match serde_json::from_str(&text) {
        Ok(json) => json,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "invalid angular.json");
            return None;
        }
    };
    extension_from_config(&json)
}

/// Pull the stylesheet extension out of a parsed `angular.json` document.
fn extension_from_config(json: &Value) -> Option<String> {
    let projects = json.get("projects")?.as_object()?;
    let (_, project) = projects.iter().next()?;
    let style = project
        .get("architect")?
        .get("build")?
        .get("options")?
        .get("styles")?
        .get(0)?
        .as_str()?;
    let extension = style.rsplit('.').next()?;
    if extension != style && STYLE_EXTENSIONS.contains(&extension) {
        Some(extension.to_string())
    } else {
        None
    }
}
