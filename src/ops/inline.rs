//! Inline operations: read referenced siblings back into the source.

use std::path::Path;

use crate::error::MoverError;
use crate::host::{Host, Notice};
use crate::locator::{self, FieldKind};
use crate::output::OpReport;
use crate::paths;

use super::{finish, require_component_source, splice};

/// Replace a `templateUrl` reference with the referenced file's content as
/// a backtick template literal.
///
/// After the document edit, the host is asked whether to delete the
/// now-inlined sibling; deletion happens only on an explicit yes.
pub fn inline_template(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    require_component_source(target)?;
    finish(host, run_inline_template(host, target))
}

fn run_inline_template(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    let source = host.read_document(target)?;

    let field =
        locator::find_field(&source, FieldKind::TemplateUrl).ok_or(MoverError::FieldNotFound {
            field: FieldKind::TemplateUrl,
        })?;
    let url = locator::string_list(field.raw)
        .into_iter()
        .next()
        .ok_or_else(|| MoverError::parse_failure("templateUrl value is not a quoted path"))?;

    let template_path = paths::resolve_reference(target, &url);
    if !host.exists(&template_path) {
        return Err(MoverError::file_not_found(template_path.display()));
    }
    let content = host.read_document(&template_path)?;

    let literal = format!("template: `{}`", locator::escape_backticks(&content));
    let updated = splice(&source, field.span, &literal);
    host.replace_document(target, &updated)?;

    let mut deleted = Vec::new();
    if host.confirm("Template inlined successfully. Do you want to delete the template file?") {
        host.delete_file(&template_path)?;
        deleted.push(template_path.display().to_string());
        host.notify(Notice::Info, "Template inlined and file deleted.");
    } else {
        host.notify(Notice::Info, "Template inlined successfully.");
    }

    Ok(OpReport::changed(
        format!("Template inlined from {}", template_path.display()),
        vec![template_path.display().to_string()],
    )
    .with_deleted(deleted))
}

/// Replace a `styleUrl`/`styleUrls` reference with the referenced files'
/// contents as backtick literals.
///
/// Missing referenced files are skipped silently; the operation aborts with
/// a warning only when none survive. A single combined confirmation gates
/// deletion of every inlined file.
pub fn inline_styles(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    require_component_source(target)?;
    finish(host, run_inline_styles(host, target))
}

fn run_inline_styles(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    let source = host.read_document(target)?;

    let field =
        locator::find_field(&source, FieldKind::StyleUrls).ok_or(MoverError::FieldNotFound {
            field: FieldKind::StyleUrls,
        })?;
    let urls = locator::string_list(field.raw);
    if urls.is_empty() {
        return Err(MoverError::parse_failure(
            "no quoted style paths in styleUrls value",
        ));
    }

    let mut contents = Vec::new();
    let mut inlined = Vec::new();
    for url in &urls {
        let style_path = paths::resolve_reference(target, url);
        if !host.exists(&style_path) {
            tracing::debug!(path = %style_path.display(), "skipping missing stylesheet");
            continue;
        }
        contents.push(host.read_document(&style_path)?);
        inlined.push(style_path);
    }
    if contents.is_empty() {
        return Err(MoverError::NoStylesFound);
    }

    let literal = if contents.len() == 1 {
        format!("styles: `\n{}\n`", locator::escape_backticks(&contents[0]))
    } else {
        let escaped: Vec<String> = contents
            .iter()
            .map(|content| locator::escape_backticks(content))
            .collect();
        format!("styles: [ `{}` ]", escaped.join("`,\n`"))
    };
    let updated = splice(&source, field.span, &literal);
    host.replace_document(target, &updated)?;

    let mut deleted = Vec::new();
    if host.confirm("Styles inlined successfully. Do you want to delete the style files?") {
        for style_path in &inlined {
            host.delete_file(style_path)?;
        }
        deleted = inlined
            .iter()
            .map(|style_path| style_path.display().to_string())
            .collect();
        host.notify(Notice::Info, "Styles inlined and files deleted.");
    } else {
        host.notify(Notice::Info, "Styles inlined successfully.");
    }

    let siblings: Vec<String> = inlined
        .iter()
        .map(|style_path| style_path.display().to_string())
        .collect();
    Ok(OpReport::changed(
        format!("Inlined {} style file(s)", inlined.len()),
        siblings,
    )
    .with_deleted(deleted))
}

// ============================================================================
// Path-derived entry points
// ============================================================================

/// Inline a template starting from the `.html` sibling: derive the
/// companion `.ts` source and run [`inline_template`] on it.
pub fn inline_template_from_html(host: &dyn Host, template: &Path) -> Result<OpReport, MoverError> {
    if !paths::is_template_file(template) {
        return Err(MoverError::wrong_file_type(
            template.display(),
            "HTML template (.html)",
        ));
    }
    let companion = paths::companion_source(template);
    if !host.exists(&companion) {
        return Err(MoverError::file_not_found(companion.display()));
    }
    inline_template(host, &companion)
}

/// Inline styles starting from a stylesheet file: derive the companion
/// `.ts` source and run [`inline_styles`] on it.
pub fn inline_styles_from_stylesheet(
    host: &dyn Host,
    stylesheet: &Path,
) -> Result<OpReport, MoverError> {
    if !paths::is_stylesheet_file(stylesheet) {
        return Err(MoverError::wrong_file_type(
            stylesheet.display(),
            "CSS, SCSS, SASS, or LESS stylesheet",
        ));
    }
    let companion = paths::companion_source(stylesheet);
    if !host.exists(&companion) {
        return Err(MoverError::file_not_found(companion.display()));
    }
    inline_styles(host, &companion)
}

// ============================================================================
// Tests
// ============================================================================
