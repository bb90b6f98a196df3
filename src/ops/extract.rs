//! Extract operations: move inline literals out to sibling files.

use std::path::Path;

use crate::error::MoverError;
use crate::host::{Host, Notice};
use crate::locator::{self, FieldKind};
use crate::metadata;
use crate::output::OpReport;
use crate::paths;

use super::{finish, require_component_source, splice};

/// Move an inline `template` literal out to a `.html` sibling and replace
/// it with a `templateUrl` reference.
pub fn extract_template(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    require_component_source(target)?;
    finish(host, run_extract_template(host, target))
}

fn run_extract_template(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    let source = host.read_document(target)?;

    let (_, block) = locator::component_block(&source).ok_or(MoverError::AnnotationNotFound)?;
    let stripped = locator::strip_imports(block);
    let parsed = metadata::parse_metadata(&stripped)?;
    let value = parsed.get("template").ok_or(MoverError::FieldNotFound {
        field: FieldKind::Template,
    })?;
    let template = value.as_joined_string().ok_or_else(|| {
        MoverError::parse_failure("template value is not a string or array of strings")
    })?;
    let template = template.trim().to_string();

    // Located independently of the parse so the span covers the original
    // assignment exactly as written.
    let field = locator::find_field(&source, FieldKind::Template).ok_or_else(|| {
        MoverError::parse_failure("template assignment is not an isolatable literal")
    })?;

    let name = paths::base_name(target);
    let sibling = paths::sibling_path(target, paths::TEMPLATE_EXTENSION);
    let reference = format!("templateUrl: './{}.{}'", name, paths::TEMPLATE_EXTENSION);
    let updated = splice(&source, field.span, &reference);

    host.write_file(&sibling, &template)?;
    host.replace_document(target, &updated)?;

    let message = format!("Template extracted to {}.{}", name, paths::TEMPLATE_EXTENSION);
    host.notify(Notice::Info, &message);
    Ok(OpReport::changed(
        message,
        vec![sibling.display().to_string()],
    ))
}

/// Move an inline `styles` literal (or list) out to a sibling stylesheet
/// and replace it with a `styleUrls` reference.
///
/// The sibling's extension comes from the project's build configuration,
/// falling back to `css`.
pub fn extract_styles(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    require_component_source(target)?;
    finish(host, run_extract_styles(host, target))
}

fn run_extract_styles(host: &dyn Host, target: &Path) -> Result<OpReport, MoverError> {
    let source = host.read_document(target)?;

    let field = locator::find_field(&source, FieldKind::Styles).ok_or(MoverError::FieldNotFound {
        field: FieldKind::Styles,
    })?;
    let content = locator::normalize_literal(field.raw)
        .ok_or_else(|| MoverError::parse_failure("styles value is not a recognized literal"))?;

    let directory = target.parent().unwrap_or_else(|| Path::new("."));
    let extension = host
        .style_extension(directory)
        .unwrap_or_else(|| paths::DEFAULT_STYLE_EXTENSION.to_string());

    let name = paths::base_name(target);
    let sibling = paths::sibling_path(target, &extension);
    let reference = format!("styleUrls: ['./{}.{}']", name, extension);
    let updated = splice(&source, field.span, &reference);

    host.write_file(&sibling, &content)?;
    host.replace_document(target, &updated)?;

    let message = format!("Styles extracted to {}.{}", name, extension);
    host.notify(Notice::Info, &message);
    Ok(OpReport::changed(
        message,
        vec![sibling.display().to_string()],
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::MemoryHost;
    use crate::output::OpStatus;

    const COMPONENT_WITH_TEMPLATE: &str = "\
import { Component } from '@angular/core';

@Component({
  selector: 'app-hero',
  template: `<div>Hi</div>`,
  styles: ['.a{color:red}', '.b{color:blue}']
})
export class HeroComponent {}
";

    mod extract_template_op {
        use super::*;

        #[test]
        fn moves_literal_to_html_sibling() {
            let host = MemoryHost::new().with_file("app/hero.component.ts", COMPONENT_WITH_TEMPLATE);
            let report =
                extract_template(&host, Path::new("app/hero.component.ts")).unwrap();

            assert_eq!(report.status, OpStatus::Changed);
            assert_eq!(
                host.file("app/hero.component.html").as_deref(),
                Some("<div>Hi</div>")
            );
            let updated = host.file("app/hero.component.ts").unwrap();
            assert!(updated.contains("templateUrl: './hero.component.html'"));
            assert!(!updated.contains("template: `"));
        }

        #[test]
        fn reports_created_sibling_and_notifies() {
            let host = MemoryHost::new().with_file("hero.ts", COMPONENT_WITH_TEMPLATE);
            let report = extract_template(&host, Path::new("hero.ts")).unwrap();

            assert_eq!(report.siblings, vec!["hero.html"]);
            let notices = host.notices();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].0, Notice::Info);
            assert!(notices[0].1.contains("hero.html"));
        }

        #[test]
        fn array_template_joins_with_newlines() {
            let source = "@Component({ template: ['<div>', '</div>'] })\nclass X {}";
            let host = MemoryHost::new().with_file("x.ts", source);
            extract_template(&host, Path::new("x.ts")).unwrap();
            assert_eq!(host.file("x.html").as_deref(), Some("<div>\n</div>"));
        }

        #[test]
        fn imports_entry_does_not_break_parsing() {
            let source = "@Component({\n  imports: [CommonModule],\n  template: `<b>ok</b>`\n})\nclass X {}";
            let host = MemoryHost::new().with_file("x.ts", source);
            let report = extract_template(&host, Path::new("x.ts")).unwrap();
            assert_eq!(report.status, OpStatus::Changed);
            assert_eq!(host.file("x.html").as_deref(), Some("<b>ok</b>"));
        }

        #[test]
        fn no_template_field_warns_and_writes_nothing() {
            let source = "@Component({ selector: 'app-x' })\nclass X {}";
            let host = MemoryHost::new().with_file("x.ts", source);
            let report = extract_template(&host, Path::new("x.ts")).unwrap();

            assert_eq!(report.status, OpStatus::Skipped);
            assert!(host.file("x.html").is_none());
            assert_eq!(host.file("x.ts").as_deref(), Some(source));
            assert_eq!(host.warnings().len(), 1);
            assert!(host.warnings()[0].contains("no inline template"));
        }

        #[test]
        fn no_decorator_warns_and_writes_nothing() {
            let source = "export class Plain {}";
            let host = MemoryHost::new().with_file("x.ts", source);
            let report = extract_template(&host, Path::new("x.ts")).unwrap();

            assert_eq!(report.status, OpStatus::Skipped);
            assert!(host.warnings()[0].contains("@Component"));
            assert_eq!(host.file("x.ts").as_deref(), Some(source));
        }

        #[test]
        fn executable_metadata_fails_closed() {
            let source =
                "@Component({ template: `<b/>`, providers: [provideHttpClient()] })\nclass X {}";
            let host = MemoryHost::new().with_file("x.ts", source);
            let report = extract_template(&host, Path::new("x.ts")).unwrap();

            assert_eq!(report.status, OpStatus::Skipped);
            assert!(host.warnings()[0].contains("parse"));
            assert!(host.file("x.html").is_none());
            assert_eq!(host.file("x.ts").as_deref(), Some(source));
        }

        #[test]
        fn wrong_file_type_is_rejected_before_reading() {
            let host = MemoryHost::new();
            let err = extract_template(&host, Path::new("hero.component.html")).unwrap_err();
            assert!(matches!(err, MoverError::WrongFileType { .. }));
            assert!(host.notices().is_empty());
        }
    }

    mod extract_styles_op {
        use super::*;

        #[test]
        fn bracketed_list_joins_into_css_sibling() {
            let host = MemoryHost::new().with_file("app/hero.component.ts", COMPONENT_WITH_TEMPLATE);
            let report = extract_styles(&host, Path::new("app/hero.component.ts")).unwrap();

            assert_eq!(report.status, OpStatus::Changed);
            assert_eq!(
                host.file("app/hero.component.css").as_deref(),
                Some(".a{color:red}\n.b{color:blue}")
            );
            let updated = host.file("app/hero.component.ts").unwrap();
            assert!(updated.contains("styleUrls: ['./hero.component.css']"));
            assert!(!updated.contains("styles: ["));
        }

        #[test]
        fn configured_extension_names_the_sibling() {
            let source = "@Component({ styles: `h1 { color: red }` })\nclass X {}";
            let host = MemoryHost::new()
                .with_style_extension("scss")
                .with_file("x.ts", source);
            extract_styles(&host, Path::new("x.ts")).unwrap();

            assert_eq!(host.file("x.scss").as_deref(), Some("h1 { color: red }"));
            assert!(host
                .file("x.ts")
                .unwrap()
                .contains("styleUrls: ['./x.scss']"));
        }

        #[test]
        fn no_styles_field_warns_and_writes_nothing() {
            let source = "@Component({ template: `<b/>` })\nclass X {}";
            let host = MemoryHost::new().with_file("x.ts", source);
            let report = extract_styles(&host, Path::new("x.ts")).unwrap();

            assert_eq!(report.status, OpStatus::Skipped);
            assert!(host.warnings()[0].contains("no inline styles"));
            assert_eq!(host.file("x.ts").as_deref(), Some(source));
            assert!(host.file("x.css").is_none());
        }

        #[test]
        fn single_quoted_literal_extracts() {
            let source = "@Component({ styles: '.a{}' })\nclass X {}";
            let host = MemoryHost::new().with_file("x.ts", source);
            extract_styles(&host, Path::new("x.ts")).unwrap();
            assert_eq!(host.file("x.css").as_deref(), Some(".a{}"));
        }
    }
}
