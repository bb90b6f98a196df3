//! Field location inside component source text.
//!
//! This module finds the `@Component({...})` metadata block and individual
//! template/style fields with a single pattern pass over the whole source.
//! Literal values are recognized in four shapes: single-quoted,
//! double-quoted, backtick (multi-line), and a bracketed list of any of
//! those.
//!
//! This is deliberately not a TypeScript parser. Balanced-delimiter spans are
//! approximated with character-class patterns, so a field value containing
//! unbalanced brackets or a nested quote of the same kind as its outer
//! delimiter yields "not found" (or a truncated block that subsequently
//! fails literal parsing) rather than a partial match being rewritten.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Patterns
// ============================================================================

/// The `@Component(...)` argument object, non-greedy.
static COMPONENT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)@Component\(\s*(\{.*?\})\s*\)").expect("valid pattern"));

/// `template: <literal>` where the literal is a string or bracketed list.
static TEMPLATE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\btemplate\s*:\s*(\[[^\]]*\]|`[^`]*`|"[^"]*"|'[^']*')"#)
        .expect("valid pattern")
});

/// `styles: <literal>` where the literal is a string or bracketed list.
static STYLES_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\bstyles\s*:\s*(\[[^\]]*\]|`[^`]*`|"[^"]*"|'[^']*')"#)
        .expect("valid pattern")
});

/// `templateUrl: <quoted path>`.
static TEMPLATE_URL_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\btemplateUrl\s*:\s*([`'"][^`'"]+[`'"])"#).expect("valid pattern")
});

/// `styleUrl: <literal>` or `styleUrls: <literal>`.
static STYLE_URLS_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\bstyleUrls?\s*:\s*(\[[^\]]*\]|`[^`]*`|"[^"]*"|'[^']*')"#)
        .expect("valid pattern")
});

/// One quoted string inside a literal or bracketed list.
static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[`'"]([^`'"]+)[`'"]"#).expect("valid pattern"));

/// An `imports: [...]` metadata entry (always contains identifiers).
static IMPORTS_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bimports\s*:\s*\[[^\]]*\]\s*,?").expect("valid pattern"));

// ============================================================================
// Core Types
// ============================================================================

/// Byte offsets into source text, half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "Span start ({}) must be <= end ({})",
            start,
            end
        );
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A recognized metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Inline template literal (`template`).
    Template,
    /// Inline styles literal or list (`styles`).
    Styles,
    /// External template reference (`templateUrl`).
    TemplateUrl,
    /// External style references (`styleUrl` / `styleUrls`).
    StyleUrls,
}

impl FieldKind {
    /// The pattern locating this field's assignment in source text.
    fn pattern(&self) -> &'static Regex {
        match self {
            FieldKind::Template => &TEMPLATE_FIELD,
            FieldKind::Styles => &STYLES_FIELD,
            FieldKind::TemplateUrl => &TEMPLATE_URL_FIELD,
            FieldKind::StyleUrls => &STYLE_URLS_FIELD,
        }
    }

    /// The warning message reported when this field is absent.
    pub fn missing_message(&self) -> &'static str {
        match self {
            FieldKind::Template => "no inline template found in this component",
            FieldKind::Styles => "no inline styles found in this component",
            FieldKind::TemplateUrl => "no templateUrl found in this component",
            FieldKind::StyleUrls => "no styleUrls found in this component",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Template => "template",
            FieldKind::Styles => "styles",
            FieldKind::TemplateUrl => "templateUrl",
            FieldKind::StyleUrls => "styleUrls",
        };
        write!(f, "{}", name)
    }
}

/// Result of locating one field: the span of the whole `name: value`
/// assignment and the raw value text with its original quoting intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch<'a> {
    /// Which field matched.
    pub field: FieldKind,
    /// The raw literal text, delimiters included.
    pub raw: &'a str,
    /// Byte span of the full assignment, suitable for replacement.
    pub span: Span,
}

// ============================================================================
// Location
// ============================================================================

/// Isolate the `@Component(...)` argument object.
///
/// Returns the span and text of the object literal (braces included), or
/// `None` if the source carries no recognizable component decorator.
pub fn component_block(source: &str) -> Option<(Span, &str)> {
    let caps = COMPONENT_BLOCK.captures(source)?;
    let group = caps.get(1)?;
    Some((Span::new(group.start(), group.end()), group.as_str()))
}

/// Locate one field's assignment in the source text.
///
/// The match spans the entire `name: value` assignment; `raw` is the value
/// with its original quoting. Returns `None` when the field is absent or its
/// value is not in a recognized literal shape.
pub fn find_field(source: &str, field: FieldKind) -> Option<FieldMatch<'_>> {
    let caps = field.pattern().captures(source)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?;
    Some(FieldMatch {
        field,
        raw: value.as_str(),
        span: Span::new(whole.start(), whole.end()),
    })
}

/// Remove `imports: [...]` entries from an isolated metadata block.
///
/// Import lists hold identifiers, which the literal parser rejects by
/// design; they carry no template/style content.
pub fn strip_imports(block: &str) -> String {
    IMPORTS_ENTRY.replace_all(block, "").into_owned()
}

// ============================================================================
// Normalization
// ============================================================================

/// Un-escape a literal's content: `\n`, `\'`, `\"`, and `` \` ``.
pub fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
        .replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("\\`", "`")
}

/// Escape content for embedding in a backtick literal.
pub fn escape_backticks(text: &str) -> String {
    text.replace('`', "\\`")
}

/// Normalize a raw literal to its content.
///
/// Strips the outer delimiter, un-escapes, and trims. A bracketed list is
/// treated as a sequence of strings joined with newline separators. Returns
/// `None` when the raw text is not in a recognized shape.
pub fn normalize_literal(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let content = if raw.starts_with('[') {
        if !raw.ends_with(']') {
            return None;
        }
        let parts: Vec<String> = STRING_LITERAL
            .captures_iter(raw)
            .map(|caps| unescape(&caps[1]))
            .collect();
        if parts.is_empty() {
            return None;
        }
        parts.join("\n")
    } else {
        if raw.len() < 2 {
            return None;
        }
        let first = raw.chars().next()?;
        let last = raw.chars().next_back()?;
        if first != last || !matches!(first, '\'' | '"' | '`') {
            return None;
        }
        unescape(&raw[1..raw.len() - 1])
    };
    Some(content.trim().to_string())
}

/// Extract the quoted strings from a raw literal, in order.
///
/// Works for both a single quoted literal and a bracketed list; the returned
/// strings are verbatim (no un-escaping), as expected for path references.
pub fn string_list(raw: &str) -> Vec<String> {
    STRING_LITERAL
        .captures_iter(raw)
        .map(|caps| caps[1].to_string())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod component_block_isolation {
        use super::*;

        #[test]
        fn finds_argument_object() {
            let source = "@Component({ selector: 'app-x' })\nexport class X {}";
            let (span, block) = component_block(source).unwrap();
            assert_eq!(block, "{ selector: 'app-x' }");
            assert_eq!(&source[span.start..span.end], block);
        }

        #[test]
        fn spans_multiple_lines() {
            let source = "@Component({\n  selector: 'app-x',\n  template: `<b>Hi</b>`\n})";
            let (_, block) = component_block(source).unwrap();
            assert!(block.contains("selector"));
            assert!(block.contains("template"));
        }

        #[test]
        fn absent_decorator_is_none() {
            assert!(component_block("export class Plain {}").is_none());
        }
    }

    mod field_location {
        use super::*;

        #[test]
        fn template_field_does_not_match_template_url() {
            let source = "@Component({ templateUrl: './x.html' })";
            assert!(find_field(source, FieldKind::Template).is_none());
            assert!(find_field(source, FieldKind::TemplateUrl).is_some());
        }

        #[test]
        fn span_covers_full_assignment() {
            let source = "before template: `<div/>` after";
            let m = find_field(source, FieldKind::Template).unwrap();
            assert_eq!(&source[m.span.start..m.span.end], "template: `<div/>`");
            assert_eq!(m.raw, "`<div/>`");
        }

        #[test]
        fn style_url_singular_and_plural_both_match() {
            let single = "styleUrl: './a.css'";
            let plural = "styleUrls: ['./a.css', './b.css']";
            assert!(find_field(single, FieldKind::StyleUrls).is_some());
            let m = find_field(plural, FieldKind::StyleUrls).unwrap();
            assert_eq!(m.raw, "['./a.css', './b.css']");
        }

        #[test]
        fn unbalanced_backtick_truncates_the_match() {
            // An unescaped backtick inside the template truncates the match;
            // the remainder is not a recognized shape, so callers see the
            // truncated raw and the literal parse of the block fails closed.
            let source = "template: `a ` b`";
            let m = find_field(source, FieldKind::Template).unwrap();
            assert_eq!(m.raw, "`a `");
        }
    }

    mod quote_style_equivalence {
        use super::*;

        #[test]
        fn all_quote_styles_normalize_to_same_content() {
            let expected = Some("h1 { color: red }".to_string());
            assert_eq!(normalize_literal("'h1 { color: red }'"), expected);
            assert_eq!(normalize_literal("\"h1 { color: red }\""), expected);
            assert_eq!(normalize_literal("`h1 { color: red }`"), expected);
            assert_eq!(normalize_literal("['h1 { color: red }']"), expected);
        }

        #[test]
        fn bracketed_list_joins_with_newline() {
            assert_eq!(
                normalize_literal("['.a{color:red}', '.b{color:blue}']"),
                Some(".a{color:red}\n.b{color:blue}".to_string())
            );
        }

        #[test]
        fn escapes_are_undone() {
            assert_eq!(
                normalize_literal(r"'line1\nline2'"),
                Some("line1\nline2".to_string())
            );
            assert_eq!(normalize_literal(r#"'it\'s'"#), Some("it's".to_string()));
        }

        #[test]
        fn content_is_trimmed() {
            assert_eq!(normalize_literal("`  <div/>  `"), Some("<div/>".to_string()));
        }

        #[test]
        fn unrecognized_shapes_are_rejected() {
            assert!(normalize_literal("someIdentifier").is_none());
            assert!(normalize_literal("'unterminated").is_none());
            assert!(normalize_literal("[]").is_none());
        }
    }

    mod string_lists {
        use super::*;

        #[test]
        fn extracts_in_reference_order() {
            let urls = string_list("['./a.css', \"./b.css\", `./c.css`]");
            assert_eq!(urls, vec!["./a.css", "./b.css", "./c.css"]);
        }

        #[test]
        fn single_literal_yields_one_entry() {
            assert_eq!(string_list("'./only.scss'"), vec!["./only.scss"]);
        }

        #[test]
        fn empty_list_yields_nothing() {
            assert!(string_list("[]").is_empty());
        }
    }

    mod imports_stripping {
        use super::*;

        #[test]
        fn removes_imports_entry() {
            let block = "{ selector: 'x', imports: [CommonModule, FormsModule], template: `t` }";
            let stripped = strip_imports(block);
            assert!(!stripped.contains("imports"));
            assert!(stripped.contains("selector"));
            assert!(stripped.contains("template"));
        }

        #[test]
        fn no_imports_is_identity() {
            let block = "{ selector: 'x' }";
            assert_eq!(strip_imports(block), block);
        }
    }

    mod escaping {
        use super::*;

        #[test]
        fn backticks_round_trip() {
            let content = "code `inline` sample";
            let escaped = escape_backticks(content);
            assert_eq!(escaped, "code \\`inline\\` sample");
            assert_eq!(unescape(&escaped), content);
        }
    }
}
