//! Narrow literal parser for component metadata blocks.
//!
//! The `@Component({...})` argument object is parsed as data, never
//! evaluated. The grammar accepts only literal syntax:
//!
//! ```text
//! <object> := "{" [<entry> ("," <entry>)* [","]] "}"
//! <entry>  := <key> ":" <value>
//! <key>    := identifier | <string>
//! <value>  := <string> | <array> | <object> | boolean | null | number
//! <string> := single-, double-, or backtick-quoted, with escapes
//! <array>  := "[" [<value> ("," <value>)* [","]] "]"
//! ```
//!
//! Anything else (bare identifiers, function calls, arrow functions, spread
//! syntax) fails closed with [`MetadataError`]. That keeps the accepted
//! input fully specified and removes any need to execute source text.

use thiserror::Error;
use winnow::ascii::multispace0;
use winnow::combinator::{alt, opt, separated};
use winnow::error::{ErrMode, ParserError};
use winnow::prelude::*;
use winnow::token::take_while;
use winnow::ModalResult;

/// Error type for metadata literal parsing.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The block is not a recognized literal object.
    #[error("invalid metadata literal: {message}")]
    InvalidLiteral { message: String },
}

impl MetadataError {
    /// Create an invalid-literal error.
    pub fn invalid(message: impl Into<String>) -> Self {
        MetadataError::InvalidLiteral {
            message: message.into(),
        }
    }
}

/// A literal value inside a metadata block.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A quoted string (any quoting style), escapes resolved.
    Str(String),
    /// A bracketed array of literals.
    Array(Vec<LiteralValue>),
    /// A nested object literal, entries in source order.
    Object(Vec<(String, LiteralValue)>),
    /// `true` / `false`.
    Bool(bool),
    /// `null`.
    Null,
    /// A numeric literal.
    Number(f64),
}

impl LiteralValue {
    /// The string content, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// String content of a string literal, or of an array of string
    /// literals joined with newline separators.
    pub fn as_joined_string(&self) -> Option<String> {
        match self {
            LiteralValue::Str(s) => Some(s.clone()),
            LiteralValue::Array(items) => {
                let parts: Option<Vec<&str>> = items.iter().map(LiteralValue::as_str).collect();
                Some(parts?.join("\n"))
            }
            _ => None,
        }
    }
}

/// A parsed component metadata block.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMetadata {
    entries: Vec<(String, LiteralValue)>,
}

impl ComponentMetadata {
    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&LiteralValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[(String, LiteralValue)] {
        &self.entries
    }
}

/// Parse an isolated metadata block (braces included) as a literal object.
///
/// The entire input must be consumed; trailing junk fails closed.
pub fn parse_metadata(block: &str) -> Result<ComponentMetadata, MetadataError> {
    let entries = parse_object_body
        .parse(block.trim())
        .map_err(|err| MetadataError::invalid(format!("{:?}", err)))?;
    Ok(ComponentMetadata { entries })
}

// ============================================================================
// Parser implementation using winnow
// ============================================================================

/// Parse `{ ... }` and return its entries.
fn parse_object_body(input: &mut &str) -> ModalResult<Vec<(String, LiteralValue)>> {
    let _ = (multispace0, '{', multispace0).parse_next(input)?;
    let entries: Vec<(String, LiteralValue)> =
        separated(0.., parse_entry, (multispace0, ',', multispace0)).parse_next(input)?;
    let _ = (multispace0, opt(','), multispace0, '}').parse_next(input)?;
    Ok(entries)
}

/// Parse one `key: value` entry.
fn parse_entry(input: &mut &str) -> ModalResult<(String, LiteralValue)> {
    let _ = multispace0.parse_next(input)?;
    let key = parse_key(input)?;
    let _ = (multispace0, ':', multispace0).parse_next(input)?;
    let value = parse_value(input)?;
    Ok((key, value))
}

/// Parse a key: an identifier or a quoted string.
fn parse_key(input: &mut &str) -> ModalResult<String> {
    alt((parse_string, parse_identifier)).parse_next(input)
}

/// Parse an identifier key (letters, digits, `_`, `$`).
fn parse_identifier(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_' || c == '$')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse any literal value.
fn parse_value(input: &mut &str) -> ModalResult<LiteralValue> {
    alt((
        parse_string.map(LiteralValue::Str),
        parse_array,
        parse_object_body.map(LiteralValue::Object),
        parse_keyword,
        parse_number,
    ))
    .parse_next(input)
}

/// Parse a bracketed array of literal values.
fn parse_array(input: &mut &str) -> ModalResult<LiteralValue> {
    let _ = ('[', multispace0).parse_next(input)?;
    let items: Vec<LiteralValue> =
        separated(0.., parse_value, (multispace0, ',', multispace0)).parse_next(input)?;
    let _ = (multispace0, opt(','), multispace0, ']').parse_next(input)?;
    Ok(LiteralValue::Array(items))
}

/// Parse `true`, `false`, or `null`.
///
/// The keyword must not be followed by an identifier character, so bare
/// identifiers like `trueValue` are rejected rather than partially matched.
fn parse_keyword(input: &mut &str) -> ModalResult<LiteralValue> {
    let checkpoint = *input;
    let word: &str =
        take_while(1.., |c: char| c.is_alphanumeric() || c == '_' || c == '$').parse_next(input)?;
    match word {
        "true" => Ok(LiteralValue::Bool(true)),
        "false" => Ok(LiteralValue::Bool(false)),
        "null" => Ok(LiteralValue::Null),
        _ => {
            *input = checkpoint;
            Err(ErrMode::from_input(input))
        }
    }
}

/// Parse a numeric literal.
fn parse_number(input: &mut &str) -> ModalResult<LiteralValue> {
    let checkpoint = *input;
    let text: &str = take_while(1.., |c: char| {
        c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || c == 'e' || c == 'E'
    })
    .parse_next(input)?;
    match text.parse::<f64>() {
        Ok(value) => Ok(LiteralValue::Number(value)),
        Err(_) => {
            *input = checkpoint;
            Err(ErrMode::from_input(input))
        }
    }
}

/// Parse a quoted string in any of the three quoting styles.
fn parse_string(input: &mut &str) -> ModalResult<String> {
    alt((quoted('\''), quoted('"'), quoted('`'))).parse_next(input)
}

/// Parse a string delimited by `delim`, resolving backslash escapes.
fn quoted(delim: char) -> impl FnMut(&mut &str) -> ModalResult<String> {
    move |input: &mut &str| {
        let start: &str = *input;
        if !start.starts_with(delim) {
            return Err(ErrMode::from_input(input));
        }
        let body = &start[delim.len_utf8()..];
        let mut out = String::new();
        let mut iter = body.char_indices();
        while let Some((idx, c)) = iter.next() {
            if c == '\\' {
                match iter.next() {
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, other)) => out.push(other),
                    None => return Err(ErrMode::from_input(input)),
                }
            } else if c == delim {
                *input = &body[idx + c.len_utf8()..];
                return Ok(out);
            } else {
                out.push(c);
            }
        }
        Err(ErrMode::from_input(input))
    }
}

// ============================================================================
// Tests
// ============================================================================
