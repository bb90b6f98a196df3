//! ngmover: move Angular component templates and styles between inline
//! literals and sibling files.
//!
//! The core is a set of deterministic text transformations over a component
//! source file: locate the `@Component({...})` metadata block, extract one
//! field's literal value (single-quoted, double-quoted, backtick, or a
//! bracketed list), write it to a sibling file and rewrite the block to
//! reference that file by relative path. The inverse operations read the
//! referenced siblings back in as escaped literals.
//!
//! All side effects (reads, writes, whole-document replacement, confirmation
//! prompts, status notifications) are routed through the [`host::Host`]
//! trait, so the operations themselves stay pure functions of
//! (source text, file system).

// Core infrastructure
pub mod config;
pub mod error;
pub mod host;
pub mod output;
pub mod paths;

// Text transformation core
pub mod locator;
pub mod metadata;

// Operations (extract/inline front doors)
pub mod ops;
