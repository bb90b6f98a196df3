//! Host adapter trait for editor/file-system integration.
//!
//! The transformation core never touches the file system or the user
//! directly; it consumes a small set of primitives from its host:
//! whole-document reads, sibling-file writes and deletes, atomic
//! whole-document replacement, a yes/no confirmation gate for destructive
//! deletions, and user-visible status notifications.
//!
//! The trait is object-safe, allowing it to be used as `&dyn Host`. One real
//! implementation ships here (`FsHost`, backed by the local file system with
//! a configurable confirmation policy); tests use an in-memory recording
//! host.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::config;

/// Notification severity, mirrored by the host's presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Status report after a successful operation.
    Info,
    /// Operation aborted without side effects.
    Warning,
    /// Operation failed.
    Error,
}

/// External collaborator supplying document and file-system primitives.
pub trait Host {
    /// Read the full current text of a document.
    fn read_document(&self, path: &Path) -> io::Result<String>;

    /// Create or overwrite a sibling file.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Delete a sibling file.
    fn delete_file(&self, path: &Path) -> io::Result<()>;

    /// Replace a document's entire text in one atomic substitution.
    ///
    /// Operations never issue partial in-place edits; the whole new text is
    /// computed first and applied in a single replacement.
    fn replace_document(&self, path: &Path, new_text: &str) -> io::Result<()>;

    /// Whether a file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Ask the user a yes/no question; only an explicit affirmative answer
    /// returns `true`. Gates destructive deletions exclusively.
    fn confirm(&self, prompt: &str) -> bool;

    /// Report a user-visible status message.
    fn notify(&self, kind: Notice, message: &str);

    /// The project's configured stylesheet extension, if discoverable from
    /// build configuration near `source_dir`.
    fn style_extension(&self, source_dir: &Path) -> Option<String>;
}

// ============================================================================
// File-System Host
// ============================================================================

/// How `FsHost` answers confirmation prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmPolicy {
    /// Prompt on the terminal; non-interactive stdin answers no.
    #[default]
    Interactive,
    /// Answer every prompt affirmatively.
    AlwaysYes,
    /// Answer every prompt negatively.
    AlwaysNo,
}

/// Host implementation backed by the local file system.
///
/// Documents and files are the same thing here: `replace_document` is a
/// whole-file write. Notifications go to stderr so stdout stays available
/// for machine-readable output.
#[derive(Debug, Default)]
pub struct FsHost {
    confirm_policy: ConfirmPolicy,
}

impl FsHost {
    /// Create a host with the given confirmation policy.
    pub fn new(confirm_policy: ConfirmPolicy) -> Self {
        FsHost { confirm_policy }
    }
}

impl Host for FsHost {
    fn read_document(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn replace_document(&self, path: &Path, new_text: &str) -> io::Result<()> {
        std::fs::write(path, new_text)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn confirm(&self, prompt: &str) -> bool {
        match self.confirm_policy {
            ConfirmPolicy::AlwaysYes => true,
            ConfirmPolicy::AlwaysNo => false,
            ConfirmPolicy::Interactive => prompt_on_terminal(prompt),
        }
    }

    fn notify(&self, kind: Notice, message: &str) {
        match kind {
            Notice::Info => eprintln!("{}", message),
            Notice::Warning => eprintln!("warning: {}", message),
            Notice::Error => eprintln!("error: {}", message),
        }
    }

    fn style_extension(&self, source_dir: &Path) -> Option<String> {
        config::style_extension(source_dir)
    }
}

/// Prompt for a yes/no answer on the terminal.
///
/// Non-TTY stdin (CI, piped input) answers no, so destructive deletion
/// never happens without an explicit affirmative.
fn prompt_on_terminal(prompt: &str) -> bool {
    if !io::stdin().is_terminal() {
        return false;
    }
    eprint!("{} [y/N] ", prompt);
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes" | "Yes")
}

// ============================================================================
// Test Host
// ============================================================================
