//! Clipboard collaborator and transient copy feedback

use crate::error::Result;

/// Destination for copied passwords
pub trait Clipboard {
    /// Place `text` on the clipboard
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Result of the last copy, shown briefly by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Copied,
    Failed,
}

impl CopyFeedback {
    /// Translation key for this feedback
    pub fn label_key(self) -> &'static str {
        match self {
            CopyFeedback::Copied => "copied",
            CopyFeedback::Failed => "copy_failed",
        }
    }
}

/// Clipboard that accepts nothing, for surfaces without one
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(crate::error::PassgenError::Clipboard(
            "no clipboard available".to_string(),
        ))
    }
}
