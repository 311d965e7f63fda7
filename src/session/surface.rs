//! Render surface contract: intents in, views out

use crate::generator::{CharClass, Policy, Strength, Summary};
use crate::history::PasswordRecord;

use super::clipboard::CopyFeedback;

/// A user action forwarded by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ToggleClass(CharClass),
    SetLength(usize),
    IncreaseLength,
    DecreaseLength,
    Generate,
    CopyCurrent,
    CopyEntry(i64),
    Remove(i64),
    ClearHistory,
}

/// Snapshot of session state for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub policy: Policy,
    /// Current password, `None` after an empty result
    pub password: Option<&'a str>,
    pub strength: Strength,
    pub summary: Summary,
    /// History, most recent first
    pub history: &'a [PasswordRecord],
    pub feedback: Option<CopyFeedback>,
}

/// Anything that can display a session
pub trait Surface {
    fn render(&mut self, view: &View<'_>);
}
