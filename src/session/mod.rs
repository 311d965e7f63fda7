//! Generator session
//!
//! A [`Session`] owns everything a surface needs: the current policy, the
//! last generated record, the history store, the sweep timer and the copy
//! feedback. Surfaces keep a reference to it and forward [`Intent`]s.

pub mod clipboard;
pub mod surface;
pub mod timer;

pub use clipboard::{Clipboard, CopyFeedback, NoClipboard};
pub use surface::{Intent, Surface, View};
pub use timer::SweepTimer;

use rand::CryptoRng;
use rand::rngs::ThreadRng;

use crate::config::Config;
use crate::generator::{CharClass, PasswordGenerator, Policy, Strength, Summary};
use crate::history::{HistoryStore, PasswordRecord};
use crate::storage::KeyValueStore;
use crate::utils::now_millis;

/// Session state shared between the generator, history and surface
pub struct Session<S, R = ThreadRng> {
    policy: Policy,
    current: Option<PasswordRecord>,
    generator: PasswordGenerator<R>,
    history: HistoryStore<S>,
    timer: SweepTimer,
    feedback: Option<(CopyFeedback, i64)>,
    copy_feedback_ms: i64,
}

impl<S: KeyValueStore> Session<S, ThreadRng> {
    /// Open a session: load history and arm the sweep timer
    pub fn open(config: &Config, store: S) -> Self {
        Self::open_with(config, store, PasswordGenerator::new(), now_millis())
    }

    /// Open a session and generate the first password
    pub fn start(config: &Config, store: S) -> Self {
        let mut session = Self::open(config, store);
        session.generate();
        session
    }
}

impl<S: KeyValueStore, R: CryptoRng> Session<S, R> {
    /// Open a session with an explicit generator and clock reading
    pub fn open_with(
        config: &Config,
        store: S,
        mut generator: PasswordGenerator<R>,
        now_ms: i64,
    ) -> Self {
        let history = HistoryStore::load_with(
            store,
            &config.storage_key,
            config.history_capacity,
            config.max_age_ms,
        );
        if let Some(last) = history.latest_id() {
            generator.resume_after(last, now_ms);
        }

        let mut timer = SweepTimer::new(config.sweep_interval_ms);
        timer.arm(now_ms);

        log::debug!("Session opened with {} history records", history.len());

        Self {
            policy: config.default_policy.normalized(),
            current: None,
            generator,
            history,
            timer,
            feedback: None,
            copy_feedback_ms: config.copy_feedback_ms,
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Replace the policy, applying the policy invariant
    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy.normalized();
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.policy.toggle(class);
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.policy.set_class(class, enabled);
    }

    pub fn set_length(&mut self, length: usize) {
        self.policy.set_length(length);
    }

    pub fn increase_length(&mut self) {
        self.policy.set_length(self.policy.length.saturating_add(1));
    }

    pub fn decrease_length(&mut self) {
        self.policy.set_length(self.policy.length.saturating_sub(1));
    }

    /// Generate a password with the current policy, stamped now
    pub fn generate(&mut self) -> Option<&PasswordRecord> {
        self.generate_at(now_millis())
    }

    /// Generate a password with the current policy
    ///
    /// A result becomes the current record and goes to the front of
    /// history. An empty result clears the current record.
    pub fn generate_at(&mut self, now_ms: i64) -> Option<&PasswordRecord> {
        self.current = self.generator.generate_at(&self.policy, now_ms);
        if let Some(record) = &self.current {
            self.history.insert(record.clone());
        }
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&PasswordRecord> {
        self.current.as_ref()
    }

    /// Strength of the current password, `VeryWeak` when there is none
    pub fn strength(&self) -> Strength {
        self.current
            .as_ref()
            .map(|r| r.strength)
            .unwrap_or_default()
    }

    /// Crack time and entropy of the current password under the current policy
    pub fn summary(&self) -> Summary {
        let password = self.current.as_ref().map_or("", |r| r.password.as_str());
        Summary::new(password, &self.policy)
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Remove history entries with `id`
    pub fn remove(&mut self, id: i64) -> usize {
        self.history.remove(id)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Sweep expired history immediately
    pub fn sweep(&mut self, now_ms: i64) -> usize {
        self.history.sweep(now_ms)
    }

    /// Run the hourly sweep if it is due
    pub fn tick(&mut self, now_ms: i64) -> usize {
        if self.timer.poll(now_ms) {
            self.history.sweep(now_ms)
        } else {
            0
        }
    }

    pub fn timer(&self) -> &SweepTimer {
        &self.timer
    }

    /// Copy `text` and record the outcome as transient feedback
    pub fn copy(&mut self, text: &str, clipboard: &mut dyn Clipboard, now_ms: i64) -> CopyFeedback {
        let feedback = match clipboard.write_text(text) {
            Ok(()) => CopyFeedback::Copied,
            Err(e) => {
                log::warn!("Copy to clipboard failed: {}", e);
                CopyFeedback::Failed
            }
        };
        self.feedback = Some((feedback, now_ms.saturating_add(self.copy_feedback_ms)));
        feedback
    }

    /// Copy the current password; does nothing without one
    pub fn copy_current(
        &mut self,
        clipboard: &mut dyn Clipboard,
        now_ms: i64,
    ) -> Option<CopyFeedback> {
        let password = self.current.as_ref()?.password.clone();
        Some(self.copy(&password, clipboard, now_ms))
    }

    /// Copy a history entry's password; does nothing for an unknown ID
    pub fn copy_entry(
        &mut self,
        id: i64,
        clipboard: &mut dyn Clipboard,
        now_ms: i64,
    ) -> Option<CopyFeedback> {
        let password = self.history.get(id)?.password.clone();
        Some(self.copy(&password, clipboard, now_ms))
    }

    /// Copy feedback still visible at `now_ms`
    pub fn feedback(&self, now_ms: i64) -> Option<CopyFeedback> {
        match self.feedback {
            Some((feedback, expires)) if now_ms < expires => Some(feedback),
            _ => None,
        }
    }

    /// Apply a surface intent
    pub fn dispatch(&mut self, intent: Intent, clipboard: &mut dyn Clipboard, now_ms: i64) {
        match intent {
            Intent::ToggleClass(class) => self.toggle(class),
            Intent::SetLength(length) => self.set_length(length),
            Intent::IncreaseLength => self.increase_length(),
            Intent::DecreaseLength => self.decrease_length(),
            Intent::Generate => {
                self.generate_at(now_ms);
            }
            Intent::CopyCurrent => {
                self.copy_current(clipboard, now_ms);
            }
            Intent::CopyEntry(id) => {
                self.copy_entry(id, clipboard, now_ms);
            }
            Intent::Remove(id) => {
                self.remove(id);
            }
            Intent::ClearHistory => self.clear_history(),
        }
    }

    /// Snapshot for rendering
    pub fn view(&self, now_ms: i64) -> View<'_> {
        View {
            policy: self.policy,
            password: self.current.as_ref().map(|r| r.password.as_str()),
            strength: self.strength(),
            summary: self.summary(),
            history: self.history.records(),
            feedback: self.feedback(now_ms),
        }
    }

    /// Render through `surface`
    pub fn render(&self, surface: &mut dyn Surface, now_ms: i64) {
        surface.render(&self.view(now_ms));
    }

    /// Stop the sweep timer and hand back the history store
    pub fn into_history(mut self) -> HistoryStore<S> {
        self.shutdown();
        self.history
    }

    /// Cancel the sweep timer
    pub fn shutdown(&mut self) {
        if self.timer.is_active() {
            log::debug!("Session shut down");
        }
        self.timer.cancel();
    }
}
