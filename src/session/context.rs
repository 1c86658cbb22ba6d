//! Per-visitor session context.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::consent::ConsentGate;
use crate::skills::SkillSelector;

/// Everything one visitor's flow needs. Created on first visit and dropped
/// on reset or idle expiry; nothing here outlives it.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub skills: SkillSelector,
    pub consent: ConsentGate,
    /// One-shot alert to show on the next page render.
    flash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            skills: SkillSelector::new(),
            consent: ConsentGate::new(),
            flash: None,
            created_at: now,
            last_seen: now,
        }
    }

    /// Mark the session as active at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = now;
    }

    /// How long the session has been idle at `now`. Zero if `now` is earlier
    /// than the last activity.
    pub fn idle_for(&self, now: DateTime<Utc>) -> Duration {
        (now - self.last_seen).to_std().unwrap_or_default()
    }

    /// Queue an alert for the next render, replacing any pending one.
    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    /// Take the pending alert, if any. It is shown once.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}
