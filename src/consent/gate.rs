//! The consent checkbox gate.

use tracing::info;

use crate::error::ConsentError;
use crate::pages::Page;

/// Holds the candidate's last consent answer.
#[derive(Debug, Clone, Default)]
pub struct ConsentGate {
    accepted: bool,
    attempts: u32,
}

impl ConsentGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer and decide where the candidate goes.
    ///
    /// Accepted consent leads to the interview page. Anything else keeps the
    /// candidate on the consent page with [`ConsentError::TermsNotAccepted`].
    pub fn submit(&mut self, checked: bool) -> Result<Page, ConsentError> {
        self.accepted = checked;
        self.attempts += 1;

        if checked {
            info!(attempts = self.attempts, "Consent accepted");
            Ok(Page::InterviewProcess)
        } else {
            info!(attempts = self.attempts, "Consent submitted without acceptance");
            Err(ConsentError::TermsNotAccepted)
        }
    }

    /// The answer from the most recent submit (false before any submit).
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Number of submits so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Interpret a form checkbox value. Browsers omit unchecked boxes and send
/// `on` for checked ones.
pub fn checkbox_checked(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "" | "off" | "false" | "0"),
    }
}
