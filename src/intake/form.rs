//! Contact form captured on the intake page.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::pages::Page;
use crate::skills::selector::Selection;

/// Free-text contact details. Fields are taken as given, with no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// What the candidate sees after submitting the intake form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeSubmission {
    /// Alert text echoing the submitted data.
    pub echo: String,
    /// Page to navigate to.
    pub next: Page,
}

#[derive(Serialize)]
struct EchoPayload<'a> {
    #[serde(flatten)]
    form: &'a ContactForm,
    skills: &'a Selection,
}

impl ContactForm {
    /// Submit the form together with the current skill selection.
    ///
    /// Always succeeds and always leads to the consent page. The form itself
    /// is consumed here and not kept anywhere.
    pub fn submit(self, skills: &Selection) -> IntakeSubmission {
        let payload = EchoPayload {
            form: &self,
            skills,
        };
        let data = serde_json::to_string(&payload).unwrap_or_default();

        info!(skills = skills.len(), "Intake form submitted");

        IntakeSubmission {
            echo: format!("Form Submitted: {data}"),
            next: Page::Consent,
        }
    }
}
