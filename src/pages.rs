//! The pages of the application flow.

use serde::Serialize;

/// A navigable page. The flow runs Intake → Consent → InterviewProcess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Intake,
    Consent,
    InterviewProcess,
}

impl Page {
    /// Route path for this page.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Intake => "/",
            Self::Consent => "/interview_page",
            Self::InterviewProcess => "/interview_process",
        }
    }

    /// The page a successful submit on `self` leads to.
    pub fn next(&self) -> Option<Page> {
        match self {
            Self::Intake => Some(Self::Consent),
            Self::Consent => Some(Self::InterviewProcess),
            Self::InterviewProcess => None,
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intake => "intake",
            Self::Consent => "consent",
            Self::InterviewProcess => "interview_process",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_the_flow() {
        let mut current = Page::Intake;
        let mut paths = vec![current.path()];
        while let Some(next) = current.next() {
            paths.push(next.path());
            current = next;
        }
        assert_eq!(paths, ["/", "/interview_page", "/interview_process"]);
    }

    #[test]
    fn display_matches_serde() {
        for page in [Page::Intake, Page::Consent, Page::InterviewProcess] {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(format!("\"{page}\""), json);
        }
    }
}
