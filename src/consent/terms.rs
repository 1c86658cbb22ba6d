//! Consent statement shown on the consent page.

/// Heading of the consent card.
pub const CONSENT_TITLE: &str = "Job Interview Consent Form";

/// Opening sentence of the statement.
pub const CONSENT_PREAMBLE: &str =
    "I voluntarily agree to participate in this job interview process.";

/// Individual points the candidate agrees to.
pub const CONSENT_POINTS: [&str; 12] = [
    "I understand that my participation is voluntary, and I can withdraw at any time or refuse to answer any questions without any negative consequences.",
    "I understand that I can withdraw permission to use the data from my interview within two weeks after the interview, in which case the material will be deleted.",
    "I have had the purpose and nature of the interview process explained to me in writing, and I have had the opportunity to ask any questions I may have.",
    "I understand that participation in this process involves only voice recording of the interview.",
    "I understand that I will not benefit directly from participating in this interview process.",
    "I agree to my interview being audio-recorded.",
    "I understand that all information I provide during the interview will be treated confidentially.",
    "I understand that in any report or notes made from this interview, identifying details will be removed to maintain anonymity.",
    "I understand that the audio recording of my interview will be stored securely and accessible only to authorized personnel.",
    "I understand that the audio recording will be retained until the hiring decision is made or for a set period afterward.",
    "I understand that I can request access to my interview data under relevant freedom of information legislation while it is in storage.",
    "I am free to contact the interview coordinator or other relevant personnel for further information.",
];

/// Label next to the acceptance checkbox.
pub const CHECKBOX_LABEL: &str = "I accept the terms and conditions";
