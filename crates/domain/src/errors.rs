use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Truncated {section}: need at least {needed} bytes, got {actual}")]
    TruncatedInput {
        section: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("Question has an empty domain name")]
    EmptyDomain,

    #[error("Malformed question: {0}")]
    MalformedQuestion(String),
}
