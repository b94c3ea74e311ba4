//! Error types for configuration and submission failures

use crate::state::FormErrors;
use thiserror::Error;

/// Fallback banner text when a failure carries no message
pub const GENERIC_SUBMIT_FAILURE: &str = "Failed to submit data";

/// The sink cannot be reached because its configuration is missing or unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Missing SUPABASE_URL or SUPABASE_ANON_KEY environment variables")]
    Missing,
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
    #[error("Invalid anon key: {0}")]
    InvalidKey(String),
}

/// The insert reached the network layer and failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The sink answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never got a response
    #[error("{0}")]
    Transport(String),
}

impl SubmissionError {
    /// Message shown in the error banner
    pub fn banner_message(&self) -> String {
        let message = match self {
            SubmissionError::Rejected { message, .. } => message,
            SubmissionError::Transport(message) => message,
        };
        if message.trim().is_empty() {
            GENERIC_SUBMIT_FAILURE.to_string()
        } else {
            message.clone()
        }
    }
}

/// Outcome of a submit attempt that did not store the record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Validation rejected the form; nothing was sent
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FormErrors),
    /// An earlier submission has not finished yet
    #[error("a submission is already in progress")]
    InProgress,
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl SubmitError {
    /// Banner text for this failure, `None` for failures that do not change
    /// the banners
    pub fn banner_message(&self) -> Option<String> {
        match self {
            SubmitError::Invalid(_) | SubmitError::InProgress => None,
            SubmitError::Configuration(e) => Some(e.to_string()),
            SubmitError::Submission(e) => Some(e.banner_message()),
        }
    }
}
