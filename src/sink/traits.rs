//! Trait abstraction for the applicant sink to enable mocking in tests

use crate::error::SubmissionError;
use crate::state::ApplicantRecord;
use async_trait::async_trait;

/// Destination that durably stores applicant rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicantSink: Send + Sync {
    /// Insert the given rows in a single request
    async fn insert(&self, records: &[ApplicantRecord]) -> Result<(), SubmissionError>;
}
