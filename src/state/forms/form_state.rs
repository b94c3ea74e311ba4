//! Applicant form state and its transition function

use super::field::FieldName;
use super::validation::validate;
use crate::error::{SubmitError, GENERIC_SUBMIT_FAILURE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Banner shown after the sink stores the record
pub const SUBMIT_SUCCESS: &str = "Data submitted successfully!";

/// Raw field values exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::FirstName => self.first_name = value,
            FieldName::LastName => self.last_name = value,
            FieldName::Email => self.email = value,
        }
    }

    /// Trimmed copy ready to send
    pub fn to_record(&self) -> ApplicantRecord {
        ApplicantRecord {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// Row inserted into the applicants table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Per-field validation messages from the last submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FieldName, String>);

impl FormErrors {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Submission flags; at most one banner is set at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub is_submitting: bool,
    pub success: Option<String>,
    pub submit_error: Option<String>,
}

impl SubmissionStatus {
    pub fn clear_banners(&mut self) {
        self.success = None;
        self.submit_error = None;
    }
}

/// Observable phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    /// Transient while the rules run during a submit
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Inputs to the form state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: FieldName, value: String },
    SubmitRequested,
    SubmitFinished(Result<(), SubmitError>),
}

/// Complete state of the applicant form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    pub status: SubmissionStatus,
    pub phase: Phase,
    /// Snapshot captured when validation passed; sent by the controller
    pending: Option<ApplicantRecord>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record waiting to be inserted, if a submission is in flight
    pub fn pending_record(&self) -> Option<&ApplicantRecord> {
        self.pending.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting
    }

    /// Apply one event and return the next state
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.values.set(field, value);
                self.errors.remove(field);
                self.status.clear_banners();
                if matches!(self.phase, Phase::Succeeded | Phase::Failed) {
                    self.phase = Phase::Editing;
                }
            }
            FormEvent::SubmitRequested => {
                if self.status.is_submitting {
                    return self;
                }
                self.phase = Phase::Validating;
                self.status.clear_banners();
                self.errors = validate(&self.values);
                if self.errors.is_empty() {
                    self.pending = Some(self.values.to_record());
                    self.status.is_submitting = true;
                    self.phase = Phase::Submitting;
                } else {
                    self.phase = Phase::Editing;
                }
            }
            FormEvent::SubmitFinished(result) => {
                if !self.status.is_submitting {
                    return self;
                }
                self.pending = None;
                self.status.is_submitting = false;
                match result {
                    Ok(()) => {
                        self.values = FormValues::default();
                        self.status.submit_error = None;
                        self.status.success = Some(SUBMIT_SUCCESS.to_string());
                        self.phase = Phase::Succeeded;
                    }
                    Err(err) => {
                        let message = err
                            .banner_message()
                            .unwrap_or_else(|| GENERIC_SUBMIT_FAILURE.to_string());
                        self.status.success = None;
                        self.status.submit_error = Some(message);
                        self.phase = Phase::Failed;
                    }
                }
            }
        }
        self
    }
}
