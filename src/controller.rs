//! Form controller: drives the validate → submit → reset/report cycle

use crate::error::SubmitError;
use crate::sink::{ApplicantSink, ClientAccessor, ClientHandle};
use crate::state::{validate, ApplicantRecord, FieldName, FormErrors, FormEvent, FormState};

/// A validated record and the client that will store it
pub struct PendingInsert {
    client: ClientHandle,
    record: ApplicantRecord,
}

impl PendingInsert {
    /// Perform the single insert
    pub async fn send(self) -> Result<(), SubmitError> {
        ApplicantSink::insert(self.client.as_ref(), std::slice::from_ref(&self.record))
            .await
            .map_err(SubmitError::from)
    }
}

/// Owns the applicant form state and the sink accessor
pub struct FormController {
    state: FormState,
    accessor: ClientAccessor,
}

impl FormController {
    pub fn new(accessor: ClientAccessor) -> Self {
        Self {
            state: FormState::new(),
            accessor,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    fn dispatch(&mut self, event: FormEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    /// Store a raw value and clear that field's error and both banners
    pub fn on_field_change(&mut self, field: FieldName, raw_value: impl Into<String>) {
        self.dispatch(FormEvent::FieldChanged {
            field,
            value: raw_value.into(),
        });
    }

    /// Whether the sink client has been built
    pub fn sink_ready(&self) -> bool {
        self.accessor.is_ready()
    }

    /// Run the validation rules against the current values without recording them
    #[allow(dead_code)]
    pub fn validate(&self) -> FormErrors {
        validate(&self.state.values)
    }

    /// Validate and, if the form is clean, obtain a client for the insert.
    ///
    /// On success the form is left in the submitting phase and the caller must
    /// hand the insert outcome to [`FormController::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<PendingInsert, SubmitError> {
        if self.state.is_submitting() {
            return Err(SubmitError::InProgress);
        }

        self.dispatch(FormEvent::SubmitRequested);
        let Some(record) = self.state.pending_record().cloned() else {
            let fields: Vec<&str> = self.state.errors.iter().map(|(f, _)| f.as_str()).collect();
            tracing::debug!(invalid_fields = ?fields, "Submit blocked by validation");
            return Err(SubmitError::Invalid(self.state.errors.clone()));
        };

        match self.accessor.get_client() {
            Ok(client) => {
                tracing::debug!("Submitting applicant");
                Ok(PendingInsert { client, record })
            }
            Err(e) => {
                let err = SubmitError::from(e);
                self.dispatch(FormEvent::SubmitFinished(Err(err.clone())));
                Err(err)
            }
        }
    }

    /// Record the outcome of an insert started by [`FormController::begin_submit`]
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> Result<(), SubmitError> {
        match &result {
            Ok(()) => tracing::info!("Applicant submitted"),
            Err(e) => tracing::warn!("Applicant submission failed: {e}"),
        }
        self.dispatch(FormEvent::SubmitFinished(result.clone()));
        result
    }

    /// Validate, insert and update the banners in one call
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let pending = self.begin_submit()?;
        let result = pending.send().await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MockConfigSource, SinkConfig};
    use crate::error::{ConfigurationError, SubmissionError};
    use crate::sink::MockApplicantSink;
    use crate::state::{
        FormValues, Phase, ENTER_EMAIL, ENTER_FIRST_NAME, ENTER_LAST_NAME, SUBMIT_SUCCESS,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    fn demo_config() -> SinkConfig {
        SinkConfig {
            endpoint_url: "https://demo.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            table: "interview_applicants".to_string(),
        }
    }

    fn controller_with(sink: MockApplicantSink) -> FormController {
        let mut source = MockConfigSource::new();
        source.expect_load().returning(|| Ok(demo_config()));
        let sink: ClientHandle = Arc::new(sink);
        FormController::new(ClientAccessor::with_connector(source, move |_| {
            Ok(Arc::clone(&sink))
        }))
    }

    fn fill_valid(controller: &mut FormController) {
        controller.on_field_change(FieldName::FirstName, "Ivan");
        controller.on_field_change(FieldName::LastName, "Petrov");
        controller.on_field_change(FieldName::Email, "ivan.petrov@example.com");
    }

    #[tokio::test]
    async fn test_empty_submit_records_errors_without_network() {
        let mut sink = MockApplicantSink::new();
        sink.expect_insert().never();
        let mut controller = controller_with(sink);

        let result = controller.submit().await;

        let errors = match result {
            Err(SubmitError::Invalid(errors)) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        };
        assert_eq!(errors.get(FieldName::FirstName), Some(ENTER_FIRST_NAME));
        assert_eq!(errors.get(FieldName::LastName), Some(ENTER_LAST_NAME));
        assert_eq!(errors.get(FieldName::Email), Some(ENTER_EMAIL));
        assert_eq!(controller.state().errors, errors);
        assert!(controller.state().status.success.is_none());
        assert!(controller.state().status.submit_error.is_none());
    }

    #[tokio::test]
    async fn test_successful_submit_resets_form() {
        let mut sink = MockApplicantSink::new();
        sink.expect_insert()
            .withf(|records: &[ApplicantRecord]| {
                records.len() == 1
                    && records[0].first_name == "Ivan"
                    && records[0].last_name == "Petrov"
                    && records[0].email == "ivan.petrov@example.com"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut controller = controller_with(sink);
        fill_valid(&mut controller);

        assert_ok!(controller.submit().await);

        let state = controller.state();
        assert_eq!(state.values, FormValues::default());
        assert_eq!(state.status.success.as_deref(), Some(SUBMIT_SUCCESS));
        assert!(state.status.submit_error.is_none());
        assert!(!state.status.is_submitting);
        assert_eq!(state.phase, Phase::Succeeded);
    }

    #[tokio::test]
    async fn test_values_are_trimmed_before_sending() {
        let mut sink = MockApplicantSink::new();
        sink.expect_insert()
            .withf(|records: &[ApplicantRecord]| records[0].first_name == "Ivan")
            .times(1)
            .returning(|_| Ok(()));
        let mut controller = controller_with(sink);
        fill_valid(&mut controller);
        controller.on_field_change(FieldName::FirstName, "   Ivan\t");

        assert_ok!(controller.submit().await);
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_values() {
        let mut sink = MockApplicantSink::new();
        sink.expect_insert().times(1).returning(|_| {
            Err(SubmissionError::Rejected {
                status: 409,
                message: "duplicate email".to_string(),
            })
        });
        let mut controller = controller_with(sink);
        fill_valid(&mut controller);
        let before = controller.state().values.clone();

        let err = assert_err!(controller.submit().await);

        assert!(matches!(err, SubmitError::Submission(_)));
        let state = controller.state();
        assert_eq!(state.values, before);
        assert_eq!(state.status.submit_error.as_deref(), Some("duplicate email"));
        assert!(state.status.success.is_none());
        assert!(!state.status.is_submitting);
    }

    #[tokio::test]
    async fn test_missing_configuration_surfaces_as_banner() {
        let mut source = MockConfigSource::new();
        source
            .expect_load()
            .times(1)
            .returning(|| Err(ConfigurationError::Missing));
        let mut controller = FormController::new(ClientAccessor::with_connector(source, |_| {
            panic!("no client should be built without configuration")
        }));
        fill_valid(&mut controller);

        let err = assert_err!(controller.submit().await);

        assert_eq!(err, SubmitError::Configuration(ConfigurationError::Missing));
        let state = controller.state();
        assert_eq!(
            state.status.submit_error.as_deref(),
            Some("Missing SUPABASE_URL or SUPABASE_ANON_KEY environment variables")
        );
        assert_eq!(state.values.first_name, "Ivan");
        assert!(!state.status.is_submitting);
    }

    #[tokio::test]
    async fn test_transport_failure_without_message_uses_generic_banner() {
        let mut sink = MockApplicantSink::new();
        sink.expect_insert()
            .returning(|_| Err(SubmissionError::Transport(String::new())));
        let mut controller = controller_with(sink);
        fill_valid(&mut controller);

        assert_err!(controller.submit().await);
        assert_eq!(
            controller.state().status.submit_error.as_deref(),
            Some("Failed to submit data")
        );
    }

    #[tokio::test]
    async fn test_edit_during_flight_does_not_change_snapshot() {
        let mut sink = MockApplicantSink::new();
        sink.expect_insert()
            .withf(|records: &[ApplicantRecord]| records[0].email == "ivan.petrov@example.com")
            .times(1)
            .returning(|_| Ok(()));
        let mut controller = controller_with(sink);
        fill_valid(&mut controller);

        let pending = controller.begin_submit().unwrap();
        controller.on_field_change(FieldName::Email, "someone@else.org");
        assert!(controller.state().status.is_submitting);
        assert!(matches!(
            controller.begin_submit(),
            Err(SubmitError::InProgress)
        ));

        let result = pending.send().await;
        assert_ok!(controller.finish_submit(result));
        assert_eq!(controller.state().values, FormValues::default());
    }

    #[tokio::test]
    async fn test_editing_clears_banners() {
        let mut sink = MockApplicantSink::new();
        sink.expect_insert().returning(|_| Ok(()));
        let mut controller = controller_with(sink);
        fill_valid(&mut controller);
        assert_ok!(controller.submit().await);
        assert!(controller.state().status.success.is_some());

        controller.on_field_change(FieldName::LastName, "P");

        assert!(controller.state().status.success.is_none());
        assert!(controller.state().status.submit_error.is_none());
        assert_eq!(controller.state().phase, Phase::Editing);
    }

    #[test]
    fn test_validate_does_not_touch_state() {
        let controller = controller_with(MockApplicantSink::new());
        assert_eq!(controller.validate().len(), 3);
        assert!(controller.state().errors.is_empty());
    }
}
