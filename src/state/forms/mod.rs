//! Form domain layer
//!
//! Field identifiers, validation rules and the applicant form state machine.

mod field;
mod focus;
mod form_state;
mod validation;

pub use field::FieldName;
pub use focus::Focus;
pub use form_state::{ApplicantRecord, FormErrors, FormEvent, FormState};
pub use validation::validate;

#[cfg(test)]
pub use form_state::{FormValues, Phase, SUBMIT_SUCCESS};
#[cfg(test)]
pub use validation::{ENTER_EMAIL, ENTER_FIRST_NAME, ENTER_LAST_NAME};
