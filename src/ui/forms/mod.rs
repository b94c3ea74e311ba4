//! Form rendering module
//!
//! - `field_renderer`: labeled input with inline error
//! - `applicant_form`: the intake form card

mod applicant_form;
mod field_renderer;

pub use applicant_form::draw_applicant_form;

#[cfg(test)]
pub use applicant_form::{SUBTITLE, TITLE};
