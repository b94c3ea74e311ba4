//! Applicant sink module for inserting rows into the hosted table

mod accessor;
mod client;
mod traits;

pub use accessor::{ClientAccessor, ClientHandle};
pub use traits::ApplicantSink;

#[cfg(test)]
pub use traits::MockApplicantSink;
