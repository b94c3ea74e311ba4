//! Keyboard focus within the applicant form

use super::field::FieldName;

/// Which control receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FirstName,
    LastName,
    Email,
    SubmitButton,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::FirstName,
        Focus::LastName,
        Focus::Email,
        Focus::SubmitButton,
    ];

    fn index(&self) -> usize {
        match self {
            Focus::FirstName => 0,
            Focus::LastName => 1,
            Focus::Email => 2,
            Focus::SubmitButton => 3,
        }
    }

    /// Next control, wrapping to the first
    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping to the last
    pub fn prev(&self) -> Self {
        if self.index() == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[self.index() - 1]
        }
    }

    /// The text field under focus, `None` on the button row
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Focus::FirstName => Some(FieldName::FirstName),
            Focus::LastName => Some(FieldName::LastName),
            Focus::Email => Some(FieldName::Email),
            Focus::SubmitButton => None,
        }
    }

    /// Focus for a given field
    pub fn on(field: FieldName) -> Self {
        match field {
            FieldName::FirstName => Focus::FirstName,
            FieldName::LastName => Focus::LastName,
            FieldName::Email => Focus::Email,
        }
    }
}
