//! Form field identifiers

/// One of the three applicant fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 3] = [FieldName::FirstName, FieldName::LastName, FieldName::Email];

    /// Column name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::Email => "email",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First name",
            FieldName::LastName => "Last name",
            FieldName::Email => "Email",
        }
    }

    /// Hint shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::FirstName => "Ivan",
            FieldName::LastName => "Petrov",
            FieldName::Email => "ivan.petrov@example.com",
        }
    }

    /// Whether the input holds an email address
    pub fn is_email(&self) -> bool {
        matches!(self, FieldName::Email)
    }

    /// Whether `c` may be typed into this field
    pub fn accepts(&self, c: char) -> bool {
        !c.is_control()
    }
}
