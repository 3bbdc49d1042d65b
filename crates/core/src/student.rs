//! Student payload validation.

use serde::Serialize;

use crate::validation::{date_pattern, email, non_empty, FieldReader, Payload, ValidationError};

/// A fully validated student, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`, shape-checked only. The store rejects impossible days.
    pub birthdate: String,
}

impl NewStudent {
    pub fn validate(payload: &Payload) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(payload);
        let student = Self {
            name: fields.required_str("name", non_empty),
            email: fields.required_str("email", email),
            birthdate: fields.required_str("birthdate", date_pattern),
        };
        fields.finish(student)
    }
}

/// A partial student update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub birthdate: Option<String>,
}

impl StudentChanges {
    pub fn validate(payload: &Payload) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(payload);
        let changes = Self {
            name: fields.optional_str("name", non_empty),
            email: fields.optional_str("email", email),
            birthdate: fields.optional_str("birthdate", date_pattern),
        };
        fields.finish(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.birthdate.is_none()
    }
}
