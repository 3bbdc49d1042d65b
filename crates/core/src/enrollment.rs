//! Enrollment payload validation. Enrollments are never updated, so there is
//! only a create shape.

use serde::Serialize;

use crate::types::DbId;
use crate::validation::{FieldReader, Payload, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
}

impl NewEnrollment {
    /// Checks shape only. Whether the ids exist is left to the store's
    /// foreign keys.
    pub fn validate(payload: &Payload) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(payload);
        let enrollment = Self {
            student_id: fields.required_positive_id("student_id"),
            course_id: fields.required_positive_id("course_id"),
        };
        fields.finish(enrollment)
    }
}
