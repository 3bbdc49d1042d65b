//! Course payload validation.

use serde::Serialize;

use crate::validation::{any_text, non_empty, FieldReader, Payload, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCourse {
    pub title: String,
    /// Defaults to the empty string when omitted.
    pub description: String,
}

impl NewCourse {
    pub fn validate(payload: &Payload) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(payload);
        let course = Self {
            title: fields.required_str("title", non_empty),
            description: fields
                .optional_str("description", any_text)
                .unwrap_or_default(),
        };
        fields.finish(course)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CourseChanges {
    pub fn validate(payload: &Payload) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(payload);
        let changes = Self {
            title: fields.optional_str("title", non_empty),
            description: fields.optional_str("description", any_text),
        };
        fields.finish(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{MSG_EMPTY, MSG_EXPECTED_STRING, MSG_REQUIRED};
    use serde_json::{json, Value};

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn description_defaults_to_empty() {
        let course = NewCourse::validate(&payload(json!({ "title": "Matematika" }))).unwrap();
        assert_eq!(course.title, "Matematika");
        assert_eq!(course.description, "");
    }

    #[test]
    fn empty_description_is_allowed() {
        let course =
            NewCourse::validate(&payload(json!({ "title": "Fizika", "description": "" })))
                .unwrap();
        assert_eq!(course.description, "");
    }

    #[test]
    fn title_is_required() {
        let err = NewCourse::validate(&payload(json!({ "description": "x" }))).unwrap_err();
        assert_eq!(err.get("title"), Some(MSG_REQUIRED));

        let err = NewCourse::validate(&payload(json!({ "title": "" }))).unwrap_err();
        assert_eq!(err.get("title"), Some(MSG_EMPTY));
    }

    #[test]
    fn non_string_description_is_rejected() {
        let err = NewCourse::validate(&payload(json!({ "title": "Kémia", "description": 3 })))
            .unwrap_err();
        assert_eq!(err.get("description"), Some(MSG_EXPECTED_STRING));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn update_with_description_only() {
        let changes = CourseChanges::validate(&payload(json!({ "description": "x" }))).unwrap();
        assert_eq!(changes.title, None);
        assert_eq!(changes.description.as_deref(), Some("x"));
    }

    #[test]
    fn update_rejects_empty_title() {
        let err = CourseChanges::validate(&payload(json!({ "title": "" }))).unwrap_err();
        assert_eq!(err.get("title"), Some(MSG_EMPTY));
    }
}
