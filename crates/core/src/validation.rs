//! Field-level payload validation.
//!
//! Request bodies arrive as loosely typed JSON objects. [`FieldReader`] walks
//! the fields a resource cares about, applies one [`Rule`] per field and
//! collects every violation before reporting, so a client sees all of its
//! mistakes in a single response.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use validator::ValidateEmail;

/// A JSON object as received from the client.
pub type Payload = serde_json::Map<String, Value>;

/// A check applied to a string field. Returns the violation message on failure.
pub type Rule = fn(&str) -> Result<(), &'static str>;

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_EXPECTED_STRING: &str = "Expected string";
pub const MSG_EMPTY: &str = "Must not be empty";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_INVALID_DATE: &str = "Expected date in YYYY-MM-DD format";
/// Reported when the store rejects a shape-valid date such as `2020-02-30`.
pub const MSG_NOT_A_DATE: &str = "Not a valid calendar date";
pub const MSG_EXPECTED_INTEGER: &str = "Expected integer";
pub const MSG_NOT_POSITIVE: &str = "Must be a positive integer";

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Every failing field of a payload, keyed by field path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Validation failed for {} field(s)", .details.len())]
pub struct ValidationError {
    details: BTreeMap<String, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation. The first message recorded for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.details
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.details.get(field).map(String::as_str)
    }

    pub fn details(&self) -> &BTreeMap<String, String> {
        &self.details
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Accepts any string, including the empty one.
pub fn any_text(_: &str) -> Result<(), &'static str> {
    Ok(())
}

pub fn non_empty(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err(MSG_EMPTY)
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), &'static str> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(MSG_INVALID_EMAIL)
    }
}

/// Shape check only: `2020-02-31` passes, `2020/01/01` does not.
pub fn date_pattern(value: &str) -> Result<(), &'static str> {
    if DATE_RE.is_match(value) {
        Ok(())
    } else {
        Err(MSG_INVALID_DATE)
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Extracts typed fields from a [`Payload`] while accumulating violations.
///
/// Getters for required fields return a placeholder when the field is
/// invalid; the placeholder never escapes because [`FieldReader::finish`]
/// discards the value whenever an error was recorded.
pub struct FieldReader<'a> {
    payload: &'a Payload,
    errors: ValidationError,
}

impl<'a> FieldReader<'a> {
    pub fn new(payload: &'a Payload) -> Self {
        Self {
            payload,
            errors: ValidationError::new(),
        }
    }

    /// A present, non-null value. JSON `null` counts as absent.
    fn value(&self, field: &str) -> Option<&'a Value> {
        self.payload.get(field).filter(|v| !v.is_null())
    }

    pub fn required_str(&mut self, field: &str, rule: Rule) -> String {
        match self.value(field) {
            None => {
                self.errors.add(field, MSG_REQUIRED);
                String::new()
            }
            Some(value) => self.check_str(field, value, rule).unwrap_or_default(),
        }
    }

    pub fn optional_str(&mut self, field: &str, rule: Rule) -> Option<String> {
        let value = self.value(field)?;
        self.check_str(field, value, rule)
    }

    pub fn required_positive_id(&mut self, field: &str) -> i64 {
        let Some(value) = self.value(field) else {
            self.errors.add(field, MSG_REQUIRED);
            return 0;
        };
        match value.as_i64() {
            Some(n) if n > 0 => n,
            Some(_) => {
                self.errors.add(field, MSG_NOT_POSITIVE);
                0
            }
            None => {
                self.errors.add(field, MSG_EXPECTED_INTEGER);
                0
            }
        }
    }

    fn check_str(&mut self, field: &str, value: &Value, rule: Rule) -> Option<String> {
        let Some(s) = value.as_str() else {
            self.errors.add(field, MSG_EXPECTED_STRING);
            return None;
        };
        match rule(s) {
            Ok(()) => Some(s.to_string()),
            Err(message) => {
                self.errors.add(field, message);
                None
            }
        }
    }

    /// Return `value` if no violation was recorded, otherwise every violation.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}
