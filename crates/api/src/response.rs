//! Response body shapes shared by handlers.

use school_core::types::DbId;
use serde::Serialize;

/// Body of a `201 Created`: the assigned id followed by the echoed fields.
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(Created { id, fields: input })))
/// ```
#[derive(Debug, Serialize)]
pub struct Created<T: Serialize> {
    pub id: DbId,
    #[serde(flatten)]
    pub fields: T,
}
