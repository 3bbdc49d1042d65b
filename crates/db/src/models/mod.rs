//! Row structs for the three tables.
//!
//! Each is `FromRow` for reads and `Serialize` so handlers can return rows
//! as-is. Write-side shapes live next to their validators in `school_core`.

pub mod course;
pub mod enrollment;
pub mod student;
