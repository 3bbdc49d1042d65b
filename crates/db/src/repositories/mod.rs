//! Repository layer.
//!
//! Each repository owns a clone of the connection pool and is constructed
//! once at startup. Every statement binds its values as parameters.

pub mod course_repo;
pub mod enrollment_repo;
pub mod student_repo;

pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use student_repo::StudentRepo;
