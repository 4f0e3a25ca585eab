//! Service-layer error taxonomy.
//!
//! Lookups that can simply miss return `Option` instead; these variants
//! cover the cases a caller must be able to distinguish.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("cannot delete an instructor with active courses")]
    InstructorHasCourses,

    #[error("student is already enrolled in this course")]
    AlreadyEnrolled,

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
