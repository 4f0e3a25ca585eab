pub mod admin;
pub mod enrollment;
pub mod instructor;

use crate::error::ServiceError;
use actix_web::error;

/// Configures the web app by adding services from each web file.
///
/// @see https://docs.rs/actix-web/4.0.1/actix_web/struct.App.html#method.configure
pub fn configure(conf: &mut actix_web::web::ServiceConfig) {
    // Route resolution stops at the first match.
    admin::configure(conf);
    enrollment::configure(conf);
    instructor::configure(conf);
}

/// Maps service-layer failures onto HTTP error responses.
pub(crate) fn service_error(err: ServiceError) -> actix_web::Error {
    match err {
        ServiceError::InstructorHasCourses | ServiceError::AlreadyEnrolled => {
            error::ErrorConflict(err.to_string())
        }
        ServiceError::NotFound { .. } => error::ErrorNotFound(err.to_string()),
        ServiceError::InvalidEmail(_) => error::ErrorBadRequest(err.to_string()),
        ServiceError::Db(e) => error::ErrorInternalServerError(e),
    }
}
