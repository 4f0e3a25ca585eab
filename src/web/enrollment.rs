//! Enrollment and progress endpoints

use crate::db::get_db_pool;
use crate::enrollment;
use actix_web::{post, web, Error, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(enroll).service(complete_section);
}

#[derive(Deserialize)]
struct EnrollForm {
    student_id: i32,
}

#[derive(Serialize)]
struct ProgressResponse {
    progress: i32,
}

/// POST /courses/{id}/enroll - enroll a student at zero progress
///
/// 409 when the student is already enrolled.
#[post("/courses/{id}/enroll")]
async fn enroll(
    path: web::Path<i32>,
    form: web::Form<EnrollForm>,
) -> Result<impl Responder, Error> {
    let enrollment = enrollment::enroll(get_db_pool(), path.into_inner(), form.student_id)
        .await
        .map_err(super::service_error)?;

    Ok(HttpResponse::Ok().json(enrollment))
}

#[derive(Deserialize)]
struct CompleteForm {
    student_id: i32,
}

/// POST /courses/{id}/sections/{section_id}/complete - mark a section done
/// and report the recomputed course progress
#[post("/courses/{id}/sections/{section_id}/complete")]
async fn complete_section(
    path: web::Path<(i32, i32)>,
    form: web::Form<CompleteForm>,
) -> Result<impl Responder, Error> {
    let (course_id, section_id) = path.into_inner();

    let progress =
        enrollment::complete_section(get_db_pool(), course_id, section_id, form.student_id)
            .await
            .map_err(super::service_error)?;

    Ok(HttpResponse::Ok().json(ProgressResponse { progress }))
}
