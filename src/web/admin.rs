//! Administration endpoints
//!
//! Course review queue, student and instructor account management, and the
//! registration denylist. Authorization is handled upstream by the identity
//! provider; these handlers assume an admin principal.

use crate::db::get_db_pool;
use crate::orm::{courses, students};
use crate::{admin, denylist};
use actix_web::{error, get, post, web, Error, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_pending_courses)
        .service(view_active_courses)
        .service(view_course)
        .service(approve_course)
        .service(reject_course)
        // Student management
        .service(view_students)
        .service(view_student)
        .service(delete_student)
        // Instructor management
        .service(view_instructors)
        .service(view_instructor)
        .service(delete_instructor)
        // Registration denylist
        .service(deny_email)
        .service(allow_email);
}

// ============================================================================
// Course review
// ============================================================================

/// A course with its enrolled students.
#[derive(Serialize)]
struct CourseDetail {
    #[serde(flatten)]
    course: courses::Model,
    students: Vec<students::Model>,
}

/// GET /admin/courses/pending - courses awaiting review
#[get("/admin/courses/pending")]
async fn view_pending_courses() -> Result<impl Responder, Error> {
    let courses = admin::list_pending_courses(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(courses))
}

/// GET /admin/courses - courses that have left review
#[get("/admin/courses")]
async fn view_active_courses() -> Result<impl Responder, Error> {
    let courses = admin::list_active_courses(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(courses))
}

/// GET /admin/courses/{id} - one course with its enrolled students
#[get("/admin/courses/{id}")]
async fn view_course(path: web::Path<i32>) -> Result<impl Responder, Error> {
    let id = path.into_inner();

    let detail = admin::get_course(get_db_pool(), id)
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Course not found"))?;

    let (course, students) = detail;
    Ok(HttpResponse::Ok().json(CourseDetail { course, students }))
}

/// POST /admin/courses/{id}/approve
///
/// Responds 200 even when the id does not exist; the status change is then
/// a no-op.
#[post("/admin/courses/{id}/approve")]
async fn approve_course(path: web::Path<i32>) -> Result<impl Responder, Error> {
    admin::approve_course(get_db_pool(), path.into_inner())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().finish())
}

/// POST /admin/courses/{id}/reject
#[post("/admin/courses/{id}/reject")]
async fn reject_course(path: web::Path<i32>) -> Result<impl Responder, Error> {
    admin::reject_course(get_db_pool(), path.into_inner())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().finish())
}

// ============================================================================
// Student management
// ============================================================================

/// GET /admin/students
#[get("/admin/students")]
async fn view_students() -> Result<impl Responder, Error> {
    let students = admin::list_students(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(students))
}

/// GET /admin/students/{id}
#[get("/admin/students/{id}")]
async fn view_student(path: web::Path<i32>) -> Result<impl Responder, Error> {
    let student = admin::get_student(get_db_pool(), path.into_inner())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Student not found"))?;

    Ok(HttpResponse::Ok().json(student))
}

/// POST /admin/students/{id}/delete
#[post("/admin/students/{id}/delete")]
async fn delete_student(path: web::Path<i32>) -> Result<impl Responder, Error> {
    admin::delete_student(get_db_pool(), path.into_inner())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().finish())
}

// ============================================================================
// Instructor management
// ============================================================================

/// GET /admin/instructors
#[get("/admin/instructors")]
async fn view_instructors() -> Result<impl Responder, Error> {
    let instructors = admin::list_instructors(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(instructors))
}

/// GET /admin/instructors/{id}
#[get("/admin/instructors/{id}")]
async fn view_instructor(path: web::Path<i32>) -> Result<impl Responder, Error> {
    let instructor = admin::get_instructor(get_db_pool(), path.into_inner())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Instructor not found"))?;

    Ok(HttpResponse::Ok().json(instructor))
}

/// POST /admin/instructors/{id}/delete
///
/// 409 when the instructor still owns courses.
#[post("/admin/instructors/{id}/delete")]
async fn delete_instructor(path: web::Path<i32>) -> Result<impl Responder, Error> {
    admin::delete_instructor(get_db_pool(), path.into_inner())
        .await
        .map_err(super::service_error)?;

    Ok(HttpResponse::Ok().finish())
}

// ============================================================================
// Registration denylist
// ============================================================================

#[derive(Deserialize)]
struct DenylistForm {
    email: String,
}

/// POST /admin/denylist - bar an email from registration
#[post("/admin/denylist")]
async fn deny_email(form: web::Form<DenylistForm>) -> Result<impl Responder, Error> {
    denylist::deny(get_db_pool(), &form.email)
        .await
        .map_err(super::service_error)?;

    Ok(HttpResponse::Ok().finish())
}

/// POST /admin/denylist/remove
#[post("/admin/denylist/remove")]
async fn allow_email(form: web::Form<DenylistForm>) -> Result<impl Responder, Error> {
    denylist::allow(get_db_pool(), &form.email)
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().finish())
}
