//! Instructor dashboard endpoints

use crate::db::get_db_pool;
use crate::instructor;
use actix_web::{error, get, web, Error, HttpResponse, Responder};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_course_summaries).service(view_roster);
}

/// GET /instructors/{id}/courses - per-course enrollment summary for one
/// instructor
#[get("/instructors/{id}/courses")]
async fn view_course_summaries(path: web::Path<i32>) -> Result<impl Responder, Error> {
    let summaries = instructor::course_summaries(get_db_pool(), path.into_inner())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Instructor not found"))?;

    Ok(HttpResponse::Ok().json(summaries))
}

/// GET /courses/{id}/roster - enrolled students with their progress
#[get("/courses/{id}/roster")]
async fn view_roster(path: web::Path<i32>) -> Result<impl Responder, Error> {
    let roster = instructor::course_roster(get_db_pool(), path.into_inner())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Course not found"))?;

    Ok(HttpResponse::Ok().json(roster))
}
