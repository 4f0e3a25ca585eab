//! Administrative workflow over courses, students and instructors.
//!
//! Course approval is one-directional: a course under review can be
//! approved or rejected, never sent back to review.

use crate::error::ServiceError;
use crate::orm::{courses, instructors, students};
use sea_orm::{entity::*, query::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// All courses awaiting review, in natural query order.
pub async fn list_pending_courses(db: &DatabaseConnection) -> Result<Vec<courses::Model>, DbErr> {
    courses::Entity::find()
        .filter(courses::Column::Status.eq(courses::CourseStatus::UnderReview))
        .all(db)
        .await
}

/// All courses that have left review (approved or rejected).
pub async fn list_active_courses(db: &DatabaseConnection) -> Result<Vec<courses::Model>, DbErr> {
    courses::Entity::find()
        .filter(courses::Column::Status.ne(courses::CourseStatus::UnderReview))
        .all(db)
        .await
}

/// A single course with its enrolled students eagerly loaded.
pub async fn get_course(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(courses::Model, Vec<students::Model>)>, DbErr> {
    let mut rows = courses::Entity::find_by_id(id)
        .find_with_related(students::Entity)
        .all(db)
        .await?;
    Ok(rows.pop())
}

/// Marks a course as approved. A nonexistent id is a silent no-op.
pub async fn approve_course(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    set_course_status(db, id, courses::CourseStatus::Approved).await
}

/// Marks a course as rejected. Same no-op semantics as [`approve_course`].
pub async fn reject_course(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    set_course_status(db, id, courses::CourseStatus::Rejected).await
}

async fn set_course_status(
    db: &DatabaseConnection,
    id: i32,
    status: courses::CourseStatus,
) -> Result<(), DbErr> {
    match courses::Entity::find_by_id(id).one(db).await? {
        Some(course) => {
            let mut course: courses::ActiveModel = course.into();
            course.status = Set(status);
            course.update(db).await?;
            Ok(())
        }
        None => {
            log::warn!("course status change skipped: course {} not found", id);
            Ok(())
        }
    }
}

pub async fn list_students(db: &DatabaseConnection) -> Result<Vec<students::Model>, DbErr> {
    students::Entity::find().all(db).await
}

pub async fn get_student(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<students::Model>, DbErr> {
    students::Entity::find_by_id(id).one(db).await
}

/// Removes a student record unconditionally. Enrollments and progress rows
/// are left to the database's delete rules.
pub async fn delete_student(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    students::Entity::delete_by_id(id).exec(db).await?;
    log::info!("deleted student {}", id);
    Ok(())
}

pub async fn list_instructors(db: &DatabaseConnection) -> Result<Vec<instructors::Model>, DbErr> {
    instructors::Entity::find().all(db).await
}

pub async fn get_instructor(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<instructors::Model>, DbErr> {
    instructors::Entity::find_by_id(id).one(db).await
}

/// Removes an instructor, refusing while any course still references them.
///
/// The existence check and the delete are two statements; a course created
/// between them can leave a dangling reference. Known race, accepted.
pub async fn delete_instructor(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let course_count = courses::Entity::find()
        .filter(courses::Column::InstructorId.eq(id))
        .count(db)
        .await?;

    if course_count > 0 {
        return Err(ServiceError::InstructorHasCourses);
    }

    instructors::Entity::delete_by_id(id).exec(db).await?;
    log::info!("deleted instructor {}", id);
    Ok(())
}
