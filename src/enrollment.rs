//! Enrollment and section-completion tracking.
//!
//! An enrollment's progress field is a derived percentage: completed
//! sections over the course's total sections.

use crate::error::ServiceError;
use crate::orm::{courses, enrolls, sections, student_progress, students};
use sea_orm::{entity::*, query::*, ActiveValue::Set, DatabaseConnection};

/// Enrolls a student in a course at zero progress.
pub async fn enroll(
    db: &DatabaseConnection,
    course_id: i32,
    student_id: i32,
) -> Result<enrolls::Model, ServiceError> {
    if courses::Entity::find_by_id(course_id).one(db).await?.is_none() {
        return Err(ServiceError::NotFound {
            entity: "course",
            id: course_id,
        });
    }
    if students::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .is_none()
    {
        return Err(ServiceError::NotFound {
            entity: "student",
            id: student_id,
        });
    }

    let existing = enrolls::Entity::find()
        .filter(enrolls::Column::CourseId.eq(course_id))
        .filter(enrolls::Column::StudentId.eq(student_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::AlreadyEnrolled);
    }

    let enrollment = enrolls::ActiveModel {
        course_id: Set(course_id),
        student_id: Set(student_id),
        progress: Set(Some(0)),
        ..Default::default()
    };
    let enrollment = enrollment.insert(db).await?;

    log::info!("student {} enrolled in course {}", student_id, course_id);
    Ok(enrollment)
}

/// Marks a section complete for an enrolled student and recomputes the
/// enrollment's progress percentage. Completing the same section twice is
/// idempotent. Returns the new percentage.
pub async fn complete_section(
    db: &DatabaseConnection,
    course_id: i32,
    section_id: i32,
    student_id: i32,
) -> Result<i32, ServiceError> {
    let enrollment = enrolls::Entity::find()
        .filter(enrolls::Column::CourseId.eq(course_id))
        .filter(enrolls::Column::StudentId.eq(student_id))
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound {
            entity: "enrollment",
            id: course_id,
        })?;

    let section = sections::Entity::find_by_id(section_id)
        .filter(sections::Column::CourseId.eq(course_id))
        .one(db)
        .await?;
    if section.is_none() {
        return Err(ServiceError::NotFound {
            entity: "section",
            id: section_id,
        });
    }

    let record = student_progress::Entity::find()
        .filter(student_progress::Column::CourseId.eq(course_id))
        .filter(student_progress::Column::SectionId.eq(section_id))
        .filter(student_progress::Column::StudentId.eq(student_id))
        .one(db)
        .await?;

    match record {
        Some(record) if record.status => {}
        Some(record) => {
            let mut record: student_progress::ActiveModel = record.into();
            record.status = Set(true);
            record.update(db).await?;
        }
        None => {
            let record = student_progress::ActiveModel {
                course_id: Set(course_id),
                section_id: Set(section_id),
                student_id: Set(student_id),
                status: Set(true),
                ..Default::default()
            };
            record.insert(db).await?;
        }
    }

    let progress = recompute_progress(db, course_id, student_id).await?;

    let mut enrollment: enrolls::ActiveModel = enrollment.into();
    enrollment.progress = Set(Some(progress));
    enrollment.update(db).await?;

    Ok(progress)
}

/// Percentage of a course's sections the student has completed, by
/// integer division. Only sections currently attached to the course count,
/// on both sides of the division: completions of since-detached sections
/// are ignored. A course with no sections counts as zero.
async fn recompute_progress(
    db: &DatabaseConnection,
    course_id: i32,
    student_id: i32,
) -> Result<i32, ServiceError> {
    let section_ids: Vec<i32> = sections::Entity::find()
        .filter(sections::Column::CourseId.eq(course_id))
        .all(db)
        .await?
        .into_iter()
        .map(|section| section.id)
        .collect();

    let total = section_ids.len();
    if total == 0 {
        return Ok(0);
    }

    let completed = student_progress::Entity::find()
        .filter(student_progress::Column::StudentId.eq(student_id))
        .filter(student_progress::Column::Status.eq(true))
        .filter(student_progress::Column::SectionId.is_in(section_ids))
        .count(db)
        .await?;

    Ok((completed * 100 / total) as i32)
}
