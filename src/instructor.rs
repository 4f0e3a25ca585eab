//! Per-instructor dashboard projections.
//!
//! Pure reads; nothing here mutates the store.

use crate::orm::{courses, enrolls, instructors, students};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use serde::Serialize;

/// One row of an instructor's course overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub course_id: i32,
    pub course_name: String,
    pub num_students: usize,
    pub category: i32,
}

/// One enrolled student in a course roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub student_id: i32,
    pub student_name: String,
    /// Enrollment progress, 0 when the enrollment carries none.
    pub progress: i32,
}

/// A course's enrolled students with their progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRoster {
    pub course_name: String,
    pub students: Vec<RosterEntry>,
}

/// Summarizes every course an instructor owns: name, enrolled-student
/// count, category. Courses are ordered by id ascending. Returns `None`
/// for an unknown instructor.
pub async fn course_summaries(
    db: &DatabaseConnection,
    instructor_id: i32,
) -> Result<Option<Vec<CourseSummary>>, DbErr> {
    let instructor = match instructors::Entity::find_by_id(instructor_id).one(db).await? {
        Some(instructor) => instructor,
        None => return Ok(None),
    };

    let courses = instructor
        .find_related(courses::Entity)
        .order_by_asc(courses::Column::Id)
        .all(db)
        .await?;

    let mut summaries = Vec::with_capacity(courses.len());
    for course in courses {
        let num_students = course.find_related(enrolls::Entity).count(db).await?;
        summaries.push(CourseSummary {
            course_id: course.id,
            course_name: course.name,
            num_students,
            category: course.category,
        });
    }

    Ok(Some(summaries))
}

/// The roster of a single course, located through its owning instructor.
/// Returns `None` when no instructor owns a course with this id, or when
/// the course is missing from the owner's collection on the second look.
pub async fn course_roster(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<Option<CourseRoster>, DbErr> {
    let instructor = instructors::Entity::find()
        .join(JoinType::InnerJoin, instructors::Relation::Courses.def())
        .filter(courses::Column::Id.eq(course_id))
        .one(db)
        .await?;

    let instructor = match instructor {
        Some(instructor) => instructor,
        None => return Ok(None),
    };

    let course = instructor
        .find_related(courses::Entity)
        .filter(courses::Column::Id.eq(course_id))
        .one(db)
        .await?;

    let course = match course {
        Some(course) => course,
        None => return Ok(None),
    };

    let rows = enrolls::Entity::find()
        .filter(enrolls::Column::CourseId.eq(course_id))
        .find_also_related(students::Entity)
        .all(db)
        .await?;

    let students = rows
        .into_iter()
        .filter_map(|(enroll, student)| {
            student.map(|student| RosterEntry {
                student_id: student.id,
                student_name: student.name,
                progress: enroll.progress.unwrap_or(0),
            })
        })
        .collect();

    Ok(Some(CourseRoster {
        course_name: course.name,
        students,
    }))
}
