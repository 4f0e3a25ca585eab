//! Test fixtures for creating test data
#![allow(dead_code)]

use coursehub::orm::{courses, enrolls, identity_users, instructors, sections, students};
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// Create an external identity principal for an account to reference.
pub async fn create_identity(
    db: &DatabaseConnection,
    id: &str,
) -> Result<identity_users::Model, DbErr> {
    identity_users::ActiveModel {
        id: Set(id.to_string()),
        user_name: Set(id.to_string()),
        email: Set(format!("{}@identity.test", id)),
    }
    .insert(db)
    .await
}

/// Create an instructor bound to a fresh identity principal.
pub async fn create_instructor(
    db: &DatabaseConnection,
    name: &str,
) -> Result<instructors::Model, DbErr> {
    let identity = create_identity(db, &format!("identity-instructor-{}", name)).await?;

    instructors::ActiveModel {
        name: Set(name.to_string()),
        email: Set(format!("{}@test.com", name)),
        about: Set(None),
        image: Set(None),
        account_status: Set(0),
        identity_user_id: Set(identity.id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a student bound to a fresh identity principal.
pub async fn create_student(db: &DatabaseConnection, name: &str) -> Result<students::Model, DbErr> {
    let identity = create_identity(db, &format!("identity-student-{}", name)).await?;

    students::ActiveModel {
        name: Set(name.to_string()),
        email: Set(format!("{}@test.com", name)),
        education: Set(None),
        image: Set(None),
        account_status: Set(0),
        identity_user_id: Set(identity.id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a course owned by an instructor.
pub async fn create_course(
    db: &DatabaseConnection,
    instructor_id: i32,
    name: &str,
    status: courses::CourseStatus,
) -> Result<courses::Model, DbErr> {
    courses::ActiveModel {
        name: Set(name.to_string()),
        description: Set(format!("{} description", name)),
        image: Set(None),
        category: Set(0),
        status: Set(status),
        instructor_id: Set(instructor_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a section attached to a course.
pub async fn create_section(
    db: &DatabaseConnection,
    course_id: i32,
    number: i32,
    title: &str,
) -> Result<sections::Model, DbErr> {
    sections::ActiveModel {
        title: Set(title.to_string()),
        number: Set(number),
        link: Set(format!("https://content.test/{}", title)),
        course_id: Set(Some(course_id)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create an enrollment row directly, bypassing the enrollment service.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    course_id: i32,
    student_id: i32,
    progress: Option<i32>,
) -> Result<enrolls::Model, DbErr> {
    enrolls::ActiveModel {
        course_id: Set(course_id),
        student_id: Set(student_id),
        progress: Set(progress),
        ..Default::default()
    }
    .insert(db)
    .await
}
