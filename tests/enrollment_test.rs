//! Integration tests for enrollment and section-completion tracking

mod common;

use common::{database::*, fixtures::*};
use coursehub::error::ServiceError;
use coursehub::orm::courses::CourseStatus;
use coursehub::orm::sections;
use coursehub::{enrollment, instructor};
use sea_orm::{entity::*, ActiveValue::Set};

#[actix_rt::test]
async fn test_enroll_starts_at_zero_progress() {
    let db = setup_test_database().await.expect("test database");
    let ada = create_instructor(&db, "ada").await.expect("instructor");
    let course = create_course(&db, ada.id, "Compilers", CourseStatus::Approved)
        .await
        .expect("course");
    let alice = create_student(&db, "alice").await.expect("student");

    let enrollment = enrollment::enroll(&db, course.id, alice.id)
        .await
        .expect("enroll");
    assert_eq!(enrollment.course_id, course.id);
    assert_eq!(enrollment.student_id, alice.id);
    assert_eq!(enrollment.progress, Some(0));

    let roster = instructor::course_roster(&db, course.id)
        .await
        .expect("roster")
        .expect("course is owned");
    assert_eq!(roster.students.len(), 1);
    assert_eq!(roster.students[0].student_name, "alice");
}

#[actix_rt::test]
async fn test_enroll_twice_conflicts() {
    let db = setup_test_database().await.expect("test database");
    let ada = create_instructor(&db, "ada").await.expect("instructor");
    let course = create_course(&db, ada.id, "Compilers", CourseStatus::Approved)
        .await
        .expect("course");
    let alice = create_student(&db, "alice").await.expect("student");

    enrollment::enroll(&db, course.id, alice.id)
        .await
        .expect("enroll");
    let err = enrollment::enroll(&db, course.id, alice.id)
        .await
        .expect_err("must conflict");
    assert!(matches!(err, ServiceError::AlreadyEnrolled));
}

#[actix_rt::test]
async fn test_enroll_missing_course_or_student() {
    let db = setup_test_database().await.expect("test database");
    let ada = create_instructor(&db, "ada").await.expect("instructor");
    let course = create_course(&db, ada.id, "Compilers", CourseStatus::Approved)
        .await
        .expect("course");
    let alice = create_student(&db, "alice").await.expect("student");

    let err = enrollment::enroll(&db, 999, alice.id)
        .await
        .expect_err("missing course");
    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "course",
            ..
        }
    ));

    let err = enrollment::enroll(&db, course.id, 999)
        .await
        .expect_err("missing student");
    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "student",
            ..
        }
    ));
}

#[actix_rt::test]
async fn test_complete_section_recomputes_progress() {
    let db = setup_test_database().await.expect("test database");
    let ada = create_instructor(&db, "ada").await.expect("instructor");
    let course = create_course(&db, ada.id, "Compilers", CourseStatus::Approved)
        .await
        .expect("course");
    let lexing = create_section(&db, course.id, 1, "Lexing").await.expect("section");
    let parsing = create_section(&db, course.id, 2, "Parsing")
        .await
        .expect("section");
    let alice = create_student(&db, "alice").await.expect("student");
    enrollment::enroll(&db, course.id, alice.id)
        .await
        .expect("enroll");

    let progress = enrollment::complete_section(&db, course.id, lexing.id, alice.id)
        .await
        .expect("complete");
    assert_eq!(progress, 50);

    // Completing the same section again is idempotent.
    let progress = enrollment::complete_section(&db, course.id, lexing.id, alice.id)
        .await
        .expect("complete");
    assert_eq!(progress, 50);

    let progress = enrollment::complete_section(&db, course.id, parsing.id, alice.id)
        .await
        .expect("complete");
    assert_eq!(progress, 100);

    // The roster reflects the recomputed percentage.
    let roster = instructor::course_roster(&db, course.id)
        .await
        .expect("roster")
        .expect("course is owned");
    assert_eq!(roster.students[0].progress, 100);
}

#[actix_rt::test]
async fn test_progress_ignores_detached_sections() {
    let db = setup_test_database().await.expect("test database");
    let ada = create_instructor(&db, "ada").await.expect("instructor");
    let course = create_course(&db, ada.id, "Compilers", CourseStatus::Approved)
        .await
        .expect("course");
    let lexing = create_section(&db, course.id, 1, "Lexing").await.expect("section");
    let parsing = create_section(&db, course.id, 2, "Parsing")
        .await
        .expect("section");
    let alice = create_student(&db, "alice").await.expect("student");
    enrollment::enroll(&db, course.id, alice.id)
        .await
        .expect("enroll");

    enrollment::complete_section(&db, course.id, lexing.id, alice.id)
        .await
        .expect("complete");
    let progress = enrollment::complete_section(&db, course.id, parsing.id, alice.id)
        .await
        .expect("complete");
    assert_eq!(progress, 100);

    // Detach the parsing section back into authoring.
    let mut detached: sections::ActiveModel = parsing.into();
    detached.course_id = Set(None);
    detached.update(&db).await.expect("detach");

    // The stale completion no longer counts; progress stays capped at the
    // one remaining section.
    let progress = enrollment::complete_section(&db, course.id, lexing.id, alice.id)
        .await
        .expect("complete");
    assert_eq!(progress, 100);
}

#[actix_rt::test]
async fn test_complete_section_requires_enrollment() {
    let db = setup_test_database().await.expect("test database");
    let ada = create_instructor(&db, "ada").await.expect("instructor");
    let course = create_course(&db, ada.id, "Compilers", CourseStatus::Approved)
        .await
        .expect("course");
    let lexing = create_section(&db, course.id, 1, "Lexing").await.expect("section");
    let alice = create_student(&db, "alice").await.expect("student");

    let err = enrollment::complete_section(&db, course.id, lexing.id, alice.id)
        .await
        .expect_err("not enrolled");
    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "enrollment",
            ..
        }
    ));
}

#[actix_rt::test]
async fn test_complete_section_from_another_course() {
    let db = setup_test_database().await.expect("test database");
    let ada = create_instructor(&db, "ada").await.expect("instructor");
    let compilers = create_course(&db, ada.id, "Compilers", CourseStatus::Approved)
        .await
        .expect("course");
    let linkers = create_course(&db, ada.id, "Linkers", CourseStatus::Approved)
        .await
        .expect("course");
    let relocation = create_section(&db, linkers.id, 1, "Relocation")
        .await
        .expect("section");
    let alice = create_student(&db, "alice").await.expect("student");
    enrollment::enroll(&db, compilers.id, alice.id)
        .await
        .expect("enroll");

    let err = enrollment::complete_section(&db, compilers.id, relocation.id, alice.id)
        .await
        .expect_err("section belongs to another course");
    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "section",
            ..
        }
    ));
}
