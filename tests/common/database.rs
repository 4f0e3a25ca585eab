//! Test database setup and management
#![allow(dead_code)]

use coursehub::orm::{
    black_lists, courses, enrolls, identity_users, instructors, sections, student_progress,
    students, web_admins,
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
};

/// Creates a fresh in-memory SQLite database with the full entity schema.
///
/// Each call returns an isolated database, so tests can run in parallel
/// without interfering with each other. The pool is pinned to a single
/// connection because every SQLite `:memory:` connection is its own
/// database.
pub async fn setup_test_database() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1);

    let db = Database::connect(opt).await?;
    create_schema(&db).await?;
    Ok(db)
}

/// Derives DDL from the entities. Parents are created before children so
/// foreign keys resolve.
async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(DbBackend::Sqlite);

    db.execute(backend.build(&schema.create_table_from_entity(identity_users::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(instructors::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(students::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(courses::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(sections::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(enrolls::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(student_progress::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(web_admins::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(black_lists::Entity)))
        .await?;

    Ok(())
}
