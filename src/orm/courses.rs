//! SeaORM Entity for courses table

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Course review workflow state.
///
/// Transitions are one-directional: a course is created under review and
/// moves to approved or rejected, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CourseStatus {
    #[sea_orm(num_value = 0)]
    Rejected,
    #[sea_orm(num_value = 1)]
    Approved,
    #[sea_orm(num_value = 2)]
    UnderReview,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(nullable)]
    pub image: Option<String>,
    pub category: i32,
    pub status: CourseStatus,
    pub instructor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Instructor,
    #[sea_orm(has_many = "super::sections::Entity")]
    Sections,
    #[sea_orm(has_many = "super::enrolls::Entity")]
    Enrolls,
    #[sea_orm(has_many = "super::student_progress::Entity")]
    StudentProgress,
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl Related<super::enrolls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrolls.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrolls::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrolls::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
