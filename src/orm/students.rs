//! SeaORM Entity for students table

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(nullable)]
    pub education: Option<String>,
    #[sea_orm(nullable)]
    pub image: Option<String>,
    pub account_status: i32,
    pub identity_user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrolls::Entity")]
    Enrolls,
    #[sea_orm(has_many = "super::student_progress::Entity")]
    StudentProgress,
    #[sea_orm(
        belongs_to = "super::identity_users::Entity",
        from = "Column::IdentityUserId",
        to = "super::identity_users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    IdentityUser,
}

impl Related<super::enrolls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrolls.def()
    }
}

impl Related<super::identity_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdentityUser.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrolls::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrolls::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
