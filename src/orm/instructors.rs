//! SeaORM Entity for instructors table

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    #[sea_orm(nullable)]
    pub image: Option<String>,
    pub account_status: i32,
    /// External identity principal this account is bound to. Identity
    /// records are owned by the identity provider, never created here.
    pub identity_user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(
        belongs_to = "super::identity_users::Entity",
        from = "Column::IdentityUserId",
        to = "super::identity_users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    IdentityUser,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::identity_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdentityUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
