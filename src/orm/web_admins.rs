//! SeaORM Entity for web_admins table
//!
//! Administrator accounts. Role (super admin vs admin) is carried in the
//! flat account_status field rather than a typed hierarchy.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "web_admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub account_status: i32,
    pub identity_user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::identity_users::Entity",
        from = "Column::IdentityUserId",
        to = "super::identity_users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    IdentityUser,
}

impl Related<super::identity_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdentityUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
