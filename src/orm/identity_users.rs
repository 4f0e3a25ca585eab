//! SeaORM Entity for identity_users table
//!
//! External identity principals. Students, instructors and web admins each
//! reference exactly one of these; the rows themselves are created and
//! managed by the identity provider, never by this application.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "identity_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::instructors::Entity")]
    Instructors,
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
    #[sea_orm(has_many = "super::web_admins::Entity")]
    WebAdmins,
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructors.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::web_admins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebAdmins.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
