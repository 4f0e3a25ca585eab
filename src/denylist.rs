//! Registration email denylist.

use crate::error::ServiceError;
use crate::orm::black_lists;
use sea_orm::{entity::*, query::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// Whether an email is barred from registration. Matching is
/// case-insensitive; entries are stored lowercased.
pub async fn is_denied(db: &DatabaseConnection, email: &str) -> Result<bool, DbErr> {
    let entry = black_lists::Entity::find_by_id(email.to_lowercase())
        .one(db)
        .await?;
    Ok(entry.is_some())
}

/// Adds an email to the denylist. Idempotent.
pub async fn deny(db: &DatabaseConnection, email: &str) -> Result<(), ServiceError> {
    if !validator::validate_email(email) {
        return Err(ServiceError::InvalidEmail(email.to_owned()));
    }

    let email = email.to_lowercase();
    if is_denied(db, &email).await? {
        return Ok(());
    }

    let entry = black_lists::ActiveModel {
        email: Set(email.clone()),
    };
    entry.insert(db).await?;

    log::info!("denylisted {}", email);
    Ok(())
}

/// Removes an email from the denylist. Removing an absent entry is a
/// no-op.
pub async fn allow(db: &DatabaseConnection, email: &str) -> Result<(), DbErr> {
    black_lists::Entity::delete_by_id(email.to_lowercase())
        .exec(db)
        .await?;
    Ok(())
}
