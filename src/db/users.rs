use sea_orm::*;
use uuid::Uuid;

use crate::db::error::{is_unique_violation, StoreError};
use crate::db::profiles as profile_db;
use crate::models::users::{self, RegisterUser, Roles};

/// Create a user. Designers get their empty profile in the same call,
/// which is what guarantees later rating and counter writes always have
/// a row to land in.
pub async fn register_user(
    db: &DatabaseConnection,
    input: RegisterUser,
) -> Result<users::Model, StoreError> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
        role: Set(input.role),
        registration_date: Set(chrono::Utc::now()),
    };

    let user = match new_user.insert(db).await {
        Ok(user) => user,
        Err(err) if is_unique_violation(&err) => {
            return Err(StoreError::Conflict("email already registered".to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    if user.role == Roles::Designer {
        profile_db::ensure_profile(db, user.id).await?;
    }

    Ok(user)
}

pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, StoreError> {
    Ok(users::Entity::find_by_id(id).one(db).await?)
}

pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, StoreError> {
    Ok(users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn get_users(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<users::Model>, StoreError> {
    Ok(users::Entity::find()
        .order_by_asc(users::Column::RegistrationDate)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<users::Model, StoreError> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("user", id))?;

    users::Entity::delete_by_id(id).exec(db).await?;
    Ok(user)
}
