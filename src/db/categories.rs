use sea_orm::*;
use uuid::Uuid;

use crate::db::error::{is_unique_violation, StoreError};
use crate::models::categories::{self, CreateCategory};

pub async fn get_categories(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<categories::Model>, StoreError> {
    Ok(categories::Entity::find()
        .order_by_asc(categories::Column::Name)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<categories::Model>, StoreError> {
    Ok(categories::Entity::find()
        .filter(categories::Column::Name.eq(name))
        .one(db)
        .await?)
}

/// Insert a category; on a duplicate-name race, return the row that won.
pub async fn create_category(
    db: &DatabaseConnection,
    input: CreateCategory,
) -> Result<categories::Model, StoreError> {
    let new_category = categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name.clone()),
    };

    match new_category.insert(db).await {
        Ok(category) => Ok(category),
        Err(err) if is_unique_violation(&err) => categories::Entity::find()
            .filter(categories::Column::Name.eq(&input.name))
            .one(db)
            .await?
            .ok_or(StoreError::Db(err)),
        Err(err) => Err(err.into()),
    }
}
