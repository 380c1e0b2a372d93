use sea_orm::*;
use uuid::Uuid;

use crate::db::error::{is_unique_violation, StoreError};
use crate::models::tags;

pub async fn get_tags(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<tags::Model>, StoreError> {
    Ok(tags::Entity::find()
        .order_by_asc(tags::Column::Name)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

pub async fn get_tag_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<tags::Model>, StoreError> {
    Ok(tags::Entity::find()
        .filter(tags::Column::Name.eq(name))
        .one(db)
        .await?)
}

/// Look a tag up by name, creating it when absent. Tag names are unique,
/// so losing the creation race to another session just means reading the
/// row that session inserted.
pub async fn get_or_create<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<tags::Model, StoreError> {
    if let Some(existing) = tags::Entity::find()
        .filter(tags::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let new_tag = tags::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
    };

    match new_tag.insert(conn).await {
        Ok(tag) => Ok(tag),
        Err(err) if is_unique_violation(&err) => tags::Entity::find()
            .filter(tags::Column::Name.eq(name))
            .one(conn)
            .await?
            .ok_or(StoreError::Db(err)),
        Err(err) => Err(err.into()),
    }
}
