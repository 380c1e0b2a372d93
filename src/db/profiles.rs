use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::db::error::{is_unique_violation, StoreError};
use crate::models::profiles::{self, UpdateProfile};

/// Fetch the profile for `designer_id`, creating an empty one if it does
/// not exist yet.
///
/// Every code path that touches a profile's derived columns goes through
/// this first, so a designer row that somehow lost its profile gets it
/// back instead of erroring. Safe to call concurrently: losing the
/// creation race falls back to reading the winner's row.
pub async fn ensure_profile<C: ConnectionTrait>(
    conn: &C,
    designer_id: Uuid,
) -> Result<profiles::Model, StoreError> {
    if let Some(existing) = profiles::Entity::find_by_id(designer_id).one(conn).await? {
        return Ok(existing);
    }

    let blank = profiles::ActiveModel {
        designer_id: Set(designer_id),
        specialization: Set(None),
        bio: Set(None),
        experience: Set(0),
        rating: Set(0.0),
        views_count: Set(0),
        work_amount: Set(0),
        avatar_url: Set(None),
        header_url: Set(None),
    };

    match blank.insert(conn).await {
        Ok(profile) => Ok(profile),
        Err(err) if is_unique_violation(&err) => profiles::Entity::find_by_id(designer_id)
            .one(conn)
            .await?
            .ok_or(StoreError::Db(err)),
        Err(err) => Err(err.into()),
    }
}

pub async fn get_profile(
    db: &DatabaseConnection,
    designer_id: Uuid,
) -> Result<Option<profiles::Model>, StoreError> {
    Ok(profiles::Entity::find_by_id(designer_id).one(db).await?)
}

/// Apply the caller-editable fields. Derived columns (rating, counters)
/// are never writable through here.
pub async fn update_profile_fields(
    db: &DatabaseConnection,
    designer_id: Uuid,
    input: UpdateProfile,
) -> Result<profiles::Model, StoreError> {
    let profile = ensure_profile(db, designer_id).await?;

    let mut active: profiles::ActiveModel = profile.clone().into();
    if let Some(specialization) = input.specialization {
        active.specialization = Set(Some(specialization));
    }
    if let Some(bio) = input.bio {
        active.bio = Set(Some(bio));
    }
    if let Some(experience) = input.experience {
        active.experience = Set(experience);
    }
    if let Some(avatar_url) = input.avatar_url {
        active.avatar_url = Set(Some(avatar_url));
    }
    if let Some(header_url) = input.header_url {
        active.header_url = Set(Some(header_url));
    }

    if active.is_changed() {
        Ok(active.update(db).await?)
    } else {
        Ok(profile)
    }
}

/// Move the owner's work counter by `delta`, clamped at zero.
pub async fn adjust_work_amount<C: ConnectionTrait>(
    conn: &C,
    designer_id: Uuid,
    delta: i32,
) -> Result<profiles::Model, StoreError> {
    let profile = ensure_profile(conn, designer_id).await?;
    let next = Ord::max(profile.work_amount + delta, 0);

    let mut active: profiles::ActiveModel = profile.into();
    active.work_amount = Set(next);
    Ok(active.update(conn).await?)
}

/// Move the owner's profile view counter by `delta`. Concurrent viewers
/// must not lose increments, so the addition happens in SQL rather than
/// as a read-modify-write.
pub async fn adjust_views_count<C: ConnectionTrait>(
    conn: &C,
    designer_id: Uuid,
    delta: i32,
) -> Result<(), StoreError> {
    profiles::Entity::update_many()
        .col_expr(
            profiles::Column::ViewsCount,
            Expr::col(profiles::Column::ViewsCount).add(delta),
        )
        .filter(profiles::Column::DesignerId.eq(designer_id))
        .exec(conn)
        .await?;
    Ok(())
}
