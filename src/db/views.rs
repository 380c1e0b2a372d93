use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::db::error::{is_unique_violation, StoreError};
use crate::db::profiles as profile_db;
use crate::models::{work_views, works};

/// Count a view of `work_id` by `user_id`, at most once per pair.
///
/// Returns `true` when this call recorded the view (and bumped the
/// work's and the owner's counters in the same transaction), `false`
/// when the pair had already been seen. Two sessions racing on a fresh
/// pair produce exactly one count: the loser's insert hits the primary
/// key and rolls its increments back.
pub async fn register_view(
    db: &DatabaseConnection,
    work_id: Uuid,
    user_id: Uuid,
) -> Result<bool, StoreError> {
    let work = works::Entity::find_by_id(work_id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("work", work_id))?;

    if work_views::Entity::find_by_id((work_id, user_id))
        .one(db)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    profile_db::ensure_profile(db, work.designer_id).await?;

    let txn = db.begin().await?;

    let view = work_views::ActiveModel {
        work_id: Set(work_id),
        user_id: Set(user_id),
        viewed_at: Set(chrono::Utc::now()),
    };
    match view.insert(&txn).await {
        Ok(_) => {}
        Err(err) if is_unique_violation(&err) => {
            // Another session won the race between our check and this
            // insert; its increment already counted.
            txn.rollback().await?;
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    }

    works::Entity::update_many()
        .col_expr(
            works::Column::ViewsCount,
            Expr::col(works::Column::ViewsCount).add(1),
        )
        .filter(works::Column::Id.eq(work_id))
        .exec(&txn)
        .await?;

    profile_db::adjust_views_count(&txn, work.designer_id, 1).await?;

    txn.commit().await?;
    Ok(true)
}
