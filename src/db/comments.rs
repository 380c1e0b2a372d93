use sea_orm::*;
use uuid::Uuid;

use crate::db::error::StoreError;
use crate::db::rating;
use crate::models::comments::{self, CommentResponse, CreateComment, UpdateComment};
use crate::models::{users, works};

pub async fn get_comment(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<comments::Model>, StoreError> {
    Ok(comments::Entity::find_by_id(id).one(db).await?)
}

pub async fn get_comment_full(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<CommentResponse>, StoreError> {
    match comments::Entity::find_by_id(id).one(db).await? {
        Some(comment) => Ok(Some(attach_author(db, comment).await?)),
        None => Ok(None),
    }
}

/// Comments on one work, newest first.
pub async fn get_comments_by_work(
    db: &DatabaseConnection,
    work_id: Uuid,
    skip: u64,
    limit: u64,
) -> Result<Vec<CommentResponse>, StoreError> {
    let rows = comments::Entity::find()
        .filter(comments::Column::WorkId.eq(work_id))
        .find_also_related(users::Entity)
        .order_by_desc(comments::Column::ReviewDate)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?;

    rows.into_iter()
        .map(|(comment, author)| {
            let author = author.ok_or_else(|| {
                StoreError::Db(DbErr::Custom(format!(
                    "comment {} has no author row",
                    comment.id
                )))
            })?;
            Ok(CommentResponse::from_parts(comment, author))
        })
        .collect()
}

/// Store a comment by `author_id` on an existing work. A comment that
/// carries a rating score changes the owner's aggregate, so the rating
/// is recomputed before returning.
pub async fn create_comment(
    db: &DatabaseConnection,
    author_id: Uuid,
    input: CreateComment,
) -> Result<CommentResponse, StoreError> {
    let work = works::Entity::find_by_id(input.work_id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("work", input.work_id))?;

    let new_comment = comments::ActiveModel {
        id: Set(Uuid::new_v4()),
        work_id: Set(work.id),
        author_id: Set(author_id),
        comment_text: Set(input.comment_text),
        rating_score: Set(input.rating_score),
        review_date: Set(chrono::Utc::now()),
    };
    let saved = new_comment.insert(db).await?;

    if saved.rating_score.is_some() {
        rating::recompute_rating(db, work.designer_id).await?;
    }

    attach_author(db, saved).await
}

/// Patch a comment. `rating_score` distinguishes "not supplied" from an
/// explicit null, so a score can be cleared as well as changed; either
/// way a score that ends up different triggers a rating recompute.
pub async fn update_comment(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateComment,
) -> Result<CommentResponse, StoreError> {
    let (comment, work) = load_with_work(db, id).await?;
    let old_score = comment.rating_score;

    let mut active: comments::ActiveModel = comment.clone().into();
    if let Some(text) = input.comment_text {
        active.comment_text = Set(text);
    }
    if let Some(score) = input.rating_score {
        active.rating_score = Set(score);
    }

    let updated = if active.is_changed() {
        active.update(db).await?
    } else {
        comment
    };

    if updated.rating_score != old_score {
        rating::recompute_rating(db, work.designer_id).await?;
    }

    attach_author(db, updated).await
}

/// Delete a comment and return its last state. Removing a rated comment
/// shrinks the score set, so the owner's rating is recomputed.
pub async fn delete_comment(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<CommentResponse, StoreError> {
    let (comment, work) = load_with_work(db, id).await?;
    let had_rating = comment.rating_score.is_some();

    comments::Entity::delete_by_id(id).exec(db).await?;

    if had_rating {
        rating::recompute_rating(db, work.designer_id).await?;
    }

    attach_author(db, comment).await
}

async fn load_with_work(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<(comments::Model, works::Model), StoreError> {
    let (comment, work) = comments::Entity::find_by_id(id)
        .find_also_related(works::Entity)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("comment", id))?;
    let work = work.ok_or_else(|| {
        StoreError::Db(DbErr::Custom(format!("comment {id} has no parent work")))
    })?;
    Ok((comment, work))
}

async fn attach_author(
    db: &DatabaseConnection,
    comment: comments::Model,
) -> Result<CommentResponse, StoreError> {
    let author = users::Entity::find_by_id(comment.author_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            StoreError::Db(DbErr::Custom(format!(
                "comment {} has no author row",
                comment.id
            )))
        })?;
    Ok(CommentResponse::from_parts(comment, author))
}
