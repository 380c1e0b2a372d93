use sea_orm::*;
use uuid::Uuid;

use crate::db::error::StoreError;
use crate::db::{profiles as profile_db, rating, tags as tag_db};
use crate::models::works::{self, CreateWork, UpdateWork, WorkListQuery, WorkResponse};
use crate::models::{categories, tags, users, work_categories, work_tags};

pub async fn get_work(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<works::Model>, StoreError> {
    Ok(works::Entity::find_by_id(id).one(db).await?)
}

pub async fn get_work_full(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<WorkResponse>, StoreError> {
    match works::Entity::find_by_id(id).one(db).await? {
        Some(work) => Ok(Some(load_response(db, work).await?)),
        None => Ok(None),
    }
}

/// List works, newest first, optionally narrowed to those linked to any
/// of the given categories and any of the given tags.
pub async fn get_works(
    db: &DatabaseConnection,
    query: &WorkListQuery,
) -> Result<Vec<WorkResponse>, StoreError> {
    let mut select = works::Entity::find();

    let category_ids = query.category_ids();
    if !category_ids.is_empty() {
        let work_ids: Vec<Uuid> = work_categories::Entity::find()
            .filter(work_categories::Column::CategoryId.is_in(category_ids))
            .select_only()
            .column(work_categories::Column::WorkId)
            .into_tuple()
            .all(db)
            .await?;
        select = select.filter(works::Column::Id.is_in(work_ids));
    }

    let tag_names = query.tag_names();
    if !tag_names.is_empty() {
        let tag_ids: Vec<Uuid> = tags::Entity::find()
            .filter(tags::Column::Name.is_in(tag_names))
            .select_only()
            .column(tags::Column::Id)
            .into_tuple()
            .all(db)
            .await?;
        let work_ids: Vec<Uuid> = work_tags::Entity::find()
            .filter(work_tags::Column::TagId.is_in(tag_ids))
            .select_only()
            .column(work_tags::Column::WorkId)
            .into_tuple()
            .all(db)
            .await?;
        select = select.filter(works::Column::Id.is_in(work_ids));
    }

    let rows = select
        .order_by_desc(works::Column::UploadDate)
        .offset(query.skip())
        .limit(query.limit())
        .all(db)
        .await?;

    let mut responses = Vec::with_capacity(rows.len());
    for work in rows {
        responses.push(load_response(db, work).await?);
    }
    Ok(responses)
}

pub async fn get_works_by_designer(
    db: &DatabaseConnection,
    designer_id: Uuid,
    skip: u64,
    limit: u64,
) -> Result<Vec<WorkResponse>, StoreError> {
    let rows = works::Entity::find()
        .filter(works::Column::DesignerId.eq(designer_id))
        .order_by_desc(works::Column::UploadDate)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?;

    let mut responses = Vec::with_capacity(rows.len());
    for work in rows {
        responses.push(load_response(db, work).await?);
    }
    Ok(responses)
}

/// Create a work for `designer_id` and link its categories and tags.
///
/// Every category id must already exist; unknown ids fail the whole call
/// before anything is written. Tag names are resolved get-or-create.
/// The work row and its junction rows commit atomically, then the
/// owner's `work_amount` is bumped.
pub async fn create_work(
    db: &DatabaseConnection,
    designer_id: Uuid,
    input: CreateWork,
) -> Result<WorkResponse, StoreError> {
    let categories = resolve_categories(db, &input.category_ids).await?;
    let tags = resolve_tags(db, &input.tag_names).await?;

    let txn = db.begin().await?;

    let new_work = works::ActiveModel {
        id: Set(Uuid::new_v4()),
        designer_id: Set(designer_id),
        title: Set(input.title),
        description: Set(input.description),
        image_url: Set(input.image_url),
        upload_date: Set(chrono::Utc::now()),
        views_count: Set(0),
    };
    let work = new_work.insert(&txn).await?;

    link_categories(&txn, work.id, &categories).await?;
    link_tags(&txn, work.id, &tags).await?;

    txn.commit().await?;

    profile_db::adjust_work_amount(db, designer_id, 1).await?;

    let designer = users::Entity::find_by_id(designer_id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("user", designer_id))?;

    Ok(WorkResponse::from_parts(work, designer, categories, tags))
}

/// Patch the supplied fields. A supplied `category_ids` or `tag_names`
/// replaces that link set wholesale; omitting it leaves the links alone.
pub async fn update_work(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateWork,
) -> Result<WorkResponse, StoreError> {
    let work = works::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("work", id))?;

    // Resolve replacement sets up front so an unknown category id fails
    // the call before anything is written.
    let new_categories = match &input.category_ids {
        Some(ids) => Some(resolve_categories(db, ids).await?),
        None => None,
    };
    let new_tags = match &input.tag_names {
        Some(names) => Some(resolve_tags(db, names).await?),
        None => None,
    };

    let txn = db.begin().await?;

    let mut active: works::ActiveModel = work.clone().into();
    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(image_url) = input.image_url {
        active.image_url = Set(Some(image_url));
    }
    let updated = if active.is_changed() {
        active.update(&txn).await?
    } else {
        work
    };

    if let Some(categories) = &new_categories {
        work_categories::Entity::delete_many()
            .filter(work_categories::Column::WorkId.eq(id))
            .exec(&txn)
            .await?;
        link_categories(&txn, id, categories).await?;
    }
    if let Some(tags) = &new_tags {
        work_tags::Entity::delete_many()
            .filter(work_tags::Column::WorkId.eq(id))
            .exec(&txn)
            .await?;
        link_tags(&txn, id, tags).await?;
    }

    txn.commit().await?;

    load_response(db, updated).await
}

/// Delete a work and return its last full record.
///
/// Comments, views and link rows go with it via cascade, so afterwards
/// the owner's `work_amount` is dropped and the rating recomputed (the
/// deleted work's rated comments no longer count).
pub async fn delete_work(db: &DatabaseConnection, id: Uuid) -> Result<WorkResponse, StoreError> {
    let work = works::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("work", id))?;
    let designer_id = work.designer_id;

    let response = load_response(db, work).await?;

    works::Entity::delete_by_id(id).exec(db).await?;

    profile_db::adjust_work_amount(db, designer_id, -1).await?;
    rating::recompute_rating(db, designer_id).await?;

    Ok(response)
}

async fn load_response(
    db: &DatabaseConnection,
    work: works::Model,
) -> Result<WorkResponse, StoreError> {
    let designer = users::Entity::find_by_id(work.designer_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            StoreError::Db(DbErr::Custom(format!("work {} has no designer row", work.id)))
        })?;
    let categories = work.find_related(categories::Entity).all(db).await?;
    let tags = work.find_related(tags::Entity).all(db).await?;
    Ok(WorkResponse::from_parts(work, designer, categories, tags))
}

async fn resolve_categories(
    db: &DatabaseConnection,
    ids: &[Uuid],
) -> Result<Vec<categories::Model>, StoreError> {
    let mut resolved: Vec<categories::Model> = Vec::with_capacity(ids.len());
    for id in ids {
        if resolved.iter().any(|category| category.id == *id) {
            continue;
        }
        let category = categories::Entity::find_by_id(*id)
            .one(db)
            .await?
            .ok_or_else(|| StoreError::not_found("category", *id))?;
        resolved.push(category);
    }
    Ok(resolved)
}

async fn resolve_tags(
    db: &DatabaseConnection,
    names: &[String],
) -> Result<Vec<tags::Model>, StoreError> {
    let mut resolved: Vec<tags::Model> = Vec::with_capacity(names.len());
    for name in names {
        if resolved.iter().any(|tag| tag.name == *name) {
            continue;
        }
        resolved.push(tag_db::get_or_create(db, name).await?);
    }
    Ok(resolved)
}

async fn link_categories(
    txn: &DatabaseTransaction,
    work_id: Uuid,
    categories: &[categories::Model],
) -> Result<(), StoreError> {
    for category in categories {
        let link = work_categories::ActiveModel {
            work_id: Set(work_id),
            category_id: Set(category.id),
        };
        link.insert(txn).await?;
    }
    Ok(())
}

async fn link_tags(
    txn: &DatabaseTransaction,
    work_id: Uuid,
    tags: &[tags::Model],
) -> Result<(), StoreError> {
    for tag in tags {
        let link = work_tags::ActiveModel {
            work_id: Set(work_id),
            tag_id: Set(tag.id),
        };
        link.insert(txn).await?;
    }
    Ok(())
}
