use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `works` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "works")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub designer_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub upload_date: DateTimeUtc,
    pub views_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::DesignerId",
        to = "super::users::Column::Id"
    )]
    Designer,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::work_categories::Entity")]
    WorkCategories,
    #[sea_orm(has_many = "super::work_tags::Entity")]
    WorkTags,
    #[sea_orm(has_many = "super::work_views::Entity")]
    WorkViews,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::work_views::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkViews.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        super::work_categories::Relation::Category.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::work_categories::Relation::Work.def().rev())
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::work_tags::Relation::Tag.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::work_tags::Relation::Work.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWork {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Every referenced category must already exist.
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    /// Tags are created on demand.
    #[serde(default)]
    pub tag_names: Vec<String>,
}

/// Partial update. When `category_ids` / `tag_names` are supplied the new
/// set replaces the old one wholesale; it is not merged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWork {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_ids: Option<Vec<Uuid>>,
    pub tag_names: Option<Vec<String>>,
}

/// A work with its designer, categories and tags eagerly attached.
#[derive(Debug, Clone, Serialize)]
pub struct WorkResponse {
    pub id: Uuid,
    pub designer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub upload_date: DateTimeUtc,
    pub views_count: i32,
    pub designer: super::users::Model,
    pub categories: Vec<super::categories::Model>,
    pub tags: Vec<super::tags::Model>,
}

impl WorkResponse {
    pub fn from_parts(
        work: Model,
        designer: super::users::Model,
        categories: Vec<super::categories::Model>,
        tags: Vec<super::tags::Model>,
    ) -> Self {
        Self {
            id: work.id,
            designer_id: work.designer_id,
            title: work.title,
            description: work.description,
            image_url: work.image_url,
            upload_date: work.upload_date,
            views_count: work.views_count,
            designer,
            categories,
            tags,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    /// Comma-separated category ids; works matching any of them.
    pub categories: Option<String>,
    /// Comma-separated tag names; works matching any of them.
    pub tags: Option<String>,
}

impl WorkListQuery {
    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(20).min(100)
    }

    pub fn category_ids(&self) -> Vec<Uuid> {
        self.categories
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| Uuid::parse_str(s.trim()).ok())
            .collect()
    }

    pub fn tag_names(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
