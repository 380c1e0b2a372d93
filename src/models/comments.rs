use sea_orm::entity::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

/// SeaORM entity for the `comments` table.
///
/// `rating_score` is nullable: null means "no rating given" and never
/// contributes to the work owner's aggregate.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub work_id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub comment_text: String,
    pub rating_score: Option<i32>,
    pub review_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::works::Entity",
        from = "Column::WorkId",
        to = "super::works::Column::Id"
    )]
    Work,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id"
    )]
    Author,
}

impl Related<super::works::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Work.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub work_id: Uuid,
    pub comment_text: String,
    /// 1 to 5 when given; omit for a comment without a rating.
    pub rating_score: Option<i32>,
}

/// Partial update. `rating_score` distinguishes three states: absent
/// (leave untouched), `null` (clear the rating), and a number (set it).
/// A cleared rating must drop out of the aggregate, so "absent" and
/// "null" cannot be conflated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComment {
    pub comment_text: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating_score: Option<Option<i32>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Some)
}

/// A comment with its author eagerly attached.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub work_id: Uuid,
    pub comment_text: String,
    pub rating_score: Option<i32>,
    pub review_date: DateTimeUtc,
    pub author: super::users::Model,
}

impl CommentResponse {
    pub fn from_parts(comment: Model, author: super::users::Model) -> Self {
        Self {
            id: comment.id,
            work_id: comment.work_id,
            comment_text: comment.comment_text,
            rating_score: comment.rating_score,
            review_date: comment.review_date,
            author,
        }
    }
}
