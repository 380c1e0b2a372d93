use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `designer_profiles` table.
///
/// Keyed by the designer's own user id: one profile per designer, no
/// surrogate key. The `rating`, `views_count` and `work_amount` columns
/// are derived values owned by the db layer; request bodies never set
/// them (see `UpdateProfile`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "designer_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub designer_id: Uuid,
    pub specialization: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub experience: i32,
    /// Mean of all rating scores on this designer's works, rounded to
    /// two decimals; 0.00 when no rated comment exists.
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub views_count: i32,
    pub work_amount: i32,
    pub avatar_url: Option<String>,
    pub header_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::DesignerId",
        to = "super::users::Column::Id"
    )]
    Designer,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Partial update for the editable profile fields.
///
/// Deliberately has no `rating` / `views_count` / `work_amount` members:
/// those columns are only ever written by the rating aggregator and the
/// counter-adjustment functions.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<i32>,
    pub avatar_url: Option<String>,
    pub header_url: Option<String>,
}
