use sea_orm::*;
use uuid::Uuid;

use crate::db::error::StoreError;
use crate::db::profiles::ensure_profile;
use crate::models::{comments, profiles, works};

/// Recompute `designer_profiles.rating` for one designer from scratch.
///
/// The stored value is the mean of every non-null `rating_score` across
/// all of the designer's works, rounded to two decimals, or 0.0 when no
/// rated comment exists. Recomputing from the source rows rather than
/// applying deltas keeps the value correct under edits, deletes and
/// racing writers: whichever recomputation commits last derived its
/// value from a full read.
pub async fn recompute_rating(
    db: &DatabaseConnection,
    designer_id: Uuid,
) -> Result<profiles::Model, StoreError> {
    let scores: Vec<i32> = comments::Entity::find()
        .inner_join(works::Entity)
        .filter(works::Column::DesignerId.eq(designer_id))
        .filter(comments::Column::RatingScore.is_not_null())
        .select_only()
        .column(comments::Column::RatingScore)
        .into_tuple()
        .all(db)
        .await?;

    let rating = mean_to_two_decimals(&scores);

    let profile = ensure_profile(db, designer_id).await?;
    let mut active: profiles::ActiveModel = profile.into();
    active.rating = Set(rating);
    Ok(active.update(db).await?)
}

fn mean_to_two_decimals(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: i64 = scores.iter().map(|score| i64::from(*score)).sum();
    let mean = sum as f64 / scores.len() as f64;
    (mean * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::mean_to_two_decimals;

    #[test]
    fn empty_score_set_means_zero() {
        assert_eq!(mean_to_two_decimals(&[]), 0.0);
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        assert_eq!(mean_to_two_decimals(&[4, 2]), 3.0);
        assert_eq!(mean_to_two_decimals(&[4, 4, 5]), 4.33);
        assert_eq!(mean_to_two_decimals(&[5, 4]), 4.5);
        assert_eq!(mean_to_two_decimals(&[1, 1, 2]), 1.33);
    }
}
