pub mod categories;
pub mod comments;
pub mod profiles;
pub mod tags;
pub mod users;
pub mod work_categories;
pub mod work_tags;
pub mod work_views;
pub mod works;

use serde::Deserialize;

/// Offset/limit paging for plain list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(100).min(200)
    }
}
