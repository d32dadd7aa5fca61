use serde::{Deserialize, Serialize};

use super::user::User;

/// A hand-over notice between the author and recipient of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notice {
    pub id: i64,
    pub content: String,
    pub trade_time: String,
    pub contact: String,
    pub author_id: i64,
    pub author: Option<User>,
    pub item_id: i64,
    pub confirm: i32,
    pub update_time: String,
    pub recipient_id: i64,
    pub recipient: Option<User>,
}
