use serde::{Deserialize, Serialize};

use super::deserialize_id;
use super::item::Item;
use super::user::User;

/// An uploaded file (item picture or avatar).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredFile {
    pub id: i64,
    pub file_name: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub item_id: i64,
    pub user: Option<User>,
    pub item: Option<Item>,
    pub file_url: String,
    pub create_time: String,
    pub update_time: String,
    pub is_avatar: i32,
}

impl StoredFile {
    pub fn is_avatar(&self) -> bool {
        self.is_avatar != 0
    }
}
