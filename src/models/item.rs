use serde::{Deserialize, Serialize};

use super::user::User;

/// Whether an item was reported lost or found (`lostOrFound` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LostOrFound {
    Lost,
    Found,
}

impl LostOrFound {
    pub fn as_flag(self) -> i32 {
        match self {
            LostOrFound::Lost => 0,
            LostOrFound::Found => 1,
        }
    }

    pub fn from_flag(flag: i32) -> Option<Self> {
        match flag {
            0 => Some(LostOrFound::Lost),
            1 => Some(LostOrFound::Found),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_counts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_counts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_or_found: Option<i32>,
}

impl Item {
    pub fn kind(&self) -> Option<LostOrFound> {
        self.lost_or_found.and_then(LostOrFound::from_flag)
    }
}

/// Optional filters for `item/getItemByParams`. Unset fields are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemQuery {
    pub category: Option<String>,
    pub title: Option<String>,
    pub lost_or_found: Option<LostOrFound>,
    pub author_id: Option<i64>,
}

impl ItemQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_kind(mut self, kind: LostOrFound) -> Self {
        self.lost_or_found = Some(kind);
        self
    }

    pub fn with_author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Query pairs in wire order, skipping unset filters.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(title) = &self.title {
            pairs.push(("title".to_string(), title.clone()));
        }
        if let Some(kind) = self.lost_or_found {
            pairs.push(("lostOrFound".to_string(), kind.as_flag().to_string()));
        }
        if let Some(author_id) = self.author_id {
            pairs.push(("authorId".to_string(), author_id.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_or_found_flags() {
        assert_eq!(LostOrFound::from_flag(0), Some(LostOrFound::Lost));
        assert_eq!(LostOrFound::from_flag(1), Some(LostOrFound::Found));
        assert_eq!(LostOrFound::from_flag(2), None);
        assert_eq!(LostOrFound::Found.as_flag(), 1);
    }

    #[test]
    fn test_item_decodes_nested_author() {
        let item: Item = serde_json::from_str(
            r#"{"id":9,"title":"校园卡","author":{"id":2,"name":"li"},"lostOrFound":0,"viewCounts":12}"#,
        )
        .unwrap();
        assert_eq!(item.kind(), Some(LostOrFound::Lost));
        assert_eq!(item.author.unwrap().name.as_deref(), Some("li"));
        assert_eq!(item.view_counts, Some(12));
    }

    #[test]
    fn test_item_query_pairs_skip_unset() {
        let query = ItemQuery::new()
            .with_kind(LostOrFound::Found)
            .with_category("证件");
        assert_eq!(
            query.to_pairs(),
            vec![
                ("category".to_string(), "证件".to_string()),
                ("lostOrFound".to_string(), "1".to_string()),
            ]
        );
        assert!(ItemQuery::new().to_pairs().is_empty());
    }
}
