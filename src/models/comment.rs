use serde::{Deserialize, Serialize};

use super::user::User;

/// A top-level comment on an item, with its replies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment_reply: Vec<CommentReply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_with_null_replies() {
        let comment: Comment =
            serde_json::from_str(r#"{"id":1,"content":"是我的","commentReply":[]}"#).unwrap();
        assert!(comment.comment_reply.is_empty());

        let nested: Comment = serde_json::from_str(
            r#"{"id":2,"commentReply":[{"id":5,"replyAuthor":{"name":"wang"},"content":"好的"}]}"#,
        )
        .unwrap();
        assert_eq!(nested.comment_reply.len(), 1);
        assert_eq!(
            nested.comment_reply[0]
                .reply_author
                .as_ref()
                .and_then(|u| u.name.as_deref()),
            Some("wang")
        );
    }
}
