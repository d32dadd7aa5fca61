//! Comment moderation endpoints.

use super::descriptor::RequestDescriptor;
use super::Ack;
use crate::models::{ApiResponse, Comment, ListData};

pub fn delete_comments(ids: Vec<i64>) -> RequestDescriptor<Ack, Vec<i64>> {
    RequestDescriptor::post_json("/admin/deleteComment", ids)
}

pub fn delete_replies(ids: Vec<i64>) -> RequestDescriptor<Ack, Vec<i64>> {
    RequestDescriptor::post_json("/admin/deleteReply", ids)
}

pub fn list_comments() -> RequestDescriptor<ApiResponse<ListData<Comment>>> {
    RequestDescriptor::get("/admin/commentList")
}
