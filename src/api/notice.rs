//! Hand-over notice endpoints.

use super::descriptor::RequestDescriptor;
use super::Ack;
use crate::models::{ApiResponse, ListData, Notice};

pub fn list_notices() -> RequestDescriptor<ApiResponse<ListData<Notice>>> {
    RequestDescriptor::get("/admin/getAllNotice")
}

pub fn delete_notices(ids: Vec<i64>) -> RequestDescriptor<Ack, Vec<i64>> {
    RequestDescriptor::post_json("/admin/delNotice", ids)
}
