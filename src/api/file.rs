//! Uploaded file endpoints. Files are deleted by name, not id.

use super::descriptor::RequestDescriptor;
use super::Ack;
use crate::models::{ApiResponse, ListData, StoredFile};

pub fn list_files() -> RequestDescriptor<ApiResponse<ListData<StoredFile>>> {
    RequestDescriptor::get("/file/findAll")
}

pub fn delete_files(file_names: Vec<String>) -> RequestDescriptor<Ack, Vec<String>> {
    RequestDescriptor::post_json("/file/del", file_names)
}
