//! Item category endpoints. Writes live under `/item`, the listing under `/admin`.

use super::descriptor::RequestDescriptor;
use super::Ack;
use crate::models::{ApiResponse, Category, ListData};

pub fn create_category(category: Category) -> RequestDescriptor<Ack, Category> {
    RequestDescriptor::post_json("/item/addCategory", category)
}

pub fn delete_categories(ids: Vec<i64>) -> RequestDescriptor<Ack, Vec<i64>> {
    RequestDescriptor::post_json("/item/deleteCategory", ids)
}

pub fn update_category(category: Category) -> RequestDescriptor<Ack, Category> {
    RequestDescriptor::post_json("/item/updateCategory", category)
}

pub fn list_categories() -> RequestDescriptor<ApiResponse<ListData<Category>>> {
    RequestDescriptor::get("/admin/getCategory")
}
