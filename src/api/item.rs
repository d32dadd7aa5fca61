//! Lost-and-found item endpoints.

use super::descriptor::RequestDescriptor;
use super::Ack;
use crate::models::{ApiResponse, Item, ItemQuery, ListData};

pub fn create_item(item: Item) -> RequestDescriptor<Ack, Item> {
    RequestDescriptor::post_json("/item/addItem", item)
}

pub fn delete_items(ids: Vec<i64>) -> RequestDescriptor<Ack, Vec<i64>> {
    RequestDescriptor::post_json("/item/deleteItem", ids)
}

pub fn update_item(item: Item) -> RequestDescriptor<Ack, Item> {
    RequestDescriptor::post_json("/item/updateItem", item)
}

pub fn list_items() -> RequestDescriptor<ApiResponse<ListData<Item>>> {
    RequestDescriptor::get("/item/list")
}

/// Search items; only the filters set on `query` are sent.
pub fn search_items(query: &ItemQuery) -> RequestDescriptor<ApiResponse<ListData<Item>>> {
    RequestDescriptor::get("/item/getItemByParams").with_query(query.to_pairs())
}
