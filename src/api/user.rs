//! User account management endpoints.

use super::descriptor::RequestDescriptor;
use super::Ack;
use crate::models::{ApiResponse, ListData, ProhibitRequest, User};

pub fn create_user(user: User) -> RequestDescriptor<Ack, User> {
    RequestDescriptor::post_json("/admin/newUser", user)
}

pub fn delete_users(ids: Vec<i64>) -> RequestDescriptor<Ack, Vec<i64>> {
    RequestDescriptor::post_json("/admin/delUsers", ids)
}

pub fn update_user(user: User) -> RequestDescriptor<Ack, User> {
    RequestDescriptor::post_json("/admin/updateUser", user)
}

pub fn list_users() -> RequestDescriptor<ApiResponse<ListData<User>>> {
    RequestDescriptor::get("/admin/getAllUser")
}

/// Reset a user's password to the server default. The id travels in the path.
pub fn reset_password(id: i64) -> RequestDescriptor<Ack> {
    RequestDescriptor::post(format!("/admin/resetPwd/{}", id))
}

/// Enable or disable an account.
pub fn prohibit_user(id: i64, status: i32) -> RequestDescriptor<Ack, ProhibitRequest> {
    RequestDescriptor::post_json("/admin/prohibit", ProhibitRequest { status, id })
}
