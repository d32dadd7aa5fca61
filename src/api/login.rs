//! Authentication and account endpoints.

use serde_json::Value;

use super::descriptor::RequestDescriptor;
use super::Ack;
use crate::models::{ApiResponse, ConfirmPasswordRequest, LoginData, LoginRequest, UserInfo};

/// Log in and receive a token.
pub fn login(credentials: LoginRequest) -> RequestDescriptor<ApiResponse<LoginData>, LoginRequest> {
    RequestDescriptor::post_json("admin/login", credentials)
}

/// The signed-in admin's name and roles.
pub fn user_info() -> RequestDescriptor<ApiResponse<UserInfo>> {
    RequestDescriptor::get("admin/info")
}

/// The signed-in account's full profile, shape defined by the server.
pub fn current_user() -> RequestDescriptor<Ack> {
    RequestDescriptor::get("/user/info")
}

pub fn confirm_password(
    pwd: impl Into<String>,
) -> RequestDescriptor<Ack, ConfirmPasswordRequest> {
    RequestDescriptor::post_json("/user/confirmPwd", ConfirmPasswordRequest { pwd: pwd.into() })
}

/// Change the signed-in account's password. The body is passed through as-is.
pub fn change_password(params: Value) -> RequestDescriptor<Ack, Value> {
    RequestDescriptor::post_json("/user/changePassword", params)
}
