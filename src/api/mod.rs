//! Typed wrappers for every backend endpoint used by the dashboard.
//!
//! Each function only builds a [`RequestDescriptor`]; nothing is sent until
//! the descriptor is handed to [`ApiClient::send`] or [`ApiClient::call`].
//!
//! ```ignore
//! use lostfound_admin::api::{self, ApiClient};
//!
//! let client = ApiClient::new(ReqwestHttpClient::new(), "http://localhost:8080").with_token(token);
//! let items = client.call(&api::list_items()).await?.list;
//! ```

mod category;
mod client;
mod comment;
mod descriptor;
mod file;
mod item;
mod login;
mod notice;
mod user;

pub use category::{create_category, delete_categories, list_categories, update_category};
pub use client::ApiClient;
pub use comment::{delete_comments, delete_replies, list_comments};
pub use descriptor::{Method, RequestDescriptor};
pub use file::{delete_files, list_files};
pub use item::{create_item, delete_items, list_items, search_items, update_item};
pub use login::{change_password, confirm_password, current_user, login, user_info};
pub use notice::{delete_notices, list_notices};
pub use user::{create_user, delete_users, list_users, prohibit_user, reset_password, update_user};

use crate::models::ApiResponse;

/// Response of endpoints whose payload the dashboard does not inspect.
pub type Ack = ApiResponse<serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ItemQuery, LoginRequest, LostOrFound, User};

    fn route<R, B>(descriptor: &RequestDescriptor<R, B>) -> (Method, &str) {
        (descriptor.method, descriptor.url.as_str())
    }

    #[test]
    fn test_login_endpoints() {
        let descriptor = login(LoginRequest::new("admin", "12345678"));
        assert_eq!(route(&descriptor), (Method::Post, "admin/login"));
        assert_eq!(descriptor.body.unwrap().name, "admin");

        assert_eq!(route(&user_info()), (Method::Get, "admin/info"));
        assert_eq!(route(&current_user()), (Method::Get, "/user/info"));
        assert_eq!(
            confirm_password("pw").body.map(|b| b.pwd),
            Some("pw".to_string())
        );
        assert_eq!(
            route(&change_password(serde_json::json!({"old": "a", "new": "b"}))),
            (Method::Post, "/user/changePassword")
        );
    }

    #[test]
    fn test_user_endpoints() {
        assert_eq!(route(&create_user(User::default())), (Method::Post, "/admin/newUser"));
        assert_eq!(route(&update_user(User::default())), (Method::Post, "/admin/updateUser"));
        assert_eq!(route(&list_users()), (Method::Get, "/admin/getAllUser"));

        let delete = delete_users(vec![1, 2, 3]);
        assert_eq!(route(&delete), (Method::Post, "/admin/delUsers"));
        assert_eq!(delete.body, Some(vec![1, 2, 3]));

        let reset = reset_password(42);
        assert_eq!(route(&reset), (Method::Post, "/admin/resetPwd/42"));
        assert!(reset.body.is_none());

        let prohibit = prohibit_user(7, 1);
        assert_eq!(route(&prohibit), (Method::Post, "/admin/prohibit"));
        let body = serde_json::to_value(prohibit.body.unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"status": 1, "id": 7}));
    }

    #[test]
    fn test_item_and_category_endpoints() {
        assert_eq!(route(&list_items()), (Method::Get, "/item/list"));
        assert_eq!(route(&delete_items(vec![5])), (Method::Post, "/item/deleteItem"));

        let search = search_items(&ItemQuery::new().with_kind(LostOrFound::Lost));
        assert_eq!(route(&search), (Method::Get, "/item/getItemByParams"));
        assert_eq!(
            search.query,
            vec![("lostOrFound".to_string(), "0".to_string())]
        );

        assert_eq!(
            route(&create_category(Category::default())),
            (Method::Post, "/item/addCategory")
        );
        assert_eq!(route(&list_categories()), (Method::Get, "/admin/getCategory"));
    }

    #[test]
    fn test_comment_notice_file_endpoints() {
        assert_eq!(route(&list_comments()), (Method::Get, "/admin/commentList"));
        assert_eq!(route(&delete_replies(vec![1])), (Method::Post, "/admin/deleteReply"));
        assert_eq!(route(&list_notices()), (Method::Get, "/admin/getAllNotice"));
        assert_eq!(route(&delete_notices(vec![1])), (Method::Post, "/admin/delNotice"));
        assert_eq!(route(&list_files()), (Method::Get, "/file/findAll"));

        let delete = delete_files(vec!["a.png".to_string()]);
        assert_eq!(route(&delete), (Method::Post, "/file/del"));
        assert_eq!(delete.body, Some(vec!["a.png".to_string()]));
    }
}
