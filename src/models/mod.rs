//! Wire types exchanged with the lost-and-found backend.
//!
//! Field names follow the server's camelCase JSON. Timestamps are kept as the
//! opaque strings the server sends.

mod category;
mod comment;
mod envelope;
mod item;
mod login;
mod notice;
mod stored_file;
mod user;

pub use category::Category;
pub use comment::{Comment, CommentReply};
pub use envelope::{ApiResponse, ListData, SUCCESS_CODE};
pub use item::{Item, ItemQuery, LostOrFound};
pub use login::{ConfirmPasswordRequest, LoginData, LoginRequest, UserInfo};
pub use notice::Notice;
pub use stored_file::StoredFile;
pub use user::{ProhibitRequest, User};

use serde::Deserializer;

/// Helper to deserialize an id sent as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
