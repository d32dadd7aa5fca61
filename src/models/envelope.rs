use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Business code the server uses for success.
pub const SUCCESS_CODE: i64 = 0;

/// Envelope wrapped around every backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    pub data: T,
    #[serde(default)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwrap the payload, turning a non-zero code into [`ApiError::Rejected`].
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// List payloads are wrapped as `{ "list": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Default for ListData<T> {
    fn default() -> Self {
        Self { list: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_success() {
        let response: ApiResponse<ListData<i64>> =
            serde_json::from_str(r#"{"code":0,"data":{"list":[1,2]},"message":"ok"}"#).unwrap();
        assert_eq!(response.into_data().unwrap().list, vec![1, 2]);
    }

    #[test]
    fn test_into_data_rejected() {
        let response: ApiResponse<Option<serde_json::Value>> =
            serde_json::from_str(r#"{"code":401,"data":null,"message":"未登录"}"#).unwrap();
        match response.into_data() {
            Err(ApiError::Rejected { code, message }) => {
                assert_eq!(code, 401);
                assert_eq!(message, "未登录");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_message_and_list_default() {
        let response: ApiResponse<ListData<String>> =
            serde_json::from_str(r#"{"code":0,"data":{}}"#).unwrap();
        assert!(response.message.is_empty());
        assert!(response.data.list.is_empty());
    }
}
