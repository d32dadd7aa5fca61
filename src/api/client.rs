//! Executes request descriptors against the backend.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::descriptor::{Method, RequestDescriptor};
use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::traits::{Headers, HttpClient};

/// Thin executor for [`RequestDescriptor`]s.
///
/// Joins the base URL, encodes the query, attaches the bearer token and
/// decodes the JSON envelope. It does not retry and does not reinterpret
/// transport errors.
pub struct ApiClient<C: HttpClient> {
    http: C,
    base_url: String,
    token: Option<String>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Absolute URL for a descriptor, query included.
    pub fn url_for<R, B>(&self, descriptor: &RequestDescriptor<R, B>) -> String {
        let mut url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            descriptor.url.trim_start_matches('/')
        );
        if !descriptor.query.is_empty() {
            let encoded: Vec<String> = descriptor
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encoded.join("&"));
        }
        url
    }

    fn headers(&self, with_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if with_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Execute a descriptor and decode the full response.
    pub async fn send<R, B>(&self, descriptor: &RequestDescriptor<R, B>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize,
    {
        let url = self.url_for(descriptor);
        tracing::debug!(method = %descriptor.method, url = %url, "Dispatching API request");

        let response = match descriptor.method {
            Method::Get => self.http.get(&url, &self.headers(false)).await?,
            Method::Post => {
                let body = match &descriptor.body {
                    Some(body) => serde_json::to_string(body).map_err(ApiError::Encode)?,
                    None => String::new(),
                };
                let headers = self.headers(descriptor.body.is_some());
                self.http.post(&url, &body, &headers).await?
            }
        };

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = response.status, url = %url, "API request failed");
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        response
            .json::<R>()
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// Execute a descriptor and unwrap the envelope's `data`.
    pub async fn call<T, B>(
        &self,
        descriptor: &RequestDescriptor<ApiResponse<T>, B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.send(descriptor).await?.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;
    use serde_json::json;

    fn client() -> ApiClient<MockHttpClient> {
        ApiClient::new(MockHttpClient::new(), "http://api.test/")
    }

    #[test]
    fn test_url_for_joins_slashes() {
        let client = client();
        let relative: RequestDescriptor<()> = RequestDescriptor::get("admin/info");
        let absolute: RequestDescriptor<()> = RequestDescriptor::get("/item/list");
        assert_eq!(client.url_for(&relative), "http://api.test/admin/info");
        assert_eq!(client.url_for(&absolute), "http://api.test/item/list");
    }

    #[test]
    fn test_url_for_encodes_query() {
        let client = client();
        let descriptor: RequestDescriptor<()> = RequestDescriptor::get("/item/getItemByParams")
            .with_query(vec![
                ("title".to_string(), "校园 卡".to_string()),
                ("lostOrFound".to_string(), "1".to_string()),
            ]);
        assert_eq!(
            client.url_for(&descriptor),
            "http://api.test/item/getItemByParams?title=%E6%A0%A1%E5%9B%AD%20%E5%8D%A1&lostOrFound=1"
        );
    }

    #[tokio::test]
    async fn test_send_attaches_token_and_body() {
        let client = client().with_token("tok");
        client.http().set_default_response(MockResponse::Success(Response::json_ok(
            &json!({"code": 0, "data": null, "message": ""}),
        )));

        let descriptor: RequestDescriptor<ApiResponse<serde_json::Value>, Vec<i64>> =
            RequestDescriptor::post_json("/admin/delNotice", vec![4]);
        client.call(&descriptor).await.unwrap();

        let request = client.http().last_request().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "http://api.test/admin/delNotice");
        assert_eq!(request.json_body(), Some(json!([4])));
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer tok".to_string())
        );
        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let client = client();
        client.http().set_default_response(MockResponse::Success(Response::new(
            403,
            Bytes::from("forbidden"),
        )));

        let descriptor: RequestDescriptor<ApiResponse<serde_json::Value>> =
            RequestDescriptor::get("admin/info");
        match client.send(&descriptor).await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "forbidden");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let client = client();
        client
            .http()
            .set_default_response(MockResponse::Error(HttpError::Timeout("10s".into())));

        let descriptor: RequestDescriptor<ApiResponse<serde_json::Value>> =
            RequestDescriptor::get("admin/info");
        let err = client.send(&descriptor).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(HttpError::Timeout(ref m)) if m == "10s"));
    }

    #[tokio::test]
    async fn test_decode_error_names_url() {
        let client = client();
        client.http().set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from("<html>"),
        )));

        let descriptor: RequestDescriptor<ApiResponse<serde_json::Value>> =
            RequestDescriptor::get("/admin/commentList");
        let err = client.send(&descriptor).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref url, .. } if url.ends_with("/admin/commentList")));
    }
}
