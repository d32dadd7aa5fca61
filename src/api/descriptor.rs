//! Request descriptors: the method/URL/payload triple for one backend call.

use std::fmt;
use std::marker::PhantomData;

/// HTTP methods used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one backend call.
///
/// `R` is the decoded response shape and `B` the JSON body type. A descriptor
/// is inert; [`crate::api::ApiClient::send`] executes it.
pub struct RequestDescriptor<R, B = ()> {
    pub method: Method,
    /// Path relative to the API base URL, as the server declares it.
    pub url: String,
    pub body: Option<B>,
    /// Query parameters in send order, not yet encoded.
    pub query: Vec<(String, String)>,
    response: PhantomData<fn() -> R>,
}

impl<R> RequestDescriptor<R, ()> {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// A POST without a body.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }
}

impl<R, B> RequestDescriptor<R, B> {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            query: Vec::new(),
            response: PhantomData,
        }
    }

    /// A POST carrying `body` as JSON.
    pub fn post_json(url: impl Into<String>, body: B) -> Self {
        let mut descriptor = Self::new(Method::Post, url);
        descriptor.body = Some(body);
        descriptor
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

impl<R, B: fmt::Debug> fmt::Debug for RequestDescriptor<R, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body", &self.body)
            .field("query", &self.query)
            .finish()
    }
}

impl<R, B: Clone> Clone for RequestDescriptor<R, B> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            url: self.url.clone(),
            body: self.body.clone(),
            query: self.query.clone(),
            response: PhantomData,
        }
    }
}

impl<R, B: PartialEq> PartialEq for RequestDescriptor<R, B> {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
            && self.url == other.url
            && self.body == other.body
            && self.query == other.query
    }
}
