//! API client for the bot's web manager backend

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{FetchError, Result};

/// HTTP method of an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One API call: method, path relative to the base URL, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    relative_path: String,
    method: Method,
    body: Option<Value>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            relative_path: path.into(),
            method: Method::Get,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            relative_path: path.into(),
            method: Method::Post,
            body: Some(body),
        }
    }

    /// Used for `PUT /api/config`, which replaces the bot's config.
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            relative_path: path.into(),
            method: Method::Put,
            body: Some(body),
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Moves one request over the wire and decodes the JSON answer.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value>;
}

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
        let builder: RequestBuilder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
        };

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .json(body)
                .map_err(|e| FetchError::Serialize(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| FetchError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// API client bound to one base URL
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_transport(config, GlooTransport)
    }

    pub fn with_transport(config: &AppConfig, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').into(),
            transport: Rc::new(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{path}`; the path must name something.
    pub fn url(&self, path: &str) -> Result<String> {
        let relative = path.trim().trim_start_matches('/');
        if relative.is_empty() {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(format!("{}/{}", self.base_url, relative))
    }

    /// Perform exactly one call for `request`.
    pub async fn send(&self, request: &RequestDescriptor) -> Result<Value> {
        let url = self.url(request.relative_path())?;
        self.transport
            .send(request.method(), &url, request.body())
            .await
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.send(&RequestDescriptor::get(path)).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.send(&RequestDescriptor::post(path, body)).await
    }
}
