//! reqwest-backed [`Transport`].

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::{ApiError, Method, Transport};

/// JSON over HTTP against `base_url`.
///
/// No timeout is configured beyond reqwest's defaults.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Option<Value>, ApiError> {
        let url = self.url(endpoint);
        log::debug!("API: {} {}", method, url);

        let mut request = self
            .client
            .request(method.into(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
            request = request.body(payload);
        }

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;

        log::debug!("API: {} {} -> {}", method, url, status);
        interpret_response(status, &bytes)
    }
}

/// Map a raw HTTP response to the transport contract.
///
/// Any status outside 2xx fails, 204 succeeds without touching the body,
/// everything else must be a JSON document.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<Option<Value>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    if status == 204 {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
