//! HTTP transport abstraction.
//!
//! The API client talks to an `HttpClient` trait so the request/response
//! logic can run against an in-memory mock on the host. Production uses
//! `FetchHttpClient`, a thin wrapper over the browser `fetch` API.

use serde::de::DeserializeOwned;

use enrollview_shared::protocol::HttpMethod;

use crate::error::{ApiError, ApiResult};

// =========================================================
// Request / response shapes
// =========================================================

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::parse(e.to_string()))
    }
}

/// `?Send` because wasm futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// Production client: browser fetch
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        let headers =
            Headers::new().map_err(|e| ApiError::network(format!("headers: {:?}", e)))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ApiError::network(format!("headers: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ApiError::network(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::network("no window object"))?;

        // A rejected fetch promise is the "no response at all" case; the
        // raw transport text becomes the error message.
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::network(js_error_message(&e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::parse(format!("{:?}", e)))?;

        let status = response.status();
        let text_promise = response
            .text()
            .map_err(|e| ApiError::parse(format!("{:?}", e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| ApiError::parse(format!("{:?}", e)))?;
        let body = text.as_string().unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error_message(e: &wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn js_error_message(e: &wasm_bindgen::JsValue) -> String {
    format!("{:?}", e)
}

// =========================================================
// Test client: canned responses, recorded requests
// =========================================================

#[cfg(test)]
pub use mock::MockHttpClient;
