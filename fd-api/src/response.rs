//! Response normalization.
//!
//! Every raw HTTP outcome is classified into exactly one of: a decoded
//! payload, an empty success (204), or an error. Classification is a pure
//! function of the outcome and the request target, so it can be exercised
//! without a network.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use fd_core::constants::{headers, messages};

use crate::error::{ApiError, ApiResult, FreshdeskError};
use crate::request::ApiTarget;

/// A received HTTP response, reduced to what classification needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Header names are lower-cased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header; the name is lower-cased.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Drain a reqwest response. Fails only if the body cannot be read.
    pub async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status().as_u16();
        let mut header_map = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                header_map.insert(name.as_str().to_ascii_lowercase(), v.to_string());
            }
        }
        let body = response.text().await?;
        Ok(Self { status, headers: header_map, body })
    }
}

/// Per-response metadata delivered with every successful call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    /// False when a `link` header announces another page.
    pub page_is_last: bool,
    /// `x-request-id`, or empty.
    pub request_id: String,
    /// URL of the `rel="next"` link, when present.
    pub next_page: Option<String>,
    pub rate_limit_total: Option<u32>,
    pub rate_limit_remaining: Option<u32>,
    pub rate_limit_used_current_request: Option<u32>,
}

impl Extra {
    /// Derive metadata from response headers.
    pub fn from_headers(raw: &RawResponse) -> Self {
        let link = raw.header(headers::LINK);
        Self {
            page_is_last: link.is_none(),
            request_id: request_id(raw),
            next_page: link.and_then(parse_next_link),
            rate_limit_total: parse_header(raw, headers::RATE_LIMIT_TOTAL),
            rate_limit_remaining: parse_header(raw, headers::RATE_LIMIT_REMAINING),
            rate_limit_used_current_request: parse_header(raw, headers::RATE_LIMIT_USED),
        }
    }
}

/// A successful call: the payload (absent for 204) and its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T = Value> {
    pub data: Option<T>,
    pub extra: Extra,
}

impl<T> ApiResponse<T> {
    /// Whether this was a 204 with nothing to decode.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ApiResponse<Value> {
    /// Decode the payload into a typed value.
    pub fn json<T: DeserializeOwned>(self) -> ApiResult<ApiResponse<T>> {
        let data = match self.data {
            Some(v) => Some(serde_json::from_value(v).map_err(|e| {
                ApiError::Request(format!("response does not match expected type: {e}"))
            })?),
            None => None,
        };
        Ok(ApiResponse { data, extra: self.extra })
    }
}

/// Classify a transport outcome.
///
/// A transport failure is returned unchanged as `ApiError::Transport`;
/// anything that produced a response goes through [`classify`].
pub fn normalize(
    outcome: Result<RawResponse, reqwest::Error>,
    target: &ApiTarget,
) -> ApiResult<ApiResponse> {
    match outcome {
        Err(e) => {
            debug!("transport failure on {target}: {e}");
            Err(ApiError::Transport(e))
        }
        Ok(raw) => classify(raw, target),
    }
}

/// Classify a received response by status code.
pub fn classify(raw: RawResponse, target: &ApiTarget) -> ApiResult<ApiResponse> {
    match raw.status {
        200 | 201 => match decode_success(&raw) {
            Some(data) => Ok(ApiResponse {
                extra: Extra::from_headers(&raw),
                data: Some(data),
            }),
            None => {
                debug!(
                    "non-JSON body with status {} on {target}: {}",
                    raw.status, raw.body
                );
                let data = Value::String(raw.body.clone());
                Err(freshdesk_error(messages::NOT_JSON, data, &raw, target))
            }
        },
        204 => Ok(ApiResponse {
            data: None,
            extra: Extra::from_headers(&raw),
        }),
        404 => {
            debug!("not found: {target}");
            let data = parse_or_raw(&raw.body);
            Err(freshdesk_error(messages::NOT_FOUND, data, &raw, target))
        }
        status => {
            debug!("unexpected status {status} on {target}: {}", raw.body);
            let data = parse_or_raw(&raw.body);
            let message = data
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or(messages::GENERIC)
                .to_string();
            Err(freshdesk_error(&message, data, &raw, target))
        }
    }
}

fn decode_success(raw: &RawResponse) -> Option<Value> {
    let declared = raw
        .header(headers::CONTENT_TYPE)
        .map(|ct| ct.to_ascii_lowercase());
    if matches!(declared, Some(ref ct) if ct.starts_with("text/plain")) {
        return Some(Value::String(raw.body.clone()));
    }
    serde_json::from_str(&raw.body).ok()
}

fn parse_or_raw(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn freshdesk_error(message: &str, data: Value, raw: &RawResponse, target: &ApiTarget) -> ApiError {
    ApiError::Freshdesk(FreshdeskError {
        message: message.to_string(),
        data,
        status: raw.status,
        api_target: target.to_string(),
        request_id: request_id(raw),
        retry_after: parse_header(raw, headers::RETRY_AFTER),
    })
}

fn request_id(raw: &RawResponse) -> String {
    raw.header(headers::REQUEST_ID).unwrap_or_default().to_string()
}

fn parse_header<T: std::str::FromStr>(raw: &RawResponse, name: &str) -> Option<T> {
    raw.header(name).and_then(|v| v.trim().parse().ok())
}

/// Extract the `rel="next"` URL from an RFC 5988 `link` header.
pub fn parse_next_link(link: &str) -> Option<String> {
    link.split(',').find_map(|entry| {
        let mut segments = entry.split(';');
        let url = segments.next()?.trim();
        let is_next = segments.any(|param| {
            let param = param.trim();
            param
                .strip_prefix("rel=")
                .map(|rel| rel.trim_matches('"') == "next")
                .unwrap_or(false)
        });
        if !is_next {
            return None;
        }
        let url = url.strip_prefix('<')?.strip_suffix('>')?.trim();
        Some(url.to_string())
    })
}
