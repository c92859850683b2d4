//! Request descriptor types: query strings, bodies, attachments.
//!
//! A body is either plain JSON or multipart form data. Multipart is chosen
//! explicitly by the caller whenever attachments are sent; the payload
//! object is then flattened into form fields the way Freshdesk's form
//! parser expects (`key[]` for arrays, `key[sub]` for nested objects).

use std::fmt;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use fd_core::error::FdError;

use crate::error::{ApiError, ApiResult};

/// Form field name of every attachment part.
pub const ATTACHMENTS_FIELD: &str = "attachments[]";

/// Identifies a call for error reporting: `"GET /api/v2/tickets/1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    pub method: Method,
    pub path: String,
}

impl ApiTarget {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into() }
    }

    /// Build from a full URL; the query string is dropped.
    pub fn from_url(method: Method, url: &reqwest::Url) -> Self {
        Self::new(method, url.path())
    }
}

impl fmt::Display for ApiTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Flat query-string parameters. Absent values are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn push_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Build from any serializable filter struct. Nulls are dropped,
    /// strings are sent unquoted, and nested values as JSON text.
    pub fn from_serialize<T: Serialize>(params: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(params)?;
        let mut query = Self::new();
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (key, v) in map {
                    if let Some(text) = scalar_text(&v) {
                        query.0.push((key, text));
                    } else if !v.is_null() {
                        query.0.push((key, v.to_string()));
                    }
                }
            }
            other => {
                return Err(ApiError::Request(format!(
                    "query parameters must be an object, got {other}"
                )))
            }
        }
        Ok(query)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Outgoing request body.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Serialized as a JSON document with `Content-Type: application/json`.
    Json(Value),
    /// Sent as `multipart/form-data`.
    Multipart(MultipartBody),
}

impl RequestBody {
    /// JSON body from any serializable payload.
    pub fn json<T: Serialize + ?Sized>(payload: &T) -> ApiResult<Self> {
        Ok(RequestBody::Json(serde_json::to_value(payload)?))
    }

    /// Multipart body from a payload object plus the files to attach.
    pub fn multipart<T: Serialize + ?Sized>(
        payload: &T,
        attachments: Vec<Attachment>,
    ) -> ApiResult<Self> {
        let value = serde_json::to_value(payload)?;
        Ok(RequestBody::Multipart(MultipartBody::from_value(&value, attachments)?))
    }

    /// Multipart when there is anything to attach, JSON otherwise.
    pub fn with_attachments<T: Serialize + ?Sized>(
        payload: &T,
        attachments: Vec<Attachment>,
    ) -> ApiResult<Self> {
        if attachments.is_empty() {
            Self::json(payload)
        } else {
            Self::multipart(payload, attachments)
        }
    }
}

/// Form fields plus file parts of a multipart request.
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub attachments: Vec<Attachment>,
}

impl MultipartBody {
    /// Flatten a JSON object into form fields.
    ///
    /// An `attachments` key in the payload is ignored; files travel in
    /// `attachments` instead.
    pub fn from_value(payload: &Value, attachments: Vec<Attachment>) -> ApiResult<Self> {
        let map = match payload {
            Value::Object(map) => map,
            Value::Null => {
                return Ok(Self { fields: Vec::new(), attachments });
            }
            other => {
                return Err(ApiError::Request(format!(
                    "multipart payload must be an object, got {other}"
                )))
            }
        };

        let mut fields = Vec::new();
        for (key, value) in map {
            if key == "attachments" {
                continue;
            }
            flatten_field(key, value, &mut fields);
        }

        Ok(Self { fields, attachments })
    }

    /// All values submitted under a field name, in order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Convert into a reqwest form.
    pub fn into_form(self) -> ApiResult<Form> {
        let mut form = Form::new();
        for (key, value) in self.fields {
            form = form.text(key, value);
        }
        for attachment in self.attachments {
            form = form.part(ATTACHMENTS_FIELD, attachment.into_part()?);
        }
        Ok(form)
    }
}

fn flatten_field(key: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            let name = format!("{key}[]");
            for item in items {
                match scalar_text(item) {
                    Some(text) => out.push((name.clone(), text)),
                    None if item.is_null() => {}
                    None => out.push((name.clone(), item.to_string())),
                }
            }
        }
        Value::Object(map) => {
            for (sub, v) in map {
                flatten_field(&format!("{key}[{sub}]"), v, out);
            }
        }
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                out.push((key.to_string(), text));
            }
        }
    }
}

/// Text form of a JSON scalar; `None` for null, arrays and objects.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A file sent as an `attachments[]` part.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Attachment from in-memory bytes; the MIME type is guessed from the
    /// file name's extension.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_mime(&file_name).map(str::to_string);
        Self { file_name, content_type, bytes }
    }

    /// Read an attachment from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(FdError::Io)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        Ok(Self::from_bytes(file_name, bytes))
    }

    /// Override the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    fn into_part(self) -> ApiResult<Part> {
        let mime = self
            .content_type
            .unwrap_or_else(|| "application/octet-stream".to_string());
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&mime)
            .map_err(|e| ApiError::Request(format!("invalid mime type {mime}: {e}")))
    }
}

fn guess_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_target_display() {
        let url = reqwest::Url::parse("https://demo.freshdesk.com/api/v2/companies/2139?page=2").unwrap();
        let target = ApiTarget::from_url(Method::GET, &url);
        assert_eq!(target.to_string(), "GET /api/v2/companies/2139");
    }

    #[test]
    fn test_query_push_opt_skips_none() {
        let q = Query::new()
            .push("page", 2)
            .push_opt("email", None::<String>)
            .push_opt("state", Some("fulltime"));
        assert_eq!(q.pairs().len(), 2);
        assert_eq!(q.get("page"), Some("2"));
        assert_eq!(q.get("state"), Some("fulltime"));
        assert!(q.get("email").is_none());
    }

    #[test]
    fn test_query_from_serialize() {
        #[derive(Serialize)]
        struct Filter {
            email: Option<String>,
            page: Option<u32>,
            billable: bool,
        }
        let q = Query::from_serialize(&Filter {
            email: Some("a@b.c".into()),
            page: None,
            billable: false,
        })
        .unwrap();
        assert_eq!(q.get("email"), Some("a@b.c"));
        assert_eq!(q.get("billable"), Some("false"));
        assert!(q.get("page").is_none());
    }

    #[test]
    fn test_query_from_serialize_rejects_scalar() {
        assert!(matches!(Query::from_serialize(&3), Err(ApiError::Request(_))));
    }

    #[test]
    fn test_multipart_flattening() {
        let payload = json!({
            "subject": "Support Needed...",
            "priority": 1,
            "urgent": true,
            "group_id": null,
            "cc_emails": ["ram@freshdesk.com", "diana@freshdesk.com"],
            "custom_fields": {"cf_region": "emea"},
            "attachments": ["ignored"]
        });
        let body = MultipartBody::from_value(&payload, vec![]).unwrap();
        assert_eq!(body.values("subject"), vec!["Support Needed..."]);
        assert_eq!(body.values("priority"), vec!["1"]);
        assert_eq!(body.values("urgent"), vec!["true"]);
        assert!(body.values("group_id").is_empty());
        assert_eq!(
            body.values("cc_emails[]"),
            vec!["ram@freshdesk.com", "diana@freshdesk.com"]
        );
        assert_eq!(body.values("custom_fields[cf_region]"), vec!["emea"]);
        assert!(body.values("attachments").is_empty());
    }

    #[test]
    fn test_multipart_rejects_non_object() {
        let err = MultipartBody::from_value(&json!([1, 2]), vec![]).unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }

    #[test]
    fn test_with_attachments_picks_encoding() {
        let payload = json!({"subject": "hi"});
        assert!(matches!(
            RequestBody::with_attachments(&payload, vec![]).unwrap(),
            RequestBody::Json(_)
        ));
        let file = Attachment::from_bytes("notes.txt", b"hello".to_vec());
        assert!(matches!(
            RequestBody::with_attachments(&payload, vec![file]).unwrap(),
            RequestBody::Multipart(_)
        ));
    }

    #[test]
    fn test_attachment_mime_guess() {
        let a = Attachment::from_bytes("SECURITY.md", vec![]);
        assert_eq!(a.content_type.as_deref(), Some("text/markdown"));
        let b = Attachment::from_bytes("blob", vec![]);
        assert!(b.content_type.is_none());
        let c = b.with_content_type("image/webp");
        assert_eq!(c.content_type.as_deref(), Some("image/webp"));
    }

    #[test]
    fn test_invalid_mime_is_request_error() {
        let body = MultipartBody {
            fields: vec![],
            attachments: vec![Attachment::from_bytes("x", vec![1]).with_content_type("not a mime")],
        };
        assert!(matches!(body.into_form(), Err(ApiError::Request(_))));
    }

    #[tokio::test]
    async fn test_attachment_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        let a = Attachment::from_path(&path).await.unwrap();
        assert_eq!(a.file_name, "report.csv");
        assert_eq!(a.content_type.as_deref(), Some("text/csv"));
        assert_eq!(a.bytes, b"a,b\n1,2\n");
    }

    #[tokio::test]
    async fn test_attachment_from_missing_path() {
        let err = Attachment::from_path("/definitely/not/here.txt").await.unwrap_err();
        assert!(matches!(err, ApiError::Core(FdError::Io(_))));
    }
}
