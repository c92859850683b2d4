//! Shared test utilities for integration tests.

#![allow(dead_code)]

use fd_api::FreshdeskClient;
use wiremock::MockServer;

/// API key used by every test client.
pub const TEST_KEY: &str = "TESTKEY";

/// `Authorization` value the stub expects for `TEST_KEY`.
pub const TEST_AUTH: &str = "Basic VEVTVEtFWTpY";

/// Start a stub server and a client pointed at it.
pub async fn setup() -> (MockServer, FreshdeskClient) {
    let server = MockServer::start().await;
    let client = FreshdeskClient::from_api_key(&server.uri(), TEST_KEY)
        .expect("failed to build test client");
    (server, client)
}

/// One part of a decoded multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub content: String,
}

/// Decode a `multipart/form-data` body. Only handles text content, which is
/// all the tests send.
pub fn parse_multipart(content_type: &str, body: &[u8]) -> Vec<FormPart> {
    let boundary = content_type
        .split(';')
        .find_map(|p| p.trim().strip_prefix("boundary="))
        .expect("no boundary in content type")
        .trim_matches('"')
        .to_string();
    let body = String::from_utf8_lossy(body);
    let delimiter = format!("--{boundary}");

    body.split(delimiter.as_str())
        .filter_map(|chunk| {
            let chunk = chunk.strip_prefix("\r\n")?;
            let (head, content) = chunk.split_once("\r\n\r\n")?;
            let content = content.strip_suffix("\r\n").unwrap_or(content);

            let mut name = None;
            let mut filename = None;
            let mut part_type = None;
            for line in head.lines() {
                let lower = line.to_ascii_lowercase();
                if lower.starts_with("content-disposition:") {
                    for param in line.split(';').skip(1) {
                        let param = param.trim();
                        if let Some(v) = param.strip_prefix("name=") {
                            name = Some(v.trim_matches('"').to_string());
                        } else if let Some(v) = param.strip_prefix("filename=") {
                            filename = Some(v.trim_matches('"').to_string());
                        }
                    }
                } else if lower.starts_with("content-type:") {
                    part_type = Some(line["content-type:".len()..].trim().to_string());
                }
            }

            Some(FormPart {
                name: name?,
                filename,
                content_type: part_type,
                content: content.to_string(),
            })
        })
        .collect()
}

/// Values of every text field with the given name.
pub fn field_values<'a>(parts: &'a [FormPart], name: &str) -> Vec<&'a str> {
    parts
        .iter()
        .filter(|p| p.name == name && p.filename.is_none())
        .map(|p| p.content.as_str())
        .collect()
}
