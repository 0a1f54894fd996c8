//! HAR fixtures for report tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds one HAR entry with an empty header list and no query string.
pub fn entry(url: &str, status: i64, mime: Option<&str>, text: Option<&str>) -> Value {
    let mut content = json!({ "size": 0 });
    if let Some(mime) = mime {
        content["mimeType"] = json!(mime);
    }
    if let Some(text) = text {
        content["text"] = json!(text);
    }
    json!({
        "startedDateTime": "2024-01-01T00:00:00.000Z",
        "request": {
            "url": url,
            "method": "GET",
            "httpVersion": "HTTP/1.1",
            "headers": [],
        },
        "response": {
            "status": status,
            "statusText": status_text(status),
            "content": content,
        },
    })
}

pub fn status_text(status: i64) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// Wraps entries in a HAR 1.2 `log`.
pub fn har(entries: Vec<Value>) -> Value {
    json!({
        "log": {
            "version": "1.2",
            "creator": { "name": "test", "version": "0" },
            "entries": entries,
        }
    })
}

pub fn write_har(doc: &Value) -> NamedTempFile {
    write_raw(&doc.to_string())
}

pub fn write_raw(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}
