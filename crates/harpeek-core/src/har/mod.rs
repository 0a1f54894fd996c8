//! HAR (HTTP Archive) loading: read a capture file and expose its entries in
//! capture order.
//!
//! The document is parsed as untyped JSON once; entries are decoded into
//! typed records only when the reporter reaches them, so a malformed entry
//! fails at its own position in the pass rather than up front.

mod parse;

pub use parse::{HarContent, HarEntry, HarRequest, HarResponse, NameValue};

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::error::ReportError;
use parse::EntryHead;

/// Parsed HAR document holding the raw `log.entries` array.
#[derive(Debug)]
pub struct HarDocument {
    entries: Vec<Value>,
}

impl HarDocument {
    /// Extracts `log.entries` from a parsed JSON root.
    pub fn from_value(mut root: Value) -> Result<Self, ReportError> {
        let log = root
            .get_mut("log")
            .ok_or_else(|| ReportError::Shape("missing key `log`".to_string()))?;
        let entries = log
            .get_mut("entries")
            .ok_or_else(|| ReportError::Shape("missing key `log.entries`".to_string()))?
            .take();
        match entries {
            Value::Array(entries) => Ok(Self { entries }),
            _ => Err(ReportError::Shape("`log.entries` is not an array".to_string())),
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ReportError> {
        let root: Value = serde_json::from_slice(bytes)?;
        Self::from_value(root)
    }

    /// Number of entries in the log.
    pub fn summarize(&self) -> usize {
        self.entries.len()
    }

    /// Entries in capture order.
    pub fn entries(&self) -> impl Iterator<Item = RawEntry<'_>> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, raw)| RawEntry { index, raw })
    }
}

/// One not-yet-decoded entry.
#[derive(Debug, Clone, Copy)]
pub struct RawEntry<'a> {
    index: usize,
    raw: &'a Value,
}

impl<'a> RawEntry<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// `request.url`, requiring only that `request.url` and `response` exist.
    pub fn url(&self) -> Result<&'a str, ReportError> {
        let head = EntryHead::deserialize(self.raw).map_err(|source| ReportError::Entry {
            index: self.index,
            source,
        })?;
        Ok(head.request.url)
    }

    /// Full typed decode.
    pub fn decode(&self) -> Result<HarEntry, ReportError> {
        HarEntry::deserialize(self.raw).map_err(|source| ReportError::Entry {
            index: self.index,
            source,
        })
    }
}

/// Reads and parses a HAR file. The file is fully read and closed before
/// parsing starts.
pub fn load(path: &Path) -> Result<HarDocument, ReportError> {
    let bytes = std::fs::read(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = HarDocument::from_slice(&bytes)?;
    tracing::debug!(
        "loaded HAR {} with {} entries",
        path.display(),
        doc.summarize()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_har(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_counts_entries() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    { "request": { "url": "https://a.example/", "method": "GET", "headers": [] },
                      "response": { "status": 200, "statusText": "OK", "content": {} } },
                    { "request": { "url": "https://b.example/", "method": "GET", "headers": [] },
                      "response": { "status": 200, "statusText": "OK", "content": {} } }
                ]
            }
        }"#;
        let f = write_har(har);
        let doc = load(f.path()).unwrap();
        assert_eq!(doc.summarize(), 2);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.har")).unwrap_err();
        assert!(matches!(err, ReportError::Read { .. }));
    }

    #[test]
    fn load_invalid_json_is_parse_error() {
        let f = write_har("{ not json");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn missing_log_is_shape_error() {
        let err = HarDocument::from_slice(br#"{"entries": []}"#).unwrap_err();
        assert_eq!(err.to_string(), "missing key `log`");
    }

    #[test]
    fn missing_entries_is_shape_error() {
        let err = HarDocument::from_slice(br#"{"log": {"version": "1.2"}}"#).unwrap_err();
        assert_eq!(err.to_string(), "missing key `log.entries`");
    }

    #[test]
    fn non_array_entries_is_shape_error() {
        let err = HarDocument::from_slice(br#"{"log": {"entries": {}}}"#).unwrap_err();
        assert!(matches!(err, ReportError::Shape(_)));
    }

    #[test]
    fn top_level_array_is_shape_error() {
        let err = HarDocument::from_slice(b"[1, 2]").unwrap_err();
        assert!(matches!(err, ReportError::Shape(_)));
    }

    #[test]
    fn url_probe_ignores_unrelated_missing_fields() {
        let doc = HarDocument::from_slice(
            br#"{"log": {"entries": [
                { "request": { "url": "https://cdn.example/app.js" }, "response": {} }
            ]}}"#,
        )
        .unwrap();
        let raw = doc.entries().next().unwrap();
        assert_eq!(raw.url().unwrap(), "https://cdn.example/app.js");
        assert!(raw.decode().is_err());
    }

    #[test]
    fn url_probe_requires_response() {
        let doc = HarDocument::from_slice(
            br#"{"log": {"entries": [ {}, { "request": { "url": "x" } } ]}}"#,
        )
        .unwrap();
        let entries: Vec<_> = doc.entries().collect();
        let first = entries[0].url().unwrap_err();
        assert!(first.to_string().starts_with("entry 0: missing field `request`"));
        let second = entries[1].url().unwrap_err();
        assert!(second.to_string().starts_with("entry 1: missing field `response`"));
    }

    #[test]
    fn decode_reads_optional_fields() {
        let doc = HarDocument::from_slice(
            br#"{"log": {"entries": [{
                "request": {
                    "url": "https://x.com/api/oauth/authorize",
                    "method": "GET",
                    "headers": [ { "name": "Accept", "value": "*/*" } ],
                    "queryString": [ { "name": "client_id", "value": "abc" } ]
                },
                "response": {
                    "status": 302,
                    "statusText": "Found",
                    "content": { "mimeType": "text/html", "text": null }
                }
            }]}}"#,
        )
        .unwrap();
        let entry = doc.entries().next().unwrap().decode().unwrap();
        assert_eq!(entry.request.method, "GET");
        assert_eq!(entry.request.headers.len(), 1);
        assert_eq!(
            entry.request.query_string,
            Some(vec![NameValue {
                name: "client_id".to_string(),
                value: "abc".to_string(),
            }])
        );
        assert_eq!(entry.response.status, 302);
        assert_eq!(entry.response.content.mime_type.as_deref(), Some("text/html"));
        assert!(entry.response.content.text.is_none());
    }
}
