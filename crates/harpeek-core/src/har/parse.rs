//! HAR 1.2 structures for the fields the reporter prints.
//!
//! Required fields carry no `#[serde(default)]`, so a missing key surfaces as
//! a decode error for that entry.

use serde::de::IgnoredAny;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    pub url: String,
    pub method: String,
    pub headers: Vec<NameValue>,
    #[serde(default, rename = "queryString")]
    pub query_string: Option<Vec<NameValue>>,
}

#[derive(Debug, Deserialize)]
pub struct HarResponse {
    pub status: i64,
    #[serde(rename = "statusText")]
    pub status_text: String,
    pub content: HarContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarContent {
    #[serde(default, rename = "mimeType")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Header or query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

/// Just enough of an entry to run the URL filter: `request.url` must exist and
/// `response` must be present, everything else is left undecoded.
#[derive(Debug, Deserialize)]
pub(super) struct EntryHead<'a> {
    #[serde(borrow)]
    pub request: RequestHead<'a>,
    #[allow(dead_code)]
    pub response: IgnoredAny,
}

#[derive(Debug, Deserialize)]
pub(super) struct RequestHead<'a> {
    pub url: &'a str,
}
