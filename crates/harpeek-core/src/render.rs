//! Text rendering of a matching entry.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::har::{HarEntry, HarResponse, NameValue};

/// Layout and body-size limits for rendered entries. All lengths count
/// characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width of the `-` separator line opening each block.
    pub separator_width: usize,
    /// Substring of `content.mimeType` that marks a JSON body.
    pub json_mime: String,
    /// JSON bodies shorter than this are printed in full.
    pub json_inline_limit: usize,
    /// Characters kept from a JSON body at or above the inline limit.
    pub json_preview_chars: usize,
    /// Characters kept from the body of a status >= 400 response.
    pub error_preview_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator_width: 80,
            json_mime: "application/json".to_string(),
            json_inline_limit: 1000,
            json_preview_chars: 200,
            error_preview_chars: 500,
        }
    }
}

/// Which response body line, if any, a block ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyView<'a> {
    Json(&'a str),
    JsonTruncated(&'a str),
    Error(&'a str),
}

/// Priority chain: JSON mime type first, then status >= 400, then nothing.
pub fn select_body<'a>(response: &'a HarResponse, opts: &RenderOptions) -> Option<BodyView<'a>> {
    let content = &response.content;
    let text = content.text.as_deref().unwrap_or("");
    let is_json = content
        .mime_type
        .as_deref()
        .is_some_and(|mime| !mime.is_empty() && mime.contains(opts.json_mime.as_str()));

    if is_json {
        if text.chars().count() < opts.json_inline_limit {
            Some(BodyView::Json(text))
        } else {
            Some(BodyView::JsonTruncated(char_prefix(text, opts.json_preview_chars)))
        }
    } else if response.status >= 400 {
        Some(BodyView::Error(char_prefix(text, opts.error_preview_chars)))
    } else {
        None
    }
}

/// Writes the block for one matching entry.
pub fn render_entry<W: Write>(
    out: &mut W,
    entry: &HarEntry,
    opts: &RenderOptions,
) -> io::Result<()> {
    let request = &entry.request;
    let response = &entry.response;

    writeln!(out, "{}", "-".repeat(opts.separator_width))?;
    writeln!(out, "URL: {}", request.url)?;
    writeln!(out, "Method: {}", request.method)?;
    writeln!(out, "Status: {} {}", response.status, response.status_text)?;

    writeln!(out, "Headers:")?;
    write_pairs(out, &request.headers)?;

    if let Some(params) = request.query_string.as_deref().filter(|p| !p.is_empty()) {
        writeln!(out, "Query Params:")?;
        write_pairs(out, params)?;
    }

    match select_body(response, opts) {
        Some(BodyView::Json(text)) => writeln!(out, "Response Body: {}", text)?,
        Some(BodyView::JsonTruncated(text)) => {
            writeln!(out, "Response Body (truncated): {}...", text)?
        }
        Some(BodyView::Error(text)) => writeln!(out, "Error Response Body: {}", text)?,
        None => {}
    }
    Ok(())
}

fn write_pairs<W: Write>(out: &mut W, pairs: &[NameValue]) -> io::Result<()> {
    for pair in pairs {
        writeln!(out, "  {}: {}", pair.name, pair.value)?;
    }
    Ok(())
}

/// First `n` chars of `s`, never splitting a UTF-8 sequence.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
