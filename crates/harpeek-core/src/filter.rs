//! URL filter selecting auth-related traffic.

/// Substrings that mark a URL as auth-related.
pub const DEFAULT_PATTERNS: [&str; 3] = ["api/auth", "api/oauth", "callback"];

/// Case-sensitive literal substring filter over request URLs.
///
/// A URL matches if it contains any pattern. An empty pattern list matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFilter {
    patterns: Vec<String>,
}

impl UrlFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| url.contains(p.as_str()))
    }
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS)
    }
}

/// Matches `url` against [`DEFAULT_PATTERNS`].
pub fn matches(url: &str) -> bool {
    DEFAULT_PATTERNS.iter().any(|p| url.contains(p))
}
