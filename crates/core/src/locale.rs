//! Locale-prefix routing decisions.
//!
//! Every page path lives under a locale segment (`/en/...`, `/az/...`).
//! [`resolve`] decides whether an inbound path already carries one or must
//! be redirected to the default locale. It is stateless and idempotent.

use serde::{Deserialize, Serialize};

/// The closed set of supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Az,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Az];
    pub const DEFAULT: Locale = Locale::En;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Az => "az",
        }
    }

    /// Parse a path segment. Only exact lowercase tags are accepted.
    pub fn parse(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == segment)
    }

    /// Prefix `path` (which must start with `/`) with this locale.
    pub fn prefix(&self, path: &str) -> String {
        if path == "/" || path.is_empty() {
            format!("/{}", self.as_str())
        } else {
            format!("/{}{path}", self.as_str())
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running the resolver on one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDecision {
    /// The path is excluded or already prefixed; serve it as-is.
    PassThrough,
    /// Redirect to this locale-prefixed location.
    Redirect(String),
}

/// Paths under these prefixes are never locale-routed.
const EXCLUDED_PREFIXES: &[&str] = &["/api", "/_next/static", "/_next/image", "/health"];

/// Exact paths that are never locale-routed.
const EXCLUDED_PATHS: &[&str] = &["/favicon.ico"];

/// Whether the resolver skips this path entirely (static and internal paths).
pub fn is_excluded(path: &str) -> bool {
    if EXCLUDED_PATHS.contains(&path) || path.ends_with(".png") {
        return true;
    }
    EXCLUDED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// The locale of the first path segment, if it is a supported one.
///
/// Matches `/{locale}` exactly or `/{locale}/...`; `/english` is not `/en`.
pub fn locale_of(path: &str) -> Option<Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or_default();
    Locale::parse(segment)
}

/// Decide how to route `path`. `query` is the raw query string, if any.
pub fn resolve(path: &str, query: Option<&str>) -> LocaleDecision {
    if is_excluded(path) || locale_of(path).is_some() {
        return LocaleDecision::PassThrough;
    }

    let mut target = Locale::DEFAULT.prefix(path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    LocaleDecision::Redirect(target)
}
