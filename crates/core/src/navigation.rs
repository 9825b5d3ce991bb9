//! Sidebar navigation entries.

use serde::Serialize;

use crate::i18n::dictionary;
use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub brand: &'static str,
    pub entries: Vec<NavEntry>,
    /// Footer link, rendered apart from the main entries.
    pub settings: NavEntry,
}

/// Page paths relative to the locale root.
pub const UPLOAD_PATH: &str = "/";
pub const STATISTICS_PATH: &str = "/statistics";
pub const ERRORS_PATH: &str = "/errors";
pub const COMPARE_PATH: &str = "/compare";
pub const SETTINGS_PATH: &str = "/settings";

/// Build the sidebar for `locale`, marking the entry whose href equals `current_path`.
pub fn navigation(locale: Locale, current_path: &str) -> Navigation {
    let t = &dictionary(locale).nav;
    let current = current_path.trim_end_matches('/');
    let entry = |label: &'static str, path: &str| {
        let href = locale.prefix(path);
        NavEntry {
            label,
            active: href == current,
            href,
        }
    };

    Navigation {
        brand: t.brand,
        entries: vec![
            entry(t.upload, UPLOAD_PATH),
            entry(t.statistics, STATISTICS_PATH),
            entry(t.errors, ERRORS_PATH),
            entry(t.compare, COMPARE_PATH),
        ],
        settings: entry(t.settings, SETTINGS_PATH),
    }
}
