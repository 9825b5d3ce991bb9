//! Envelope shared by every page view.

use azstat_core::i18n::{dictionary, Dictionary};
use azstat_core::locale::Locale;
use azstat_core::navigation::{navigation, Navigation};
use serde::Serialize;

/// A rendered page: locale, localized heading, sidebar, and page content.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub locale: Locale,
    pub title: &'static str,
    pub description: &'static str,
    pub nav: Navigation,
    pub content: T,
}

impl<T: Serialize> Page<T> {
    /// Build a page at `path` (relative to the locale root).
    ///
    /// `heading` picks the page's title and description out of the dictionary.
    pub fn new(
        locale: Locale,
        path: &str,
        heading: impl FnOnce(&'static Dictionary) -> (&'static str, &'static str),
        content: T,
    ) -> Self {
        let (title, description) = heading(dictionary(locale));
        Self {
            locale,
            title,
            description,
            nav: navigation(locale, &locale.prefix(path)),
            content,
        }
    }
}
