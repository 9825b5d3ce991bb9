//! Domain types and pure logic for the AzStat report dashboard.
//!
//! Everything here is I/O free: the HTTP client, page flows, and server
//! build on these types.

pub mod compare;
pub mod error;
pub mod findings;
pub mod i18n;
pub mod locale;
pub mod navigation;
pub mod report;
pub mod settings;
pub mod statistics;
pub mod types;
pub mod upload;
