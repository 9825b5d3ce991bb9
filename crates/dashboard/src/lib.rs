//! Page flows of the report dashboard.
//!
//! Each flow fetches from the [`ReportBackend`](azstat_client::ReportBackend)
//! independently, keeps its own view state, and owns a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) that is
//! cancelled when the flow is torn down. A cancelled request never writes
//! back into view state.
//!
//! [`Dashboard`] is the long-lived owner: it holds the upload queue (which
//! outlives any single page visit) and hands out per-visit flows whose
//! tokens are children of its own.

pub mod compare;
pub mod dashboard;
pub mod error_list;
pub mod notifications;
pub mod scope;
pub mod statistics;
pub mod upload;

pub use dashboard::Dashboard;
pub use scope::{FlowError, LoadState};
