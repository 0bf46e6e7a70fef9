//! Domain-state core for NGO Connect, a donor/volunteer platform demo.
//!
//! Everything lives in process memory: a shared [`store::Platform`] holds the
//! campaign, donation, and volunteer collections, the operation modules under
//! [`store`] mutate them from raw form input, and [`metrics`]/[`reports`]
//! derive the display values. There is no persistence and no network; the
//! presentation layer is an external collaborator that calls in with plain
//! strings and renders the snapshots it gets back.

pub mod errors;
pub mod metrics;
pub mod reports;
pub mod session;
pub mod store;

pub use errors::{PlatformError, Result};
pub use store::Platform;
