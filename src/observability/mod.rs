//! Observability for a command session.
//!
//! Counters for what the session did, reported through `tracing` when the
//! command loop ends.

pub mod metrics;

pub use metrics::{CommandMetrics, Timer};
