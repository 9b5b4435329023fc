//! Prometheus text exposition.
//!
//! Samples produced by the collector are rendered in the text-based format
//! (version 0.0.4): a `# HELP` and `# TYPE` header once per metric family,
//! followed by one line per sample.

/// Rendering of samples into the exposition format.
#[allow(clippy::module_inception)]
pub mod metrics;
