//! Collector data structures.

/// The collection pipeline.
pub mod collector;

/// Mutable bookkeeping guarded by the scrape lock.
pub mod collector_state;

/// Metric family descriptor.
pub mod metric_desc;

/// One exported observation.
pub mod sample;
