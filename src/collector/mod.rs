//! Collection pipeline.
//!
//! On every scrape the [`structs::collector::Collector`] reads the daemon
//! through a [`crate::client::traits::data_source::DataSource`], classifies
//! each torrent into status buckets and returns the resulting samples.
//!
//! # Buckets
//!
//! | Bucket | Member states |
//! |---|---|
//! | downloading | downloading, metaDL, pausedDL, queuedDL, forcedDL, stalledDL, checkingDL |
//! | uploading | uploading, stalledUP, checkingUP, queuedUP, forcedUP |
//! | complete | uploading, stalledUP, checkingUP, pausedUP, queuedUP, forcedUP |
//! | checking | checkingUP, checkingDL, checkingResumeData |
//! | errored | missingFiles, error |
//! | paused | pausedUP, pausedDL |
//!
//! Buckets overlap: a `stalledUP` torrent counts as both uploading and
//! complete. `allocating`, `moving`, `unknown` and any state outside the
//! vocabulary belong to no bucket.
//!
//! # Failure handling
//!
//! If any of the three reads fails the scrape yields the single sample
//! `<prefix>_up 0` and nothing else.

/// Bucket, torrent state and metric kind enumerations.
pub mod enums;

/// Collector, descriptor and sample structures.
pub mod structs;

/// Implementation blocks for the collection pipeline.
pub mod impls;
