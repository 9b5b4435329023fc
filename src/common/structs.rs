//! Common data structures.

/// Message-carrying error used where no richer error type exists.
pub mod custom_error;
