//! Client enumerations.

/// Errors raised while talking to the Web API.
pub mod client_error;

/// Connection status reported by `/transfer/info`.
pub mod connection_status;
