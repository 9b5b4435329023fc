/// Shared state injected into every handler.
pub mod http_service_data;
