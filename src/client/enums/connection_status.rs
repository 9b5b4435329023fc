use serde::{Deserialize, Serialize};

/// Connection state of the daemon as reported in `connection_status`.
///
/// Anything the daemon reports outside the known values is kept verbatim in
/// `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum ConnectionStatus {
    Connected,
    Firewalled,
    #[default]
    Disconnected,
    Other(String),
}
