use std::fmt;
use std::fmt::Formatter;
use crate::client::enums::connection_status::ConnectionStatus;

impl ConnectionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Firewalled => "firewalled",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Other(value) => value.as_str(),
        }
    }

    pub fn is_connected(&self) -> bool {
        *self == ConnectionStatus::Connected
    }

    pub fn is_firewalled(&self) -> bool {
        *self == ConnectionStatus::Firewalled
    }
}

impl From<String> for ConnectionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "connected" => ConnectionStatus::Connected,
            "firewalled" => ConnectionStatus::Firewalled,
            "disconnected" => ConnectionStatus::Disconnected,
            _ => ConnectionStatus::Other(value),
        }
    }
}

impl From<&str> for ConnectionStatus {
    fn from(value: &str) -> Self {
        ConnectionStatus::from(value.to_string())
    }
}

impl From<ConnectionStatus> for String {
    fn from(value: ConnectionStatus) -> Self {
        match value {
            ConnectionStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
