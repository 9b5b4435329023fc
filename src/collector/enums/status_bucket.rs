use serde::{Deserialize, Serialize};

/// Non-exclusive classification of a torrent's lifecycle state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum StatusBucket {
    Downloading,
    Uploading,
    Complete,
    Checking,
    Errored,
    Paused,
}
