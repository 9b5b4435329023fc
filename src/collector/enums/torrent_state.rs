use serde::{Deserialize, Serialize};

/// The `state` vocabulary of `/torrents/info`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TorrentState {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "missingFiles")]
    MissingFiles,
    #[serde(rename = "uploading")]
    Uploading,
    #[serde(rename = "pausedUP")]
    PausedUpload,
    #[serde(rename = "queuedUP")]
    QueuedUpload,
    #[serde(rename = "stalledUP")]
    StalledUpload,
    #[serde(rename = "checkingUP")]
    CheckingUpload,
    #[serde(rename = "forcedUP")]
    ForcedUpload,
    #[serde(rename = "allocating")]
    Allocating,
    #[serde(rename = "downloading")]
    Downloading,
    #[serde(rename = "metaDL")]
    MetadataDownload,
    #[serde(rename = "pausedDL")]
    PausedDownload,
    #[serde(rename = "queuedDL")]
    QueuedDownload,
    #[serde(rename = "forcedDL")]
    ForcedDownload,
    #[serde(rename = "stalledDL")]
    StalledDownload,
    #[serde(rename = "checkingDL")]
    CheckingDownload,
    #[serde(rename = "checkingResumeData")]
    CheckingResumeData,
    #[serde(rename = "moving")]
    Moving,
    #[serde(rename = "unknown")]
    Unknown,
}
