use std::fmt;
use std::fmt::Formatter;
use crate::collector::enums::torrent_state::TorrentState;

impl TorrentState {
    pub const ALL: [TorrentState; 19] = [
        TorrentState::Error,
        TorrentState::MissingFiles,
        TorrentState::Uploading,
        TorrentState::PausedUpload,
        TorrentState::QueuedUpload,
        TorrentState::StalledUpload,
        TorrentState::CheckingUpload,
        TorrentState::ForcedUpload,
        TorrentState::Allocating,
        TorrentState::Downloading,
        TorrentState::MetadataDownload,
        TorrentState::PausedDownload,
        TorrentState::QueuedDownload,
        TorrentState::ForcedDownload,
        TorrentState::StalledDownload,
        TorrentState::CheckingDownload,
        TorrentState::CheckingResumeData,
        TorrentState::Moving,
        TorrentState::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TorrentState::Error => "error",
            TorrentState::MissingFiles => "missingFiles",
            TorrentState::Uploading => "uploading",
            TorrentState::PausedUpload => "pausedUP",
            TorrentState::QueuedUpload => "queuedUP",
            TorrentState::StalledUpload => "stalledUP",
            TorrentState::CheckingUpload => "checkingUP",
            TorrentState::ForcedUpload => "forcedUP",
            TorrentState::Allocating => "allocating",
            TorrentState::Downloading => "downloading",
            TorrentState::MetadataDownload => "metaDL",
            TorrentState::PausedDownload => "pausedDL",
            TorrentState::QueuedDownload => "queuedDL",
            TorrentState::ForcedDownload => "forcedDL",
            TorrentState::StalledDownload => "stalledDL",
            TorrentState::CheckingDownload => "checkingDL",
            TorrentState::CheckingResumeData => "checkingResumeData",
            TorrentState::Moving => "moving",
            TorrentState::Unknown => "unknown",
        }
    }

    /// Parses a raw state string, `None` when it is outside the vocabulary.
    pub fn from_state(state: &str) -> Option<TorrentState> {
        TorrentState::ALL.into_iter().find(|known| known.as_str() == state)
    }
}

impl fmt::Display for TorrentState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
