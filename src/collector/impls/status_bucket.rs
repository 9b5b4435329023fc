use std::fmt;
use std::fmt::Formatter;
use crate::collector::enums::status_bucket::StatusBucket;
use crate::collector::enums::torrent_state::TorrentState;

impl StatusBucket {
    pub const ALL: [StatusBucket; 6] = [
        StatusBucket::Downloading,
        StatusBucket::Uploading,
        StatusBucket::Complete,
        StatusBucket::Checking,
        StatusBucket::Errored,
        StatusBucket::Paused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusBucket::Downloading => "downloading",
            StatusBucket::Uploading => "uploading",
            StatusBucket::Complete => "complete",
            StatusBucket::Checking => "checking",
            StatusBucket::Errored => "errored",
            StatusBucket::Paused => "paused",
        }
    }

    pub fn member_states(&self) -> &'static [TorrentState] {
        match self {
            StatusBucket::Downloading => &[
                TorrentState::Downloading,
                TorrentState::MetadataDownload,
                TorrentState::PausedDownload,
                TorrentState::QueuedDownload,
                TorrentState::ForcedDownload,
                TorrentState::StalledDownload,
                TorrentState::CheckingDownload,
            ],
            StatusBucket::Uploading => &[
                TorrentState::Uploading,
                TorrentState::StalledUpload,
                TorrentState::CheckingUpload,
                TorrentState::QueuedUpload,
                TorrentState::ForcedUpload,
            ],
            StatusBucket::Complete => &[
                TorrentState::Uploading,
                TorrentState::StalledUpload,
                TorrentState::CheckingUpload,
                TorrentState::PausedUpload,
                TorrentState::QueuedUpload,
                TorrentState::ForcedUpload,
            ],
            StatusBucket::Checking => &[
                TorrentState::CheckingUpload,
                TorrentState::CheckingDownload,
                TorrentState::CheckingResumeData,
            ],
            StatusBucket::Errored => &[
                TorrentState::MissingFiles,
                TorrentState::Error,
            ],
            StatusBucket::Paused => &[
                TorrentState::PausedUpload,
                TorrentState::PausedDownload,
            ],
        }
    }

    pub fn contains_state(&self, state: TorrentState) -> bool {
        self.member_states().contains(&state)
    }

    /// Whether a raw state string belongs to this bucket. Total: unknown
    /// strings belong to no bucket.
    pub fn contains(&self, state: &str) -> bool {
        match TorrentState::from_state(state) {
            Some(state) => self.contains_state(state),
            None => false,
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn classify(state: &str, bucket: StatusBucket) -> bool {
    bucket.contains(state)
}

/// Every bucket a raw state string belongs to, in `StatusBucket::ALL` order.
pub fn buckets_for(state: &str) -> Vec<StatusBucket> {
    match TorrentState::from_state(state) {
        Some(state) => StatusBucket::ALL.into_iter().filter(|bucket| bucket.contains_state(state)).collect(),
        None => Vec::new(),
    }
}
