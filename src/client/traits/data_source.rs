use async_trait::async_trait;
use crate::client::enums::client_error::ClientError;
use crate::client::structs::torrent::Torrent;
use crate::client::structs::transfer_status::TransferStatus;

/// Read side of the torrent daemon as seen by the collector.
///
/// Every call is one independent request; implementations bound their own
/// latency (request timeouts) and handle session renewal themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_status(&self) -> Result<TransferStatus, ClientError>;

    /// Names of the configured categories.
    async fn fetch_categories(&self) -> Result<Vec<String>, ClientError>;

    async fn fetch_items(&self) -> Result<Vec<Torrent>, ClientError>;
}
