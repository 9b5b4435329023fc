use parking_lot::RwLock;

pub struct QBittorrentClient {
    pub(crate) client: reqwest::Client,
    pub(crate) address: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) base_url: String,
    pub(crate) sid: RwLock<Option<String>>
}
