use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Formatter;
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, COOKIE, REFERER, SET_COOKIE};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use crate::client::enums::client_error::ClientError;
use crate::client::structs::category::Category;
use crate::client::structs::qbittorrent_client::QBittorrentClient;
use crate::client::structs::torrent::Torrent;
use crate::client::structs::transfer_status::TransferStatus;
use crate::client::traits::data_source::DataSource;
use crate::config::structs::qbittorrent_config::QBittorrentConfig;

pub const SESSION_COOKIE: &str = "SID";

impl QBittorrentClient {
    pub fn new(address: &str, username: &str, password: &str, request_timeout: Duration) -> Result<QBittorrentClient, ClientError>
    {
        let address = address.trim_end_matches('/').to_string();
        match Url::parse(&address) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                return Err(ClientError::InvalidAddress(format!("unsupported scheme '{}'", url.scheme())));
            }
            Err(error) => {
                return Err(ClientError::InvalidAddress(format!("{address}: {error}")));
            }
        }

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(QBittorrentClient {
            client,
            base_url: format!("{address}/api/v2"),
            address,
            username: username.to_string(),
            password: password.to_string(),
            sid: RwLock::new(None),
        })
    }

    pub fn from_config(config: &QBittorrentConfig) -> Result<QBittorrentClient, ClientError>
    {
        QBittorrentClient::new(
            &config.address,
            &config.username,
            &config.password,
            Duration::from_secs(config.request_timeout)
        )
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.sid.read().is_some()
    }

    /// Opens a new session and stores its `SID` cookie.
    ///
    /// A daemon configured to bypass authentication for this host answers
    /// `Ok.` without a cookie; the client then continues without one.
    pub async fn login(&self) -> Result<(), ClientError>
    {
        debug!("[CLIENT] Logging in to {}", self.address);
        let response = self.client
            .post(format!("{}/auth/login", self.base_url))
            .header(REFERER, self.address.as_str())
            .form(&[("username", self.username.as_str()), ("password", self.password.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(ClientError::Authentication(String::from("client address is banned after too many failed logins")));
        }
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let sid = extract_session_cookie(response.headers());
        let body = response.text().await?;

        if body.trim() == "Fails." {
            *self.sid.write() = None;
            return Err(ClientError::Authentication(String::from("invalid username or password")));
        }

        match sid {
            Some(sid) => {
                *self.sid.write() = Some(sid);
                info!("[CLIENT] Session opened on {}", self.address);
                Ok(())
            }
            None if body.trim() == "Ok." => {
                *self.sid.write() = None;
                info!("[CLIENT] Logged in to {} without a session cookie", self.address);
                Ok(())
            }
            None => Err(ClientError::Authentication(String::from("no session cookie returned")))
        }
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ClientError>
    {
        let mut renewed = false;
        loop {
            let mut request = self.client.get(format!("{}{}", self.base_url, path));
            let sid = self.sid.read().clone();
            if let Some(sid) = sid {
                request = request.header(COOKIE, format!("{SESSION_COOKIE}={sid}"));
            }

            let response = request.send().await?;
            let status = response.status();

            if status == StatusCode::FORBIDDEN && !renewed {
                warn!("[CLIENT] Session rejected on {path}, logging in again");
                renewed = true;
                self.login().await?;
                continue;
            }
            if !status.is_success() {
                return Err(ClientError::Status(status.as_u16()));
            }

            return Ok(response.bytes().await?.to_vec());
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError>
    {
        let bytes = self.get_bytes(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl DataSource for QBittorrentClient {
    async fn fetch_status(&self) -> Result<TransferStatus, ClientError>
    {
        self.get_json("/transfer/info").await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, ClientError>
    {
        let bytes = self.get_bytes("/torrents/categories").await?;
        decode_categories(&bytes)
    }

    async fn fetch_items(&self) -> Result<Vec<Torrent>, ClientError>
    {
        self.get_json("/torrents/info").await
    }
}

impl fmt::Debug for QBittorrentClient {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("QBittorrentClient")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("session", &self.has_session())
            .finish()
    }
}

/// Finds the `SID` value among the `Set-Cookie` headers of a response.
pub fn extract_session_cookie(headers: &HeaderMap) -> Option<String>
{
    headers.get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

/// Decodes the `/torrents/categories` object into category names.
///
/// Entries without a `name` fall back to their key.
pub fn decode_categories(bytes: &[u8]) -> Result<Vec<String>, ClientError>
{
    let categories: BTreeMap<String, Category> = serde_json::from_slice(bytes)?;
    Ok(categories.into_iter()
        .map(|(key, category)| if category.name.is_empty() { key } else { category.name })
        .collect())
}
