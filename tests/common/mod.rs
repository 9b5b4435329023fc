#![allow(dead_code)]
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::web::Data;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use qbittorrent_exporter::client::enums::client_error::ClientError;
use qbittorrent_exporter::client::enums::connection_status::ConnectionStatus;
use qbittorrent_exporter::client::structs::torrent::Torrent;
use qbittorrent_exporter::client::structs::transfer_status::TransferStatus;
use qbittorrent_exporter::client::traits::data_source::DataSource;
use qbittorrent_exporter::collector::structs::collector::Collector;
use qbittorrent_exporter::config::structs::exporter_config::ExporterConfig;
use qbittorrent_exporter::http::structs::http_service_data::HttpServiceData;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "adminadmin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingRead {
    Status,
    Categories,
    Items,
}

/// In-memory daemon snapshot with optional failures and an artificial delay.
/// Tracks how many reads run at the same time.
#[derive(Debug, Default)]
pub struct FakeDataSource {
    pub status: TransferStatus,
    pub categories: Vec<String>,
    pub torrents: Vec<Torrent>,
    pub failing: Option<FailingRead>,
    pub delay: Duration,
    pub reads: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl FakeDataSource {
    pub fn new(categories: &[&str], torrents: Vec<Torrent>) -> FakeDataSource {
        FakeDataSource {
            status: TransferStatus {
                connection: ConnectionStatus::Connected,
                dht_nodes: 120,
                downloaded: 4096,
                uploaded: 8192,
                ..Default::default()
            },
            categories: categories.iter().map(|category| category.to_string()).collect(),
            torrents,
            ..Default::default()
        }
    }

    pub fn failing(mut self, read: FailingRead) -> FakeDataSource {
        self.failing = Some(read);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> FakeDataSource {
        self.delay = delay;
        self
    }

    async fn read<T>(&self, read: FailingRead, value: T) -> Result<T, ClientError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing == Some(read) {
            return Err(ClientError::Status(503));
        }
        Ok(value)
    }
}

#[async_trait]
impl DataSource for FakeDataSource {
    async fn fetch_status(&self) -> Result<TransferStatus, ClientError> {
        self.read(FailingRead::Status, self.status.clone()).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, ClientError> {
        self.read(FailingRead::Categories, self.categories.clone()).await
    }

    async fn fetch_items(&self) -> Result<Vec<Torrent>, ClientError> {
        self.read(FailingRead::Items, self.torrents.clone()).await
    }
}

pub fn torrent(hash: &str, category: &str, state: &str) -> Torrent {
    Torrent {
        hash: hash.to_string(),
        name: format!("{hash}.iso"),
        category: category.to_string(),
        state: state.to_string(),
        ..Default::default()
    }
}

pub fn create_test_collector(source: Arc<FakeDataSource>) -> Arc<Collector> {
    Arc::new(Collector::new(source, "qbittorrent", BTreeMap::new()))
}

pub fn create_test_service_data(source: Arc<FakeDataSource>) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        collector: create_test_collector(source),
        exporter_config: Arc::new(ExporterConfig {
            bind_address: "127.0.0.1:0".to_string(),
            threads: 1,
            ..Default::default()
        }),
    })
}

/// Minimal stand-in for the qBittorrent Web API.
#[derive(Debug, Default)]
pub struct FakeDaemon {
    pub sid: Mutex<String>,
    pub sessions_opened: AtomicUsize,
    pub logins: AtomicUsize,
    pub reads: AtomicUsize,
    pub expire_session: AtomicBool,
    pub bypass_auth: bool,
}

impl FakeDaemon {
    fn authorized(&self, request: &HttpRequest) -> bool {
        if self.bypass_auth {
            return true;
        }
        match request.cookie("SID") {
            Some(cookie) => cookie.value() == self.sid.lock().as_str(),
            None => false,
        }
    }
}

async fn fake_login(form: web::Form<HashMap<String, String>>, daemon: Data<Arc<FakeDaemon>>) -> HttpResponse
{
    daemon.logins.fetch_add(1, Ordering::SeqCst);

    if daemon.bypass_auth {
        return HttpResponse::Ok().body("Ok.");
    }

    let username = form.get("username").map(String::as_str).unwrap_or_default();
    let password = form.get("password").map(String::as_str).unwrap_or_default();
    if username != TEST_USERNAME || password != TEST_PASSWORD {
        return HttpResponse::Ok().body("Fails.");
    }

    let opened = daemon.sessions_opened.fetch_add(1, Ordering::SeqCst) + 1;
    let sid = format!("session{opened}");
    *daemon.sid.lock() = sid.clone();
    HttpResponse::Ok()
        .insert_header(("Set-Cookie", format!("SID={sid}; HttpOnly; SameSite=Strict; path=/")))
        .body("Ok.")
}

fn fake_guard(request: &HttpRequest, daemon: &FakeDaemon) -> Option<HttpResponse>
{
    daemon.reads.fetch_add(1, Ordering::SeqCst);
    if daemon.expire_session.swap(false, Ordering::SeqCst) {
        *daemon.sid.lock() = String::from("expired");
        return Some(HttpResponse::Forbidden().body("Forbidden"));
    }
    if !daemon.authorized(request) {
        return Some(HttpResponse::Forbidden().body("Forbidden"));
    }
    None
}

async fn fake_transfer_info(request: HttpRequest, daemon: Data<Arc<FakeDaemon>>) -> HttpResponse
{
    if let Some(response) = fake_guard(&request, &daemon) {
        return response;
    }
    HttpResponse::Ok().json(json!({
        "connection_status": "firewalled",
        "dht_nodes": 42,
        "dl_info_data": 1000,
        "dl_info_speed": 10,
        "dl_rate_limit": 0,
        "up_info_data": 2000,
        "up_info_speed": 20,
        "up_rate_limit": 4096
    }))
}

async fn fake_categories(request: HttpRequest, daemon: Data<Arc<FakeDaemon>>) -> HttpResponse
{
    if let Some(response) = fake_guard(&request, &daemon) {
        return response;
    }
    HttpResponse::Ok().json(json!({
        "movies": {"name": "movies", "savePath": "/data/movies"},
        "linux": {"name": "linux", "savePath": "/data/linux"}
    }))
}

async fn fake_torrents(request: HttpRequest, daemon: Data<Arc<FakeDaemon>>) -> HttpResponse
{
    if let Some(response) = fake_guard(&request, &daemon) {
        return response;
    }
    HttpResponse::Ok().json(json!([
        {"hash": "aa", "name": "debian.iso", "category": "linux", "state": "stalledUP"},
        {"hash": "bb", "name": "film.mkv", "category": "movies", "state": "downloading"},
        {"hash": "cc", "name": "misc.zip", "category": "", "state": "pausedDL"}
    ]))
}

/// Starts a fake daemon on an ephemeral local port.
pub fn start_fake_daemon(daemon: Arc<FakeDaemon>) -> (SocketAddr, ServerHandle)
{
    let data = daemon.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(data.clone()))
            .route("/api/v2/auth/login", web::post().to(fake_login))
            .route("/api/v2/transfer/info", web::get().to(fake_transfer_info))
            .route("/api/v2/torrents/categories", web::get().to(fake_categories))
            .route("/api/v2/torrents/info", web::get().to(fake_torrents))
    })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake daemon");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (addr, handle)
}
