use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use qbittorrent_exporter::client::structs::qbittorrent_client::QBittorrentClient;
use qbittorrent_exporter::collector::structs::collector::Collector;
use qbittorrent_exporter::common::common::{parse_bind_address, setup_logging};
use qbittorrent_exporter::config::structs::configuration::Configuration;
use qbittorrent_exporter::http::http::http_service;
use qbittorrent_exporter::http::structs::http_service_data::HttpServiceData;
use qbittorrent_exporter::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_overrides(&args);

    if let Err(error) = Configuration::validate(&config) {
        eprintln!("[ERROR] {error}");
        exit(101);
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(101);
    }

    let config = Arc::new(config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let client = match QBittorrentClient::from_config(&config.qbittorrent) {
                Ok(client) => client,
                Err(error) => {
                    error!("[BOOT] Unable to create the qBittorrent client: {error}");
                    exit(1);
                }
            };

            info!("[BOOT] Connecting to qBittorrent at {}...", client.address());
            match client.login().await {
                Ok(_) => info!("[BOOT] Logged in to qBittorrent"),
                Err(error) => {
                    sentry::capture_error(&error);
                    warn!("[BOOT] Initial login failed, scrapes will report the daemon as down until it succeeds: {error}");
                }
            }

            let collector = Arc::new(Collector::new(
                Arc::new(client),
                &config.exporter.metrics_prefix,
                config.exporter.const_labels.clone()
            ));

            let address = match parse_bind_address(&config.exporter.bind_address) {
                Ok(address) => address,
                Err(error) => {
                    error!("[BOOT] Invalid bind address '{}': {error}", config.exporter.bind_address);
                    exit(1);
                }
            };

            let data = Arc::new(HttpServiceData {
                collector,
                exporter_config: Arc::new(config.exporter.clone()),
            });

            let (handle, future) = match http_service(address, data, config.sentry_config.enabled).await {
                Ok(server) => server,
                Err(error) => {
                    error!("[HTTP] Unable to bind {address}: {error}");
                    exit(1);
                }
            };

            let server = tokio::spawn(async move {
                if let Err(error) = future.await {
                    sentry::capture_error(&error);
                    error!("[HTTP] Server stopped with an error: {error}");
                }
            });

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to install the shutdown handler: {error}");
                    exit(1);
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                }
                _ = tokio_shutdown.handle() => {
                    info!("Shutdown signal received, shutting down...");
                }
            }

            handle.stop(true).await;
            if tokio::time::timeout(Duration::from_secs(5), server).await.is_err() {
                warn!("[HTTP] Server did not stop in time");
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
