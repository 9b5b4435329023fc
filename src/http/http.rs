use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::middleware::{Compress, Condition};
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::metrics::metrics::{metrics_render_samples, METRICS_CONTENT_TYPE};

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>qBittorrent Exporter</title></head>
<body>
<h1>qBittorrent Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
</body>
</html>
"#;

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/metrics").route(web::get().to(http_service_metrics)));
        cfg.service(web::resource("/").route(web::get().to(http_service_index)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds the metrics listener and returns its handle with the server future.
///
/// Signals are left to the caller, which stops the server through the handle.
pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
    sentry_enabled: bool
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let config = data.exporter_config.clone();

    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(sentry_enabled, sentry_actix::Sentry::new()))
            .wrap(Compress::default())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_metrics(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let samples = data.collector.collect().await;
    debug!("[HTTP] Serving {} samples to {:?}", samples.len(), request.peer_addr());

    HttpResponse::Ok()
        .content_type(METRICS_CONTENT_TYPE)
        .body(metrics_render_samples(&samples))
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_index() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::html()).body(INDEX_HTML)
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] No route for {} {}", request.method(), request.path());
    HttpResponse::NotFound().json(json!({"status": "not found"}))
}
