use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Base URL of the qBittorrent Web UI.
    #[arg(long, env = "QBITTORRENT_ADDR")]
    pub qbittorrent_addr: Option<String>,
    /// qBittorrent Web UI username.
    #[arg(long, env = "QBITTORRENT_USER")]
    pub qbittorrent_user: Option<String>,
    /// qBittorrent Web UI password.
    #[arg(long, env = "QBITTORRENT_PASS", hide_env_values = true)]
    pub qbittorrent_pass: Option<String>,
    /// Listen address of the exporter (`:9177`, `9177` or `host:port`).
    #[arg(long, env = "EXPORTER_PORT")]
    pub exporter_port: Option<String>,
    /// Namespace prefix of every exported metric.
    #[arg(long, env = "METRICS_PREFIX")]
    pub metrics_prefix: Option<String>
}
