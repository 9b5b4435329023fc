use std::fs::File;
use std::io::{ErrorKind, Write};
use regex::Regex;
use crate::common::common::{parse_bind_address, parse_log_level};
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::exporter_config::ExporterConfig;
use crate::config::structs::qbittorrent_config::QBittorrentConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::structs::Cli;

const METRIC_NAME_PATTERN: &str = r"^[a-zA-Z_:][a-zA-Z0-9_:]*$";
const LABEL_NAME_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_]*$";
const RESERVED_LABELS: [&str; 2] = ["status", "category"];

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            qbittorrent: QBittorrentConfig::default(),
            exporter: ExporterConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Reads the configuration file at `path`.
    ///
    /// A missing file is not an error: the defaults are used so the exporter can
    /// run from environment variables alone. With `create` set, a missing or
    /// broken file is replaced by the defaults and an error is returned so the
    /// operator can edit it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(ConfigurationError::IOError(error)) if error.kind() == ErrorKind::NotFound && !create => {
                eprintln!("No config file found at '{path}', using defaults.");
                Ok(Configuration::init())
            }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either fix your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path}, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                }
            }
        }
    }

    /// Applies flag/environment overrides on top of the file configuration.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(address) = &cli.qbittorrent_addr {
            self.qbittorrent.address = address.clone();
        }
        if let Some(username) = &cli.qbittorrent_user {
            self.qbittorrent.username = username.clone();
        }
        if let Some(password) = &cli.qbittorrent_pass {
            self.qbittorrent.password = password.clone();
        }
        if let Some(port) = &cli.exporter_port {
            self.exporter.bind_address = port.clone();
        }
        if let Some(prefix) = &cli.metrics_prefix {
            self.exporter.metrics_prefix = prefix.clone();
        }
    }

    pub fn validate(config: &Configuration) -> Result<(), ConfigurationError> {
        let metric_regex = Regex::new(METRIC_NAME_PATTERN).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        let label_regex = Regex::new(LABEL_NAME_PATTERN).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;

        if parse_log_level(&config.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", config.log_level)));
        }

        let address = config.qbittorrent.address.as_str();
        if !address.starts_with("http://") && !address.starts_with("https://") {
            return Err(ConfigurationError::ValidationError(format!("qBittorrent address '{address}' must start with http:// or https://")));
        }

        if let Err(error) = parse_bind_address(&config.exporter.bind_address) {
            return Err(ConfigurationError::ValidationError(error.to_string()));
        }

        if !metric_regex.is_match(&config.exporter.metrics_prefix) {
            return Err(ConfigurationError::ValidationError(format!("metrics prefix '{}' is not a valid metric name", config.exporter.metrics_prefix)));
        }

        for name in config.exporter.const_labels.keys() {
            if !label_regex.is_match(name) || name.starts_with("__") {
                return Err(ConfigurationError::ValidationError(format!("constant label '{name}' is not a valid label name")));
            }
            if RESERVED_LABELS.contains(&name.as_str()) {
                return Err(ConfigurationError::ValidationError(format!("constant label '{name}' is reserved")));
            }
        }

        if config.exporter.threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from("exporter threads must be at least 1")));
        }

        Ok(())
    }
}
