//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ChatDriver, DatabaseDriver, DriverError};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database driver.
    pub driver: DatabaseDriver,
    /// JSON file options.
    pub json: DatabaseJsonConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseJsonConfig {
    /// Path to the credential store file.
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct GitLabConfig {
    /// GitLab API endpoint, e.g. `http://gitlab.example.com/api/v3`.
    pub endpoint: String,
    /// GitLab API private token.
    pub private_token: String,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Chat driver.
    pub driver: ChatDriver,
    /// Channel that notices stream to, e.g. `#gitlab`.
    pub notification_channel: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot nickname, used for the channel membership check.
    pub name: String,
    /// Database options.
    pub database: DatabaseConfig,
    /// GitLab options.
    pub gitlab: GitLabConfig,
    /// Chat options.
    pub chat: ChatConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("BOT_NAME", "GitLab"),
            database: DatabaseConfig {
                driver: DatabaseDriver::from_str(&env_to_str("BOT_DATABASE_DRIVER", "json"))
                    .unwrap(),
                json: DatabaseJsonConfig {
                    path: env_to_str("BOT_DATABASE_JSON_PATH", "glbot.json"),
                },
            },
            gitlab: GitLabConfig {
                endpoint: env_to_str("BOT_GITLAB_ENDPOINT", ""),
                private_token: env_to_str("BOT_GITLAB_PRIVATE_TOKEN", ""),
            },
            chat: ChatConfig {
                driver: ChatDriver::from_str(&env_to_str("BOT_CHAT_DRIVER", "null")).unwrap(),
                notification_channel: env_to_str("BOT_CHAT_NOTIFICATION_CHANNEL", "#gitlab"),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
