use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;

use crate::services::timezone;

/// Default zone used when a request omits `tz`. Under the POSIX sign
/// convention of the Etc area this is UTC+7.
pub const DEFAULT_SERVER_TZ: &str = "Etc/GMT-7";

const DEFAULT_HTTP_PORT: u16 = 1337;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub http_port: u16,
    pub server_tz: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let tz_str = env::var("SERVER_TZ").unwrap_or_else(|_| DEFAULT_SERVER_TZ.to_string());
        let tz_str = if tz_str.trim().is_empty() {
            DEFAULT_SERVER_TZ.to_string()
        } else {
            tz_str
        };
        let server_tz = timezone::resolve(tz_str.trim())
            .ok_or_else(|| anyhow!("Invalid SERVER_TZ: {}", tz_str))?;

        Ok(Config {
            http_port,
            server_tz,
        })
    }
}
