//! Transport configuration parsed from environment variables.

use crate::error::CliError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    pub timeouts: Timeouts,
    /// Fail mutating commands when the page carries no CSRF token.
    pub require_csrf: bool,
}

impl ClientConfig {
    /// Build typed transport config from environment variables.
    ///
    /// Optional:
    /// - `PRESTAMOS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PRESTAMOS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `PRESTAMOS_REQUIRE_CSRF`: `true`/`false` (default false)
    pub fn from_env() -> Result<Self, CliError> {
        let timeouts = Timeouts {
            request_secs: env_parse_u64("PRESTAMOS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PRESTAMOS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let require_csrf =
            parse_flag("PRESTAMOS_REQUIRE_CSRF", std::env::var("PRESTAMOS_REQUIRE_CSRF").ok().as_deref())?;

        Ok(Self { timeouts, require_csrf })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_flag(key: &str, raw: Option<&str>) -> Result<bool, CliError> {
    match raw.map(str::trim).unwrap_or("") {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        other => Err(CliError::Config(format!("{key} must be true or false, got '{other}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
