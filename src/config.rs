//! Runtime configuration for the server.
//!
//! Configuration is read from the process environment exactly once, at
//! startup, and the resulting [`AppConfig`] value is passed into the
//! composition root. Nothing else in the crate reads environment variables,
//! which keeps router construction deterministic under test.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Default listening port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Default directory holding the prebuilt frontend bundle.
pub const DEFAULT_STATIC_DIR: &str = "client/build";

/// Errors raised while resolving configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but did not parse as a TCP port number.
    #[error("invalid PORT value {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
}

/// Runtime mode of the server, resolved once at startup.
///
/// Replaces the original deployment's free-form `NODE_ENV` string with a
/// closed enumeration so mode-dependent behavior (the static/SPA fallback)
/// branches on a type rather than on scattered string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Development,
    Production,
    Test,
}

impl AppMode {
    /// Whether the static asset / SPA fallback handlers are installed.
    pub fn serves_frontend(self) -> bool {
        self == AppMode::Production
    }
}

impl FromStr for AppMode {
    type Err = std::convert::Infallible;

    // Any unrecognized value behaves like development: the fallback stays off.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "production" => AppMode::Production,
            "test" => AppMode::Test,
            _ => AppMode::Development,
        })
    }
}

impl Default for AppMode {
    fn default() -> Self {
        AppMode::Development
    }
}

/// Server configuration, constructed once at process entry.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the listener binds on.
    pub port: u16,
    /// Runtime mode; controls the static/SPA fallback.
    pub mode: AppMode,
    /// Directory holding the prebuilt frontend bundle (production only).
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mode: AppMode::default(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// - `PORT`: listening port, default 5000. A present but unparseable
    ///   value is a startup error rather than a silent fallback.
    /// - `APP_ENV`: `production` enables the static/SPA fallback, `test`
    ///   selects test mode, anything else (or absent) is development.
    /// - `STATIC_DIR`: frontend bundle directory, default `client/build`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let mode = env::var("APP_ENV")
            .map(|raw| raw.parse().unwrap_or_default())
            .unwrap_or_default();

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            port,
            mode,
            static_dir,
        })
    }

    /// Convenience constructor used by tests that need a specific mode.
    pub fn with_mode(mode: AppMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
        }),
    }
}
