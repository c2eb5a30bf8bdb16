//! Environment configuration for the server.
//!
//! `DATABASE_URL`, `VALKEY_URL` and `LOGIN_URL` are required. `BIND_ADDRESS` falls back to
//! [`DEFAULT_BIND_ADDRESS`].

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the server listens on when `BIND_ADDRESS` is not set.
pub const DEFAULT_BIND_ADDRESS: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    8080,
);

/// Server configuration read from the environment.
pub struct Config {
    /// Postgres connection string for the user store.
    pub database_url: String,
    /// Valkey/Redis URL for the session store.
    pub valkey_url: String,
    /// Identity provider sign-in URL offered on the login page.
    pub login_url: String,
    /// Address the HTTP listener binds to.
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let bind_address = match var("BIND_ADDRESS") {
            Some(value) => value
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::invalid("BIND_ADDRESS", &value, e))?,
            None => DEFAULT_BIND_ADDRESS,
        };

        let login_url = required("LOGIN_URL")?;
        // Rendered as a link on the login page, so it must leave the portal over HTTP(S)
        if !(login_url.starts_with("https://") || login_url.starts_with("http://")) {
            return Err(ConfigError::invalid(
                "LOGIN_URL",
                &login_url,
                "expected an http:// or https:// sign-in URL",
            ));
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            login_url,
            bind_address,
        })
    }
}
