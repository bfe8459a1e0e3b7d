use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// The admissions API every relayed inquiry ends up at.
pub const DEFAULT_UPSTREAM_URL: &str = "https://futureassist.hashfuture.school/api/admissions/demo";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
/// Sent on every outbound call, some upstream WAFs block anonymous agents.
pub const RELAY_USER_AGENT: &str = "HashFutureSchool-Website/1.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub upstream_url: String,
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR is not a socket address: {}", bind_addr))?;

        let upstream_url = non_empty_var("ADMISSIONS_UPSTREAM_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());

        Ok(Self {
            bind_addr,
            upstream_url,
            static_dir: non_empty_var("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: non_empty_var("SENTRY_DSN"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn blank_values_count_as_unset() {
        env::set_var("ADMISSIONS_RELAY_TEST_BLANK", "   ");
        assert_eq!(non_empty_var("ADMISSIONS_RELAY_TEST_BLANK"), None);
        env::set_var("ADMISSIONS_RELAY_TEST_BLANK", "/srv/site");
        assert_eq!(non_empty_var("ADMISSIONS_RELAY_TEST_BLANK").as_deref(), Some("/srv/site"));
    }
}
