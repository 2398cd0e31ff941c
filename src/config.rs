use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
    pub db: DbSettings,
}

/// Connection settings for the submissions datastore.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| "Missing required environment variable: DATABASE_URL".to_string())?;

        let host: IpAddr = env_or("FORMCOLLECTOR_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMCOLLECTOR_HOST: {e}"))?;

        let port: u16 = env_or("FORMCOLLECTOR_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FORMCOLLECTOR_PORT: {e}"))?;

        let public_dir = PathBuf::from(env_or("FORMCOLLECTOR_PUBLIC_DIR", "public"));

        let max_body_size: usize = env_or("FORMCOLLECTOR_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FORMCOLLECTOR_MAX_BODY_SIZE: {e}"))?;

        let max_connections: u32 = env_or("FORMCOLLECTOR_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid FORMCOLLECTOR_DB_MAX_CONNECTIONS: {e}"))?;

        let connect_timeout_secs: u64 = env_or("FORMCOLLECTOR_DB_CONNECT_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("Invalid FORMCOLLECTOR_DB_CONNECT_TIMEOUT_SECS: {e}"))?;

        let log_level = env_or("FORMCOLLECTOR_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            public_dir,
            max_body_size,
            log_level,
            db: DbSettings {
                url,
                max_connections,
                connect_timeout: Duration::from_secs(connect_timeout_secs),
            },
        })
    }
}
