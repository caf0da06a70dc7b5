use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub data_dir: PathBuf,
    pub pin: Option<String>,
    pub http_timeout_secs: u64,
    pub sync_interval_secs: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let base_url = env_required("ROLLCALL_BASE_URL")?;

        let data_dir = PathBuf::from(env_or("ROLLCALL_DATA_DIR", "rollcall-data"));

        let pin = std::env::var("ROLLCALL_PIN").ok().filter(|p| !p.is_empty());

        let http_timeout_secs: u64 = env_or("ROLLCALL_HTTP_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid ROLLCALL_HTTP_TIMEOUT_SECS: {e}"))?;

        let sync_interval_secs: u64 = env_or("ROLLCALL_SYNC_INTERVAL_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid ROLLCALL_SYNC_INTERVAL_SECS: {e}"))?;

        let log_level = env_or("ROLLCALL_LOG_LEVEL", "info");

        Ok(Config {
            base_url,
            data_dir,
            pin,
            http_timeout_secs,
            sync_interval_secs,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
