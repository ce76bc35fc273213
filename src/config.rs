#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_key: String,
    pub etims: BackendConfig,
    pub ecitizen: BackendConfig,
    pub gavaconnect: BackendConfig,
}

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_ms: u64,
}

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            api_key: std::env::var("API_KEY").unwrap_or_else(|_| "test_api_key_123".to_string()),
            etims: BackendConfig {
                base_url: std::env::var("ETIMS_BASE_URL")
                    .unwrap_or_else(|_| "https://developer.go.ke/apis/eTims".to_string()),
                api_key: std::env::var("ETIMS_API_KEY").ok(),
                username: None,
                password: None,
                timeout_ms: timeout_from_env("ETIMS_TIMEOUT_MS"),
            },
            ecitizen: BackendConfig {
                base_url: std::env::var("ECITIZEN_BASE_URL")
                    .unwrap_or_else(|_| "https://api.ecitizen.go.ke".to_string()),
                api_key: None,
                username: std::env::var("ECITIZEN_USERNAME").ok(),
                password: std::env::var("ECITIZEN_PASSWORD").ok(),
                timeout_ms: timeout_from_env("ECITIZEN_TIMEOUT_MS"),
            },
            gavaconnect: BackendConfig {
                base_url: std::env::var("GAVACONNECT_BASE_URL")
                    .unwrap_or_else(|_| "https://api.gavaconnect.go.ke".to_string()),
                api_key: std::env::var("GAVACONNECT_API_KEY").ok(),
                username: None,
                password: None,
                timeout_ms: timeout_from_env("GAVACONNECT_TIMEOUT_MS"),
            },
        }
    }
}

fn timeout_from_env(var: &str) -> u64 {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_MS)
}
