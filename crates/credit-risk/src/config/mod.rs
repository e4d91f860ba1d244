use std::env;
use std::fmt;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Distinguishes runtime behavior for different deployment stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the console and prediction client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_api_base(None)
    }

    /// Like [`AppConfig::load`], but an explicit base URL replaces `CREDIT_RISK_API_BASE`,
    /// which is then neither read nor validated.
    pub fn load_with_api_base(api_base: Option<String>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("CREDIT_RISK_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url = match api_base {
            Some(base) => base,
            None => env::var("CREDIT_RISK_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        };
        let api = ApiConfig::new(base_url)?;

        let log_level = env::var("CREDIT_RISK_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            api,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the prediction backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validates the base URL and strips trailing slashes so endpoint paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| ConfigError::InvalidApiBase { value: raw.clone() })?;
        if host.is_empty() || host.starts_with('/') {
            return Err(ConfigError::InvalidApiBase { value: raw });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub fn history_url(&self) -> String {
        format!("{}/history", self.base_url)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidApiBase { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidApiBase { value } => write!(
                f,
                "CREDIT_RISK_API_BASE must be an http(s) URL with a host, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
