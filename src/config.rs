use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:3000";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "https://shipment-tracking-backend.vercel.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub list_config: ListConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            environment: "production".to_string(),
            enable_logging: true,
            list_config: ListConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

/// Paged shipment list tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    pub page_size: u32,
    pub search_debounce_ms: u32,
    /// Fraction of the remaining scroll height at which the next page is requested
    pub scroll_threshold: f64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 15,
            search_debounce_ms: 500,
            scroll_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub toast_duration_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 2500,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_BACKEND_URL_DEVELOPMENT).to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or(DEFAULT_BACKEND_URL_PRODUCTION).to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("production").to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            list_config: ListConfig {
                page_size: parse_or(option_env!("PAGE_SIZE"), defaults.list_config.page_size)
                    .max(1),
                search_debounce_ms: parse_or(
                    option_env!("SEARCH_DEBOUNCE_MS"),
                    defaults.list_config.search_debounce_ms,
                ),
                scroll_threshold: parse_or(
                    option_env!("SCROLL_THRESHOLD"),
                    defaults.list_config.scroll_threshold,
                )
                .clamp(0.0, 1.0),
            },
            ui_config: UIConfig {
                toast_duration_ms: parse_or(
                    option_env!("TOAST_DURATION_MS"),
                    defaults.ui_config.toast_duration_ms,
                ),
            },
        }
    }

    /// Backend base URL for the current environment, without trailing slash
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "development" => &self.backend_url_development,
            _ => &self.backend_url_production,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
