use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "donor_dashboard_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Donor service host (e.g., "localhost" or "api.example.org")
    pub api_host: String,

    /// Donor service port
    pub api_port: u16,

    /// Path prefix in front of `/donordetails`, empty by default
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Delay before asking the browser for a location fix
    pub location_prompt_delay_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            location_prompt_delay_ms: 1000,
            debug_mode: false,
        }
    }
}

fn storage_key(name: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, name)
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |name: &str| storage.get_item(&storage_key(name)).ok().flatten();

            if let Some(api_host) = read("api_host") {
                settings.api_host = api_host;
            }
            if let Some(port) = read("api_port").and_then(|v| v.parse::<u16>().ok()) {
                settings.api_port = port;
            }
            if let Some(api_path) = read("api_path") {
                settings.api_path = api_path;
            }
            if let Some(use_https) = read("api_use_https") {
                settings.api_use_https = use_https.eq_ignore_ascii_case("true");
            }
            if let Some(level) = read("log_level").as_deref().and_then(parse_level) {
                settings.log_level = level;
            }
            if let Some(delay) = read("location_delay_ms").and_then(|v| v.parse::<u32>().ok()) {
                settings.location_prompt_delay_ms = delay;
            }
        }

        settings
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!(
            "{}://{}:{}{}",
            protocol,
            self.api_host,
            self.api_port,
            self.api_path.trim_end_matches('/')
        )
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "http://localhost:5000");
        assert_eq!(settings.api_url("/donordetails"), "http://localhost:5000/donordetails");
    }

    #[test]
    fn test_base_url_with_path_and_https() {
        let settings = AppSettings {
            api_host: "api.example.org".to_string(),
            api_port: 443,
            api_path: "/v1/".to_string(),
            api_use_https: true,
            ..AppSettings::default()
        };
        assert_eq!(settings.api_url("/donordetails"), "https://api.example.org:443/v1/donordetails");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("verbose"), None);
    }
}
