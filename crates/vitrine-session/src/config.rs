//! # Carousel Configuration
//!
//! Configuration management for the session layer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VITRINE_PRODUCTS_URL=https://...                                    │
//! │     VITRINE_PROXY_URL=https://...     ("" disables the proxy)           │
//! │     VITRINE_DB_PATH=/tmp/carousel.db                                    │
//! │     VITRINE_RESIZE_DEBOUNCE_MS=200                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/vitrine/carousel.toml (Linux)                             │
//! │     ~/Library/Application Support/com.vitrine.carousel/ (macOS)         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     the production feed URL, proxied, 200ms debounce                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # carousel.toml
//! [feed]
//! products_url = "https://gist.githubusercontent.com/.../products.json"
//! # Set to "" to fetch the feed directly (single JSON parse, no envelope)
//! proxy_url = "https://api.allorigins.win/get"
//!
//! [storage]
//! # Omit to use the platform data directory
//! db_path = "/var/lib/vitrine/carousel.db"
//!
//! [behavior]
//! resize_debounce_ms = 200
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{SessionError, SessionResult};

// =============================================================================
// Defaults
// =============================================================================

/// The fixed remote product-list URL of the production deployment.
pub const DEFAULT_PRODUCTS_URL: &str = "https://gist.githubusercontent.com/sevindi/5765c5812bbc8238a38b3cf52f233651/raw/56261d81af8561bf0a7cf692fe572f9e1e91f372/products.json";

/// The CORS pass-through proxy of the production deployment. The proxy
/// wraps the body in a `contents` envelope that is unwrapped and parsed a
/// second time.
pub const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/get";

fn default_products_url() -> String {
    DEFAULT_PRODUCTS_URL.to_string()
}

fn default_proxy_url() -> Option<String> {
    Some(DEFAULT_PROXY_URL.to_string())
}

fn default_resize_debounce_ms() -> u64 {
    200
}

// =============================================================================
// Feed Settings
// =============================================================================

/// Where and how the product list is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSettings {
    /// Remote product-list URL.
    #[serde(default = "default_products_url")]
    pub products_url: String,

    /// Pass-through proxy base URL. `Some` routes the fetch through the
    /// proxy and double-unwraps the envelope; `None` fetches directly.
    ///
    /// Proxy indirection is a deployment convenience (CORS), not a hard
    /// requirement of the data source.
    #[serde(default = "default_proxy_url")]
    pub proxy_url: Option<String>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        FeedSettings {
            products_url: default_products_url(),
            proxy_url: default_proxy_url(),
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the durable client storage lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Path to the SQLite database. `None` resolves to the platform data
    /// directory at activation time.
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

impl StorageSettings {
    /// Resolves the database path: configured value, or the platform data
    /// directory, or the current directory as a last resort.
    pub fn resolve_db_path(&self) -> PathBuf {
        if let Some(ref path) = self.db_path {
            return path.clone();
        }

        directories::ProjectDirs::from("com", "vitrine", "carousel")
            .map(|dirs| dirs.data_dir().join("carousel.db"))
            .unwrap_or_else(|| PathBuf::from("carousel.db"))
    }
}

// =============================================================================
// Behavior Settings
// =============================================================================

/// Event-handling behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorSettings {
    /// Quiet window for resize coalescing (milliseconds). Only the last
    /// resize inside the window triggers a recomputation.
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        BehaviorSettings {
            resize_debounce_ms: default_resize_debounce_ms(),
        }
    }
}

// =============================================================================
// Main Carousel Configuration
// =============================================================================

/// Complete session configuration.
///
/// ## Example Config File
/// ```toml
/// [feed]
/// products_url = "https://feeds.example/products.json"
/// proxy_url = "https://api.allorigins.win/get"
///
/// [behavior]
/// resize_debounce_ms = 200
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Feed acquisition settings.
    #[serde(default)]
    pub feed: FeedSettings,

    /// Durable storage settings.
    #[serde(default)]
    pub storage: StorageSettings,

    /// Event-handling behavior.
    #[serde(default)]
    pub behavior: BehaviorSettings,
}

impl CarouselConfig {
    /// Creates a config with production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (carousel.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading carousel config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();

        // An empty proxy_url (TOML has no null) means "fetch directly"
        if config.feed.proxy_url.as_deref() == Some("") {
            config.feed.proxy_url = None;
        }

        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load carousel config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SessionResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SessionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Carousel config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SessionResult<()> {
        validate_http_url("feed.products_url", &self.feed.products_url)?;

        if let Some(ref proxy) = self.feed.proxy_url {
            validate_http_url("feed.proxy_url", proxy)?;
        }

        if self.behavior.resize_debounce_ms == 0 {
            return Err(SessionError::InvalidConfig(
                "behavior.resize_debounce_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("VITRINE_PRODUCTS_URL") {
            debug!(url = %url, "Overriding products URL from environment");
            self.feed.products_url = url;
        }

        if let Ok(url) = std::env::var("VITRINE_PROXY_URL") {
            debug!(url = %url, "Overriding proxy URL from environment");
            // Empty value disables the proxy (direct fetch)
            self.feed.proxy_url = if url.is_empty() { None } else { Some(url) };
        }

        if let Ok(path) = std::env::var("VITRINE_DB_PATH") {
            self.storage.db_path = Some(PathBuf::from(path));
        }

        if let Ok(ms) = std::env::var("VITRINE_RESIZE_DEBOUNCE_MS") {
            if let Ok(parsed) = ms.parse::<u64>() {
                self.behavior.resize_debounce_ms = parsed;
            } else {
                warn!(value = %ms, "Ignoring non-numeric VITRINE_RESIZE_DEBOUNCE_MS");
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vitrine", "carousel")
            .map(|dirs| dirs.config_dir().join("carousel.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The resize quiet window as a `Duration`.
    pub fn resize_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.behavior.resize_debounce_ms)
    }

    /// True when the feed fetch goes through the proxy envelope.
    pub fn uses_proxy(&self) -> bool {
        self.feed.proxy_url.is_some()
    }
}

/// Checks that `value` parses as an http(s) URL.
fn validate_http_url(field: &str, value: &str) -> SessionResult<()> {
    let parsed = Url::parse(value)
        .map_err(|e| SessionError::InvalidUrl(format!("{field}: {e}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SessionError::InvalidUrl(format!(
            "{field} must be http or https, got: {}",
            parsed.scheme()
        )));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
