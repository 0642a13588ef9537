//! Environment-driven suite configuration
//!
//! Every knob reads from the environment once at construction time and
//! falls back to a documented default. The target origin is fixed: the
//! suite only ever drives the Swag Labs demo shop.

use crate::error::{Result, SwagError};
use std::str::FromStr;
use std::time::Duration;

/// The one demo-site origin this suite targets
pub const BASE_URL: &str = "https://www.saucedemo.com";

/// Browser engine selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chromium => write!(f, "chromium"),
            Self::Firefox => write!(f, "firefox"),
            Self::Webkit => write!(f, "webkit"),
        }
    }
}

impl FromStr for BrowserKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chromium" | "chrome" => Ok(Self::Chromium),
            "firefox" => Ok(Self::Firefox),
            "webkit" => Ok(Self::Webkit),
            _ => Err(format!("Invalid browser engine: {}", s)),
        }
    }
}

/// Suite configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Default per-action timeout
    pub default_timeout: Duration,
    /// Page-load (navigation) timeout
    pub page_load_timeout: Duration,
    /// Output directory for reports and artifacts
    pub reports_dir: String,
    /// When true (default), capture a screenshot for every test;
    /// when false, only failed tests are captured
    pub screenshot_on_failure: bool,
    /// Run the browser headless
    pub headless: bool,
    /// Browser engine to drive
    pub browser: BrowserKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_secs(10),
            page_load_timeout: Duration::from_secs(30),
            reports_dir: "reports".to_string(),
            screenshot_on_failure: true,
            headless: true,
            browser: BrowserKind::Chromium,
        }
    }
}

impl Config {
    /// Build a configuration from the environment, falling back to
    /// defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            default_timeout: Duration::from_secs(env_parse(
                "SWAG_DEFAULT_TIMEOUT",
                defaults.default_timeout.as_secs(),
            )?),
            page_load_timeout: Duration::from_secs(env_parse(
                "SWAG_PAGE_LOAD_TIMEOUT",
                defaults.page_load_timeout.as_secs(),
            )?),
            reports_dir: std::env::var("SWAG_REPORTS_DIR").unwrap_or(defaults.reports_dir),
            screenshot_on_failure: env_bool(
                "SWAG_SCREENSHOT_ON_FAILURE",
                defaults.screenshot_on_failure,
            ),
            headless: env_bool("SWAG_HEADLESS", defaults.headless),
            browser: env_parse("SWAG_BROWSER", defaults.browser)?,
        })
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| SwagError::Config {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_timeout, Duration::from_secs(10));
        assert_eq!(config.page_load_timeout, Duration::from_secs(30));
        assert_eq!(config.reports_dir, "reports");
        assert!(config.screenshot_on_failure);
        assert!(config.headless);
        assert_eq!(config.browser, BrowserKind::Chromium);
    }

    #[test]
    fn test_browser_kind_parsing() {
        assert_eq!("chromium".parse::<BrowserKind>(), Ok(BrowserKind::Chromium));
        assert_eq!("Chrome".parse::<BrowserKind>(), Ok(BrowserKind::Chromium));
        assert_eq!("firefox".parse::<BrowserKind>(), Ok(BrowserKind::Firefox));
        assert_eq!("WEBKIT".parse::<BrowserKind>(), Ok(BrowserKind::Webkit));
        assert!("edge".parse::<BrowserKind>().is_err());
    }

    #[test]
    fn test_page_load_timeout_env_override() {
        std::env::set_var("SWAG_PAGE_LOAD_TIMEOUT", "45");
        let config = Config::from_env().unwrap();
        std::env::remove_var("SWAG_PAGE_LOAD_TIMEOUT");

        assert_eq!(config.page_load_timeout, Duration::from_secs(45));
        assert_eq!(config.default_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_base_url_is_demo_origin() {
        assert_eq!(BASE_URL, "https://www.saucedemo.com");
    }
}
