//! Frontend Configuration
//!
//! Read once at startup from an optional `window.__LIMS_CONFIG__` object
//! that the hosting page may define. Missing fields use defaults.

use std::sync::OnceLock;

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the global the hosting page sets
const CONFIG_GLOBAL: &str = "__LIMS_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base: String,
    /// `log` level name (error, warn, info, debug, trace, off)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `window.__LIMS_CONFIG__`, falling back to defaults
    pub fn from_window() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(v) if !v.is_undefined() && !v.is_null() => v,
            _ => return Self::default(),
        };
        // Logger isn't up yet, so report straight to the console
        serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[CONFIG] ignoring {}: {}", CONFIG_GLOBAL, e).into());
            Self::default()
        })
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Absolute URL for an API path such as `/samples`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Install the configuration. Later calls are ignored.
pub fn init(config: AppConfig) {
    let _ = CONFIG.set(config);
}

pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
