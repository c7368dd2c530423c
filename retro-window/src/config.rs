use std::sync::OnceLock;

use serde::Deserialize;
use window_types::Length;

use crate::error::ConfigError;
use crate::window::SizeFloor;

pub const DEFAULT_TITLE: &str = "Window";
const CONFIG_META_NAME: &str = "retro-window-config";

/// Page-wide settings shared by every window instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title used when a window is created without one
    pub default_title: String,
    /// Height applied when a minimized window is shown again
    pub restored_height: Length,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            restored_height: Length::Px(300.0),
            min_width: 120.0,
            min_height: 48.0,
        }
    }
}

impl WindowConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn size_floor(&self) -> SizeFloor {
        SizeFloor {
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }
}

/// Read `<meta name="retro-window-config" content='{...}'>` if the page has one.
fn read_page_config() -> WindowConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| {
            d.query_selector(&format!("meta[name='{CONFIG_META_NAME}']"))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));

    let Some(content) = content else {
        return WindowConfig::default();
    };

    match WindowConfig::from_json(&content) {
        Ok(config) => config,
        Err(e) => {
            dioxus_logger::tracing::warn!("Ignoring page window config, using defaults: {}", e);
            WindowConfig::default()
        }
    }
}

static CONFIG_CACHE: OnceLock<WindowConfig> = OnceLock::new();

/// Get the cached page config, read at first use
pub fn window_config() -> &'static WindowConfig {
    CONFIG_CACHE.get_or_init(read_page_config)
}
