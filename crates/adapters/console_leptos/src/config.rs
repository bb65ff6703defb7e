//! API base address configuration.
//!
//! The deployment can point the console at a different backend by
//! setting `data-api-base` on the `<html>` element; otherwise the
//! development default is used.

use wasm_bindgen::JsCast;

/// Default backend address for local development.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Startup configuration for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address prefixed to every API path, without a trailing slash.
    pub api_base: String,
}

impl Config {
    /// Read the configuration from the current document.
    #[must_use]
    pub fn from_document() -> Self {
        let attr = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|el| el.unchecked_into::<web_sys::HtmlElement>())
            .and_then(|html| html.dataset().get("apiBase"));
        Self::from_attr(attr)
    }

    fn from_attr(attr: Option<String>) -> Self {
        let api_base = attr
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_when_attribute_missing() {
        let config = Config::from_attr(None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn should_fall_back_to_default_when_attribute_blank() {
        let config = Config::from_attr(Some("  ".into()));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn should_strip_trailing_slash_from_configured_base() {
        let config = Config::from_attr(Some("https://zt.example.com/".into()));
        assert_eq!(config.api_base, "https://zt.example.com");
    }
}
