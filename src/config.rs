//! Client configuration: where the calculation endpoint lives.
//!
//! The page may override the backend base URL with
//! `<meta name="calculator-api-base" content="http://127.0.0.1:5000">`;
//! without it requests go to the same origin (`/calculate`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::api::CALCULATE_PATH;

pub const DEFAULT_API_BASE: &str = "";
pub const API_BASE_META_NAME: &str = "calculator-api-base";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme/host prefix without a trailing slash; empty for same-origin.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base(base: &str) -> Self {
        Self { api_base: normalize_api_base(base) }
    }

    /// Full URL of the calculation endpoint.
    #[must_use]
    pub fn calculate_url(&self) -> String {
        format!("{}{CALCULATE_PATH}", self.api_base)
    }

    /// Read the base URL from the document's meta tag, falling back to the
    /// default when absent or outside a browser.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            if let Some(base) = content {
                log::info!("calculator api base from document: {base}");
                return Self::with_api_base(&base);
            }
        }
        Self::default()
    }
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
