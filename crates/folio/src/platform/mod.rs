//! Platform-specific utilities.
//!
//! The UI runs on two event loops that need different timer and location
//! sources:
//!
//! - **Web**: `gloo-timers` on the browser's `setTimeout`, config served from
//!   the page's own origin
//! - **Desktop**: tokio timers, config URL from the environment

use std::time::Duration;

/// Path of the configuration payload on the serving origin.
pub const CONFIG_PATH: &str = "/config.json";

/// Environment variable overriding the config URL on desktop.
pub const CONFIG_URL_ENV: &str = "FOLIO_CONFIG_URL";

/// Config URL used on desktop when the environment does not name one.
pub const DEFAULT_DESKTOP_CONFIG_URL: &str = "http://127.0.0.1:8080/config.json";

/// Sleeps without blocking the UI event loop.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Sleeps without blocking the UI event loop.
///
/// Desktop version: tokio timer on the renderer's runtime.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Absolute URL of the configuration payload.
///
/// reqwest needs absolute URLs in the browser too, so the page origin is
/// prepended to [`CONFIG_PATH`].
#[cfg(target_arch = "wasm32")]
pub fn config_url() -> String {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    config_url_for_origin(origin.as_deref())
}

/// Absolute URL of the configuration payload.
///
/// Desktop version: `$FOLIO_CONFIG_URL`, or a local development server.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_url() -> String {
    config_url_from_env(std::env::var(CONFIG_URL_ENV).ok())
}

/// `{origin}/config.json`, or the bare path when no origin is known.
pub fn config_url_for_origin(origin: Option<&str>) -> String {
    match origin {
        Some(origin) if !origin.is_empty() && origin != "null" => {
            format!("{}{}", origin.trim_end_matches('/'), CONFIG_PATH)
        }
        _ => CONFIG_PATH.to_string(),
    }
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn config_url_from_env(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DESKTOP_CONFIG_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_url_for_origin() {
        assert_eq!(
            config_url_for_origin(Some("https://folio.example.org")),
            "https://folio.example.org/config.json"
        );
        assert_eq!(
            config_url_for_origin(Some("http://localhost:8080/")),
            "http://localhost:8080/config.json"
        );
        // file:// pages report an opaque "null" origin
        assert_eq!(config_url_for_origin(Some("null")), CONFIG_PATH);
        assert_eq!(config_url_for_origin(None), CONFIG_PATH);
    }

    #[test]
    fn test_config_url_from_env() {
        assert_eq!(config_url_from_env(None), DEFAULT_DESKTOP_CONFIG_URL);
        assert_eq!(
            config_url_from_env(Some("  ".into())),
            DEFAULT_DESKTOP_CONFIG_URL
        );
        assert_eq!(
            config_url_from_env(Some("https://search.example.org/config.json".into())),
            "https://search.example.org/config.json"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_waits_for_duration() {
        let start = tokio::time::Instant::now();
        sleep(Duration::from_millis(300)).await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
