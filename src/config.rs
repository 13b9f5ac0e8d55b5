// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::page::INDEX_HTML;

/// Environment variable toggling the webview devtools.
pub const DEVTOOLS_ENV: &str = "HELLO_DEVTOOLS";

/// Window and webview settings used by [`run`](crate::run).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  /// Title of the native window.
  pub title: String,
  /// Inner width in logical pixels.
  pub width: f64,
  /// Inner height in logical pixels.
  pub height: f64,
  /// Markup loaded into the webview.
  pub html: String,
  /// Whether the webview devtools can be opened. On by default in debug builds.
  pub devtools: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      title: "PyWebView Hello World".to_string(),
      width: 800.0,
      height: 600.0,
      html: INDEX_HTML.to_string(),
      devtools: cfg!(debug_assertions),
    }
  }
}

impl AppConfig {
  /// Defaults with overrides read from the process environment.
  pub fn from_env() -> Self {
    let mut config = Self::default();
    if let Ok(value) = std::env::var(DEVTOOLS_ENV) {
      match parse_flag(&value) {
        Some(devtools) => config.devtools = devtools,
        None => tracing::warn!("ignoring {DEVTOOLS_ENV}={value:?}, expected a boolean"),
      }
    }
    config
  }
}

fn parse_flag(value: &str) -> Option<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_window() {
    let config = AppConfig::default();
    assert_eq!(config.title, "PyWebView Hello World");
    assert_eq!((config.width, config.height), (800.0, 600.0));
    assert_eq!(config.html, INDEX_HTML);
    assert_eq!(config.devtools, cfg!(debug_assertions));
  }

  #[test]
  fn flags() {
    assert_eq!(parse_flag("1"), Some(true));
    assert_eq!(parse_flag(" TRUE "), Some(true));
    assert_eq!(parse_flag("on"), Some(true));
    assert_eq!(parse_flag("No"), Some(false));
    assert_eq!(parse_flag("0"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
    assert_eq!(parse_flag(""), None);
  }
}
