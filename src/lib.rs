// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! A hello world desktop window with an embedded webview calling back into Rust.
//!
//! The page rendered in the window reaches the backend through `window.pywebview.api`, a small
//! JSON-RPC bridge installed by [`rpc::bootstrap_script`] and served by [`rpc::handle_message`]
//! against any [`JsApi`] object.
//!
//! ```no_run
//! fn main() -> hello::Result<()> {
//!   hello::run(hello::AppConfig::default(), hello::Api)
//! }
//! ```

pub mod api;
mod app;
pub mod config;
mod error;
pub mod page;
pub mod rpc;

pub use api::{Api, JsApi};
pub use app::run;
pub use config::AppConfig;
pub use error::{Error, Result};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `(major, minor)` of the crate version.
pub fn version_info() -> (u32, u32) {
  let mut parts = VERSION.split('.').map(|p| p.parse().unwrap_or(0));
  (parts.next().unwrap_or(0), parts.next().unwrap_or(0))
}
