// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

/// Convenient type alias of Result type for hello.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by hello.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error(transparent)]
  Window(#[from] tao::error::OsError),
  #[error(transparent)]
  WebView(#[from] wry::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
  #[error("Failed to parse RPC message: {0}\n{1}")]
  RpcScript(String, String),
  #[error("Method not found: {0}")]
  UnknownMethod(String),
  #[error("Invalid params for {method}: {reason}")]
  InvalidParams { method: String, reason: String },
  #[error("The window has no default GTK container to host the webview")]
  MissingContainer,
  #[error("The event loop has already been closed")]
  EventLoopClosed,
}
