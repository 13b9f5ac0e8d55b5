// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Backend objects whose methods are callable from page script.

use serde_json::Value;

use crate::{Error, Result};

/// The greeting returned by [`Api::get_message`].
pub const GREETING: &str = "Hello from Python backend!";

/// A backend object exposed to the webview under `window.pywebview.api`.
///
/// Every name returned by [`JsApi::methods`] becomes an async function on the Javascript side.
/// Calls are routed back to [`JsApi::call`] with the positional arguments packed in `params`.
pub trait JsApi {
  /// Names of the script-callable methods.
  fn methods(&self) -> &'static [&'static str];

  /// Invoke `method` with the given positional parameters.
  fn call(&self, method: &str, params: Option<Value>) -> Result<Value>;
}

/// The application's backend API.
#[derive(Debug, Default, Clone, Copy)]
pub struct Api;

impl Api {
  /// Simple API method that returns a greeting message.
  pub fn get_message(&self) -> &'static str {
    GREETING
  }
}

impl JsApi for Api {
  fn methods(&self) -> &'static [&'static str] {
    &["get_message"]
  }

  fn call(&self, method: &str, params: Option<Value>) -> Result<Value> {
    match method {
      "get_message" => {
        no_params(method, params)?;
        Ok(Value::from(self.get_message()))
      }
      _ => Err(Error::UnknownMethod(method.to_string())),
    }
  }
}

// Zero-argument methods accept a missing, null, or empty params list.
fn no_params(method: &str, params: Option<Value>) -> Result<()> {
  match params {
    None | Some(Value::Null) => Ok(()),
    Some(Value::Array(args)) if args.is_empty() => Ok(()),
    Some(Value::Array(args)) => Err(Error::InvalidParams {
      method: method.to_string(),
      reason: format!("expected 0 arguments, got {}", args.len()),
    }),
    Some(other) => Err(Error::InvalidParams {
      method: method.to_string(),
      reason: format!("expected a positional list, got {other}"),
    }),
  }
}
