// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! JSON-RPC bridge between page script and a [`JsApi`] object.
//!
//! The communication is done via [JSON-RPC](https://www.jsonrpc.org) over the webview's IPC
//! channel. On the Javascript side every API method is exposed as `window.pywebview.api.<name>()`,
//! which posts a request with `window.ipc.postMessage` and returns a promise. The host answers by
//! evaluating a script that resolves or rejects that promise.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{api::JsApi, Error, Result};

const RPC_VERSION: &str = "2.0";

/// JSON-RPC error code for a method the API does not expose.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC error code for arguments the method does not accept.
pub const INVALID_PARAMS: i64 = -32602;
/// JSON-RPC error code for any other failure while serving a request.
pub const INTERNAL_ERROR: i64 = -32603;

/// RPC request message posted by the page.
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcRequest {
  jsonrpc: String,
  pub id: Option<Value>,
  pub method: String,
  pub params: Option<Value>,
}

impl RpcRequest {
  pub fn new(id: Option<Value>, method: impl Into<String>, params: Option<Value>) -> Self {
    Self {
      jsonrpc: RPC_VERSION.to_string(),
      id,
      method: method.into(),
      params,
    }
  }
}

/// RPC response message which is sent back to the Javascript side.
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse {
  jsonrpc: String,
  pub(crate) id: Option<Value>,
  pub(crate) result: Option<Value>,
  pub(crate) error: Option<Value>,
}

impl RpcResponse {
  /// Create a new result response.
  pub fn new_result(id: Option<Value>, result: Option<Value>) -> Self {
    Self {
      jsonrpc: RPC_VERSION.to_string(),
      id,
      result,
      error: None,
    }
  }

  /// Create a new error response.
  pub fn new_error(id: Option<Value>, error: Option<Value>) -> Self {
    Self {
      jsonrpc: RPC_VERSION.to_string(),
      id,
      error,
      result: None,
    }
  }

  /// Get a script that resolves the promise with a result.
  pub fn result_script(id: &Value, result: &Value) -> Result<String> {
    Ok(format!(
      "window.pywebview._result({}, {})",
      serde_json::to_string(id)?,
      serde_json::to_string(result)?
    ))
  }

  /// Get a script that rejects the promise with an error.
  pub fn error_script(id: &Value, error: &Value) -> Result<String> {
    Ok(format!(
      "window.pywebview._error({}, {})",
      serde_json::to_string(id)?,
      serde_json::to_string(error)?
    ))
  }

  /// Convert the response into the script to be evaluated by the webview.
  ///
  /// Notifications (no `id`) have nobody waiting on them and produce no script.
  pub fn into_script(mut self) -> Result<Option<String>> {
    let Some(id) = self.id.take() else {
      return Ok(None);
    };
    let js = if let Some(error) = self.error.take() {
      Self::error_script(&id, &error)?
    } else if let Some(result) = self.result.take() {
      Self::result_script(&id, &result)?
    } else {
      // No error or result, assume a positive response with empty result (ACK)
      Self::result_script(&id, &Value::Null)?
    };
    Ok(Some(js))
  }
}

/// Serve one raw IPC message against `api`.
///
/// Returns the script that settles the caller's promise, or `None` for notifications. Errors
/// raised by the API are turned into error replies; only a message that is not a valid request
/// is reported as `Err`.
pub fn handle_message<A: JsApi + ?Sized>(api: &A, body: &str) -> Result<Option<String>> {
  let req = serde_json::from_str::<RpcRequest>(body)
    .map_err(|e| Error::RpcScript(e.to_string(), body.to_string()))?;
  dispatch(api, req).into_script()
}

/// Invoke the requested method and wrap the outcome in a response.
pub fn dispatch<A: JsApi + ?Sized>(api: &A, req: RpcRequest) -> RpcResponse {
  tracing::debug!(method = %req.method, id = ?req.id, "rpc call");
  match api.call(&req.method, req.params) {
    Ok(value) => RpcResponse::new_result(req.id, Some(value)),
    Err(e) => {
      tracing::warn!(method = %req.method, "rpc call failed: {e}");
      RpcResponse::new_error(req.id, Some(error_object(&e)))
    }
  }
}

fn error_object(e: &Error) -> Value {
  let code = match e {
    Error::UnknownMethod(_) => METHOD_NOT_FOUND,
    Error::InvalidParams { .. } => INVALID_PARAMS,
    _ => INTERNAL_ERROR,
  };
  json!({ "code": code, "message": e.to_string() })
}

/// Initialization script installing `window.pywebview.api` with one function per method.
///
/// It must run before page scripts; a `pywebviewready` event is dispatched on `window` once the
/// api object is in place.
pub fn bootstrap_script(methods: &[&str]) -> Result<String> {
  let methods = serde_json::to_string(methods)?;
  Ok(format!(
    r#"
(function () {{
  if (window.pywebview && window.pywebview._promises) {{
    return;
  }}
  const promises = {{}};
  let nextId = 0;

  function call(method, params) {{
    const id = ++nextId;
    const payload = {{ jsonrpc: "2.0", id, method, params }};
    const promise = new Promise((resolve, reject) => {{
      promises[id] = {{ resolve, reject }};
    }});
    window.ipc.postMessage(JSON.stringify(payload));
    return promise;
  }}

  const api = {{}};
  for (const method of {methods}) {{
    api[method] = function () {{
      return call(method, Array.prototype.slice.call(arguments));
    }};
  }}

  window.pywebview = {{
    api,
    _promises: promises,
    // Private internal function called on result
    _result(id, result) {{
      if (promises[id]) {{
        promises[id].resolve(result);
        delete promises[id];
      }}
    }},
    // Private internal function called on error
    _error(id, error) {{
      if (promises[id]) {{
        promises[id].reject(error);
        delete promises[id];
      }}
    }},
  }};

  const ready = () => window.dispatchEvent(new CustomEvent("pywebviewready"));
  if (document.readyState === "loading") {{
    window.addEventListener("DOMContentLoaded", ready);
  }} else {{
    ready();
  }}
}})();
"#
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{Api, JsApi, GREETING};

  #[test]
  fn get_message_resolves_with_greeting() {
    let body = r#"{"jsonrpc":"2.0","id":7,"method":"get_message","params":[]}"#;
    let js = handle_message(&Api, body).unwrap().unwrap();
    assert_eq!(js, format!("window.pywebview._result(7, \"{GREETING}\")"));
  }

  #[test]
  fn unknown_method_rejects() {
    let body = r#"{"jsonrpc":"2.0","id":1,"method":"nope","params":[]}"#;
    let js = handle_message(&Api, body).unwrap().unwrap();
    assert!(js.starts_with("window.pywebview._error(1, "));
    assert!(js.contains("-32601"));
    assert!(js.contains("Method not found: nope"));
  }

  #[test]
  fn bad_params_reject_with_invalid_params() {
    let req = RpcRequest::new(Some(json!(3)), "get_message", Some(json!([1, 2])));
    let res = dispatch(&Api, req);
    assert!(res.result.is_none());
    assert_eq!(res.error.unwrap()["code"], json!(INVALID_PARAMS));
  }

  #[test]
  fn notification_has_no_reply() {
    let body = r#"{"jsonrpc":"2.0","method":"get_message"}"#;
    assert!(handle_message(&Api, body).unwrap().is_none());
  }

  #[test]
  fn malformed_message_is_an_error() {
    let err = handle_message(&Api, "get_message()").unwrap_err();
    match err {
      Error::RpcScript(_, raw) => assert_eq!(raw, "get_message()"),
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn empty_response_acks_with_null() {
    let js = RpcResponse::new_result(Some(json!("a")), None)
      .into_script()
      .unwrap()
      .unwrap();
    assert_eq!(js, r#"window.pywebview._result("a", null)"#);
  }

  #[test]
  fn greeting_is_escaped_as_json() {
    let js = RpcResponse::result_script(&json!(1), &json!("say \"hi\"</script>")).unwrap();
    assert_eq!(js, r#"window.pywebview._result(1, "say \"hi\"</script>")"#);
  }

  #[test]
  fn bootstrap_exposes_methods() {
    let js = bootstrap_script(Api.methods()).unwrap();
    assert!(js.contains(r#"for (const method of ["get_message"])"#));
    assert!(js.contains("window.ipc.postMessage"));
    assert!(js.contains("pywebviewready"));
  }
}
