// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The markup document rendered inside the window.

/// Static page with a button that fetches the greeting through `window.pywebview.api`.
pub const INDEX_HTML: &str = include_str!("index.html");

#[cfg(test)]
mod tests {
  use super::INDEX_HTML;

  #[test]
  fn page_has_message_element() {
    assert!(INDEX_HTML.contains(r#"<p id="message">Welcome to PyWebView</p>"#));
  }

  #[test]
  fn button_writes_greeting_into_message() {
    assert!(INDEX_HTML.contains(r#"onclick="getMessage()""#));
    assert!(INDEX_HTML.contains("await window.pywebview.api.get_message()"));
    assert!(INDEX_HTML.contains("document.getElementById('message').textContent = message"));
    assert!(INDEX_HTML.contains("console.error('Error:', error)"));
  }
}
