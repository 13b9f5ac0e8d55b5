// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Window and webview creation, and the event loop serving RPC calls.

use tao::{
  dpi::LogicalSize,
  event::{Event, StartCause, WindowEvent},
  event_loop::{ControlFlow, EventLoopBuilder},
  window::WindowBuilder,
};
use wry::{http::Request, WebView, WebViewBuilder};

use crate::{api::JsApi, config::AppConfig, rpc, Result};

enum UserEvent {
  Ipc(String),
}

/// Open the window described by `config` and serve `api` to its page until the window closes.
///
/// IPC messages are received on the webview's handler and forwarded to the event loop, so every
/// call into `api` happens on the main thread.
///
/// Platform-specific behavior:
///
/// - **Unix:** This must be called on the main thread, where GTK is initialized.
pub fn run<A: JsApi + 'static>(config: AppConfig, api: A) -> Result<()> {
  let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
  let proxy = event_loop.create_proxy();

  let window = WindowBuilder::new()
    .with_title(&config.title)
    .with_inner_size(LogicalSize::new(config.width, config.height))
    .build(&event_loop)?;

  #[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "android"
  ))]
  let builder = WebViewBuilder::new(&window);

  #[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "android"
  )))]
  let builder = {
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;
    let vbox = window
      .default_vbox()
      .ok_or(crate::Error::MissingContainer)?;
    WebViewBuilder::new_gtk(vbox)
  };

  let bootstrap = rpc::bootstrap_script(api.methods())?;
  let webview = builder
    .with_html(config.html)
    .with_initialization_script(&bootstrap)
    .with_devtools(config.devtools)
    .with_ipc_handler(move |req: Request<String>| {
      if proxy.send_event(UserEvent::Ipc(req.into_body())).is_err() {
        tracing::warn!("dropping ipc message: {}", crate::Error::EventLoopClosed);
      }
    })
    .build()?;

  tracing::debug!(
    title = %config.title,
    width = config.width,
    height = config.height,
    devtools = config.devtools,
    "webview created"
  );

  event_loop.run(move |event, _, control_flow| {
    *control_flow = ControlFlow::Wait;

    match event {
      Event::NewEvents(StartCause::Init) => tracing::info!("window opened"),
      Event::UserEvent(UserEvent::Ipc(body)) => {
        if let Err(e) = reply(&webview, &api, &body) {
          tracing::error!("failed to serve rpc message: {e}");
        }
      }
      Event::WindowEvent {
        event: WindowEvent::CloseRequested,
        ..
      } => {
        tracing::info!("window closed");
        *control_flow = ControlFlow::Exit
      }
      _ => (),
    }
  });
}

fn reply<A: JsApi>(webview: &WebView, api: &A, body: &str) -> Result<()> {
  let _span = tracing::debug_span!("hello::rpc::handle").entered();
  if let Some(js) = rpc::handle_message(api, body)? {
    webview.evaluate_script(&js)?;
  }
  Ok(())
}
