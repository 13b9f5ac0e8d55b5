// Copyright 2020-2023 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use std::process::exit;

use hello::{Api, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hello=info"));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .compact(),
    )
    .init();
}

fn main() {
  init_logger();
  tracing::info!("starting hello {}", hello::VERSION);

  let config = AppConfig::from_env();
  tracing::debug!(devtools = config.devtools, "loaded config");

  if let Err(e) = hello::run(config, Api) {
    tracing::error!("failed to open window: {e}");
    exit(1);
  }
}
