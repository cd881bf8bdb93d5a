// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// TOML configuration for the webhook process.
mod config;
/// An enum that encapsulates a variety of error types.
mod error;
#[cfg(feature = "webhook")]
mod http;
/// Unit tests.
mod tests;

pub use self::config::{WebhookConfig, WebhookConfigBuilder};
pub use self::error::Error;
#[cfg(feature = "webhook")]
pub use self::http::create_error_response;
