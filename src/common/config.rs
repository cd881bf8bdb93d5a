// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
use std::fs::read_to_string;

/// Configuration parameters for the webhook process.
#[derive(Debug)]
pub struct WebhookConfig {
    debug_enabled: bool,
    toml: String,
}

impl WebhookConfig {
    /// Creates a configuration builder.
    pub fn builder() -> WebhookConfigBuilder {
        WebhookConfigBuilder {
            webhook_config: None,
            debug_enabled: false,
            error: None,
        }
    }

    /// Returns `true` if debug is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::String(format!("toml: {e}")))
    }
}

/// Builds a `WebhookConfig` from a TOML file or string.
pub struct WebhookConfigBuilder {
    webhook_config: Option<WebhookConfig>,
    debug_enabled: bool,
    error: Option<Error>,
}

impl WebhookConfigBuilder {
    /// Returns the configuration, or the first error encountered.
    pub fn build(self) -> Result<WebhookConfig, Error> {
        if let Some(error) = self.error {
            Err(error)
        } else if let Some(webhook_config) = self.webhook_config {
            Ok(webhook_config)
        } else {
            Err(Error::String("config not set".to_string()))
        }
    }

    /// Enable or disable debug output.
    pub fn debug(self, debug_enabled: bool) -> Self {
        Self {
            webhook_config: self.webhook_config.map(|c| WebhookConfig {
                debug_enabled,
                toml: c.toml,
            }),
            debug_enabled,
            error: self.error,
        }
    }

    /// Read the TOML from `path`.
    pub fn toml_file(self, path: &str) -> Self {
        let debug_enabled = self.debug_enabled;
        match read_to_string(path)
            .map(|s| WebhookConfig {
                toml: s,
                debug_enabled,
            })
            .map_err(|e| Error::String(format!("{path}: cannot read ({e})")))
        {
            Ok(cfg) => Self {
                webhook_config: Some(cfg),
                debug_enabled,
                error: None,
            },
            Err(e) => Self {
                webhook_config: None,
                debug_enabled,
                error: Some(e),
            },
        }
    }

    /// Use `toml` as the configuration.
    pub fn toml_str(self, toml: &str) -> Self {
        self.toml_string(toml.to_string())
    }

    /// Use `toml` as the configuration.
    pub fn toml_string(self, toml: String) -> Self {
        Self {
            webhook_config: Some(WebhookConfig {
                debug_enabled: self.debug_enabled,
                toml,
            }),
            debug_enabled: self.debug_enabled,
            error: None,
        }
    }
}
