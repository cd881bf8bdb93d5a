// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::ChallengeRequest;
use crate::common::Error;
use crate::secrets::SecretKeyRef;
use serde::{Deserialize, Serialize};

/// The `config` of a Porkbun issuer solver.
///
/// ```yaml
/// config:
///   apiKeySecretRef: { name: porkbun, key: api-key }
///   secretKeySecretRef: { name: porkbun, key: secret-key }
///   zoneNameSecretRef: { name: porkbun, key: zone }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Porkbun API key (`pk1_...`).
    pub api_key_secret_ref: SecretKeyRef,
    /// Porkbun secret API key (`sk1_...`).
    pub secret_key_secret_ref: SecretKeyRef,
    /// Domain registered with Porkbun, e.g. `example.com`.
    pub zone_name_secret_ref: SecretKeyRef,
}

impl ProviderConfig {
    /// Decode and validate the configuration carried by `request`.
    pub fn from_request(request: &ChallengeRequest) -> Result<Self, Error> {
        let value = match &request.config {
            None | Some(serde_json::Value::Null) => {
                return Err(Error::Config("solver config is missing".to_owned()))
            }
            Some(value) => value.clone(),
        };
        let config: Self =
            serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        for (field, secret_ref) in [
            ("apiKeySecretRef", &self.api_key_secret_ref),
            ("secretKeySecretRef", &self.secret_key_secret_ref),
            ("zoneNameSecretRef", &self.zone_name_secret_ref),
        ] {
            if secret_ref.name.is_empty() {
                return Err(Error::Config(format!("{field}.name is required")));
            }
            if secret_ref.key.is_empty() {
                return Err(Error::Config(format!("{field}.key is required")));
            }
        }
        Ok(())
    }
}
