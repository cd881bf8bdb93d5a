// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::Error;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points at one key of a secret in the namespace of the request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SecretKeyRef {
    /// Name of the secret.
    #[serde(default)]
    pub name: String,
    /// Key within the secret's data.
    #[serde(default)]
    pub key: String,
}

/// Secret data, keyed like `Secret.data`.
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// Read access to namespaced secrets.
#[async_trait]
pub trait SecretStore {
    /// Returns `None` if the secret does not exist.
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Option<SecretData>, Error>;

    /// Resolve a reference to the (trimmed) string value of its key.
    async fn resolve(&self, namespace: &str, secret_ref: &SecretKeyRef) -> Result<String, Error> {
        let SecretKeyRef { name, key } = secret_ref;
        let data = self.get_secret(namespace, name).await?.ok_or_else(|| {
            Error::Secret(format!("secret {namespace:?} {name:?} not found"))
        })?;
        let bytes = data.get(key).ok_or_else(|| {
            Error::Secret(format!(
                "secret {namespace:?} {name:?} does not contain key {key:?}"
            ))
        })?;
        let value = std::str::from_utf8(bytes).map_err(|e| {
            Error::Secret(format!(
                "secret {namespace:?} {name:?} key {key:?} is not UTF-8: {e}"
            ))
        })?;
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::Secret(format!(
                "secret {namespace:?} {name:?} key {key:?} is empty"
            )));
        }
        Ok(value.to_owned())
    }
}

/// This struct implements `SecretStore` against the Kubernetes API.
#[derive(Clone)]
pub struct KubeSecrets {
    client: Client,
}

impl KubeSecrets {
    /// Create a `SecretStore` from an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a `SecretStore` from cluster connection settings.
    pub fn from_config(cluster_config: kube::Config) -> Result<Self, Error> {
        Client::try_from(cluster_config)
            .map(Self::new)
            .map_err(|e| Error::String(format!("kube client creation error: {e}")))
    }
}

#[async_trait]
impl SecretStore for KubeSecrets {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Option<SecretData>, Error> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = secrets.get_opt(name).await.map_err(|e| {
            Error::Secret(format!("get error for secret {namespace:?} {name:?}: {e}"))
        })?;
        Ok(secret.map(|secret| {
            secret
                .data
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, value.0))
                .collect()
        }))
    }
}
