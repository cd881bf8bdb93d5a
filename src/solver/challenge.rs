// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Status;
use serde::{Deserialize, Serialize};

/// API group and version of the payloads exchanged with cert-manager.
pub const CHALLENGE_API_VERSION: &str = "webhook.acme.cert-manager.io/v1alpha1";
/// Kind of the payloads exchanged with cert-manager.
pub const CHALLENGE_KIND: &str = "ChallengePayload";

/// What cert-manager wants done with the challenge record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ChallengeAction {
    /// Create the TXT record.
    Present,
    /// Remove the TXT record.
    CleanUp,
}

/// A single DNS-01 challenge, as sent by cert-manager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Identifier echoed back in the response.
    #[serde(default)]
    pub uid: String,
    /// Whether to present or clean up.
    pub action: ChallengeAction,
    /// Always `dns-01`.
    #[serde(rename = "type", default)]
    pub challenge_type: String,
    /// Name being validated, e.g. `example.com`.
    #[serde(default)]
    pub dns_name: String,
    /// Expected content of the TXT record.
    pub key: String,
    /// Namespace in which referenced secrets are looked up.
    pub resource_namespace: String,
    /// Name of the TXT record, e.g. `_acme-challenge.example.com.`.
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    /// Zone cert-manager resolved for the record, e.g. `example.com.`.
    pub resolved_zone: String,
    /// Not used; credentials always come from secrets.
    #[serde(default)]
    pub allow_ambient_credentials: bool,
    /// Solver-specific configuration, decoded by `ProviderConfig`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// Outcome of a challenge request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResponse {
    /// `uid` of the request.
    pub uid: String,
    /// Whether the action succeeded.
    pub success: bool,
    /// Reason for a failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl ChallengeResponse {
    /// A successful response for request `uid`.
    pub fn success(uid: &str) -> Self {
        Self {
            uid: uid.to_owned(),
            success: true,
            status: None,
        }
    }

    /// A failed response for request `uid`, carrying `message` as the status.
    pub fn failure(uid: &str, message: String) -> Self {
        Self {
            uid: uid.to_owned(),
            success: false,
            status: Some(Status {
                status: Some("Failure".to_owned()),
                message: Some(message),
                ..Default::default()
            }),
        }
    }
}

/// The envelope cert-manager posts to the webhook, and receives back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePayload {
    /// `webhook.acme.cert-manager.io/v1alpha1`.
    #[serde(default)]
    pub api_version: String,
    /// `ChallengePayload`.
    #[serde(default)]
    pub kind: String,
    /// Set by cert-manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ChallengeRequest>,
    /// Set by the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ChallengeResponse>,
}

impl ChallengePayload {
    /// Wrap `response` in an envelope of the kind cert-manager expects.
    pub fn from_response(response: ChallengeResponse) -> Self {
        Self {
            api_version: CHALLENGE_API_VERSION.to_owned(),
            kind: CHALLENGE_KIND.to_owned(),
            request: None,
            response: Some(response),
        }
    }
}
