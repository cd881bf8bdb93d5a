// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// The domain (zone) managed by Porkbun, e.g. `example.com`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ZoneName(pub String);

impl ZoneName {
    /// The domain as it appears in API paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ZoneName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record identifier as reported by Porkbun. Porkbun reports it as a string
/// even though it is numeric.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl RecordId {
    /// The identifier as Porkbun reported it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Records which have not been created yet have no identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the identifier as the base-10 integer the delete endpoint expects.
    pub fn as_u64(&self) -> Result<u64, Error> {
        self.0
            .parse::<u64>()
            .map_err(|e| Error::MalformedId(format!("{:?}: {e}", self.0)))
    }
}

/// Record types known to Porkbun.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address.
    A,
    /// IPv6 address.
    Aaaa,
    /// Apex alias.
    Alias,
    /// Certificate authority authorization.
    Caa,
    /// Canonical name.
    Cname,
    /// HTTPS service binding.
    Https,
    /// Mail exchange.
    Mx,
    /// Name server.
    Ns,
    /// Service locator.
    Srv,
    /// Service binding.
    Svcb,
    /// TLS certificate association.
    Tlsa,
    /// Text, e.g. an ACME challenge.
    Txt,
    /// Any type this crate does not care about.
    #[serde(other)]
    Other,
}

/// A DNS record as listed by (or submitted to) Porkbun.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Empty for records that have not been created yet.
    #[serde(default, skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    /// Fully-qualified in listings, zone-relative when creating.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record data, e.g. the challenge key of a `TXT` record.
    pub content: String,
    /// Time to live in seconds, as a string.
    pub ttl: String,
    /// Priority, for types which have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DnsRecord {
    /// A `TXT` record which has not been created yet.
    pub fn new_txt(name: &str, content: &str, ttl_sec: u32) -> Self {
        Self {
            id: RecordId::default(),
            name: name.to_owned(),
            record_type: RecordType::Txt,
            content: content.to_owned(),
            ttl: ttl_sec.to_string(),
            prio: None,
            notes: None,
        }
    }

    /// Whether this is a `TXT` record with exactly this name and content.
    pub fn is_txt(&self, name: &str, content: &str) -> bool {
        self.record_type == RecordType::Txt && self.name == name && self.content == content
    }
}

/// API key pair authenticating every Porkbun request.
#[derive(Clone, Eq, PartialEq, Serialize)]
pub struct PorkbunCredentials {
    /// Public API key.
    #[serde(rename = "apikey")]
    pub api_key: String,
    /// Secret API key.
    #[serde(rename = "secretapikey")]
    pub secret_api_key: String,
}

impl Debug for PorkbunCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorkbunCredentials")
            .field("api_key", &"<redacted>")
            .field("secret_api_key", &"<redacted>")
            .finish()
    }
}

/// The subset of the Porkbun DNS API used to solve challenges.
#[async_trait]
pub trait PorkbunApi {
    /// Read every record of the specified domain (zone).
    async fn retrieve_records(&self, zone: &ZoneName) -> Result<Vec<DnsRecord>, Error>;

    /// Create a record in the specified domain (zone), returning its identifier.
    async fn create_record(&self, zone: &ZoneName, record: &DnsRecord) -> Result<RecordId, Error>;

    /// Delete a record from the specified domain (zone).
    async fn delete_record(&self, zone: &ZoneName, id: u64) -> Result<(), Error>;
}

/// Shared handle to a Porkbun API client.
pub type PorkbunClient = Arc<dyn PorkbunApi + Send + Sync>;

/// Binds resolved credentials to a ready-to-use client.
pub trait PorkbunConnector {
    /// Create a client which authenticates with `credentials`.
    fn connect(&self, credentials: PorkbunCredentials) -> Result<PorkbunClient, Error>;
}
