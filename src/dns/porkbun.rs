// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{
    DnsRecord, PorkbunApi, PorkbunClient, PorkbunConnector, PorkbunCredentials, RecordId,
    RecordType, ZoneName,
};
use crate::common::{Error, WebhookConfig};
use async_trait::async_trait;
use hyper::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// This struct implements `PorkbunApi` over HTTPS.
pub struct PorkbunDns {
    client: Client,
    endpoint: String,
    credentials: PorkbunCredentials,
}

impl PorkbunDns {
    /// Default API root.
    pub const ENDPOINT: &'static str = "https://api.porkbun.com/api/json/v3";
    const TIMEOUT_SECS: u64 = 30;

    async fn post<T: DeserializeOwned>(
        &self,
        path: String,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        let endpoint = format!("{}/{path}", self.endpoint);
        let request = self
            .client
            .post(endpoint)
            .json(body)
            .build()
            .map_err(Self::map_error)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(Self::map_error)?;
        let status = response.status();
        let text = response.text().await.map_err(Self::map_error)?;
        Self::parse_response(status, &text)
    }

    fn parse_response<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T, Error> {
        #[derive(Deserialize)]
        struct PorkbunStatus {
            status: String,
            #[serde(default)]
            message: Option<String>,
        }
        match serde_json::from_str::<PorkbunStatus>(text) {
            Ok(PorkbunStatus { status: s, .. }) if s == "SUCCESS" => serde_json::from_str(text)
                .map_err(|e| {
                    Error::Http(
                        StatusCode::FAILED_DEPENDENCY,
                        format!("cannot parse porkbun response: {e}"),
                    )
                }),
            Ok(PorkbunStatus { status: s, message }) => Err(Error::Http(
                StatusCode::FAILED_DEPENDENCY,
                format!(
                    "porkbun error ({s}): {}",
                    message.unwrap_or_else(|| status.to_string())
                ),
            )),
            Err(_) => Err(Error::Http(
                StatusCode::FAILED_DEPENDENCY,
                format!("cannot parse porkbun response ({status}): {text}"),
            )),
        }
    }

    fn map_error(e: reqwest::Error) -> Error {
        Error::Http(StatusCode::FAILED_DEPENDENCY, format!("{}", e))
    }
}

#[async_trait]
impl PorkbunApi for PorkbunDns {
    async fn retrieve_records(&self, zone: &ZoneName) -> Result<Vec<DnsRecord>, Error> {
        #[derive(Deserialize)]
        struct RetrieveResponse {
            #[serde(default)]
            records: Vec<DnsRecord>,
        }
        let RetrieveResponse { records } = self
            .post(format!("dns/retrieve/{zone}"), &self.credentials)
            .await?;
        Ok(records)
    }

    async fn create_record(&self, zone: &ZoneName, record: &DnsRecord) -> Result<RecordId, Error> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            #[serde(flatten)]
            credentials: &'a PorkbunCredentials,
            name: &'a str,
            #[serde(rename = "type")]
            record_type: RecordType,
            content: &'a str,
            ttl: &'a str,
        }
        #[derive(Deserialize)]
        struct CreateResponse {
            id: serde_json::Value,
        }
        let request = CreateRequest {
            credentials: &self.credentials,
            name: &record.name,
            record_type: record.record_type,
            content: &record.content,
            ttl: &record.ttl,
        };
        let CreateResponse { id } = self.post(format!("dns/create/{zone}"), &request).await?;
        Ok(RecordId(match id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    async fn delete_record(&self, zone: &ZoneName, id: u64) -> Result<(), Error> {
        let _: serde_json::Value = self
            .post(format!("dns/delete/{zone}/{id}"), &self.credentials)
            .await?;
        Ok(())
    }
}

/// Creates `PorkbunDns` clients which share one connection pool.
pub struct PorkbunDnsConnector {
    client: Client,
    endpoint: String,
}

impl PorkbunDnsConnector {
    /// Create a connector from the `[porkbun]` section of the configuration, if any.
    pub fn new(webhook_config: &WebhookConfig) -> Result<Self, Error> {
        #[derive(Default, Deserialize)]
        struct PorkbunConfig {
            endpoint: Option<String>,
            timeout_secs: Option<u64>,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            #[serde(default)]
            porkbun: PorkbunConfig,
        }
        let ConfigToml {
            porkbun: PorkbunConfig {
                endpoint,
                timeout_secs,
            },
        } = webhook_config.get()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static("porkbun-webhook"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(
                timeout_secs.unwrap_or(PorkbunDns::TIMEOUT_SECS),
            ))
            .default_headers(default_headers)
            .build()
            .map_err(PorkbunDns::map_error)?;

        Ok(Self {
            client,
            endpoint: endpoint
                .unwrap_or_else(|| PorkbunDns::ENDPOINT.to_owned())
                .trim_end_matches('/')
                .to_owned(),
        })
    }
}

impl PorkbunConnector for PorkbunDnsConnector {
    fn connect(&self, credentials: PorkbunCredentials) -> Result<PorkbunClient, Error> {
        Ok(Arc::new(PorkbunDns {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            credentials,
        }))
    }
}
