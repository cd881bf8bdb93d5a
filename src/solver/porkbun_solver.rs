// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{ChallengeRequest, ProviderConfig};
use crate::common::Error;
use crate::dns::{DnsRecord, PorkbunClient, PorkbunConnector, PorkbunCredentials, ZoneName};
use crate::log::StringLogger;
use crate::secrets::{KubeSecrets, SecretStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

/// The contract between cert-manager and a DNS-01 solver.
#[async_trait]
pub trait Solver {
    /// Name under which the solver is registered, e.g. `porkbun`.
    fn name(&self) -> &'static str;

    /// Prepare the solver to talk to the cluster. Called once, before any challenge.
    fn initialize(
        &mut self,
        cluster_config: kube::Config,
        stop: watch::Receiver<bool>,
    ) -> Result<(), Error>;

    /// Ensure the challenge TXT record exists.
    async fn present(&self, request: &ChallengeRequest, logger: &StringLogger)
        -> Result<(), Error>;

    /// Ensure the challenge TXT record no longer exists.
    async fn clean_up(&self, request: &ChallengeRequest, logger: &StringLogger)
        -> Result<(), Error>;
}

/// Everything resolved for one challenge call.
pub struct ChallengeContext {
    /// Client bound to the issuer's credentials.
    pub client: PorkbunClient,
    /// Domain managed by Porkbun, without a trailing dot.
    pub zone: ZoneName,
}

/// Solves DNS-01 challenges with Porkbun.
pub struct PorkbunSolver {
    connector: Arc<dyn PorkbunConnector + Send + Sync>,
    secrets: Option<Arc<dyn SecretStore + Send + Sync>>,
}

impl PorkbunSolver {
    /// Solver name in issuer configurations.
    pub const NAME: &'static str = "porkbun";
    const TTL_SECS: u32 = 60;

    /// Create a solver which reads secrets from the cluster once initialized.
    pub fn new(connector: Arc<dyn PorkbunConnector + Send + Sync>) -> Self {
        Self {
            connector,
            secrets: None,
        }
    }

    /// Create a solver which reads secrets from `secrets`; no initialization needed.
    pub fn with_secrets(
        connector: Arc<dyn PorkbunConnector + Send + Sync>,
        secrets: Arc<dyn SecretStore + Send + Sync>,
    ) -> Self {
        Self {
            connector,
            secrets: Some(secrets),
        }
    }

    /// Resolve credentials and zone for `request`, then bind a client to them.
    pub async fn context(&self, request: &ChallengeRequest) -> Result<ChallengeContext, Error> {
        let secrets = self
            .secrets
            .as_ref()
            .ok_or_else(|| Error::String("solver not initialized".to_owned()))?;
        let config = ProviderConfig::from_request(request)?;
        let namespace = request.resource_namespace.as_str();

        let api_key = secrets
            .resolve(namespace, &config.api_key_secret_ref)
            .await?;
        let secret_api_key = secrets
            .resolve(namespace, &config.secret_key_secret_ref)
            .await?;
        let zone_name = secrets
            .resolve(namespace, &config.zone_name_secret_ref)
            .await?;

        let client = self.connector.connect(PorkbunCredentials {
            api_key,
            secret_api_key,
        })?;
        Ok(ChallengeContext {
            client,
            zone: ZoneName(zone_name.trim_end_matches('.').to_owned()),
        })
    }
}

/// Name of the record relative to the zone, used when creating it.
///
/// `_acme-challenge.example.com.` in `example.com.` is `_acme-challenge`.
pub fn relative_name<'a>(fqdn: &'a str, zone: &str) -> &'a str {
    fqdn.strip_suffix(&format!(".{zone}")).unwrap_or(fqdn)
}

/// Name of the record as Porkbun lists it.
///
/// `_acme-challenge.example.com.` is `_acme-challenge.example.com`.
pub fn record_name(fqdn: &str) -> &str {
    fqdn.strip_suffix('.').unwrap_or(fqdn)
}

#[async_trait]
impl Solver for PorkbunSolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// No background work is started, so `stop` is not observed.
    fn initialize(
        &mut self,
        cluster_config: kube::Config,
        _stop: watch::Receiver<bool>,
    ) -> Result<(), Error> {
        self.secrets = Some(Arc::new(KubeSecrets::from_config(cluster_config)?));
        Ok(())
    }

    async fn present(
        &self,
        request: &ChallengeRequest,
        logger: &StringLogger,
    ) -> Result<(), Error> {
        logger.trace(format!(
            "Handling present request for {:?} {:?}, zone {:?}",
            request.resolved_fqdn, request.key, request.resolved_zone
        ));
        let ChallengeContext { client, zone } = self.context(request).await?;

        let entity = relative_name(&request.resolved_fqdn, &request.resolved_zone);
        let name = record_name(&request.resolved_fqdn);

        logger.trace(format!("Retrieving records for domain {:?}", zone.as_str()));
        let records = client
            .retrieve_records(&zone)
            .await
            .map_err(|e| Error::Retrieve(e.to_string()))?;

        if let Some(record) = records.iter().find(|r| r.is_txt(name, &request.key)) {
            logger.trace(format!("Record {} is already present", record.id));
            return Ok(());
        }

        let id = client
            .create_record(
                &zone,
                &DnsRecord::new_txt(entity, &request.key, Self::TTL_SECS),
            )
            .await
            .map_err(|e| Error::Create(e.to_string()))?;
        logger.trace(format!("Created record {id}"));
        Ok(())
    }

    async fn clean_up(
        &self,
        request: &ChallengeRequest,
        logger: &StringLogger,
    ) -> Result<(), Error> {
        logger.trace(format!(
            "Handling cleanup request for {:?} {:?}",
            request.resolved_fqdn, request.key
        ));
        let ChallengeContext { client, zone } = self.context(request).await?;

        let name = record_name(&request.resolved_fqdn);
        let records = client
            .retrieve_records(&zone)
            .await
            .map_err(|e| Error::Retrieve(e.to_string()))?;

        // First match only; later duplicates stay in place.
        if let Some(record) = records.iter().find(|r| r.is_txt(name, &request.key)) {
            let id = record.id.as_u64()?;
            client
                .delete_record(&zone, id)
                .await
                .map_err(|e| Error::Delete(e.to_string()))?;
            logger.trace(format!("Deleted record {id}"));
        } else {
            logger.trace("No matching record to delete".to_owned());
        }
        Ok(())
    }
}
