// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use porkbun_webhook::{
    run_router_on_socket, solver_router, stop_on_signal, Error, PorkbunDnsConnector,
    PorkbunSolver, Solver, WebhookConfig,
};
use std::net::SocketAddr;
use std::sync::Arc;
use structopt::StructOpt;
use tokio::sync::watch;

#[derive(StructOpt)]
struct Options {
    /// API group the webhook is registered under with cert-manager.
    #[structopt(long, env = "GROUP_NAME")]
    group_name: String,

    /// Optional TOML file, e.g. with a `[porkbun]` section.
    #[structopt(short, long)]
    config: Option<String>,

    #[structopt(long, default_value = "0.0.0.0")]
    host: String,

    #[structopt(long, default_value = "8443")]
    port: u16,

    /// Print the log of every challenge, not only failed ones.
    #[structopt(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let options = Options::from_args();

    let builder = WebhookConfig::builder().debug(options.debug);
    let webhook_config = match &options.config {
        Some(path) => builder.toml_file(path),
        None => builder.toml_str(""),
    }
    .build()?;

    let addr: SocketAddr = format!("{}:{}", options.host, options.port)
        .parse()
        .map_err(|e| Error::String(format!("invalid address: {e}")))?;

    let cluster_config = kube::Config::infer()
        .await
        .map_err(|e| Error::String(format!("kube config error: {e}")))?;

    let (stop_tx, stop_rx) = watch::channel(false);
    let mut solver = PorkbunSolver::new(Arc::new(PorkbunDnsConnector::new(&webhook_config)?));
    println!("Initializing {} solver", solver.name());
    solver.initialize(cluster_config, stop_rx.clone())?;

    stop_on_signal(stop_tx)?;

    let router = solver_router(&options.group_name, Arc::new(solver), webhook_config.debug());
    run_router_on_socket(router, addr, stop_rx).await
}
