// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use axum::Router;
use std::net::SocketAddr;
use tokio::sync::watch;

/// Run an `axum::Router` on incoming requests from a socket until `stop` turns `true`.
pub async fn run_router_on_socket(
    router: Router,
    addr: SocketAddr,
    mut stop: watch::Receiver<bool>,
) -> Result<(), Error> {
    println!("Begin running router on socket {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::String(format!("{addr}: cannot bind ({e})")))?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            loop {
                if *stop.borrow_and_update() {
                    break;
                }
                if stop.changed().await.is_err() {
                    break;
                }
            }
        })
        .await
        .map_err(|e| Error::String(format!("{e:?}")))?;
    println!("Done running router on socket");
    Ok(())
}

/// Send `true` on `stop` once the process receives ctrl-c or, on Unix, `SIGTERM`.
pub fn stop_on_signal(stop: watch::Sender<bool>) -> Result<(), Error> {
    #[cfg(unix)]
    let mut terminate = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        .map_err(|e| Error::String(format!("cannot listen for SIGTERM ({e})")))?;

    tokio::spawn(async move {
        #[cfg(unix)]
        let signal = tokio::select! {
            result = tokio::signal::ctrl_c() => result.map(|_| "ctrl-c"),
            _ = terminate.recv() => Ok("SIGTERM"),
        };
        #[cfg(not(unix))]
        let signal = tokio::signal::ctrl_c().await.map(|_| "ctrl-c");

        match signal {
            Ok(signal) => println!("Shutting down on {signal}"),
            Err(e) => println!("Shutting down, cannot listen for ctrl-c ({e})"),
        }
        let _ = stop.send(true);
    });
    Ok(())
}
