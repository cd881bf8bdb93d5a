// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use crate::log::StringLogger;
use crate::solver::{
    ChallengeAction, ChallengePayload, ChallengeResponse, Solver, CHALLENGE_KIND,
};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use hyper::StatusCode;
use serde_json::json;
use std::sync::Arc;

/// Version of the API group served for cert-manager.
pub const SOLVER_API_VERSION: &str = "v1alpha1";

#[derive(Clone)]
struct WebhookState {
    solver: Arc<dyn Solver + Send + Sync>,
    group_version: String,
    debug: bool,
}

/// Create an `axum::Router` which serves `solver` under the API group `group_name`.
///
/// cert-manager posts a `ChallengePayload` to `/apis/{group}/v1alpha1/{solver}`.
pub fn solver_router(
    group_name: &str,
    solver: Arc<dyn Solver + Send + Sync>,
    debug: bool,
) -> Router {
    let group_version = format!("{group_name}/{SOLVER_API_VERSION}");
    let solver_path = format!("/apis/{group_version}/{}", solver.name());
    let discovery_path = format!("/apis/{group_version}");
    Router::new()
        .route(&solver_path, post(handle_challenge))
        .route(&discovery_path, get(handle_discovery))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(WebhookState {
            solver,
            group_version,
            debug,
        })
}

async fn handle_discovery(State(state): State<WebhookState>) -> Json<serde_json::Value> {
    let name = state.solver.name();
    Json(json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": state.group_version,
        "resources": [{
            "name": name,
            "singularName": name,
            "namespaced": false,
            "kind": CHALLENGE_KIND,
            "verbs": ["create"],
        }],
    }))
}

async fn handle_challenge(State(state): State<WebhookState>, body: Bytes) -> Response {
    let payload: ChallengePayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            return Error::Http(
                StatusCode::BAD_REQUEST,
                format!("cannot decode challenge payload: {e}"),
            )
            .into_response()
        }
    };
    let Some(request) = payload.request else {
        return Error::Http(
            StatusCode::BAD_REQUEST,
            "challenge payload has no request".to_owned(),
        )
        .into_response();
    };

    let logger = StringLogger::new(state.debug);
    let result = match request.action {
        ChallengeAction::Present => state.solver.present(&request, &logger).await,
        ChallengeAction::CleanUp => state.solver.clean_up(&request, &logger).await,
    };
    let result = logger.call(
        format!("{:?} {} ({})", request.action, request.resolved_fqdn, request.uid),
        result,
    );
    // Debug loggers have already echoed every line.
    if !state.debug && logger.contains_warnings() {
        println!("{logger}");
    }

    let response = match result {
        Ok(()) => ChallengeResponse::success(&request.uid),
        Err(e) => ChallengeResponse::failure(&request.uid, e.to_string()),
    };
    Json(ChallengePayload::from_response(response)).into_response()
}
