// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Payloads exchanged with cert-manager.
mod challenge;
/// Solver trait and the Porkbun solver.
mod porkbun_solver;
/// Per-issuer solver configuration.
mod provider_config;

pub use self::challenge::{
    ChallengeAction, ChallengePayload, ChallengeRequest, ChallengeResponse,
    CHALLENGE_API_VERSION, CHALLENGE_KIND,
};
pub use self::porkbun_solver::{record_name, relative_name, ChallengeContext, PorkbunSolver, Solver};
pub use self::provider_config::ProviderConfig;
