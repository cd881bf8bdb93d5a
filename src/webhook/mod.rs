// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Routes cert-manager challenge payloads to a solver.
mod router;
/// Run an `axum::Router` on incoming requests from a socket.
mod socket;

pub use self::router::{solver_router, SOLVER_API_VERSION};
pub use self::socket::{run_router_on_socket, stop_on_signal};
