// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! A cert-manager DNS-01 webhook solver which presents and cleans up
//! challenge TXT records with Porkbun.

/// Types common to multiple wrappers.
pub mod common;
pub use common::*;

/// A wrapper which provides access to the Porkbun DNS API.
pub mod dns;
pub use dns::*;

/// Thread-safe logging.
pub mod log;
pub use log::*;

/// Secret references and the stores that resolve them.
pub mod secrets;
pub use secrets::*;

/// DNS-01 challenge solving.
pub mod solver;
pub use solver::*;

#[cfg(feature = "webhook")]
/// Serve a solver to cert-manager over HTTP.
pub mod webhook;
#[cfg(feature = "webhook")]
pub use webhook::*;
