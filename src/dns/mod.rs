// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Support for Porkbun.
mod porkbun;
/// Porkbun API trait and record types.
mod porkbun_api;

pub use self::porkbun::{PorkbunDns, PorkbunDnsConnector};
pub use self::porkbun_api::{
    DnsRecord, PorkbunApi, PorkbunClient, PorkbunConnector, PorkbunCredentials, RecordId,
    RecordType, ZoneName,
};
