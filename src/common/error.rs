// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hyper::StatusCode;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
/// An enum that encapsulates a variety of error types.
///
/// # Example
///
/// Error::Secret(format!("secret {namespace:?} {name:?} does not contain key {key:?}"))
pub enum Error {
    /// The solver configuration blob is missing or malformed.
    Config(String),
    /// A referenced secret (or a key within it) could not be resolved.
    Secret(String),
    /// Listing the records of a zone failed.
    Retrieve(String),
    /// Creating a record failed.
    Create(String),
    /// Deleting a record failed.
    Delete(String),
    /// A matching record carries an identifier that is not an integer.
    MalformedId(String),
    /// HTTP (or miscellaneous) error
    Http(StatusCode, String),
    /// String error.
    String(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Config(s) => Display::fmt(&format!("config error: {s}"), f),
            Error::Secret(s) => Display::fmt(s, f),
            Error::Retrieve(s) => Display::fmt(&format!("retrieve records error: {s}"), f),
            Error::Create(s) => Display::fmt(&format!("create record error: {s}"), f),
            Error::Delete(s) => Display::fmt(&format!("delete record error: {s}"), f),
            Error::MalformedId(s) => Display::fmt(
                &format!("found TXT record, but its ID is malformed: {s}"),
                f,
            ),
            Error::Http(status_code, mesg) => Display::fmt(&format!("{status_code}: {mesg}"), f),
            Error::String(s) => Display::fmt(&s, f),
        }
    }
}

impl std::error::Error for Error {}
