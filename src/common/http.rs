// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Error;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use hyper::StatusCode;

/// Create a `Response` suitable for `axum::Router`.
pub fn create_error_response(status: StatusCode, message: String) -> Response {
    Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::from(message.clone()))
        .unwrap_or_else(|_| (status, message).into_response())
}

/// Convert `Error` into a `Response` suitable for `axum::Router`.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Config(_) => create_error_response(StatusCode::BAD_REQUEST, self.to_string()),
            Error::Secret(_) => {
                create_error_response(StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Error::Retrieve(_) | Error::Create(_) | Error::Delete(_) | Error::MalformedId(_) => {
                create_error_response(StatusCode::FAILED_DEPENDENCY, self.to_string())
            }
            Error::Http(code, mesg) => create_error_response(code, mesg),
            Error::String(s) => create_error_response(StatusCode::INTERNAL_SERVER_ERROR, s),
        }
    }
}
