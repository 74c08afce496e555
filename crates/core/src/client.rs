// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error translation at the tracker client boundary.
//!
//! The HTTP client itself lives outside this crate. Its calls yield a
//! response (for the status code) and possibly an error; this module folds
//! authentication failures into a single [`ClientError::Authentication`]
//! and passes every other error through untouched.

use thiserror::Error;

/// HTTP 401.
pub const STATUS_UNAUTHORIZED: u16 = 401;
/// HTTP 403.
pub const STATUS_FORBIDDEN: u16 = 403;

/// A transport response that exposes an HTTP status code.
pub trait ClientResponse {
    fn status_code(&self) -> u16;
}

/// Minimal response carrying only a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Response { status }
    }
}

impl ClientResponse for Response {
    fn status_code(&self) -> u16 {
        self.status
    }
}

impl ClientResponse for u16 {
    fn status_code(&self) -> u16 {
        *self
    }
}

/// Errors surfaced from tracker client calls.
#[derive(Debug, Error)]
pub enum ClientError<E> {
    /// The tracker rejected the credentials (HTTP 401 or 403).
    #[error("access unauthorized: check basic authentication")]
    Authentication,

    /// Any other client error, unchanged.
    #[error(transparent)]
    Other(E),
}

impl<E> ClientError<E> {
    pub fn is_authentication(&self) -> bool {
        matches!(self, ClientError::Authentication)
    }

    /// Returns the passed-through error, or `None` for authentication failures.
    pub fn into_inner(self) -> Option<E> {
        match self {
            ClientError::Authentication => None,
            ClientError::Other(e) => Some(e),
        }
    }
}

/// Returns true if the status code means the credentials were rejected.
pub fn is_auth_failure(status: u16) -> bool {
    status == STATUS_UNAUTHORIZED || status == STATUS_FORBIDDEN
}

/// Translates a client call's outcome into a [`ClientError`].
///
/// No error yields `None` whatever the status. A 401/403 response yields
/// [`ClientError::Authentication`]; anything else, including a missing
/// response, passes the error through.
pub fn translate_error<R, E>(response: Option<&R>, err: Option<E>) -> Option<ClientError<E>>
where
    R: ClientResponse + ?Sized,
{
    err.map(|e| classify(response, e))
}

/// Applies [`translate_error`] to a `Result`.
pub fn check_response<T, R, E>(
    response: Option<&R>,
    result: Result<T, E>,
) -> Result<T, ClientError<E>>
where
    R: ClientResponse + ?Sized,
{
    result.map_err(|e| classify(response, e))
}

fn classify<R, E>(response: Option<&R>, err: E) -> ClientError<E>
where
    R: ClientResponse + ?Sized,
{
    match response {
        Some(resp) if is_auth_failure(resp.status_code()) => ClientError::Authentication,
        _ => ClientError::Other(err),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
