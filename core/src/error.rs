//! Error types for the reqres suite.
//!
//! # Design
//! Three layers of failure are kept apart. `ApiError` means the request never
//! produced a response to judge (bad config, payload serialization, transport).
//! `CheckFailure` is one predicate that did not hold against a response.
//! `ScenarioError` is what a scenario reports: either one `ApiError` or every
//! `CheckFailure` collected from its response.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Failures that prevent a request from being built or executed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// DNS, connect, TLS, timeout or body read failure. Never retried.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A single response predicate that did not hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckFailure {
    #[error("status: expected {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },

    #[error("`{path}`: expected {expected}, got {actual}")]
    Mismatch {
        path: String,
        expected: Value,
        actual: Value,
    },

    #[error("`{path}`: not present in body")]
    Missing { path: String },

    /// A JSON check ran against a body that is not JSON.
    #[error("`{path}`: could not parse body as JSON: {reason}")]
    Unparsable { path: String, reason: String },

    #[error("body: expected {expected:?}, got {actual:?}")]
    Body { expected: String, actual: String },

    #[error("elapsed: expected at least {minimum:?}, took {actual:?}")]
    TooFast { minimum: Duration, actual: Duration },
}

/// Why a scenario failed.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Request(#[from] ApiError),

    #[error("{} check(s) failed: {}", .0.len(), join(.0))]
    Checks(Vec<CheckFailure>),
}

fn join(failures: &[CheckFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
