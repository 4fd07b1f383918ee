//! Contract suite for the reqres REST API.
//!
//! # Overview
//! Each scenario builds one `HttpRequest`, executes it through a `Transport`
//! and checks the `HttpResponse` against a list of `Expect` predicates. The
//! runner collects every failure per scenario and never aborts the run.
//!
//! # Design
//! - `ReqresClient` only builds requests; `UreqTransport` owns the network.
//! - Payload models in `types` mirror the wire JSON through serde derives.
//! - The same scenarios run against the live service or the local fixture
//!   server in the `reqres-mock` crate; only the base URL differs.

pub mod assert;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod runner;
pub mod scenarios;
pub mod types;

pub use assert::{verify, Expect};
pub use client::ReqresClient;
pub use config::SuiteConfig;
pub use error::{ApiError, CheckFailure, ScenarioError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use runner::{run, Outcome, RunReport};
pub use scenarios::Scenario;
pub use types::{Data, Resource, User, UserBuilder};
