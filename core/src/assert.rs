//! Response predicates and the path accessor they use.
//!
//! Paths are dot-separated keys into the parsed body (`data.first_name`).
//! `$` names the root, and a numeric segment indexes into an array
//! (`data.0.email`).

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::error::CheckFailure;
use crate::http::HttpResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum Expect {
    Status(u16),
    Field { path: String, value: Value },
    Present(String),
    Body(String),
    ElapsedAtLeast(Duration),
}

impl Expect {
    pub fn status(code: u16) -> Self {
        Expect::Status(code)
    }

    pub fn field(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Expect::Field {
            path: path.into(),
            value: value.into(),
        }
    }

    /// The key must exist; its value is unconstrained.
    pub fn present(path: impl Into<String>) -> Self {
        Expect::Present(path.into())
    }

    /// Exact comparison against the raw body text.
    pub fn body(body: impl Into<String>) -> Self {
        Expect::Body(body.into())
    }

    pub fn elapsed_at_least(minimum: Duration) -> Self {
        Expect::ElapsedAtLeast(minimum)
    }

    fn needs_json(&self) -> bool {
        matches!(self, Expect::Field { .. } | Expect::Present(_))
    }

    fn check(
        &self,
        response: &HttpResponse,
        parsed: Option<&Result<Value, String>>,
    ) -> Result<(), CheckFailure> {
        match self {
            Expect::Status(expected) => {
                if response.status == *expected {
                    Ok(())
                } else {
                    Err(CheckFailure::Status {
                        expected: *expected,
                        actual: response.status,
                    })
                }
            }
            Expect::Field { path, value } => {
                let actual = resolve(parsed, path)?;
                if actual == value {
                    Ok(())
                } else {
                    Err(CheckFailure::Mismatch {
                        path: path.clone(),
                        expected: value.clone(),
                        actual: actual.clone(),
                    })
                }
            }
            Expect::Present(path) => resolve(parsed, path).map(|_| ()),
            Expect::Body(expected) => {
                if response.body == *expected {
                    Ok(())
                } else {
                    Err(CheckFailure::Body {
                        expected: expected.clone(),
                        actual: response.body.clone(),
                    })
                }
            }
            Expect::ElapsedAtLeast(minimum) => {
                if response.elapsed >= *minimum {
                    Ok(())
                } else {
                    Err(CheckFailure::TooFast {
                        minimum: *minimum,
                        actual: response.elapsed,
                    })
                }
            }
        }
    }
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expect::Status(code) => write!(f, "status == {code}"),
            Expect::Field { path, value } => write!(f, "`{path}` == {value}"),
            Expect::Present(path) => write!(f, "`{path}` present"),
            Expect::Body(body) => write!(f, "body == {body:?}"),
            Expect::ElapsedAtLeast(minimum) => write!(f, "elapsed >= {minimum:?}"),
        }
    }
}

fn resolve<'a>(
    parsed: Option<&'a Result<Value, String>>,
    path: &str,
) -> Result<&'a Value, CheckFailure> {
    let root = match parsed {
        Some(Ok(root)) => root,
        Some(Err(reason)) => {
            return Err(CheckFailure::Unparsable {
                path: path.to_string(),
                reason: reason.clone(),
            })
        }
        None => {
            return Err(CheckFailure::Unparsable {
                path: path.to_string(),
                reason: "body was not parsed".to_string(),
            })
        }
    };
    lookup(root, path).ok_or_else(|| CheckFailure::Missing {
        path: path.to_string(),
    })
}

/// Walk `path` from `root`. Returns `None` when any segment is absent.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let path = match path {
        "$" => "",
        _ => path.strip_prefix("$.").unwrap_or(path),
    };
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Evaluate every expectation and return all failures, not just the first.
pub fn verify(response: &HttpResponse, expectations: &[Expect]) -> Result<(), Vec<CheckFailure>> {
    let parsed = expectations
        .iter()
        .any(Expect::needs_json)
        .then(|| response.json().map_err(|e| e.to_string()));

    let failures: Vec<CheckFailure> = expectations
        .iter()
        .filter_map(|expect| expect.check(response, parsed.as_ref()).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}
