//! Wire types shared by the numbers service client and its callers.
//!
//! The numbers service holds two square integer datasets, `A` and `B`, and
//! hands them out one row or column at a time:
//!
//! - `POST /init/{size}` allocates a fresh dataset pair
//! - `GET /{dataset}/{axis}/{index}` returns a [`VectorResponse`]
//! - `POST /validate` accepts a digest and answers with a [`SubmissionResult`]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two logical matrices held by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    A,
    B,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::A => "A",
            Dataset::B => "B",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects row-wise or column-wise retrieval of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Path segment used by the service for this axis.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `GET /{dataset}/{axis}/{index}`.
///
/// The service has been seen to answer with both camelCase and PascalCase
/// keys, so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorResponse {
    #[serde(default, alias = "Value")]
    pub value: Option<Vec<i32>>,
    #[serde(default, alias = "Cause")]
    pub cause: Option<String>,
    #[serde(default, alias = "Success")]
    pub success: bool,
}

impl VectorResponse {
    pub fn ok(value: Vec<i32>) -> Self {
        Self {
            value: Some(value),
            cause: None,
            success: true,
        }
    }
}

/// Outcome of `POST /validate`, surfaced to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// Raw response body.
    pub body: String,
    /// Whether the service answered with a 2xx status.
    pub success: bool,
}
