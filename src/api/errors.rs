//! Error mapping shared by both wire encodings.
//!
//! Business errors become a google.rpc.Status-shaped body: the binary
//! encoding carries the code in gRPC trailers, the JSON encoding
//! serializes the body directly.

use serde::{Deserialize, Serialize};

use crate::core::error::StoreError;

/// google.rpc.Status as rendered on the etcd surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub code: i32,
    pub message: String,
    pub details: Vec<serde_json::Value>,
}

impl Status {
    /// Render a business error as a wire status.
    pub fn from_error(err: &StoreError) -> Self {
        Self {
            code: err.grpc_code().value(),
            message: err.to_string(),
            details: Vec::new(),
        }
    }
}
