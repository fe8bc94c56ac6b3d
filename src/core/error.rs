//! Error types and their mapping onto the etcd wire surface.
//!
//! Business failures are values, not panics: every handler returns
//! `Result<Response, StoreError>` and the adapter layer turns the error
//! into a gRPC status code (binary encoding) or an HTTP status plus a
//! JSON status body (JSON encoding).

use thiserror::Error;

/// Business errors surfaced by the request handlers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A request asked for an option this store does not implement.
    #[error("{option} not yet supported")]
    Unsupported { option: String },

    /// A Put referenced a lease that was never granted or has expired.
    #[error("invalid lease {lease}: hasn't been granted or has expired")]
    InvalidLease { lease: i64 },

    /// A keep-alive referenced a missing or expired lease.
    #[error("lease {lease} not found")]
    LeaseNotFound { lease: i64 },

    /// A Txn compare carried an unrecognized target, or its value union
    /// did not match the target.
    #[error("unknown target in comparison: {target}")]
    UnknownCompareTarget { target: i32 },

    /// A Txn compare carried an unrecognized result operator.
    #[error("unknown result in comparison: {result}")]
    UnknownCompareResult { result: i32 },

    /// A Txn branch carried an op with no recognized request variant.
    #[error("unknown request op")]
    UnknownRequestOp,

    /// Malformed request outside the cases above.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Dispatch hit an RPC path this surface does not serve.
    #[error("unknown method: {path}")]
    UnknownMethod { path: String },

    /// Unexpected internal failure (storage codec, host misbehavior).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl StoreError {
    /// Build an [`StoreError::Unsupported`] for a named request option.
    pub fn unsupported(option: impl Into<String>) -> Self {
        Self::Unsupported {
            option: option.into(),
        }
    }

    /// Build an [`StoreError::InvalidRequest`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Build an [`StoreError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The gRPC status code this error maps to.
    pub fn grpc_code(&self) -> GrpcCode {
        match self {
            Self::Unsupported { .. } => GrpcCode::FailedPrecondition,
            Self::InvalidLease { .. } => GrpcCode::FailedPrecondition,
            Self::LeaseNotFound { .. } => GrpcCode::NotFound,
            Self::UnknownCompareTarget { .. } => GrpcCode::InvalidArgument,
            Self::UnknownCompareResult { .. } => GrpcCode::InvalidArgument,
            Self::UnknownRequestOp => GrpcCode::InvalidArgument,
            Self::InvalidRequest { .. } => GrpcCode::InvalidArgument,
            Self::UnknownMethod { .. } => GrpcCode::Unimplemented,
            Self::Internal { .. } => GrpcCode::Internal,
        }
    }
}

/// Result type used by the request handlers.
pub type StoreResult<T> = Result<T, StoreError>;

/// gRPC status codes used on the etcd surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrpcCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl GrpcCode {
    /// Numeric wire value of the code.
    pub fn value(self) -> i32 {
        self as i32
    }

    /// HTTP status used when the error travels over the JSON encoding.
    ///
    /// Business errors all surface as 400 with a JSON status body; only
    /// transport-level conditions pick other statuses (the JSON adapter
    /// handles 415 itself).
    pub fn http_status(self) -> u16 {
        match self {
            GrpcCode::Ok => 200,
            GrpcCode::Internal => 500,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_option_message_matches_wire_format() {
        let err = StoreError::unsupported("limit 5");
        assert_eq!(err.to_string(), "limit 5 not yet supported");
        assert_eq!(err.grpc_code(), GrpcCode::FailedPrecondition);
    }

    #[test]
    fn compare_errors_are_invalid_argument() {
        assert_eq!(
            StoreError::UnknownCompareTarget { target: 42 }.grpc_code(),
            GrpcCode::InvalidArgument
        );
        assert_eq!(
            StoreError::UnknownCompareResult { result: 9 }.grpc_code(),
            GrpcCode::InvalidArgument
        );
        assert_eq!(
            StoreError::UnknownRequestOp.grpc_code(),
            GrpcCode::InvalidArgument
        );
    }

    #[test]
    fn lease_errors_map_to_their_codes() {
        assert_eq!(
            StoreError::InvalidLease { lease: 7 }.grpc_code(),
            GrpcCode::FailedPrecondition
        );
        assert_eq!(
            StoreError::LeaseNotFound { lease: 7 }.grpc_code(),
            GrpcCode::NotFound
        );
    }

    #[test]
    fn business_errors_ride_http_400() {
        assert_eq!(GrpcCode::FailedPrecondition.http_status(), 400);
        assert_eq!(GrpcCode::NotFound.http_status(), 400);
        assert_eq!(GrpcCode::Internal.http_status(), 500);
    }
}
