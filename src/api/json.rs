//! JSON-over-HTTP encoding.
//!
//! The same message types as the binary encoding, serialized with serde
//! (byte fields base64). Success is HTTP 200 with the response body;
//! business errors become an HTTP status derived from the gRPC code
//! plus a JSON status body; a wrong content type is rejected before the
//! body is even parsed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::Status;
use super::proto;
use super::service::EtcdService;
use crate::core::error::{GrpcCode, StoreError, StoreResult};

/// The only request content type the JSON surface accepts.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// An HTTP-level reply: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl JsonReply {
    fn ok(response: &impl Serialize) -> Self {
        Self {
            status: 200,
            body: serde_json::to_vec(response).unwrap_or_default(),
        }
    }

    fn from_status(http_status: u16, status: Status) -> Self {
        Self {
            status: http_status,
            body: serde_json::to_vec(&status).unwrap_or_default(),
        }
    }

    fn from_error(err: &StoreError) -> Self {
        Self::from_status(err.grpc_code().http_status(), Status::from_error(err))
    }
}

/// Route a JSON request to the service method mounted at `path`.
///
/// `content_type` is the request's Content-Type header, if any;
/// anything but `application/json` is rejected with 415, a malformed
/// body with 400.
pub fn dispatch(
    service: &EtcdService,
    path: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> JsonReply {
    tracing::debug!(path, body_len = body.len(), "JSON dispatch");

    if !is_json(content_type) {
        return JsonReply::from_status(
            415,
            Status {
                code: GrpcCode::InvalidArgument.value(),
                message: format!("unsupported content type; only {CONTENT_TYPE_JSON} is supported"),
                details: Vec::new(),
            },
        );
    }

    match path {
        "/v3/kv/range" => run(body, |req: proto::RangeRequest| service.range(req)),
        "/v3/kv/put" => run(body, |req: proto::PutRequest| service.put(req)),
        "/v3/kv/delete_range" => run(body, |req: proto::DeleteRangeRequest| {
            service.delete_range(req)
        }),
        "/v3/kv/txn" => run(body, |req: proto::TxnRequest| service.txn(req)),
        "/v3/kv/compact" => run(body, |req: proto::CompactionRequest| service.compact(req)),
        "/v3/lease/grant" => run(body, |req: proto::LeaseGrantRequest| {
            service.lease_grant(req)
        }),
        "/v3/lease/revoke" => run(body, |req: proto::LeaseRevokeRequest| {
            service.lease_revoke(req)
        }),
        "/v3/lease/timetolive" => run(body, |req: proto::LeaseTimeToLiveRequest| {
            service.lease_time_to_live(req)
        }),
        "/v3/lease/leases" => run(body, |req: proto::LeaseLeasesRequest| {
            service.lease_leases(req)
        }),
        "/v3/lease/keepalive" => run(body, |req: proto::LeaseKeepAliveRequest| {
            service.lease_keep_alive(req)
        }),
        "/v3/cluster/member/list" => run(body, |req: proto::MemberListRequest| {
            service.member_list(req)
        }),
        _ => JsonReply::from_error(&StoreError::UnknownMethod {
            path: path.to_string(),
        }),
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    // Parameters like "; charset=utf-8" are tolerated.
    content_type
        .map(|value| value.split(';').next().unwrap_or(""))
        .map(|mime| mime.trim().eq_ignore_ascii_case(CONTENT_TYPE_JSON))
        .unwrap_or(false)
}

fn run<Req, Resp>(body: &[u8], f: impl FnOnce(Req) -> StoreResult<Resp>) -> JsonReply
where
    Req: DeserializeOwned,
    Resp: Serialize,
{
    let req: Req = match serde_json::from_slice(body) {
        Ok(req) => req,
        Err(err) => {
            return JsonReply::from_status(
                400,
                Status {
                    code: GrpcCode::InvalidArgument.value(),
                    message: format!("invalid JSON body: {err}"),
                    details: Vec::new(),
                },
            )
        }
    };

    match f(req) {
        Ok(resp) => JsonReply::ok(&resp),
        Err(err) => JsonReply::from_error(&err),
    }
}
