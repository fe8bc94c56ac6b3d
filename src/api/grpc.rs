//! Binary gRPC payload codec and dispatch.
//!
//! Unary gRPC payloads are length-prefixed protobuf messages: one byte
//! compression flag plus a big-endian u32 length. This module frames
//! and unframes those payloads and routes the eleven service methods by
//! path; the HTTP/2 transport around them belongs to the host.

use bytes::{BufMut, Bytes, BytesMut};
use prost::Message;

use super::proto;
use super::service::EtcdService;
use crate::core::error::{StoreError, StoreResult};

/// Encode a message into a gRPC payload frame.
pub fn encode_frame<M: Message>(msg: &M) -> Bytes {
    let encoded = msg.encode_to_vec();

    let mut buf = BytesMut::with_capacity(5 + encoded.len());
    buf.put_u8(0); // not compressed
    buf.put_u32(encoded.len() as u32);
    buf.put_slice(&encoded);
    buf.freeze()
}

/// Decode a message from a gRPC payload frame.
pub fn decode_frame<M: Message + Default>(body: &[u8]) -> StoreResult<M> {
    if body.len() < 5 {
        return Err(StoreError::invalid("gRPC message too short"));
    }

    let len = u32::from_be_bytes([body[1], body[2], body[3], body[4]]) as usize;
    if body.len() < 5 + len {
        return Err(StoreError::invalid(format!(
            "gRPC message truncated: expected {} bytes, got {}",
            len,
            body.len() - 5
        )));
    }

    M::decode(&body[5..5 + len])
        .map_err(|err| StoreError::invalid(format!("decode error: {err}")))
}

/// Route a framed request to the service method named by `path` and
/// frame its response. Errors are returned for the transport to render
/// as a gRPC status.
pub fn dispatch(service: &EtcdService, path: &str, body: &[u8]) -> StoreResult<Bytes> {
    tracing::debug!(path, body_len = body.len(), "gRPC dispatch");

    match path {
        "/etcdserverpb.KV/Range" => {
            Ok(encode_frame(&service.range(decode_frame::<proto::RangeRequest>(body)?)?))
        }
        "/etcdserverpb.KV/Put" => {
            Ok(encode_frame(&service.put(decode_frame::<proto::PutRequest>(body)?)?))
        }
        "/etcdserverpb.KV/DeleteRange" => Ok(encode_frame(
            &service.delete_range(decode_frame::<proto::DeleteRangeRequest>(body)?)?,
        )),
        "/etcdserverpb.KV/Txn" => {
            Ok(encode_frame(&service.txn(decode_frame::<proto::TxnRequest>(body)?)?))
        }
        "/etcdserverpb.KV/Compact" => Ok(encode_frame(
            &service.compact(decode_frame::<proto::CompactionRequest>(body)?)?,
        )),
        "/etcdserverpb.Lease/LeaseGrant" => Ok(encode_frame(
            &service.lease_grant(decode_frame::<proto::LeaseGrantRequest>(body)?)?,
        )),
        "/etcdserverpb.Lease/LeaseRevoke" => Ok(encode_frame(
            &service.lease_revoke(decode_frame::<proto::LeaseRevokeRequest>(body)?)?,
        )),
        "/etcdserverpb.Lease/LeaseTimeToLive" => Ok(encode_frame(
            &service.lease_time_to_live(decode_frame::<proto::LeaseTimeToLiveRequest>(body)?)?,
        )),
        "/etcdserverpb.Lease/LeaseLeases" => Ok(encode_frame(
            &service.lease_leases(decode_frame::<proto::LeaseLeasesRequest>(body)?)?,
        )),
        "/etcdserverpb.Lease/LeaseKeepAlive" => Ok(encode_frame(
            &service.lease_keep_alive(decode_frame::<proto::LeaseKeepAliveRequest>(body)?)?,
        )),
        "/etcdserverpb.Cluster/MemberList" => Ok(encode_frame(
            &service.member_list(decode_frame::<proto::MemberListRequest>(body)?)?,
        )),
        _ => Err(StoreError::UnknownMethod {
            path: path.to_string(),
        }),
    }
}
