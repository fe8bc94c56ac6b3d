//! Lease handlers: Grant, Revoke, TimeToLive, Leases, KeepAlive.

use super::proto::{
    LeaseGrantRequest, LeaseGrantResponse, LeaseKeepAliveRequest, LeaseKeepAliveResponse,
    LeaseLeasesRequest, LeaseLeasesResponse, LeaseRevokeRequest, LeaseRevokeResponse, LeaseStatus,
    LeaseTimeToLiveRequest, LeaseTimeToLiveResponse,
};
use crate::core::error::{StoreError, StoreResult};
use crate::host::Transaction;
use crate::store::{KvStore, LeaseStore};

/// Grant a lease. The requested id is ignored; the store always picks a
/// random one. `default_ttl_s` is the node-configured TTL applied when
/// the request does not carry a positive one.
pub fn lease_grant(
    tx: &mut Transaction,
    now_s: i64,
    default_ttl_s: i64,
    req: &LeaseGrantRequest,
) -> StoreResult<LeaseGrantResponse> {
    tracing::debug!(requested_ttl = req.ttl, "LeaseGrant");

    let (id, lease) = LeaseStore::new().grant(tx, req.ttl, now_s, default_ttl_s);

    Ok(LeaseGrantResponse {
        header: None,
        id,
        ttl: lease.ttl,
        error: String::new(),
    })
}

/// Revoke a lease and delete every key bound to it.
pub fn lease_revoke(
    tx: &mut Transaction,
    req: &LeaseRevokeRequest,
) -> StoreResult<LeaseRevokeResponse> {
    tracing::debug!(id = req.id, "LeaseRevoke");

    LeaseStore::new().revoke(tx, req.id);

    let records = KvStore::new();
    let mut doomed = Vec::new();
    records.foreach(tx, |key, value| {
        if value.lease == req.id {
            doomed.push(key.to_vec());
        }
        true
    });
    for key in doomed {
        tracing::debug!(
            key = %String::from_utf8_lossy(&key),
            lease = req.id,
            "removing key of revoked lease"
        );
        records.remove(tx, &key);
    }

    Ok(LeaseRevokeResponse { header: None })
}

/// Report the remaining TTL of a lease; a missing or expired lease
/// reports -1.
pub fn lease_time_to_live(
    tx: &Transaction,
    now_s: i64,
    req: &LeaseTimeToLiveRequest,
) -> StoreResult<LeaseTimeToLiveResponse> {
    tracing::debug!(id = req.id, "LeaseTimeToLive");

    if req.keys {
        return Err(StoreError::unsupported("keys"));
    }

    let lease = LeaseStore::new().get(tx, req.id, now_s);

    Ok(LeaseTimeToLiveResponse {
        header: None,
        id: req.id,
        ttl: lease.ttl_remaining(now_s),
        granted_ttl: lease.ttl,
        keys: Vec::new(),
    })
}

/// List the live leases.
pub fn lease_leases(
    tx: &Transaction,
    now_s: i64,
    _req: &LeaseLeasesRequest,
) -> StoreResult<LeaseLeasesResponse> {
    tracing::debug!("LeaseLeases");

    let mut leases = Vec::new();
    LeaseStore::new().foreach(tx, |id, lease| {
        if !lease.has_expired(now_s) {
            leases.push(LeaseStatus { id });
        }
        true
    });

    Ok(LeaseLeasesResponse {
        header: None,
        leases,
    })
}

/// Refresh a lease; unknown or expired-and-swept ids are not found.
pub fn lease_keep_alive(
    tx: &mut Transaction,
    now_s: i64,
    req: &LeaseKeepAliveRequest,
) -> StoreResult<LeaseKeepAliveResponse> {
    tracing::debug!(id = req.id, "LeaseKeepAlive");

    let ttl = LeaseStore::new().keep_alive(tx, req.id, now_s);
    if ttl == 0 {
        return Err(StoreError::LeaseNotFound { lease: req.id });
    }

    Ok(LeaseKeepAliveResponse {
        header: None,
        id: req.id,
        ttl,
    })
}
