//! Service layer: one method per RPC.
//!
//! Each method samples host time once, runs its handler inside one host
//! transaction (read-only for Range, LeaseTimeToLive, LeaseLeases, and
//! MemberList), and fills the response header afterwards: `revision`
//! and `raft_term` identify the transaction the request was served at,
//! the `committed_*` pair the engine's committed frontier.

use std::sync::Arc;

use super::proto::{
    CompactionRequest, CompactionResponse, DeleteRangeRequest, DeleteRangeResponse,
    LeaseGrantRequest, LeaseGrantResponse, LeaseKeepAliveRequest, LeaseKeepAliveResponse,
    LeaseLeasesRequest, LeaseLeasesResponse, LeaseRevokeRequest, LeaseRevokeResponse,
    LeaseTimeToLiveRequest, LeaseTimeToLiveResponse, MemberListRequest, MemberListResponse,
    PutRequest, PutResponse, RangeRequest, RangeResponse, ResponseHeader, TxnRequest, TxnResponse,
};
use super::{cluster, kv, lease, txn};
use crate::core::error::{StoreError, StoreResult};
use crate::core::time::TimeSource;
use crate::host::{KvEngine, TxId};
use crate::index::KvIndexer;
use crate::store::{self, RECORDS_TABLE};

/// The etcd-compatible service over one host engine.
pub struct EtcdService {
    engine: Arc<KvEngine>,
    index: Arc<KvIndexer>,
    clock: Arc<dyn TimeSource>,
}

impl EtcdService {
    /// Build the service and install its history index as an indexing
    /// strategy on the records map.
    pub fn new(engine: Arc<KvEngine>, clock: Arc<dyn TimeSource>) -> Self {
        let index = Arc::new(KvIndexer::new());
        engine.install_strategy(RECORDS_TABLE, index.clone());
        Self {
            engine,
            index,
            clock,
        }
    }

    /// The engine this service runs on.
    pub fn engine(&self) -> &Arc<KvEngine> {
        &self.engine
    }

    /// The history index answering historical reads.
    pub fn index(&self) -> &Arc<KvIndexer> {
        &self.index
    }

    fn header(&self, served: TxId) -> ResponseHeader {
        let committed = self.engine.committed();
        let config = self.engine.config();
        ResponseHeader {
            cluster_id: config.cluster_id,
            member_id: config.member_id,
            revision: served.seqno,
            raft_term: served.term,
            committed_revision: committed.seqno,
            committed_raft_term: committed.term,
        }
    }

    pub fn range(&self, req: RangeRequest) -> StoreResult<RangeResponse> {
        let now_s = self.clock.now_seconds();
        let (result, tx_id) = self
            .engine
            .read(|tx| kv::range(tx, &self.index, now_s, &req));
        let mut resp = result?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn put(&self, req: PutRequest) -> StoreResult<PutResponse> {
        let now_s = self.clock.now_seconds();
        let (mut resp, tx_id) = self.engine.transaction(|tx| kv::put(tx, now_s, &req))?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn delete_range(&self, req: DeleteRangeRequest) -> StoreResult<DeleteRangeResponse> {
        let (mut resp, tx_id) = self.engine.transaction(|tx| kv::delete_range(tx, &req))?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn txn(&self, req: TxnRequest) -> StoreResult<TxnResponse> {
        let now_s = self.clock.now_seconds();
        let (mut resp, tx_id) = self
            .engine
            .transaction(|tx| txn::txn(tx, &self.index, now_s, &req))?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    /// Compact sweeps expired leases first, then drops index history
    /// below the requested revision.
    pub fn compact(&self, req: CompactionRequest) -> StoreResult<CompactionResponse> {
        tracing::debug!(revision = req.revision, physical = req.physical, "Compact");

        if req.physical {
            return Err(StoreError::unsupported("physical"));
        }

        let now_s = self.clock.now_seconds();
        let (_, tx_id) = self
            .engine
            .transaction::<_, StoreError>(|tx| {
                store::revoke_expired_leases(tx, now_s);
                Ok(())
            })?;
        self.index.compact(req.revision);

        Ok(CompactionResponse {
            header: Some(self.header(tx_id)),
        })
    }

    pub fn lease_grant(&self, req: LeaseGrantRequest) -> StoreResult<LeaseGrantResponse> {
        let now_s = self.clock.now_seconds();
        let default_ttl_s = self.engine.config().default_lease_ttl_s;
        let (mut resp, tx_id) = self
            .engine
            .transaction(|tx| lease::lease_grant(tx, now_s, default_ttl_s, &req))?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn lease_revoke(&self, req: LeaseRevokeRequest) -> StoreResult<LeaseRevokeResponse> {
        let (mut resp, tx_id) = self
            .engine
            .transaction(|tx| lease::lease_revoke(tx, &req))?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn lease_time_to_live(
        &self,
        req: LeaseTimeToLiveRequest,
    ) -> StoreResult<LeaseTimeToLiveResponse> {
        let now_s = self.clock.now_seconds();
        let (result, tx_id) = self.engine.read(|tx| lease::lease_time_to_live(tx, now_s, &req));
        let mut resp = result?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn lease_leases(&self, req: LeaseLeasesRequest) -> StoreResult<LeaseLeasesResponse> {
        let now_s = self.clock.now_seconds();
        let (result, tx_id) = self.engine.read(|tx| lease::lease_leases(tx, now_s, &req));
        let mut resp = result?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn lease_keep_alive(
        &self,
        req: LeaseKeepAliveRequest,
    ) -> StoreResult<LeaseKeepAliveResponse> {
        let now_s = self.clock.now_seconds();
        let (mut resp, tx_id) = self
            .engine
            .transaction(|tx| lease::lease_keep_alive(tx, now_s, &req))?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }

    pub fn member_list(&self, req: MemberListRequest) -> StoreResult<MemberListResponse> {
        let (result, tx_id) = self.engine.read(|tx| cluster::member_list(tx, &req));
        let mut resp = result?;
        resp.header = Some(self.header(tx_id));
        Ok(resp)
    }
}
