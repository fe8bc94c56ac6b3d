//! Cluster handlers: MemberList.

use serde::{Deserialize, Serialize};

use super::proto::{Member, MemberListRequest, MemberListResponse};
use crate::core::error::StoreResult;
use crate::host::{Transaction, NODES_TABLE};

/// Per-node metadata stored as JSON in the host's node table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    pub name: String,
}

/// Enumerate the host's node table, one member per node. A node whose
/// metadata fails to parse still shows up, named "default".
pub fn member_list(
    tx: &Transaction,
    _req: &MemberListRequest,
) -> StoreResult<MemberListResponse> {
    tracing::debug!("MemberList");

    let mut members = Vec::new();
    tx.foreach(NODES_TABLE, |key, raw| {
        let id = <[u8; 8]>::try_from(key)
            .map(u64::from_be_bytes)
            .unwrap_or_default();
        let name = serde_json::from_slice::<NodeData>(raw)
            .map(|data| data.name)
            .unwrap_or_else(|_| "default".to_string());
        members.push(Member {
            id,
            name,
            ..Default::default()
        });
        true
    });

    Ok(MemberListResponse {
        header: None,
        members,
    })
}
