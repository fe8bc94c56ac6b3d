//! Range, Put, and DeleteRange handlers.
//!
//! Each handler runs inside the caller's host transaction and leaves
//! the response header unset; the service layer fills it after commit.

use super::proto::{
    DeleteRangeRequest, DeleteRangeResponse, KeyValue, PutRequest, PutResponse, RangeRequest,
    RangeResponse,
};
use crate::core::error::{StoreError, StoreResult};
use crate::host::Transaction;
use crate::index::KvIndexer;
use crate::store::{KvStore, LeaseStore, Value};

/// Map a store record onto the wire KeyValue shape.
pub(crate) fn key_value(key: &[u8], value: Value) -> KeyValue {
    KeyValue {
        key: key.to_vec(),
        create_revision: value.create_revision,
        mod_revision: value.mod_revision,
        version: value.version,
        value: value.data,
        lease: value.lease,
    }
}

/// Normalize the wire range end: `"\0"` means "to the end of the
/// keyspace", expressed as no upper bound rather than a sentinel key.
pub(crate) fn normalize_range_end(range_end: &[u8]) -> Option<&[u8]> {
    if range_end == b"\0" {
        None
    } else {
        Some(range_end)
    }
}

/// Range: single-key get when `range_end` is empty, ordered scan
/// otherwise. `revision == 0` reads current state through the record
/// store; `revision > 0` reads the history index. Records bound to a
/// missing or expired lease are filtered out, never removed, since a
/// read cannot write.
pub fn range(
    tx: &Transaction,
    index: &KvIndexer,
    now_s: i64,
    req: &RangeRequest,
) -> StoreResult<RangeResponse> {
    tracing::debug!(
        key = %String::from_utf8_lossy(&req.key),
        range_end = %String::from_utf8_lossy(&req.range_end),
        revision = req.revision,
        "Range"
    );

    if req.limit != 0 {
        return Err(StoreError::unsupported(format!("limit {}", req.limit)));
    }
    if req.sort_order != 0 {
        return Err(StoreError::unsupported(format!(
            "sort order {}",
            req.sort_order
        )));
    }
    if req.keys_only {
        return Err(StoreError::unsupported("keys only"));
    }
    if req.count_only {
        return Err(StoreError::unsupported("count only"));
    }
    if req.min_mod_revision != 0 {
        return Err(StoreError::unsupported(format!(
            "min mod revision {}",
            req.min_mod_revision
        )));
    }
    if req.max_mod_revision != 0 {
        return Err(StoreError::unsupported(format!(
            "max mod revision {}",
            req.max_mod_revision
        )));
    }
    if req.min_create_revision != 0 {
        return Err(StoreError::unsupported(format!(
            "min create revision {}",
            req.min_create_revision
        )));
    }
    if req.max_create_revision != 0 {
        return Err(StoreError::unsupported(format!(
            "max create revision {}",
            req.max_create_revision
        )));
    }

    let records = KvStore::new();
    let leases = LeaseStore::new();
    let mut kvs = Vec::new();

    let mut add = |key: &[u8], value: Value| {
        if value.lease != 0 && !leases.contains(tx, value.lease, now_s) {
            tracing::debug!(
                lease = value.lease,
                "filtering record whose lease is missing or expired"
            );
            return;
        }
        kvs.push(key_value(key, value));
    };

    if req.range_end.is_empty() {
        let found = if req.revision > 0 {
            index.get(req.revision, &req.key)
        } else {
            records.get(tx, &req.key)
        };
        if let Some(value) = found {
            add(&req.key, value);
        }
    } else {
        let end = normalize_range_end(&req.range_end);
        let entries = if req.revision > 0 {
            index.range(req.revision, &req.key, end)
        } else {
            records.range(tx, &req.key, end)
        };
        for (key, value) in entries {
            add(&key, value);
        }
    }

    let count = kvs.len() as i64;
    Ok(RangeResponse {
        header: None,
        kvs,
        more: false,
        count,
    })
}

/// Put: store the value, binding it to the requested lease after
/// checking the lease is live.
pub fn put(tx: &mut Transaction, now_s: i64, req: &PutRequest) -> StoreResult<PutResponse> {
    tracing::debug!(
        key = %String::from_utf8_lossy(&req.key),
        lease = req.lease,
        "Put"
    );

    if req.ignore_value {
        return Err(StoreError::unsupported("ignore value"));
    }
    if req.ignore_lease {
        return Err(StoreError::unsupported("ignore lease"));
    }

    if req.lease != 0 && !LeaseStore::new().contains(tx, req.lease, now_s) {
        return Err(StoreError::InvalidLease { lease: req.lease });
    }

    let old = KvStore::new().put(tx, &req.key, Value::new(req.value.clone(), req.lease));

    let prev_kv = if req.prev_kv {
        old.map(|value| key_value(&req.key, value))
    } else {
        None
    };

    Ok(PutResponse {
        header: None,
        prev_kv,
    })
}

/// DeleteRange: single-key remove when `range_end` is empty, otherwise
/// collect the interval first and remove key by key.
pub fn delete_range(
    tx: &mut Transaction,
    req: &DeleteRangeRequest,
) -> StoreResult<DeleteRangeResponse> {
    tracing::debug!(
        key = %String::from_utf8_lossy(&req.key),
        range_end = %String::from_utf8_lossy(&req.range_end),
        prev_kv = req.prev_kv,
        "DeleteRange"
    );

    let records = KvStore::new();
    let mut resp = DeleteRangeResponse::default();

    if req.range_end.is_empty() {
        if let Some(old) = records.remove(tx, &req.key) {
            resp.deleted = 1;
            if req.prev_kv {
                resp.prev_kvs.push(key_value(&req.key, old));
            }
        }
    } else {
        let end = normalize_range_end(&req.range_end);
        for (key, old) in records.range(tx, &req.key, end) {
            records.remove(tx, &key);
            resp.deleted += 1;
            if req.prev_kv {
                resp.prev_kvs.push(key_value(&key, old));
            }
        }
    }

    Ok(resp)
}
