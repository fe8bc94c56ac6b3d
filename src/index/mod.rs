//! MVCC history index.
//!
//! An eventually-consistent observer of the `records` map. The host
//! feeds it the diff of every committed transaction; the index keeps a
//! chronological vector of snapshots per key plus a revision → changed
//! keys map, and answers point and range reads at arbitrary past
//! revisions. History older than a compaction point can be dropped.
//!
//! The whole index sits behind one reader/writer lock: the indexing
//! callback is the single writer, request handlers are concurrent
//! readers. Writers are rare and short, so per-key locking buys
//! nothing here.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::host::{IndexingStrategy, TxId};
use crate::store::Value;

#[derive(Debug, Default)]
struct IndexState {
    /// Keys changed at each revision, in commit order.
    revisions_to_keys: BTreeMap<i64, Vec<Vec<u8>>>,
    /// Per-key snapshots ordered by ascending mod revision. Deletions
    /// are tombstones, which is what lets a point read distinguish
    /// "deleted then recreated" from "never existed".
    keys_to_history: BTreeMap<Vec<u8>, Vec<Value>>,
    /// Highest transaction indexed so far.
    current_txid: TxId,
}

/// Secondary index answering historical reads over the records map.
#[derive(Debug, Default)]
pub struct KvIndexer {
    state: RwLock<IndexState>,
}

impl KvIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest transaction the index has absorbed.
    pub fn current_txid(&self) -> TxId {
        self.state.read().current_txid
    }

    /// State of `key` as of `at_revision`, or `None` if the key did not
    /// exist at that revision (or its history was compacted away).
    pub fn get(&self, at_revision: i64, key: &[u8]) -> Option<Value> {
        let state = self.state.read();
        Self::resolve_at(state.keys_to_history.get(key)?, at_revision)
    }

    /// Every key in `[from, to)` that existed at `at_revision`, with
    /// its value at that revision, in key order. `to = None` runs to
    /// the end of the keyspace.
    pub fn range(
        &self,
        at_revision: i64,
        from: &[u8],
        to: Option<&[u8]>,
    ) -> Vec<(Vec<u8>, Value)> {
        let state = self.state.read();
        let bounds = (
            Bound::Included(from.to_vec()),
            match to {
                Some(end) => Bound::Excluded(end.to_vec()),
                None => Bound::Unbounded,
            },
        );

        state
            .keys_to_history
            .range::<Vec<u8>, _>((bounds.0.as_ref(), bounds.1.as_ref()))
            .filter_map(|(key, history)| {
                Self::resolve_at(history, at_revision).map(|value| (key.clone(), value))
            })
            .collect()
    }

    /// Drop all history strictly below `at_revision`.
    ///
    /// Every surviving key keeps at least its newest snapshot at or
    /// above the compaction point, so reads at revisions ≥ the point
    /// still resolve; reads below it are unspecified and simply find
    /// nothing.
    pub fn compact(&self, at_revision: i64) {
        let mut state = self.state.write();

        let stale: Vec<i64> = state
            .revisions_to_keys
            .range(..at_revision)
            .map(|(rev, _)| *rev)
            .collect();

        let mut touched = std::collections::BTreeSet::new();
        for rev in stale {
            if let Some(keys) = state.revisions_to_keys.remove(&rev) {
                touched.extend(keys);
            }
        }

        for key in touched {
            let emptied = match state.keys_to_history.get_mut(&key) {
                Some(history) => {
                    history.retain(|snapshot| snapshot.mod_revision >= at_revision);
                    history.is_empty()
                }
                None => false,
            };
            if emptied {
                state.keys_to_history.remove(&key);
            }
        }

        tracing::debug!(at_revision, "compacted history index");
    }

    /// Walk a key's history in ascending order and report the last
    /// snapshot at or below `at_revision`; a tombstone resets the
    /// answer to "absent".
    fn resolve_at(history: &[Value], at_revision: i64) -> Option<Value> {
        let mut last = None;
        for snapshot in history {
            if snapshot.mod_revision > at_revision {
                break;
            }
            if snapshot.is_tombstone() {
                last = None;
            } else {
                last = Some(snapshot.clone());
            }
        }
        last
    }
}

impl IndexingStrategy for KvIndexer {
    fn handle_committed_transaction(&self, tx_id: TxId, diff: &[(Vec<u8>, Option<Vec<u8>>)]) {
        let mut state = self.state.write();

        for (key, maybe_value) in diff {
            state
                .revisions_to_keys
                .entry(tx_id.seqno)
                .or_default()
                .push(key.clone());

            let snapshot = match maybe_value {
                Some(raw) => match bincode::deserialize::<Value>(raw) {
                    Ok(mut value) => {
                        value.mod_revision = tx_id.seqno;
                        if value.create_revision == 0 {
                            value.create_revision = tx_id.seqno;
                        }
                        value
                    }
                    Err(err) => {
                        tracing::warn!(
                            key = %String::from_utf8_lossy(key),
                            %err,
                            "indexing undecodable record as tombstone"
                        );
                        Value::tombstone(tx_id.seqno)
                    }
                },
                None => Value::tombstone(tx_id.seqno),
            };

            state
                .keys_to_history
                .entry(key.clone())
                .or_default()
                .push(snapshot);
        }

        state.current_txid = tx_id;
    }

    fn next_requested(&self) -> i64 {
        self.state.read().current_txid.seqno + 1
    }
}
