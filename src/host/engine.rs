//! Embedded host engine.
//!
//! Production deployments run the store inside a replicated transaction
//! host that supplies serializable transactions, commit sequence
//! numbers, per-key last-write versions, and a post-commit indexing
//! callback. This module is an in-process implementation of that
//! contract: transactions execute serially under a mutex (the real host
//! interleaves them with conflict detection, which the store code must
//! not rely on), sequence numbers are monotonic and gap-free, and every
//! commit is handed to the registered indexing strategies in revision
//! order, exactly once, as a per-map diff.

use anyhow::Context;
use parking_lot::Mutex;
use std::sync::Arc;

use super::tx::{EngineState, Transaction};
use crate::core::config::NodeConfig;

/// Name of the governance table listing cluster nodes.
pub const NODES_TABLE: &str = "nodes";

/// Identifier of a committed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TxId {
    /// Consensus term the transaction committed in.
    pub term: u64,
    /// Commit sequence number; doubles as the etcd revision.
    pub seqno: i64,
}

/// Observer fed with the diff of every committed transaction.
///
/// Delivery is in commit order and exactly once per commit; a commit
/// that did not touch the observed map is delivered with an empty diff
/// so `next_requested` still advances.
pub trait IndexingStrategy: Send + Sync {
    /// Ingest the diff of a committed transaction. Each entry pairs a
    /// changed key with its new serialized value, `None` for deletion.
    fn handle_committed_transaction(&self, tx_id: TxId, diff: &[(Vec<u8>, Option<Vec<u8>>)]);

    /// The next commit sequence number the strategy wants to see.
    fn next_requested(&self) -> i64;
}

/// In-process host engine: named byte maps plus commit bookkeeping.
pub struct KvEngine {
    state: Mutex<EngineState>,
    strategies: Mutex<Vec<(String, Arc<dyn IndexingStrategy>)>>,
    config: NodeConfig,
}

impl KvEngine {
    /// Create an engine with the given node identity.
    ///
    /// Fails when the configuration does not validate.
    pub fn new(config: NodeConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid node configuration")?;

        let mut state = EngineState::default();
        state.committed = TxId {
            term: config.raft_term,
            seqno: 0,
        };
        Ok(Self {
            state: Mutex::new(state),
            strategies: Mutex::new(Vec::new()),
            config,
        })
    }

    /// The node configuration this engine was built with.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Register an indexing strategy observing one named map.
    pub fn install_strategy(&self, map: impl Into<String>, strategy: Arc<dyn IndexingStrategy>) {
        self.strategies.lock().push((map.into(), strategy));
    }

    /// Identifier of the most recently committed transaction.
    pub fn committed(&self) -> TxId {
        self.state.lock().committed
    }

    /// Run a read-write transaction.
    ///
    /// The closure's buffered writes commit if and only if it returns
    /// `Ok`; an `Err` discards them. The returned [`TxId`] identifies
    /// the commit, or echoes the last committed transaction when the
    /// closure wrote nothing (a read-only commit does not consume a
    /// sequence number).
    pub fn transaction<T, E>(
        &self,
        f: impl FnOnce(&mut Transaction) -> Result<T, E>,
    ) -> Result<(T, TxId), E> {
        let mut guard = self.state.lock();

        let mut tx = Transaction::new(&guard);
        let out = f(&mut tx)?;
        let mut writes = tx.into_writes();

        // Removes of keys absent from committed state are no-ops; they
        // must not reach the diff or consume a sequence number.
        for (map_name, map_writes) in writes.iter_mut() {
            let committed = guard.maps.get(map_name.as_str());
            map_writes.retain(|key, write| {
                write.is_some()
                    || committed.is_some_and(|state| state.entries.contains_key(key))
            });
        }
        writes.retain(|_, map_writes| !map_writes.is_empty());

        if writes.is_empty() {
            let committed = guard.committed;
            return Ok((out, committed));
        }

        let tx_id = TxId {
            term: self.config.raft_term,
            seqno: guard.committed.seqno + 1,
        };

        let mut diffs: Vec<(String, Vec<(Vec<u8>, Option<Vec<u8>>)>)> = Vec::new();
        for (map_name, map_writes) in writes {
            let map = guard.maps.entry(map_name.clone()).or_default();
            let mut diff = Vec::with_capacity(map_writes.len());
            for (key, write) in map_writes {
                match &write {
                    Some(value) => {
                        map.entries.insert(key.clone(), value.clone());
                    }
                    None => {
                        map.entries.remove(&key);
                    }
                }
                map.write_revisions.insert(key.clone(), tx_id.seqno);
                diff.push((key, write));
            }
            diffs.push((map_name, diff));
        }
        guard.committed = tx_id;

        tracing::debug!(seqno = tx_id.seqno, maps = diffs.len(), "committed transaction");

        // Strategies are notified before the state lock is released so
        // that delivery order always matches commit order.
        let strategies = self.strategies.lock().clone();
        for (map_name, strategy) in &strategies {
            let diff = diffs
                .iter()
                .find(|(name, _)| name == map_name)
                .map(|(_, diff)| diff.as_slice())
                .unwrap_or(&[]);
            strategy.handle_committed_transaction(tx_id, diff);
        }

        Ok((out, tx_id))
    }

    /// Run a read-only transaction against the latest committed state.
    ///
    /// Returns the closure's output and the committed [`TxId`] the read
    /// was served at.
    pub fn read<T>(&self, f: impl FnOnce(&Transaction) -> T) -> (T, TxId) {
        let guard = self.state.lock();
        let tx = Transaction::new(&guard);
        let out = f(&tx);
        (out, guard.committed)
    }

    /// Register a node in the governance table consumed by MemberList.
    pub fn add_node(&self, node_id: u64, data: &[u8]) {
        let (_, _) = self
            .transaction(|tx| {
                tx.put(NODES_TABLE, &node_id.to_be_bytes(), data.to_vec());
                Ok::<_, std::convert::Infallible>(())
            })
            .expect("infallible transaction");
    }
}
