//! Transaction handle over the host's named maps.
//!
//! A [`Transaction`] buffers writes in a per-map overlay and resolves
//! reads through that overlay first, so a transaction always observes
//! its own earlier writes. Nothing touches committed state until the
//! engine applies the buffered writes at commit.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

/// Committed contents of one named map.
#[derive(Debug, Default)]
pub(crate) struct MapState {
    /// Committed key/value entries, ordered by raw bytes.
    pub(crate) entries: BTreeMap<Vec<u8>, Vec<u8>>,
    /// Commit sequence number of the last committed write per key.
    pub(crate) write_revisions: HashMap<Vec<u8>, i64>,
}

/// Committed engine state shared by all maps.
#[derive(Debug, Default)]
pub(crate) struct EngineState {
    pub(crate) maps: HashMap<String, MapState>,
    pub(crate) committed: super::engine::TxId,
}

/// Buffered write: `Some` is an upsert, `None` a removal.
pub(crate) type WriteSet = HashMap<String, BTreeMap<Vec<u8>, Option<Vec<u8>>>>;

/// A serializable transaction over the engine's maps.
///
/// Writes are visible to later reads in the same transaction but have
/// no commit sequence number until the transaction commits; that is why
/// [`Transaction::version_of_last_write`] reflects committed state only.
pub struct Transaction<'e> {
    state: &'e EngineState,
    writes: WriteSet,
}

impl<'e> Transaction<'e> {
    pub(crate) fn new(state: &'e EngineState) -> Self {
        Self {
            state,
            writes: WriteSet::new(),
        }
    }

    pub(crate) fn into_writes(self) -> WriteSet {
        self.writes
    }

    /// Read a key, observing this transaction's own writes.
    pub fn get(&self, map: &str, key: &[u8]) -> Option<Vec<u8>> {
        if let Some(write) = self.writes.get(map).and_then(|m| m.get(key)) {
            return write.clone();
        }
        self.state.maps.get(map)?.entries.get(key).cloned()
    }

    /// Buffer an upsert.
    pub fn put(&mut self, map: &str, key: &[u8], value: Vec<u8>) {
        self.writes
            .entry(map.to_string())
            .or_default()
            .insert(key.to_vec(), Some(value));
    }

    /// Buffer a removal.
    pub fn remove(&mut self, map: &str, key: &[u8]) {
        self.writes
            .entry(map.to_string())
            .or_default()
            .insert(key.to_vec(), None);
    }

    /// Commit sequence number of the last committed write to `key`.
    ///
    /// A write buffered in this open transaction has no sequence number
    /// yet and is deliberately not reflected here.
    pub fn version_of_last_write(&self, map: &str, key: &[u8]) -> Option<i64> {
        self.state.maps.get(map)?.write_revisions.get(key).copied()
    }

    /// Ordered scan of `[from, to)`; `to = None` runs to the end of the
    /// keyspace. The overlay is merged in, so removed keys are skipped
    /// and buffered writes appear.
    pub fn range(&self, map: &str, from: &[u8], to: Option<&[u8]>) -> Vec<(Vec<u8>, Vec<u8>)> {
        let bounds = (
            Bound::Included(from.to_vec()),
            match to {
                Some(end) => Bound::Excluded(end.to_vec()),
                None => Bound::Unbounded,
            },
        );

        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> = match self.state.maps.get(map) {
            Some(state) => state
                .entries
                .range::<Vec<u8>, _>((bounds.0.as_ref(), bounds.1.as_ref()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            None => BTreeMap::new(),
        };

        if let Some(overlay) = self.writes.get(map) {
            for (key, write) in overlay.range::<Vec<u8>, _>((bounds.0.as_ref(), bounds.1.as_ref()))
            {
                match write {
                    Some(value) => {
                        merged.insert(key.clone(), value.clone());
                    }
                    None => {
                        merged.remove(key);
                    }
                }
            }
        }

        merged.into_iter().collect()
    }

    /// Visit every entry of a map in ascending key order. The callback
    /// returns `false` to stop early.
    pub fn foreach(&self, map: &str, mut f: impl FnMut(&[u8], &[u8]) -> bool) {
        for (key, value) in self.range(map, &[], None) {
            if !f(&key, &value) {
                break;
            }
        }
    }
}
