//! Record store facade.
//!
//! A thin MVCC-aware adapter over the host's `records` map. Stored
//! records carry a zero sentinel in `create_revision` when they are the
//! first write of an incarnation: a write executes inside a transaction
//! that does not know its own commit sequence number yet, so the real
//! revision is materialized on read ("hydration") from the host's
//! last-write version for the key.

use serde::{Deserialize, Serialize};

use crate::host::Transaction;

/// Name of the host map holding the live records.
pub const RECORDS_TABLE: &str = "records";

/// A versioned record as seen by clients.
///
/// `mod_revision` is never trusted from storage; it is derived on every
/// read. `create_revision` is stored as 0 until the first read after
/// the creating transaction commits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    /// Client payload.
    pub data: Vec<u8>,
    /// Revision at which the current incarnation was created.
    pub create_revision: i64,
    /// Revision of the last modification (derived on read).
    pub mod_revision: i64,
    /// Per-key counter: 1 on (re)creation, +1 per overwrite.
    pub version: i64,
    /// Bound lease id, 0 for none.
    pub lease: i64,
}

impl Value {
    /// A fresh record holding `data`, optionally bound to a lease.
    pub fn new(data: Vec<u8>, lease: i64) -> Self {
        Self {
            data,
            create_revision: 0,
            mod_revision: 0,
            version: 1,
            lease,
        }
    }

    /// An index tombstone recording a deletion at `mod_revision`.
    pub fn tombstone(mod_revision: i64) -> Self {
        Self {
            data: Vec::new(),
            create_revision: 0,
            mod_revision,
            version: 0,
            lease: 0,
        }
    }

    /// Whether this snapshot records a deletion.
    pub fn is_tombstone(&self) -> bool {
        self.version == 0
    }
}

/// Facade over the `records` map. Carries no state of its own; every
/// operation runs against the supplied transaction handle.
#[derive(Debug, Default)]
pub struct KvStore;

impl KvStore {
    pub fn new() -> Self {
        Self
    }

    /// Fetch and hydrate the record stored under `key`.
    pub fn get(&self, tx: &Transaction, key: &[u8]) -> Option<Value> {
        let raw = tx.get(RECORDS_TABLE, key)?;
        let mut value = decode(key, &raw)?;
        hydrate(tx, key, &mut value);
        Some(value)
    }

    /// Store `value` under `key`, replacing any existing record.
    ///
    /// An overwrite bumps the per-key version and preserves the
    /// incarnation's create revision; a fresh insert keeps the zero
    /// sentinel for materialization on read. Returns the previous
    /// record, hydrated.
    pub fn put(&self, tx: &mut Transaction, key: &[u8], mut value: Value) -> Option<Value> {
        let old = self.get(tx, key);

        if let Some(old) = &old {
            value.create_revision = if old.create_revision != 0 {
                old.create_revision
            } else {
                // The previous write has committed by now, so the host
                // knows its revision even though the stored sentinel
                // was never materialized.
                tx.version_of_last_write(RECORDS_TABLE, key).unwrap_or(0)
            };
            value.version = old.version + 1;
        }

        tx.put(RECORDS_TABLE, key, encode(&value));
        old
    }

    /// Remove the record under `key`, returning it hydrated.
    pub fn remove(&self, tx: &mut Transaction, key: &[u8]) -> Option<Value> {
        let old = self.get(tx, key);
        tx.remove(RECORDS_TABLE, key);
        old
    }

    /// Hydrated scan of `[from, to)` in key order; `to = None` runs to
    /// the end of the keyspace.
    pub fn range(&self, tx: &Transaction, from: &[u8], to: Option<&[u8]>) -> Vec<(Vec<u8>, Value)> {
        tx.range(RECORDS_TABLE, from, to)
            .into_iter()
            .filter_map(|(key, raw)| {
                let mut value = decode(&key, &raw)?;
                hydrate(tx, &key, &mut value);
                Some((key, value))
            })
            .collect()
    }

    /// Visit every record in ascending key order, hydrated. The
    /// callback returns `false` to stop early.
    pub fn foreach(&self, tx: &Transaction, mut f: impl FnMut(&[u8], &Value) -> bool) {
        tx.foreach(RECORDS_TABLE, |key, raw| match decode(key, raw) {
            Some(mut value) => {
                hydrate(tx, key, &mut value);
                f(key, &value)
            }
            None => true,
        });
    }
}

/// Derive `mod_revision` (always) and `create_revision` (when the
/// stored sentinel is zero) from the host's last-write version.
fn hydrate(tx: &Transaction, key: &[u8], value: &mut Value) {
    let revision = tx
        .version_of_last_write(RECORDS_TABLE, key)
        .unwrap_or_default();
    if value.create_revision == 0 {
        value.create_revision = revision;
    }
    value.mod_revision = revision;
}

fn encode(value: &Value) -> Vec<u8> {
    // mod_revision is derived state; persist it zeroed.
    let stored = Value {
        mod_revision: 0,
        ..value.clone()
    };
    bincode::serialize(&stored).expect("record serialization cannot fail")
}

fn decode(key: &[u8], raw: &[u8]) -> Option<Value> {
    match bincode::deserialize(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                key = %String::from_utf8_lossy(key),
                %err,
                "dropping undecodable record"
            );
            None
        }
    }
}
