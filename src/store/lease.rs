//! Lease store.
//!
//! Leases live in their own host map keyed by the lease id. The store
//! never samples time itself: callers pass the host-time second so one
//! transaction sees one consistent clock.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::kv::KvStore;
use crate::host::Transaction;

/// Name of the host map holding leases.
pub const LEASES_TABLE: &str = "leases";

/// TTL stored when a grant does not request a positive TTL and the
/// node configuration does not override the fallback. The server may
/// override the client's requested TTL.
pub const DEFAULT_TTL_S: i64 = 60;

/// A granted lease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    /// Time to live in seconds.
    pub ttl: i64,
    /// Host-time second the lease was granted or last refreshed.
    pub start_time: i64,
}

impl Lease {
    pub fn new(ttl: i64, start_time: i64) -> Self {
        Self { ttl, start_time }
    }

    /// Sentinel returned for missing or expired leases.
    pub fn expired() -> Self {
        Self {
            ttl: 0,
            start_time: 0,
        }
    }

    /// Remaining TTL at `now_s`; expired leases report -1.
    pub fn ttl_remaining(&self, now_s: i64) -> i64 {
        let remaining = (self.start_time + self.ttl) - now_s;
        if remaining <= 0 {
            -1
        } else {
            remaining
        }
    }

    /// Whether the lease has run out at `now_s`.
    pub fn has_expired(&self, now_s: i64) -> bool {
        (self.start_time + self.ttl) - now_s <= 0
    }
}

/// Facade over the `leases` map.
#[derive(Debug, Default)]
pub struct LeaseStore;

impl LeaseStore {
    pub fn new() -> Self {
        Self
    }

    /// Grant a lease with a fresh random id.
    ///
    /// Ids are uniform in `[1, i64::MAX]`; the draw is repeated on the
    /// astronomically unlikely collision with a stored id. A requested
    /// TTL that is not positive falls back to `default_ttl_s`, the
    /// node-configured default.
    pub fn grant(
        &self,
        tx: &mut Transaction,
        ttl: i64,
        now_s: i64,
        default_ttl_s: i64,
    ) -> (i64, Lease) {
        let ttl = if ttl > 0 { ttl } else { default_ttl_s };

        let mut rng = rand::thread_rng();
        let id = loop {
            let candidate: i64 = rng.gen_range(1..=i64::MAX);
            if tx.get(LEASES_TABLE, &candidate.to_be_bytes()).is_none() {
                break candidate;
            }
        };

        let lease = Lease::new(ttl, now_s);
        tx.put(LEASES_TABLE, &id.to_be_bytes(), encode(&lease));
        tracing::debug!(id, ttl, "granted lease");
        (id, lease)
    }

    /// Remove a lease. Missing ids are not an error.
    pub fn revoke(&self, tx: &mut Transaction, id: i64) {
        tx.remove(LEASES_TABLE, &id.to_be_bytes());
    }

    /// Refresh a lease's start time, returning its TTL; 0 when the id
    /// is unknown.
    pub fn keep_alive(&self, tx: &mut Transaction, id: i64, now_s: i64) -> i64 {
        match self.stored(tx, id) {
            Some(mut lease) => {
                lease.start_time = now_s;
                tx.put(LEASES_TABLE, &id.to_be_bytes(), encode(&lease));
                lease.ttl
            }
            None => 0,
        }
    }

    /// Look up a lease; missing or expired ids yield the expired
    /// sentinel.
    pub fn get(&self, tx: &Transaction, id: i64, now_s: i64) -> Lease {
        match self.stored(tx, id) {
            Some(lease) if !lease.has_expired(now_s) => lease,
            _ => Lease::expired(),
        }
    }

    /// Whether the lease exists and is live at `now_s`.
    pub fn contains(&self, tx: &Transaction, id: i64, now_s: i64) -> bool {
        self.stored(tx, id)
            .is_some_and(|lease| !lease.has_expired(now_s))
    }

    /// Visit every stored lease, expired or not. The callback returns
    /// `false` to stop early.
    pub fn foreach(&self, tx: &Transaction, mut f: impl FnMut(i64, &Lease) -> bool) {
        tx.foreach(LEASES_TABLE, |key, raw| {
            let Ok(id_bytes) = <[u8; 8]>::try_from(key) else {
                return true;
            };
            match bincode::deserialize::<Lease>(raw) {
                Ok(lease) => f(i64::from_be_bytes(id_bytes), &lease),
                Err(_) => true,
            }
        });
    }

    fn stored(&self, tx: &Transaction, id: i64) -> Option<Lease> {
        let raw = tx.get(LEASES_TABLE, &id.to_be_bytes())?;
        bincode::deserialize(&raw).ok()
    }
}

/// Revoke every expired lease and remove the keys bound to them.
///
/// Runs during Compaction and wherever else the RPC layer chooses; the
/// read path never removes anything, it only filters, so this sweep is
/// what actually reclaims leased keys. Returns the revoked ids.
pub fn revoke_expired_leases(tx: &mut Transaction, now_s: i64) -> Vec<i64> {
    let leases = LeaseStore::new();

    let mut expired = Vec::new();
    leases.foreach(tx, |id, lease| {
        if lease.has_expired(now_s) {
            expired.push(id);
        }
        true
    });

    for id in &expired {
        tracing::debug!(id, "revoking expired lease");
        leases.revoke(tx, *id);
    }

    if !expired.is_empty() {
        let records = KvStore::new();
        let mut doomed = Vec::new();
        records.foreach(tx, |key, value| {
            if value.lease != 0 && expired.contains(&value.lease) {
                doomed.push(key.to_vec());
            }
            true
        });
        for key in doomed {
            tracing::debug!(key = %String::from_utf8_lossy(&key), "removing key of expired lease");
            records.remove(tx, &key);
        }
    }

    expired
}

fn encode(lease: &Lease) -> Vec<u8> {
    bincode::serialize(lease).expect("lease serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_ttl_counts_down_to_minus_one() {
        let lease = Lease::new(10, 100);
        assert_eq!(lease.ttl_remaining(100), 10);
        assert_eq!(lease.ttl_remaining(105), 5);
        assert_eq!(lease.ttl_remaining(110), -1);
        assert_eq!(lease.ttl_remaining(500), -1);
    }

    #[test]
    fn expiry_is_inclusive_of_the_deadline() {
        let lease = Lease::new(10, 100);
        assert!(!lease.has_expired(109));
        assert!(lease.has_expired(110));
        assert!(lease.has_expired(111));
    }

    #[test]
    fn expired_sentinel_reports_minus_one() {
        let lease = Lease::expired();
        assert!(lease.has_expired(0));
        assert_eq!(lease.ttl_remaining(0), -1);
        assert_eq!(lease.ttl, 0);
    }
}
