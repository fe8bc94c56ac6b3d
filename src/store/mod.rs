//! Store facades over the host's maps: versioned records and leases.

pub mod kv;
pub mod lease;

pub use kv::{KvStore, Value, RECORDS_TABLE};
pub use lease::{revoke_expired_leases, Lease, LeaseStore, DEFAULT_TTL_S, LEASES_TABLE};
