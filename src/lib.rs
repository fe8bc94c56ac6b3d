//! Trellis - etcd-compatible MVCC key-value core for transaction hosts.
//!
//! Trellis implements the etcd v3 KV, Lease, Compaction, and Cluster
//! semantics as an application embedded in a replicated transaction
//! host. The host supplies serializable transactions over named byte
//! maps, gap-free commit sequence numbers, per-key last-write versions,
//! and a post-commit indexing callback; Trellis layers revisioned
//! records, lease-bound key lifetimes, compare-and-swap transactions,
//! and historical reads on top.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    etcd v3 API (api::*)                         │
//! │  Range │ Put │ DeleteRange │ Txn │ Compact │ Lease* │ Members   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//! ┌──────────────────────────────────────────────┬──────────────────┐
//! │              Store facades (store::*)        │  History index   │
//! │   records: hydrated MVCC metadata            │  (index::*)      │
//! │   leases: TTL gate for leased keys           │  reads at any    │
//! │                                              │  past revision   │
//! └──────────────────────────────────────────────┴──────────────────┘
//!                                 │                       ▲
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Host engine (host::*)                         │
//! │  serializable txs │ commit seqnos │ last-write versions │ diffs │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! ## Core
//! - [`core::config`] - Node identity and store defaults
//! - [`core::error`] - Error taxonomy and gRPC/HTTP code mapping
//! - [`core::time`] - Untrusted host-time sources
//!
//! ## Host
//! - [`host::engine`] - Embedded host engine and indexing callback
//! - [`host::tx`] - Transaction handle with read-your-writes overlay
//!
//! ## Store
//! - [`store::kv`] - Versioned records with on-read hydration
//! - [`store::lease`] - Leases and the expired-lease sweep
//!
//! ## Index
//! - [`index`] - MVCC history index with tombstones and compaction
//!
//! ## API
//! - [`api::service`] - Per-RPC transaction scoping and header fill
//! - [`api::proto`] - Wire types shared by both encodings
//! - [`api::grpc`] / [`api::json`] - Binary and JSON dispatch
//!
//! # Key Invariants
//!
//! - Revisions are the host's commit sequence numbers: monotonic and
//!   gap-free, assigned at commit
//! - A record's `version` restarts at 1 per incarnation and its
//!   `create_revision` survives overwrites
//! - `mod_revision` is derived on read from the host's last-write
//!   version, never trusted from storage
//! - The history index observes commits in revision order and keeps
//!   tombstones so delete-then-recreate is distinguishable
//! - Expired leases hide their keys from reads immediately; the keys
//!   are reclaimed by the sweep in Compact or an explicit revoke

// Core infrastructure
pub mod core;

// Host engine contract and embedded implementation
pub mod host;

// Store facades
pub mod store;

// MVCC history index
pub mod index;

// etcd v3 API surface
pub mod api;

// Re-exports for convenience
pub use self::core::{config, error, time};
pub use api::EtcdService;
pub use host::{KvEngine, Transaction, TxId};
pub use index::KvIndexer;
pub use store::{KvStore, Lease, LeaseStore, Value};
