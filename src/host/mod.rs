//! Host engine interface and its embedded in-process implementation.
//!
//! The store is written against a small host contract: serializable
//! transactions over named byte maps, gap-free commit sequence numbers,
//! per-key last-write versions, and post-commit diff delivery to
//! indexing strategies. [`engine::KvEngine`] implements that contract
//! in process so the full stack can run and be tested without the
//! production host.

pub mod engine;
pub mod tx;

pub use engine::{IndexingStrategy, KvEngine, TxId, NODES_TABLE};
pub use tx::Transaction;
