//! Common test utilities.
//!
//! Shared helpers for the integration suites. Import with `mod common;`
//! in test files.

#![allow(dead_code)]

use std::sync::Arc;

use trellis::api::proto::{KeyValue, PutRequest, RangeRequest};
use trellis::api::EtcdService;
use trellis::config::NodeConfig;
use trellis::host::Transaction;
use trellis::time::ManualClock;
use trellis::{KvEngine, TxId};

/// A full stack on the embedded engine with a manually-stepped clock.
pub struct TestStore {
    pub engine: Arc<KvEngine>,
    pub clock: Arc<ManualClock>,
    pub service: EtcdService,
}

/// Stack with the clock frozen at second 0.
pub fn test_store() -> TestStore {
    test_store_at(0)
}

/// Stack with the clock frozen at the given second.
pub fn test_store_at(now_s: i64) -> TestStore {
    test_store_with_config(NodeConfig::default(), now_s)
}

/// Stack with a custom node configuration.
pub fn test_store_with_config(config: NodeConfig, now_s: i64) -> TestStore {
    let engine = Arc::new(KvEngine::new(config).expect("valid test configuration"));
    let clock = Arc::new(ManualClock::at(now_s));
    let service = EtcdService::new(engine.clone(), clock.clone());
    TestStore {
        engine,
        clock,
        service,
    }
}

/// Run a write transaction that cannot fail.
pub fn write<T>(engine: &KvEngine, f: impl FnOnce(&mut Transaction) -> T) -> (T, TxId) {
    engine
        .transaction(|tx| Ok::<_, std::convert::Infallible>(f(tx)))
        .expect("infallible transaction")
}

impl TestStore {
    /// Put a key and return the commit revision.
    pub fn put(&self, key: &[u8], value: &[u8]) -> i64 {
        self.put_with_lease(key, value, 0)
    }

    /// Put a leased key and return the commit revision.
    pub fn put_with_lease(&self, key: &[u8], value: &[u8], lease: i64) -> i64 {
        let resp = self
            .service
            .put(PutRequest {
                key: key.to_vec(),
                value: value.to_vec(),
                lease,
                ..Default::default()
            })
            .expect("put failed");
        resp.header.expect("missing header").revision
    }

    /// Current-state single-key read through the Range handler.
    pub fn get(&self, key: &[u8]) -> Option<KeyValue> {
        self.get_at(0, key)
    }

    /// Single-key read at a revision (0 = latest).
    pub fn get_at(&self, revision: i64, key: &[u8]) -> Option<KeyValue> {
        let resp = self
            .service
            .range(RangeRequest {
                key: key.to_vec(),
                revision,
                ..Default::default()
            })
            .expect("range failed");
        resp.kvs.into_iter().next()
    }

    /// Keys in `[from, range_end)` visible right now.
    pub fn range_keys(&self, from: &[u8], range_end: &[u8]) -> Vec<Vec<u8>> {
        let resp = self
            .service
            .range(RangeRequest {
                key: from.to_vec(),
                range_end: range_end.to_vec(),
                ..Default::default()
            })
            .expect("range failed");
        resp.kvs.into_iter().map(|kv| kv.key).collect()
    }
}
