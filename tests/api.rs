//! End-to-end tests of the etcd surface: handlers, headers, and both
//! wire encodings.

mod common;

use common::{test_store, test_store_at};
use trellis::api::proto::{
    CompactionRequest, DeleteRangeRequest, LeaseGrantRequest, LeaseKeepAliveRequest,
    LeaseLeasesRequest, LeaseRevokeRequest, LeaseTimeToLiveRequest, MemberListRequest, PutRequest,
    RangeRequest, RangeResponse,
};
use trellis::api::{grpc, json, Status};
use trellis::error::StoreError;
use trellis::KvStore;

// ============================================================================
// KV scenarios
// ============================================================================

#[test]
fn create_then_update_tracks_versions() {
    let store = test_store();

    let r1 = store.put(b"a", b"1");
    let r2 = store.put(b"a", b"2");

    let kv = store.get(b"a").unwrap();
    assert_eq!(kv.value, b"2");
    assert_eq!(kv.version, 2);
    assert_eq!(kv.create_revision, r1);
    assert_eq!(kv.mod_revision, r2);
}

#[test]
fn delete_then_recreate_resets_the_incarnation() {
    let store = test_store();

    store.put(b"a", b"1");
    let del = store
        .service
        .delete_range(DeleteRangeRequest {
            key: b"a".to_vec(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(del.deleted, 1);

    let r3 = store.put(b"a", b"2");

    let kv = store.get(b"a").unwrap();
    assert_eq!(kv.version, 1);
    assert_eq!(kv.create_revision, r3);
    assert_eq!(kv.mod_revision, r3);
}

#[test]
fn ranged_delete_spares_keys_outside_the_interval() {
    let store = test_store();

    store.put(b"a", b"x");
    store.put(b"b", b"y");
    store.put(b"c", b"z");

    let del = store
        .service
        .delete_range(DeleteRangeRequest {
            key: b"a".to_vec(),
            range_end: b"c".to_vec(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(del.deleted, 2);

    let survivors = store.range_keys(b"", b"\0");
    assert_eq!(survivors, vec![b"c".to_vec()]);
}

#[test]
fn delete_of_missing_key_deletes_nothing() {
    let store = test_store();
    let resp = store
        .service
        .delete_range(DeleteRangeRequest {
            key: b"ghost".to_vec(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(resp.deleted, 0);
    assert!(resp.prev_kvs.is_empty());
}

#[test]
fn put_and_delete_report_previous_values_on_request() {
    let store = test_store();

    let r1 = store.put(b"a", b"1");
    let put = store
        .service
        .put(PutRequest {
            key: b"a".to_vec(),
            value: b"2".to_vec(),
            prev_kv: true,
            ..Default::default()
        })
        .unwrap();
    let prev = put.prev_kv.unwrap();
    assert_eq!(prev.value, b"1");
    assert_eq!(prev.mod_revision, r1);

    let del = store
        .service
        .delete_range(DeleteRangeRequest {
            key: b"a".to_vec(),
            prev_kv: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(del.prev_kvs.len(), 1);
    assert_eq!(del.prev_kvs[0].value, b"2");
    assert_eq!(del.prev_kvs[0].version, 2);
}

#[test]
fn range_unsupported_options_are_failed_preconditions() {
    let store = test_store();

    let cases = vec![
        RangeRequest {
            limit: 5,
            ..Default::default()
        },
        RangeRequest {
            sort_order: 1,
            ..Default::default()
        },
        RangeRequest {
            keys_only: true,
            ..Default::default()
        },
        RangeRequest {
            count_only: true,
            ..Default::default()
        },
        RangeRequest {
            min_mod_revision: 3,
            ..Default::default()
        },
        RangeRequest {
            max_mod_revision: 3,
            ..Default::default()
        },
        RangeRequest {
            min_create_revision: 3,
            ..Default::default()
        },
        RangeRequest {
            max_create_revision: 3,
            ..Default::default()
        },
    ];

    for req in cases {
        let err = store.service.range(req).unwrap_err();
        assert!(matches!(err, StoreError::Unsupported { .. }));
    }
}

#[test]
fn put_unsupported_options_are_failed_preconditions() {
    let store = test_store();

    let err = store
        .service
        .put(PutRequest {
            key: b"k".to_vec(),
            ignore_value: true,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Unsupported { .. }));

    let err = store
        .service
        .put(PutRequest {
            key: b"k".to_vec(),
            ignore_lease: true,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Unsupported { .. }));
}

// ============================================================================
// Response headers
// ============================================================================

#[test]
fn write_headers_carry_the_commit_revision() {
    let store = test_store();

    let resp = store
        .service
        .put(PutRequest {
            key: b"a".to_vec(),
            value: b"1".to_vec(),
            ..Default::default()
        })
        .unwrap();
    let header = resp.header.unwrap();
    assert_eq!(header.revision, 1);
    assert_eq!(header.committed_revision, 1);
    assert_eq!(header.cluster_id, 1);
    assert_eq!(header.member_id, 1);
    assert_eq!(header.raft_term, 2);
    assert_eq!(header.committed_raft_term, 2);
}

#[test]
fn read_headers_echo_the_committed_frontier() {
    let store = test_store();
    store.put(b"a", b"1");
    store.put(b"b", b"2");

    let resp = store
        .service
        .range(RangeRequest {
            key: b"a".to_vec(),
            ..Default::default()
        })
        .unwrap();
    let header = resp.header.unwrap();
    assert_eq!(header.revision, 2);
    assert_eq!(header.committed_revision, 2);
}

// ============================================================================
// Leases
// ============================================================================

#[test]
fn leased_keys_disappear_from_reads_on_expiry() {
    let store = test_store_at(0);

    let grant = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 1,
            ..Default::default()
        })
        .unwrap();
    store.put_with_lease(b"k", b"v", grant.id);

    let visible = store.range_keys(b"k", b"k\0");
    assert_eq!(visible, vec![b"k".to_vec()]);

    store.clock.set(2);
    let visible = store.range_keys(b"k", b"k\0");
    assert!(visible.is_empty());

    // Filtering is not deletion: the record is still in the map.
    let (raw, _) = store
        .engine
        .read(|tx| KvStore::new().get(tx, b"k"));
    assert!(raw.is_some());
}

#[test]
fn put_with_unknown_or_expired_lease_is_rejected() {
    let store = test_store_at(0);

    let err = store
        .service
        .put(PutRequest {
            key: b"k".to_vec(),
            value: b"v".to_vec(),
            lease: 555,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidLease { lease: 555 }));

    let grant = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 1,
            ..Default::default()
        })
        .unwrap();
    store.clock.set(5);
    let err = store
        .service
        .put(PutRequest {
            key: b"k".to_vec(),
            value: b"v".to_vec(),
            lease: grant.id,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidLease { .. }));
}

#[test]
fn grant_defaults_nonpositive_ttls() {
    let store = test_store();
    let grant = store
        .service
        .lease_grant(LeaseGrantRequest::default())
        .unwrap();
    assert_eq!(grant.ttl, 60);
    assert!(grant.id >= 1);
}

#[test]
fn grant_default_ttl_comes_from_the_node_config() {
    let config = trellis::config::NodeConfig {
        default_lease_ttl_s: 25,
        ..Default::default()
    };
    let store = common::test_store_with_config(config, 0);

    let grant = store
        .service
        .lease_grant(LeaseGrantRequest::default())
        .unwrap();
    assert_eq!(grant.ttl, 25);

    // A positive requested TTL still wins over the configured default.
    let grant = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 7,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(grant.ttl, 7);
}

#[test]
fn revoke_deletes_bound_keys_and_is_idempotent() {
    let store = test_store_at(0);

    let grant = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 100,
            ..Default::default()
        })
        .unwrap();
    store.put_with_lease(b"bound", b"v", grant.id);
    store.put(b"free", b"w");

    store
        .service
        .lease_revoke(LeaseRevokeRequest { id: grant.id })
        .unwrap();

    assert!(store.get(b"bound").is_none());
    assert!(store.get(b"free").is_some());
    let (raw, _) = store.engine.read(|tx| KvStore::new().get(tx, b"bound"));
    assert!(raw.is_none());

    // Second revoke of the same id succeeds.
    store
        .service
        .lease_revoke(LeaseRevokeRequest { id: grant.id })
        .unwrap();
}

#[test]
fn time_to_live_counts_down_and_reports_expiry() {
    let store = test_store_at(0);

    let grant = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 10,
            ..Default::default()
        })
        .unwrap();

    store.clock.set(4);
    let ttl = store
        .service
        .lease_time_to_live(LeaseTimeToLiveRequest {
            id: grant.id,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(ttl.ttl, 6);
    assert_eq!(ttl.granted_ttl, 10);

    store.clock.set(11);
    let ttl = store
        .service
        .lease_time_to_live(LeaseTimeToLiveRequest {
            id: grant.id,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(ttl.ttl, -1);
    assert_eq!(ttl.granted_ttl, 0);
}

#[test]
fn time_to_live_keys_option_is_rejected() {
    let store = test_store();
    let err = store
        .service
        .lease_time_to_live(LeaseTimeToLiveRequest {
            id: 1,
            keys: true,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Unsupported { .. }));
}

#[test]
fn keep_alive_extends_life_and_misses_unknown_ids() {
    let store = test_store_at(0);

    let grant = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 10,
            ..Default::default()
        })
        .unwrap();

    store.clock.set(8);
    let ka = store
        .service
        .lease_keep_alive(LeaseKeepAliveRequest { id: grant.id })
        .unwrap();
    assert_eq!(ka.ttl, 10);

    // Refreshed at t=8, so still live just before t=18.
    store.clock.set(17);
    let ttl = store
        .service
        .lease_time_to_live(LeaseTimeToLiveRequest {
            id: grant.id,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(ttl.ttl, 1);

    let err = store
        .service
        .lease_keep_alive(LeaseKeepAliveRequest { id: 987654 })
        .unwrap_err();
    assert!(matches!(err, StoreError::LeaseNotFound { lease: 987654 }));
}

#[test]
fn lease_listing_hides_expired_entries() {
    let store = test_store_at(0);

    let keep = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 100,
            ..Default::default()
        })
        .unwrap();
    store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 1,
            ..Default::default()
        })
        .unwrap();

    store.clock.set(50);
    let listing = store
        .service
        .lease_leases(LeaseLeasesRequest::default())
        .unwrap();
    let ids: Vec<i64> = listing.leases.iter().map(|status| status.id).collect();
    assert_eq!(ids, vec![keep.id]);
}

// ============================================================================
// Compaction
// ============================================================================

#[test]
fn compact_rejects_physical() {
    let store = test_store();
    let err = store
        .service
        .compact(CompactionRequest {
            revision: 1,
            physical: true,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Unsupported { .. }));
}

#[test]
fn historical_reads_survive_compaction_at_or_above_the_point() {
    let store = test_store();

    // Interleave other keys so "a" changes at revisions 5, 7, 9.
    store.put(b"f1", b"x"); // 1
    store.put(b"f2", b"x"); // 2
    store.put(b"f3", b"x"); // 3
    store.put(b"f4", b"x"); // 4
    let r5 = store.put(b"a", b"v5"); // 5
    store.put(b"f5", b"x"); // 6
    let r7 = store.put(b"a", b"v7"); // 7
    store.put(b"f6", b"x"); // 8
    let r9 = store.put(b"a", b"v9"); // 9
    assert_eq!((r5, r7, r9), (5, 7, 9));

    store
        .service
        .compact(CompactionRequest {
            revision: 8,
            ..Default::default()
        })
        .unwrap();

    let at9 = store.get_at(9, b"a").unwrap();
    assert_eq!(at9.value, b"v9");
    assert_eq!(at9.mod_revision, 9);

    // Below the compaction point the key reads as missing.
    assert!(store.get_at(6, b"a").is_none());
}

#[test]
fn compact_sweeps_expired_leases() {
    let store = test_store_at(0);

    let grant = store
        .service
        .lease_grant(LeaseGrantRequest {
            ttl: 1,
            ..Default::default()
        })
        .unwrap();
    store.put_with_lease(b"k", b"v", grant.id);

    store.clock.set(10);
    store
        .service
        .compact(CompactionRequest {
            revision: 1,
            ..Default::default()
        })
        .unwrap();

    // The sweep really removed the record, not just filtered it.
    let (raw, _) = store.engine.read(|tx| KvStore::new().get(tx, b"k"));
    assert!(raw.is_none());

    let ttl = store
        .service
        .lease_time_to_live(LeaseTimeToLiveRequest {
            id: grant.id,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(ttl.ttl, -1);
}

// ============================================================================
// Cluster
// ============================================================================

#[test]
fn member_list_names_nodes_from_their_metadata() {
    let store = test_store();
    store.engine.add_node(5, br#"{"name":"node-5"}"#);
    store.engine.add_node(6, b"not json at all");

    let resp = store
        .service
        .member_list(MemberListRequest::default())
        .unwrap();
    assert_eq!(resp.members.len(), 2);
    assert_eq!(resp.members[0].id, 5);
    assert_eq!(resp.members[0].name, "node-5");
    assert_eq!(resp.members[1].id, 6);
    assert_eq!(resp.members[1].name, "default");
}

// ============================================================================
// Binary encoding
// ============================================================================

#[test]
fn grpc_dispatch_round_trips_put_and_range() {
    let store = test_store();

    let put = PutRequest {
        key: b"a".to_vec(),
        value: b"1".to_vec(),
        ..Default::default()
    };
    grpc::dispatch(
        &store.service,
        "/etcdserverpb.KV/Put",
        &grpc::encode_frame(&put),
    )
    .unwrap();

    let range = RangeRequest {
        key: b"a".to_vec(),
        ..Default::default()
    };
    let reply = grpc::dispatch(
        &store.service,
        "/etcdserverpb.KV/Range",
        &grpc::encode_frame(&range),
    )
    .unwrap();

    let resp: RangeResponse = grpc::decode_frame(&reply).unwrap();
    assert_eq!(resp.count, 1);
    assert_eq!(resp.kvs[0].value, b"1");
    assert!(resp.header.is_some());
}

#[test]
fn grpc_dispatch_rejects_unknown_paths_and_bad_frames() {
    let store = test_store();

    let err = grpc::dispatch(&store.service, "/etcdserverpb.KV/Nope", &[0, 0, 0, 0, 0])
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownMethod { .. }));

    let err = grpc::dispatch(&store.service, "/etcdserverpb.KV/Range", &[1, 2]).unwrap_err();
    assert!(matches!(err, StoreError::InvalidRequest { .. }));
}

// ============================================================================
// JSON encoding
// ============================================================================

#[test]
fn json_dispatch_serves_the_kv_surface() {
    let store = test_store();

    let reply = json::dispatch(
        &store.service,
        "/v3/kv/put",
        Some("application/json"),
        br#"{"key":"YQ==","value":"MQ=="}"#,
    );
    assert_eq!(reply.status, 200);

    let reply = json::dispatch(
        &store.service,
        "/v3/kv/range",
        Some("application/json"),
        br#"{"key":"YQ=="}"#,
    );
    assert_eq!(reply.status, 200);
    let resp: RangeResponse = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(resp.count, 1);
    assert_eq!(resp.kvs[0].key, b"a");
    assert_eq!(resp.kvs[0].value, b"1");

    // Byte fields travel base64-encoded.
    let raw: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(raw["kvs"][0]["key"], "YQ==");
    assert_eq!(raw["kvs"][0]["value"], "MQ==");
}

#[test]
fn json_dispatch_rejects_wrong_content_type() {
    let store = test_store();

    let reply = json::dispatch(&store.service, "/v3/kv/range", Some("text/plain"), b"{}");
    assert_eq!(reply.status, 415);

    let reply = json::dispatch(&store.service, "/v3/kv/range", None, b"{}");
    assert_eq!(reply.status, 415);

    let reply = json::dispatch(
        &store.service,
        "/v3/kv/range",
        Some("application/json; charset=utf-8"),
        b"{}",
    );
    assert_eq!(reply.status, 200);
}

#[test]
fn json_dispatch_rejects_malformed_bodies() {
    let store = test_store();

    let reply = json::dispatch(
        &store.service,
        "/v3/kv/put",
        Some("application/json"),
        b"{not json",
    );
    assert_eq!(reply.status, 400);
    let status: Status = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(status.code, 3);
}

#[test]
fn json_dispatch_surfaces_business_errors_as_status_bodies() {
    let store = test_store();

    let reply = json::dispatch(
        &store.service,
        "/v3/kv/range",
        Some("application/json"),
        br#"{"key":"YQ==","limit":5}"#,
    );
    assert_eq!(reply.status, 400);
    let status: Status = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(status.code, 9);
    assert!(status.message.contains("limit 5 not yet supported"));
}

#[test]
fn json_lease_flow_round_trips() {
    let store = test_store_at(0);

    let reply = json::dispatch(
        &store.service,
        "/v3/lease/grant",
        Some("application/json"),
        br#"{"TTL":30}"#,
    );
    assert_eq!(reply.status, 200);
    let grant: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(grant["TTL"], 30);
    let id = grant["ID"].as_i64().unwrap();
    assert!(id >= 1);

    let body = format!(r#"{{"ID":{id}}}"#);
    let reply = json::dispatch(
        &store.service,
        "/v3/lease/timetolive",
        Some("application/json"),
        body.as_bytes(),
    );
    assert_eq!(reply.status, 200);
    let ttl: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(ttl["grantedTTL"], 30);
}
