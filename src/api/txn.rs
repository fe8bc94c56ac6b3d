//! Txn handler: compare, branch, execute.
//!
//! All compares are evaluated against current state inside the same
//! host transaction as the branch ops, so the whole Txn is atomic: the
//! service layer aborts the transaction when any nested op errors, and
//! no branch effect survives.

use super::kv;
use super::proto::{Compare, CompareResult, CompareTarget, RequestOp, ResponseOp, TxnRequest, TxnResponse};
use crate::core::error::{StoreError, StoreResult};
use crate::host::Transaction;
use crate::index::KvIndexer;
use crate::store::{KvStore, Value};

/// Evaluate a Txn request and execute the chosen branch.
///
/// Nested Txns recurse on the same transaction handle; depth is bounded
/// only by what the wire decoder accepted.
pub fn txn(
    tx: &mut Transaction,
    index: &KvIndexer,
    now_s: i64,
    req: &TxnRequest,
) -> StoreResult<TxnResponse> {
    tracing::debug!(
        compares = req.compare.len(),
        success = req.success.len(),
        failure = req.failure.len(),
        "Txn"
    );

    let records = KvStore::new();
    let mut succeeded = true;
    for cmp in &req.compare {
        if !cmp.range_end.is_empty() {
            return Err(StoreError::unsupported("range_end in comparison"));
        }
        // Absent keys compare as an all-zero record.
        let value = records.get(tx, &cmp.key).unwrap_or_default();
        succeeded = evaluate_compare(cmp, &value)? && succeeded;
    }

    let branch = if succeeded { &req.success } else { &req.failure };

    let mut responses = Vec::with_capacity(branch.len());
    for op in branch {
        responses.push(execute_op(tx, index, now_s, op)?);
    }

    Ok(TxnResponse {
        header: None,
        succeeded,
        responses,
    })
}

fn execute_op(
    tx: &mut Transaction,
    index: &KvIndexer,
    now_s: i64,
    op: &RequestOp,
) -> StoreResult<ResponseOp> {
    if let Some(req) = &op.request_range {
        Ok(ResponseOp {
            response_range: Some(kv::range(tx, index, now_s, req)?),
            ..Default::default()
        })
    } else if let Some(req) = &op.request_put {
        Ok(ResponseOp {
            response_put: Some(kv::put(tx, now_s, req)?),
            ..Default::default()
        })
    } else if let Some(req) = &op.request_delete_range {
        Ok(ResponseOp {
            response_delete_range: Some(kv::delete_range(tx, req)?),
            ..Default::default()
        })
    } else if let Some(req) = &op.request_txn {
        Ok(ResponseOp {
            response_txn: Some(txn(tx, index, now_s, req)?),
            ..Default::default()
        })
    } else {
        Err(StoreError::UnknownRequestOp)
    }
}

/// Evaluate one compare against the record's current state.
///
/// The target must be recognized and its matching union field present,
/// otherwise the whole Txn fails with an invalid-argument error; same
/// for an unrecognized result operator.
pub(crate) fn evaluate_compare(cmp: &Compare, value: &Value) -> StoreResult<bool> {
    match (CompareTarget::from_i32(cmp.target), cmp) {
        (
            Some(CompareTarget::Value),
            Compare {
                value: Some(expected),
                ..
            },
        ) => compare_bytes(cmp.result, &value.data, expected),
        (
            Some(CompareTarget::Version),
            Compare {
                version: Some(expected),
                ..
            },
        ) => compare_i64(cmp.result, value.version, *expected),
        (
            Some(CompareTarget::Create),
            Compare {
                create_revision: Some(expected),
                ..
            },
        ) => compare_i64(cmp.result, value.create_revision, *expected),
        (
            Some(CompareTarget::Mod),
            Compare {
                mod_revision: Some(expected),
                ..
            },
        ) => compare_i64(cmp.result, value.mod_revision, *expected),
        (
            Some(CompareTarget::Lease),
            Compare {
                lease: Some(expected),
                ..
            },
        ) => compare_i64(cmp.result, value.lease, *expected),
        _ => Err(StoreError::UnknownCompareTarget { target: cmp.target }),
    }
}

fn compare_i64(result: i32, stored: i64, target: i64) -> StoreResult<bool> {
    match CompareResult::from_i32(result) {
        Some(CompareResult::Equal) => Ok(stored == target),
        Some(CompareResult::Greater) => Ok(stored > target),
        Some(CompareResult::Less) => Ok(stored < target),
        Some(CompareResult::NotEqual) => Ok(stored != target),
        None => Err(StoreError::UnknownCompareResult { result }),
    }
}

fn compare_bytes(result: i32, stored: &[u8], target: &[u8]) -> StoreResult<bool> {
    match CompareResult::from_i32(result) {
        Some(CompareResult::Equal) => Ok(stored == target),
        Some(CompareResult::Greater) => Ok(stored > target),
        Some(CompareResult::Less) => Ok(stored < target),
        Some(CompareResult::NotEqual) => Ok(stored != target),
        None => Err(StoreError::UnknownCompareResult { result }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: i64, create: i64, modr: i64, lease: i64, data: &[u8]) -> Value {
        Value {
            data: data.to_vec(),
            create_revision: create,
            mod_revision: modr,
            version,
            lease,
        }
    }

    fn cmp_version(result: CompareResult, expected: i64) -> Compare {
        Compare {
            result: result as i32,
            target: CompareTarget::Version as i32,
            key: b"k".to_vec(),
            version: Some(expected),
            ..Default::default()
        }
    }

    #[test]
    fn version_compare_orders_totally() {
        let value = record(3, 1, 2, 0, b"");
        assert!(evaluate_compare(&cmp_version(CompareResult::Equal, 3), &value).unwrap());
        assert!(evaluate_compare(&cmp_version(CompareResult::Greater, 2), &value).unwrap());
        assert!(evaluate_compare(&cmp_version(CompareResult::Less, 4), &value).unwrap());
        assert!(evaluate_compare(&cmp_version(CompareResult::NotEqual, 4), &value).unwrap());
        assert!(!evaluate_compare(&cmp_version(CompareResult::Equal, 4), &value).unwrap());
    }

    #[test]
    fn value_compare_is_lexicographic_on_bytes() {
        let value = record(1, 1, 1, 0, b"b");
        let cmp = Compare {
            result: CompareResult::Greater as i32,
            target: CompareTarget::Value as i32,
            key: b"k".to_vec(),
            value: Some(b"a".to_vec()),
            ..Default::default()
        };
        assert!(evaluate_compare(&cmp, &value).unwrap());
    }

    #[test]
    fn missing_union_field_fails_the_compare() {
        let cmp = Compare {
            result: CompareResult::Equal as i32,
            target: CompareTarget::Version as i32,
            key: b"k".to_vec(),
            // value set, version target: the has_version check fails
            value: Some(b"x".to_vec()),
            ..Default::default()
        };
        let err = evaluate_compare(&cmp, &Value::default()).unwrap_err();
        assert!(matches!(err, StoreError::UnknownCompareTarget { .. }));
    }

    #[test]
    fn unknown_result_operator_is_rejected() {
        let mut cmp = cmp_version(CompareResult::Equal, 1);
        cmp.result = 99;
        let err = evaluate_compare(&cmp, &Value::default()).unwrap_err();
        assert!(matches!(err, StoreError::UnknownCompareResult { result: 99 }));
    }

    #[test]
    fn lease_target_compares_lease_ids() {
        let value = record(1, 1, 1, 42, b"");
        let cmp = Compare {
            result: CompareResult::Equal as i32,
            target: CompareTarget::Lease as i32,
            key: b"k".to_vec(),
            lease: Some(42),
            ..Default::default()
        };
        assert!(evaluate_compare(&cmp, &value).unwrap());
    }
}
