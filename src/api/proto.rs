//! Wire message types for the etcd v3 surface.
//!
//! One set of in-process types carries both encodings: manual
//! `prost::Message` implementations with etcd's exact field numbers for
//! the binary gRPC payloads (no proto files, no codegen), and serde for
//! the JSON-over-HTTP encoding, where byte fields travel base64-encoded
//! and oneof unions flatten into optional fields the way etcd's own
//! JSON gateway renders them.
//!
//! `ResponseHeader` extends etcd's with `committed_revision` and
//! `committed_raft_term` (fields 5 and 6) so clients can distinguish
//! the serving revision from the globally committed one.

use prost::encoding::{self, DecodeContext, WireType};
use prost::{DecodeError, Message};
use serde::{Deserialize, Serialize};

/// Base64 codec for required byte fields in the JSON encoding.
mod b64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

/// Base64 codec for optional byte fields.
mod b64_opt {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => STANDARD
                .decode(text.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Base64 codec for repeated byte fields.
mod b64_list {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(list: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded: Vec<String> = list.iter().map(|b| STANDARD.encode(b)).collect();
        serializer.collect_seq(encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        let encoded = Vec::<String>::deserialize(deserializer)?;
        encoded
            .into_iter()
            .map(|text| {
                STANDARD
                    .decode(text.as_bytes())
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}

// Scalar field helpers: proto3 semantics, default values stay off the
// wire.

fn put_u64(tag: u32, value: u64, buf: &mut impl prost::bytes::BufMut) {
    if value != 0 {
        encoding::uint64::encode(tag, &value, buf);
    }
}

fn len_u64(tag: u32, value: u64) -> usize {
    if value != 0 {
        encoding::uint64::encoded_len(tag, &value)
    } else {
        0
    }
}

fn put_i64(tag: u32, value: i64, buf: &mut impl prost::bytes::BufMut) {
    if value != 0 {
        encoding::int64::encode(tag, &value, buf);
    }
}

fn len_i64(tag: u32, value: i64) -> usize {
    if value != 0 {
        encoding::int64::encoded_len(tag, &value)
    } else {
        0
    }
}

fn put_i32(tag: u32, value: i32, buf: &mut impl prost::bytes::BufMut) {
    if value != 0 {
        encoding::int32::encode(tag, &value, buf);
    }
}

fn len_i32(tag: u32, value: i32) -> usize {
    if value != 0 {
        encoding::int32::encoded_len(tag, &value)
    } else {
        0
    }
}

fn put_bool(tag: u32, value: bool, buf: &mut impl prost::bytes::BufMut) {
    if value {
        encoding::bool::encode(tag, &value, buf);
    }
}

fn len_bool(tag: u32, value: bool) -> usize {
    if value {
        encoding::bool::encoded_len(tag, &value)
    } else {
        0
    }
}

fn put_bytes(tag: u32, value: &Vec<u8>, buf: &mut impl prost::bytes::BufMut) {
    if !value.is_empty() {
        encoding::bytes::encode(tag, value, buf);
    }
}

fn len_bytes(tag: u32, value: &Vec<u8>) -> usize {
    if !value.is_empty() {
        encoding::bytes::encoded_len(tag, value)
    } else {
        0
    }
}

fn put_string(tag: u32, value: &String, buf: &mut impl prost::bytes::BufMut) {
    if !value.is_empty() {
        encoding::string::encode(tag, value, buf);
    }
}

fn len_string(tag: u32, value: &String) -> usize {
    if !value.is_empty() {
        encoding::string::encoded_len(tag, value)
    } else {
        0
    }
}

fn put_msg<M: Message>(tag: u32, value: &Option<M>, buf: &mut impl prost::bytes::BufMut) {
    if let Some(msg) = value {
        encoding::message::encode(tag, msg, buf);
    }
}

fn len_msg<M: Message>(tag: u32, value: &Option<M>) -> usize {
    value
        .as_ref()
        .map(|msg| encoding::message::encoded_len(tag, msg))
        .unwrap_or(0)
}

fn merge_msg<M: Message + Default>(
    slot: &mut Option<M>,
    wire_type: WireType,
    buf: &mut impl prost::bytes::Buf,
    ctx: DecodeContext,
) -> Result<(), DecodeError> {
    let mut msg = slot.take().unwrap_or_default();
    encoding::message::merge(wire_type, &mut msg, buf, ctx)?;
    *slot = Some(msg);
    Ok(())
}

fn merge_opt_i64(
    slot: &mut Option<i64>,
    wire_type: WireType,
    buf: &mut impl prost::bytes::Buf,
    ctx: DecodeContext,
) -> Result<(), DecodeError> {
    let mut value = slot.take().unwrap_or_default();
    encoding::int64::merge(wire_type, &mut value, buf, ctx)?;
    *slot = Some(value);
    Ok(())
}

// ============================================================================
// ResponseHeader
// ============================================================================

/// etcdserverpb.ResponseHeader, extended with the committed transaction
/// identifier of the serving node.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseHeader {
    pub cluster_id: u64,           // field 1
    pub member_id: u64,            // field 2
    pub revision: i64,             // field 3
    pub raft_term: u64,            // field 4
    pub committed_revision: i64,   // field 5
    pub committed_raft_term: u64,  // field 6
}

impl Message for ResponseHeader {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_u64(1, self.cluster_id, buf);
        put_u64(2, self.member_id, buf);
        put_i64(3, self.revision, buf);
        put_u64(4, self.raft_term, buf);
        put_i64(5, self.committed_revision, buf);
        put_u64(6, self.committed_raft_term, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::uint64::merge(wire_type, &mut self.cluster_id, buf, ctx),
            2 => encoding::uint64::merge(wire_type, &mut self.member_id, buf, ctx),
            3 => encoding::int64::merge(wire_type, &mut self.revision, buf, ctx),
            4 => encoding::uint64::merge(wire_type, &mut self.raft_term, buf, ctx),
            5 => encoding::int64::merge(wire_type, &mut self.committed_revision, buf, ctx),
            6 => encoding::uint64::merge(wire_type, &mut self.committed_raft_term, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_u64(1, self.cluster_id)
            + len_u64(2, self.member_id)
            + len_i64(3, self.revision)
            + len_u64(4, self.raft_term)
            + len_i64(5, self.committed_revision)
            + len_u64(6, self.committed_raft_term)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// KeyValue
// ============================================================================

/// mvccpb.KeyValue.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValue {
    #[serde(with = "b64")]
    pub key: Vec<u8>,             // field 1
    pub create_revision: i64,     // field 2
    pub mod_revision: i64,        // field 3
    pub version: i64,             // field 4
    #[serde(with = "b64")]
    pub value: Vec<u8>,           // field 5
    pub lease: i64,               // field 6
}

impl Message for KeyValue {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_bytes(1, &self.key, buf);
        put_i64(2, self.create_revision, buf);
        put_i64(3, self.mod_revision, buf);
        put_i64(4, self.version, buf);
        put_bytes(5, &self.value, buf);
        put_i64(6, self.lease, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::bytes::merge(wire_type, &mut self.key, buf, ctx),
            2 => encoding::int64::merge(wire_type, &mut self.create_revision, buf, ctx),
            3 => encoding::int64::merge(wire_type, &mut self.mod_revision, buf, ctx),
            4 => encoding::int64::merge(wire_type, &mut self.version, buf, ctx),
            5 => encoding::bytes::merge(wire_type, &mut self.value, buf, ctx),
            6 => encoding::int64::merge(wire_type, &mut self.lease, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_bytes(1, &self.key)
            + len_i64(2, self.create_revision)
            + len_i64(3, self.mod_revision)
            + len_i64(4, self.version)
            + len_bytes(5, &self.value)
            + len_i64(6, self.lease)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Range
// ============================================================================

/// etcdserverpb.RangeRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeRequest {
    #[serde(with = "b64")]
    pub key: Vec<u8>,             // field 1
    #[serde(with = "b64")]
    pub range_end: Vec<u8>,       // field 2
    pub limit: i64,               // field 3
    pub revision: i64,            // field 4
    pub sort_order: i32,          // field 5 (enum)
    pub sort_target: i32,         // field 6 (enum)
    pub serializable: bool,       // field 7
    pub keys_only: bool,          // field 8
    pub count_only: bool,         // field 9
    pub min_mod_revision: i64,    // field 10
    pub max_mod_revision: i64,    // field 11
    pub min_create_revision: i64, // field 12
    pub max_create_revision: i64, // field 13
}

impl Message for RangeRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_bytes(1, &self.key, buf);
        put_bytes(2, &self.range_end, buf);
        put_i64(3, self.limit, buf);
        put_i64(4, self.revision, buf);
        put_i32(5, self.sort_order, buf);
        put_i32(6, self.sort_target, buf);
        put_bool(7, self.serializable, buf);
        put_bool(8, self.keys_only, buf);
        put_bool(9, self.count_only, buf);
        put_i64(10, self.min_mod_revision, buf);
        put_i64(11, self.max_mod_revision, buf);
        put_i64(12, self.min_create_revision, buf);
        put_i64(13, self.max_create_revision, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::bytes::merge(wire_type, &mut self.key, buf, ctx),
            2 => encoding::bytes::merge(wire_type, &mut self.range_end, buf, ctx),
            3 => encoding::int64::merge(wire_type, &mut self.limit, buf, ctx),
            4 => encoding::int64::merge(wire_type, &mut self.revision, buf, ctx),
            5 => encoding::int32::merge(wire_type, &mut self.sort_order, buf, ctx),
            6 => encoding::int32::merge(wire_type, &mut self.sort_target, buf, ctx),
            7 => encoding::bool::merge(wire_type, &mut self.serializable, buf, ctx),
            8 => encoding::bool::merge(wire_type, &mut self.keys_only, buf, ctx),
            9 => encoding::bool::merge(wire_type, &mut self.count_only, buf, ctx),
            10 => encoding::int64::merge(wire_type, &mut self.min_mod_revision, buf, ctx),
            11 => encoding::int64::merge(wire_type, &mut self.max_mod_revision, buf, ctx),
            12 => encoding::int64::merge(wire_type, &mut self.min_create_revision, buf, ctx),
            13 => encoding::int64::merge(wire_type, &mut self.max_create_revision, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_bytes(1, &self.key)
            + len_bytes(2, &self.range_end)
            + len_i64(3, self.limit)
            + len_i64(4, self.revision)
            + len_i32(5, self.sort_order)
            + len_i32(6, self.sort_target)
            + len_bool(7, self.serializable)
            + len_bool(8, self.keys_only)
            + len_bool(9, self.count_only)
            + len_i64(10, self.min_mod_revision)
            + len_i64(11, self.max_mod_revision)
            + len_i64(12, self.min_create_revision)
            + len_i64(13, self.max_create_revision)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.RangeResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    pub kvs: Vec<KeyValue>,             // field 2
    pub more: bool,                     // field 3
    pub count: i64,                     // field 4
}

impl Message for RangeResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        encoding::message::encode_repeated(2, &self.kvs, buf);
        put_bool(3, self.more, buf);
        put_i64(4, self.count, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::message::merge_repeated(wire_type, &mut self.kvs, buf, ctx),
            3 => encoding::bool::merge(wire_type, &mut self.more, buf, ctx),
            4 => encoding::int64::merge(wire_type, &mut self.count, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header)
            + encoding::message::encoded_len_repeated(2, &self.kvs)
            + len_bool(3, self.more)
            + len_i64(4, self.count)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Put
// ============================================================================

/// etcdserverpb.PutRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutRequest {
    #[serde(with = "b64")]
    pub key: Vec<u8>,       // field 1
    #[serde(with = "b64")]
    pub value: Vec<u8>,     // field 2
    pub lease: i64,         // field 3
    pub prev_kv: bool,      // field 4
    pub ignore_value: bool, // field 5
    pub ignore_lease: bool, // field 6
}

impl Message for PutRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_bytes(1, &self.key, buf);
        put_bytes(2, &self.value, buf);
        put_i64(3, self.lease, buf);
        put_bool(4, self.prev_kv, buf);
        put_bool(5, self.ignore_value, buf);
        put_bool(6, self.ignore_lease, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::bytes::merge(wire_type, &mut self.key, buf, ctx),
            2 => encoding::bytes::merge(wire_type, &mut self.value, buf, ctx),
            3 => encoding::int64::merge(wire_type, &mut self.lease, buf, ctx),
            4 => encoding::bool::merge(wire_type, &mut self.prev_kv, buf, ctx),
            5 => encoding::bool::merge(wire_type, &mut self.ignore_value, buf, ctx),
            6 => encoding::bool::merge(wire_type, &mut self.ignore_lease, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_bytes(1, &self.key)
            + len_bytes(2, &self.value)
            + len_i64(3, self.lease)
            + len_bool(4, self.prev_kv)
            + len_bool(5, self.ignore_value)
            + len_bool(6, self.ignore_lease)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.PutResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_kv: Option<KeyValue>,      // field 2
}

impl Message for PutResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        put_msg(2, &self.prev_kv, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => merge_msg(&mut self.prev_kv, wire_type, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header) + len_msg(2, &self.prev_kv)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// DeleteRange
// ============================================================================

/// etcdserverpb.DeleteRangeRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteRangeRequest {
    #[serde(with = "b64")]
    pub key: Vec<u8>,       // field 1
    #[serde(with = "b64")]
    pub range_end: Vec<u8>, // field 2
    pub prev_kv: bool,      // field 3
}

impl Message for DeleteRangeRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_bytes(1, &self.key, buf);
        put_bytes(2, &self.range_end, buf);
        put_bool(3, self.prev_kv, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::bytes::merge(wire_type, &mut self.key, buf, ctx),
            2 => encoding::bytes::merge(wire_type, &mut self.range_end, buf, ctx),
            3 => encoding::bool::merge(wire_type, &mut self.prev_kv, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_bytes(1, &self.key) + len_bytes(2, &self.range_end) + len_bool(3, self.prev_kv)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.DeleteRangeResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteRangeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    pub deleted: i64,                   // field 2
    pub prev_kvs: Vec<KeyValue>,        // field 3
}

impl Message for DeleteRangeResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        put_i64(2, self.deleted, buf);
        encoding::message::encode_repeated(3, &self.prev_kvs, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::int64::merge(wire_type, &mut self.deleted, buf, ctx),
            3 => encoding::message::merge_repeated(wire_type, &mut self.prev_kvs, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header)
            + len_i64(2, self.deleted)
            + encoding::message::encoded_len_repeated(3, &self.prev_kvs)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Txn
// ============================================================================

/// Compare result operators, mirroring etcd's Compare.CompareResult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Equal = 0,
    Greater = 1,
    Less = 2,
    NotEqual = 3,
}

impl CompareResult {
    /// Decode the wire value, `None` for unknown operators.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Equal),
            1 => Some(Self::Greater),
            2 => Some(Self::Less),
            3 => Some(Self::NotEqual),
            _ => None,
        }
    }
}

/// Compare targets, mirroring etcd's Compare.CompareTarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareTarget {
    Version = 0,
    Create = 1,
    Mod = 2,
    Value = 3,
    Lease = 4,
}

impl CompareTarget {
    /// Decode the wire value, `None` for unknown targets.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Version),
            1 => Some(Self::Create),
            2 => Some(Self::Mod),
            3 => Some(Self::Value),
            4 => Some(Self::Lease),
            _ => None,
        }
    }
}

/// etcdserverpb.Compare. The oneof target union is modelled as optional
/// fields, matching the JSON gateway rendering and the `has_*` checks
/// the evaluator performs.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compare {
    pub result: i32,                    // field 1 (enum)
    pub target: i32,                    // field 2 (enum)
    #[serde(with = "b64")]
    pub key: Vec<u8>,                   // field 3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,           // field 4 (oneof)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_revision: Option<i64>,   // field 5 (oneof)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_revision: Option<i64>,      // field 6 (oneof)
    #[serde(with = "b64_opt", skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<u8>>,         // field 7 (oneof)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease: Option<i64>,             // field 8 (oneof)
    #[serde(with = "b64")]
    pub range_end: Vec<u8>,             // field 64
}

impl Message for Compare {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_i32(1, self.result, buf);
        put_i32(2, self.target, buf);
        put_bytes(3, &self.key, buf);
        if let Some(version) = self.version {
            encoding::int64::encode(4, &version, buf);
        }
        if let Some(create_revision) = self.create_revision {
            encoding::int64::encode(5, &create_revision, buf);
        }
        if let Some(mod_revision) = self.mod_revision {
            encoding::int64::encode(6, &mod_revision, buf);
        }
        if let Some(value) = &self.value {
            encoding::bytes::encode(7, value, buf);
        }
        if let Some(lease) = self.lease {
            encoding::int64::encode(8, &lease, buf);
        }
        put_bytes(64, &self.range_end, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::int32::merge(wire_type, &mut self.result, buf, ctx),
            2 => encoding::int32::merge(wire_type, &mut self.target, buf, ctx),
            3 => encoding::bytes::merge(wire_type, &mut self.key, buf, ctx),
            4 => merge_opt_i64(&mut self.version, wire_type, buf, ctx),
            5 => merge_opt_i64(&mut self.create_revision, wire_type, buf, ctx),
            6 => merge_opt_i64(&mut self.mod_revision, wire_type, buf, ctx),
            7 => {
                let mut value = self.value.take().unwrap_or_default();
                encoding::bytes::merge(wire_type, &mut value, buf, ctx)?;
                self.value = Some(value);
                Ok(())
            }
            8 => merge_opt_i64(&mut self.lease, wire_type, buf, ctx),
            64 => encoding::bytes::merge(wire_type, &mut self.range_end, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = len_i32(1, self.result)
            + len_i32(2, self.target)
            + len_bytes(3, &self.key)
            + len_bytes(64, &self.range_end);
        if let Some(version) = self.version {
            len += encoding::int64::encoded_len(4, &version);
        }
        if let Some(create_revision) = self.create_revision {
            len += encoding::int64::encoded_len(5, &create_revision);
        }
        if let Some(mod_revision) = self.mod_revision {
            len += encoding::int64::encoded_len(6, &mod_revision);
        }
        if let Some(value) = &self.value {
            len += encoding::bytes::encoded_len(7, value);
        }
        if let Some(lease) = self.lease {
            len += encoding::int64::encoded_len(8, &lease);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.RequestOp. The oneof request is modelled as optional
/// fields; exactly one is expected to be set.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_range: Option<RangeRequest>,              // field 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_put: Option<PutRequest>,                  // field 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_delete_range: Option<DeleteRangeRequest>, // field 3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_txn: Option<TxnRequest>,                  // field 4
}

impl Message for RequestOp {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.request_range, buf);
        put_msg(2, &self.request_put, buf);
        put_msg(3, &self.request_delete_range, buf);
        put_msg(4, &self.request_txn, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.request_range, wire_type, buf, ctx),
            2 => merge_msg(&mut self.request_put, wire_type, buf, ctx),
            3 => merge_msg(&mut self.request_delete_range, wire_type, buf, ctx),
            4 => merge_msg(&mut self.request_txn, wire_type, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.request_range)
            + len_msg(2, &self.request_put)
            + len_msg(3, &self.request_delete_range)
            + len_msg(4, &self.request_txn)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.ResponseOp.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseOp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_range: Option<RangeResponse>,              // field 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_put: Option<PutResponse>,                  // field 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_delete_range: Option<DeleteRangeResponse>, // field 3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_txn: Option<TxnResponse>,                  // field 4
}

impl Message for ResponseOp {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.response_range, buf);
        put_msg(2, &self.response_put, buf);
        put_msg(3, &self.response_delete_range, buf);
        put_msg(4, &self.response_txn, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.response_range, wire_type, buf, ctx),
            2 => merge_msg(&mut self.response_put, wire_type, buf, ctx),
            3 => merge_msg(&mut self.response_delete_range, wire_type, buf, ctx),
            4 => merge_msg(&mut self.response_txn, wire_type, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.response_range)
            + len_msg(2, &self.response_put)
            + len_msg(3, &self.response_delete_range)
            + len_msg(4, &self.response_txn)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.TxnRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnRequest {
    pub compare: Vec<Compare>,   // field 1
    pub success: Vec<RequestOp>, // field 2
    pub failure: Vec<RequestOp>, // field 3
}

impl Message for TxnRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        encoding::message::encode_repeated(1, &self.compare, buf);
        encoding::message::encode_repeated(2, &self.success, buf);
        encoding::message::encode_repeated(3, &self.failure, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::message::merge_repeated(wire_type, &mut self.compare, buf, ctx),
            2 => encoding::message::merge_repeated(wire_type, &mut self.success, buf, ctx),
            3 => encoding::message::merge_repeated(wire_type, &mut self.failure, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        encoding::message::encoded_len_repeated(1, &self.compare)
            + encoding::message::encoded_len_repeated(2, &self.success)
            + encoding::message::encoded_len_repeated(3, &self.failure)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.TxnResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    pub succeeded: bool,                // field 2
    pub responses: Vec<ResponseOp>,     // field 3
}

impl Message for TxnResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        put_bool(2, self.succeeded, buf);
        encoding::message::encode_repeated(3, &self.responses, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::bool::merge(wire_type, &mut self.succeeded, buf, ctx),
            3 => encoding::message::merge_repeated(wire_type, &mut self.responses, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header)
            + len_bool(2, self.succeeded)
            + encoding::message::encoded_len_repeated(3, &self.responses)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Compaction
// ============================================================================

/// etcdserverpb.CompactionRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactionRequest {
    pub revision: i64,  // field 1
    pub physical: bool, // field 2
}

impl Message for CompactionRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_i64(1, self.revision, buf);
        put_bool(2, self.physical, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::int64::merge(wire_type, &mut self.revision, buf, ctx),
            2 => encoding::bool::merge(wire_type, &mut self.physical, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_i64(1, self.revision) + len_bool(2, self.physical)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.CompactionResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
}

impl Message for CompactionResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Lease
// ============================================================================

/// etcdserverpb.LeaseGrantRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseGrantRequest {
    #[serde(rename = "TTL", alias = "ttl")]
    pub ttl: i64, // field 1
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,  // field 2
}

impl Message for LeaseGrantRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_i64(1, self.ttl, buf);
        put_i64(2, self.id, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::int64::merge(wire_type, &mut self.ttl, buf, ctx),
            2 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_i64(1, self.ttl) + len_i64(2, self.id)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseGrantResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseGrantResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,                        // field 2
    #[serde(rename = "TTL", alias = "ttl")]
    pub ttl: i64,                       // field 3
    pub error: String,                  // field 4
}

impl Message for LeaseGrantResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        put_i64(2, self.id, buf);
        put_i64(3, self.ttl, buf);
        put_string(4, &self.error, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            3 => encoding::int64::merge(wire_type, &mut self.ttl, buf, ctx),
            4 => encoding::string::merge(wire_type, &mut self.error, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header)
            + len_i64(2, self.id)
            + len_i64(3, self.ttl)
            + len_string(4, &self.error)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseRevokeRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseRevokeRequest {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64, // field 1
}

impl Message for LeaseRevokeRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_i64(1, self.id, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_i64(1, self.id)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseRevokeResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseRevokeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
}

impl Message for LeaseRevokeResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseKeepAliveRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseKeepAliveRequest {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64, // field 1
}

impl Message for LeaseKeepAliveRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_i64(1, self.id, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_i64(1, self.id)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseKeepAliveResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseKeepAliveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,                        // field 2
    #[serde(rename = "TTL", alias = "ttl")]
    pub ttl: i64,                       // field 3
}

impl Message for LeaseKeepAliveResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        put_i64(2, self.id, buf);
        put_i64(3, self.ttl, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            3 => encoding::int64::merge(wire_type, &mut self.ttl, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header) + len_i64(2, self.id) + len_i64(3, self.ttl)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseTimeToLiveRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseTimeToLiveRequest {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,    // field 1
    pub keys: bool, // field 2
}

impl Message for LeaseTimeToLiveRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_i64(1, self.id, buf);
        put_bool(2, self.keys, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            2 => encoding::bool::merge(wire_type, &mut self.keys, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_i64(1, self.id) + len_bool(2, self.keys)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseTimeToLiveResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseTimeToLiveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,                        // field 2
    #[serde(rename = "TTL", alias = "ttl")]
    pub ttl: i64,                       // field 3
    #[serde(rename = "grantedTTL", alias = "granted_ttl")]
    pub granted_ttl: i64,               // field 4
    #[serde(with = "b64_list")]
    pub keys: Vec<Vec<u8>>,             // field 5
}

impl Message for LeaseTimeToLiveResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        put_i64(2, self.id, buf);
        put_i64(3, self.ttl, buf);
        put_i64(4, self.granted_ttl, buf);
        encoding::bytes::encode_repeated(5, &self.keys, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            3 => encoding::int64::merge(wire_type, &mut self.ttl, buf, ctx),
            4 => encoding::int64::merge(wire_type, &mut self.granted_ttl, buf, ctx),
            5 => encoding::bytes::merge_repeated(wire_type, &mut self.keys, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header)
            + len_i64(2, self.id)
            + len_i64(3, self.ttl)
            + len_i64(4, self.granted_ttl)
            + encoding::bytes::encoded_len_repeated(5, &self.keys)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseLeasesRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseLeasesRequest {}

impl Message for LeaseLeasesRequest {
    fn encode_raw(&self, _buf: &mut impl prost::bytes::BufMut) {}

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        encoding::skip_field(wire_type, tag, buf, ctx)
    }

    fn encoded_len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}

/// etcdserverpb.LeaseStatus.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseStatus {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64, // field 1
}

impl Message for LeaseStatus {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_i64(1, self.id, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::int64::merge(wire_type, &mut self.id, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_i64(1, self.id)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.LeaseLeasesResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseLeasesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    pub leases: Vec<LeaseStatus>,       // field 2
}

impl Message for LeaseLeasesResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        encoding::message::encode_repeated(2, &self.leases, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::message::merge_repeated(wire_type, &mut self.leases, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header) + encoding::message::encoded_len_repeated(2, &self.leases)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Cluster
// ============================================================================

/// etcdserverpb.MemberListRequest.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberListRequest {
    pub linearizable: bool, // field 1
}

impl Message for MemberListRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_bool(1, self.linearizable, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::bool::merge(wire_type, &mut self.linearizable, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_bool(1, self.linearizable)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.Member.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,                  // field 1
    pub name: String,             // field 2
    #[serde(rename = "peerURLs", alias = "peer_urls")]
    pub peer_urls: Vec<String>,   // field 3
    #[serde(rename = "clientURLs", alias = "client_urls")]
    pub client_urls: Vec<String>, // field 4
    pub is_learner: bool,         // field 5
}

impl Message for Member {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_u64(1, self.id, buf);
        put_string(2, &self.name, buf);
        encoding::string::encode_repeated(3, &self.peer_urls, buf);
        encoding::string::encode_repeated(4, &self.client_urls, buf);
        put_bool(5, self.is_learner, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::uint64::merge(wire_type, &mut self.id, buf, ctx),
            2 => encoding::string::merge(wire_type, &mut self.name, buf, ctx),
            3 => encoding::string::merge_repeated(wire_type, &mut self.peer_urls, buf, ctx),
            4 => encoding::string::merge_repeated(wire_type, &mut self.client_urls, buf, ctx),
            5 => encoding::bool::merge(wire_type, &mut self.is_learner, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_u64(1, self.id)
            + len_string(2, &self.name)
            + encoding::string::encoded_len_repeated(3, &self.peer_urls)
            + encoding::string::encoded_len_repeated(4, &self.client_urls)
            + len_bool(5, self.is_learner)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// etcdserverpb.MemberListResponse.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ResponseHeader>, // field 1
    pub members: Vec<Member>,           // field 2
}

impl Message for MemberListResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut) {
        put_msg(1, &self.header, buf);
        encoding::message::encode_repeated(2, &self.members, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => merge_msg(&mut self.header, wire_type, buf, ctx),
            2 => encoding::message::merge_repeated(wire_type, &mut self.members, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        len_msg(1, &self.header) + encoding::message::encoded_len_repeated(2, &self.members)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
