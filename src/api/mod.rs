//! etcd v3 API surface.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       etcd v3 surface                       │
//! ├──────────────────┬──────────────────┬───────────────────────┤
//! │      KV API      │    Lease API     │      Cluster API      │
//! │ Range/Put/Delete │  Grant/Revoke    │      MemberList       │
//! │   Txn/Compact    │ KeepAlive/TTL    │                       │
//! └──────────────────┴──────────────────┴───────────────────────┘
//!          │ binary gRPC payloads            │ JSON over HTTP
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Service layer                        │
//! │  - one host transaction per RPC (read-only where possible)  │
//! │  - unsupported-option rejection                             │
//! │  - response header fill from the committed TxID             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both encodings share the message types in [`proto`]: manual prost
//! implementations carry the binary payloads, serde (bytes as base64)
//! carries the JSON bodies.

pub mod cluster;
pub mod errors;
pub mod grpc;
pub mod json;
pub mod kv;
pub mod lease;
pub mod proto;
pub mod service;
pub mod txn;

pub use errors::Status;
pub use json::{JsonReply, CONTENT_TYPE_JSON};
pub use service::EtcdService;
