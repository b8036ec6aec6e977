//! Key-value snapshot storage contracts shared by the desktop state crates.
//!
//! This crate is the persistence boundary for the Finder state core. It exposes
//! a small synchronous store contract (JSON text per key), versioned snapshot
//! envelopes, and time helpers. Concrete durable backends (browser
//! localStorage, disk, and so on) live with the host composition; the state
//! crates only ever see [`SnapshotStore`].
//!
//! # Example
//!
//! ```rust
//! use platform_storage::{build_snapshot_envelope, MemorySnapshotStore, save_typed_with};
//!
//! let envelope = build_snapshot_envelope("app.example", 1, &3_u32)
//!     .expect("envelope should serialize");
//! assert_eq!(envelope.key, "app.example");
//!
//! let store = MemorySnapshotStore::default();
//! save_typed_with(&store, "counter", &3_u32).expect("save");
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod envelope;
pub mod store;
pub mod time;

pub use envelope::{
    build_snapshot_envelope, decode_envelope_payload, SnapshotEnvelope, SNAPSHOT_ENVELOPE_VERSION,
};
pub use store::{
    load_typed_with, save_typed_with, MemorySnapshotStore, NoopSnapshotStore, SnapshotStore,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
