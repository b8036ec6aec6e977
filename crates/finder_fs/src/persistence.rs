//! Snapshot persistence for the file-system node set.
//!
//! Saves are full-snapshot overwrites after every mutation, with no diffing
//! or batching; failures are swallowed with a warning because persistence is
//! fire-and-forget for the caller. Loads accept both the current versioned
//! envelope and the legacy bare-array shape, and fall back to the seed tree
//! when storage is absent, unparsable, or empty.

use platform_storage::{
    build_snapshot_envelope, decode_envelope_payload, SnapshotEnvelope, SnapshotStore,
};
use tracing::warn;

use crate::model::{seed_nodes, FileNode};

/// Storage key for the file-system snapshot. Matches the key used by the
/// pre-envelope snapshots, which keeps legacy data loadable.
pub const FS_SNAPSHOT_KEY: &str = "finder-fs-v2";
/// Schema version stamped on newly written snapshots.
pub const FS_SCHEMA_VERSION: u32 = 1;

/// Loads the node set from `store`.
///
/// Falls back to [`seed_nodes`] when the snapshot is missing, corrupt, or
/// empty, and writes the seed back best-effort so the next load is warm.
/// Never fails; storage problems degrade to the seed tree.
pub fn load_nodes(store: &dyn SnapshotStore) -> Vec<FileNode> {
    let raw = match store.load_raw(FS_SNAPSHOT_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("file-system snapshot load failed: {err}");
            None
        }
    };

    if let Some(raw) = raw {
        if let Some(nodes) = decode_snapshot(&raw) {
            if !nodes.is_empty() {
                return nodes;
            }
        }
        warn!("file-system snapshot was empty or corrupt; reseeding");
    }

    let seed = seed_nodes();
    persist_nodes(store, &seed);
    seed
}

/// Writes the full node set through to `store`.
///
/// Failures are logged and swallowed; callers treat persistence as
/// fire-and-forget.
pub fn persist_nodes(store: &dyn SnapshotStore, nodes: &[FileNode]) {
    let envelope = match build_snapshot_envelope(FS_SNAPSHOT_KEY, FS_SCHEMA_VERSION, &nodes) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!("file-system snapshot serialization failed: {err}");
            return;
        }
    };
    let raw = match serde_json::to_string(&envelope) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("file-system snapshot serialization failed: {err}");
            return;
        }
    };
    if let Err(err) = store.save_raw(FS_SNAPSHOT_KEY, &raw) {
        warn!("file-system snapshot save failed: {err}");
    }
}

/// Decodes a raw snapshot document, trying the versioned envelope first and
/// then the legacy bare node array.
fn decode_snapshot(raw: &str) -> Option<Vec<FileNode>> {
    if let Ok(envelope) = serde_json::from_str::<SnapshotEnvelope>(raw) {
        return decode_envelope_payload::<Vec<FileNode>>(&envelope).ok();
    }
    serde_json::from_str::<Vec<FileNode>>(raw).ok()
}

#[cfg(test)]
mod tests {
    use platform_storage::MemorySnapshotStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ROOT_NODE_ID;

    #[test]
    fn persist_then_load_round_trips_the_node_set() {
        let store = MemorySnapshotStore::default();
        let nodes = seed_nodes();

        persist_nodes(&store, &nodes);
        let loaded = load_nodes(&store);

        assert_eq!(loaded, nodes);
    }

    #[test]
    fn load_against_missing_storage_seeds_and_writes_back() {
        let store = MemorySnapshotStore::default();

        let loaded = load_nodes(&store);

        assert_eq!(loaded, seed_nodes());
        let roots: Vec<&FileNode> = loaded.iter().filter(|n| n.parent_id.is_none()).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, ROOT_NODE_ID);
        assert!(
            store.load_raw(FS_SNAPSHOT_KEY).expect("load raw").is_some(),
            "seed is written back"
        );
    }

    #[test]
    fn load_against_corrupt_storage_falls_back_to_the_seed() {
        let store = MemorySnapshotStore::default();
        store
            .save_raw(FS_SNAPSHOT_KEY, "{not valid json")
            .expect("save");

        assert_eq!(load_nodes(&store), seed_nodes());
    }

    #[test]
    fn load_against_an_empty_array_falls_back_to_the_seed() {
        let store = MemorySnapshotStore::default();
        store.save_raw(FS_SNAPSHOT_KEY, "[]").expect("save");

        assert_eq!(load_nodes(&store), seed_nodes());
    }

    #[test]
    fn legacy_bare_array_snapshots_still_load() {
        let store = MemorySnapshotStore::default();
        let legacy = r#"[
            { "id": "root", "name": "Root", "type": "folder", "parentId": null },
            { "id": "work", "name": "Work", "type": "folder", "parentId": "root" },
            { "id": "f1", "name": "plan.md", "type": "file", "parentId": "work",
              "tags": ["Plan"], "size": "8 KB", "modified": "Feb 2" }
        ]"#;
        store.save_raw(FS_SNAPSHOT_KEY, legacy).expect("save");

        let loaded = load_nodes(&store);

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].id, "work");
        assert_eq!(loaded[2].tags, vec!["Plan".to_string()]);
    }

    #[test]
    fn new_snapshots_are_written_as_versioned_envelopes() {
        let store = MemorySnapshotStore::default();
        persist_nodes(&store, &seed_nodes());

        let raw = store
            .load_raw(FS_SNAPSHOT_KEY)
            .expect("load raw")
            .expect("present");
        let envelope: SnapshotEnvelope = serde_json::from_str(&raw).expect("envelope");
        assert_eq!(envelope.key, FS_SNAPSHOT_KEY);
        assert_eq!(envelope.schema_version, FS_SCHEMA_VERSION);
        assert!(envelope.payload.is_array());
    }

    #[test]
    fn persist_is_idempotent_overwrite() {
        let store = MemorySnapshotStore::default();
        let nodes = seed_nodes();

        persist_nodes(&store, &nodes);
        persist_nodes(&store, &nodes);

        assert_eq!(load_nodes(&store), nodes);
    }
}
