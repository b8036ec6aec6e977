//! Virtual file-system state core for the Finder desktop shell.
//!
//! Nodes form a tree stored as a flat list with parent pointers (arena plus
//! id lookup), which keeps cascading delete and reparenting simple set
//! operations over ids. The node set is the single source of truth; children
//! listings, breadcrumbs, sidebar folders, and search results are recomputed
//! per query rather than cached.
//!
//! Every mutation writes the full node set back through a
//! [`platform_storage::SnapshotStore`] (fire-and-forget, idempotent
//! overwrite). Loading falls back to a fixed seed tree when the stored
//! snapshot is absent, corrupt, or empty.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod persistence;
pub mod reducer;
pub mod service;
pub mod state;

pub use model::{seed_nodes, FileNode, NodeKind, ROOT_NODE_ID};
pub use persistence::{load_nodes, persist_nodes, FS_SCHEMA_VERSION, FS_SNAPSHOT_KEY};
pub use reducer::{reduce_fs, FsAction, FsEffect, FsError};
pub use service::FinderFs;
pub use state::{FsState, MAX_SEARCH_RESULTS};
