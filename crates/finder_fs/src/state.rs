//! File-system state and pure derived queries.

use crate::model::{FileNode, ROOT_NODE_ID};

/// Maximum number of search results returned by [`FsState::search`].
pub const MAX_SEARCH_RESULTS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
/// File-system state: the flat node set plus the navigation cursor.
pub struct FsState {
    /// All nodes, in insertion order. The tree structure lives entirely in
    /// each node's `parent_id`.
    pub nodes: Vec<FileNode>,
    /// Id of the currently navigated folder.
    pub current_folder_id: String,
}

impl FsState {
    /// Builds state over a node set with the cursor at the root.
    pub fn from_nodes(nodes: Vec<FileNode>) -> Self {
        Self {
            nodes,
            current_folder_id: ROOT_NODE_ID.to_string(),
        }
    }

    /// Returns the node with `id`, if present.
    pub fn node(&self, id: &str) -> Option<&FileNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Returns the currently navigated folder, falling back to the first
    /// node when the cursor references nothing (the cursor is not validated
    /// on navigation).
    pub fn current_folder(&self) -> Option<&FileNode> {
        self.node(&self.current_folder_id)
            .or_else(|| self.nodes.first())
    }

    /// Lists the contents of the current folder.
    ///
    /// At the root this is every file node system-wide, ignoring folder
    /// hierarchy; the root view is a global file listing, not a directory.
    /// For any other folder it is the direct children only, files and
    /// folders both.
    pub fn children(&self) -> Vec<&FileNode> {
        if self.current_folder_id == ROOT_NODE_ID {
            self.nodes.iter().filter(|n| n.is_file()).collect()
        } else {
            self.nodes
                .iter()
                .filter(|n| n.parent_id.as_deref() == Some(self.current_folder_id.as_str()))
                .collect()
        }
    }

    /// Returns the breadcrumb trail from the root to the current folder.
    ///
    /// The walk is bounded by the node count, so a corrupted parent cycle
    /// cannot loop forever.
    pub fn breadcrumbs(&self) -> Vec<&FileNode> {
        let mut trail = Vec::new();
        let mut node = self.current_folder();
        let mut remaining = self.nodes.len();
        while let Some(current) = node {
            if remaining == 0 {
                break;
            }
            remaining -= 1;
            trail.insert(0, current);
            node = current
                .parent_id
                .as_deref()
                .and_then(|parent| self.node(parent));
        }
        trail
    }

    /// Returns the top-level folders (direct folder children of the root),
    /// one level only.
    pub fn sidebar_folders(&self) -> Vec<&FileNode> {
        self.nodes
            .iter()
            .filter(|n| n.is_folder() && n.parent_id.as_deref() == Some(ROOT_NODE_ID))
            .collect()
    }

    /// Searches nodes by case-insensitive substring match on name or any
    /// tag. The root is excluded, results keep insertion order (no relevance
    /// ranking), and the count is capped at [`MAX_SEARCH_RESULTS`]. A blank
    /// query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&FileNode> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let needle = trimmed.to_lowercase();
        self.nodes
            .iter()
            .filter(|n| n.id != ROOT_NODE_ID)
            .filter(|n| {
                n.name.to_lowercase().contains(&needle)
                    || n.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }
}
