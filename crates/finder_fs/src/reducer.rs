//! Reducer actions, side-effect intents, and transition logic for the
//! virtual file system.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{generate_node_id, modified_today, FileNode, DEFAULT_FILE_SIZE, ROOT_NODE_ID};
use crate::state::FsState;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_fs`] to mutate [`FsState`].
pub enum FsAction {
    /// Move the navigation cursor.
    ///
    /// The target id is deliberately not validated against the node set; the
    /// queries degrade safely when the cursor references nothing.
    Navigate {
        /// Folder id to navigate to.
        folder_id: String,
    },
    /// Move the cursor to the current folder's parent. A no-op at the root.
    NavigateUp,
    /// Create a folder under `parent_id`, or under the cursor when omitted.
    CreateFolder {
        /// Folder display name; rejected when empty after trimming.
        name: String,
        /// Parent override; defaults to the current folder.
        parent_id: Option<String>,
    },
    /// Create a file under `parent_id`, or under the cursor when omitted.
    /// New files get empty tags, a zero display size, and today's date.
    CreateFile {
        /// File display name; rejected when empty after trimming.
        name: String,
        /// Parent override; defaults to the current folder.
        parent_id: Option<String>,
    },
    /// Delete a node and its entire subtree atomically.
    DeleteItem {
        /// Node to delete.
        id: String,
    },
    /// Replace a node's display name, leaving everything else untouched.
    RenameItem {
        /// Node to rename.
        id: String,
        /// New name; rejected when empty after trimming.
        new_name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_fs`] for the service layer to
/// execute.
pub enum FsEffect {
    /// Write the full node set through to persistent storage.
    PersistSnapshot,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. All are non-fatal signals; state never changes on error.
pub enum FsError {
    /// The target node id is not in the node set.
    #[error("node not found")]
    NodeNotFound,
    /// A create or rename name was empty after trimming.
    #[error("name is empty after trimming")]
    EmptyName,
    /// The root folder cannot be deleted.
    #[error("the root folder cannot be deleted")]
    RootUndeletable,
}

/// Applies an [`FsAction`] to the file-system state and collects resulting
/// side effects.
///
/// Every successful mutation of the node set emits
/// [`FsEffect::PersistSnapshot`]; navigation changes only the cursor and
/// persists nothing.
///
/// # Errors
///
/// Returns an [`FsError`] when the action references a missing node, an
/// empty name, or the root on delete. State is unchanged on error.
pub fn reduce_fs(state: &mut FsState, action: FsAction) -> Result<Vec<FsEffect>, FsError> {
    let mut effects = Vec::new();
    match action {
        FsAction::Navigate { folder_id } => {
            state.current_folder_id = folder_id;
        }
        FsAction::NavigateUp => {
            let parent = state
                .current_folder()
                .and_then(|folder| folder.parent_id.clone());
            if let Some(parent) = parent {
                state.current_folder_id = parent;
            }
        }
        FsAction::CreateFolder { name, parent_id } => {
            let name = trimmed_name(&name)?;
            let parent = parent_id.unwrap_or_else(|| state.current_folder_id.clone());
            state
                .nodes
                .push(FileNode::folder(generate_node_id(), name, Some(&parent)));
            effects.push(FsEffect::PersistSnapshot);
        }
        FsAction::CreateFile { name, parent_id } => {
            let name = trimmed_name(&name)?;
            let parent = parent_id.unwrap_or_else(|| state.current_folder_id.clone());
            state.nodes.push(FileNode::file(
                generate_node_id(),
                name,
                &parent,
                &[],
                DEFAULT_FILE_SIZE,
                &modified_today(),
            ));
            effects.push(FsEffect::PersistSnapshot);
        }
        FsAction::DeleteItem { id } => {
            if id == ROOT_NODE_ID {
                return Err(FsError::RootUndeletable);
            }
            if state.node(&id).is_none() {
                return Err(FsError::NodeNotFound);
            }
            let doomed = descendant_closure(&state.nodes, &id);
            state.nodes.retain(|n| !doomed.contains(n.id.as_str()));
            effects.push(FsEffect::PersistSnapshot);
        }
        FsAction::RenameItem { id, new_name } => {
            let name = trimmed_name(&new_name)?;
            let node = state
                .nodes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or(FsError::NodeNotFound)?;
            node.name = name;
            effects.push(FsEffect::PersistSnapshot);
        }
    }
    Ok(effects)
}

fn trimmed_name(name: &str) -> Result<String, FsError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FsError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Computes the set of `id` plus all transitive descendants via `parent_id`
/// matching.
fn descendant_closure(nodes: &[FileNode], id: &str) -> HashSet<String> {
    let mut closure = HashSet::new();
    closure.insert(id.to_string());
    let mut frontier = vec![id.to_string()];
    while let Some(current) = frontier.pop() {
        for node in nodes {
            if node.parent_id.as_deref() == Some(current.as_str())
                && closure.insert(node.id.clone())
            {
                frontier.push(node.id.clone());
            }
        }
    }
    closure
}
