//! File-system service owning state plus the snapshot store.

use std::rc::Rc;

use platform_storage::SnapshotStore;

use crate::persistence::{load_nodes, persist_nodes};
use crate::reducer::{reduce_fs, FsAction, FsEffect, FsError};
use crate::state::FsState;

/// The virtual file system wired to its persistence backend.
///
/// Owns the [`FsState`] and a [`SnapshotStore`], applies reducer actions,
/// and executes the resulting persistence effects (write-through after every
/// mutation, fire-and-forget).
pub struct FinderFs {
    state: FsState,
    store: Rc<dyn SnapshotStore>,
}

impl FinderFs {
    /// Boots the file system from `store`, falling back to the seed tree
    /// when no valid snapshot exists.
    pub fn boot(store: Rc<dyn SnapshotStore>) -> Self {
        let nodes = load_nodes(store.as_ref());
        Self {
            state: FsState::from_nodes(nodes),
            store,
        }
    }

    /// Read access to the file-system state for queries.
    pub fn state(&self) -> &FsState {
        &self.state
    }

    /// Applies an action and executes its persistence effects.
    ///
    /// # Errors
    ///
    /// Propagates reducer errors ([`FsError`]); state and storage are
    /// untouched when the reducer rejects the action. Storage write failures
    /// are absorbed (logged), not surfaced.
    pub fn apply(&mut self, action: FsAction) -> Result<(), FsError> {
        let effects = reduce_fs(&mut self.state, action)?;
        for effect in effects {
            match effect {
                FsEffect::PersistSnapshot => {
                    persist_nodes(self.store.as_ref(), &self.state.nodes);
                }
            }
        }
        Ok(())
    }
}
