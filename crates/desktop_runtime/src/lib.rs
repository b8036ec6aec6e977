//! Window-manager state core for the Finder desktop shell.
//!
//! This crate owns the set of window records (open/minimized/maximized flags,
//! geometry, stacking order) and the transition logic that mutates them. It is
//! deliberately UI-framework-agnostic: rendering, drag-gesture pixel math, and
//! clamping policy all live with the presentation layer, which drives this
//! state through [`reducer::reduce_window`].
//!
//! Stacking order is a single monotonic z counter owned by
//! [`model::DesktopState`]; every raise consumes a fresh value, so ties are
//! impossible by construction.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod reducer;

pub use model::{default_registry, DesktopState, Viewport, WindowDef, WindowRecord, WindowRect};
pub use reducer::{reduce_window, WindowAction, WindowEffect, WindowError};
