//! Reducer actions, side-effect intents, and transition logic for the window
//! manager.

use thiserror::Error;

use crate::model::{DesktopState, WindowRecord};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_window`] to mutate [`DesktopState`].
pub enum WindowAction {
    /// Open a window and raise it to the top of the stack.
    Open {
        /// Window to open.
        window_id: String,
    },
    /// Close a window. Geometry is preserved so reopening restores the last
    /// position and size.
    Close {
        /// Window to close.
        window_id: String,
    },
    /// Minimize a window without touching its open flag or stacking rank.
    Minimize {
        /// Window to minimize.
        window_id: String,
    },
    /// Restore a minimized window (or bring an open one forward) and raise it.
    Focus {
        /// Window to focus.
        window_id: String,
    },
    /// Raise a window without altering its open/minimized flags.
    BringToFront {
        /// Window to raise.
        window_id: String,
    },
    /// Flip the maximized flag. Maximizing implicitly focuses, so the window
    /// is also raised.
    ToggleMaximize {
        /// Window to toggle.
        window_id: String,
    },
    /// Set the window position unconditionally. The manager does not enforce
    /// move restrictions (for example while maximized); that is caller
    /// policy.
    Move {
        /// Window to move.
        window_id: String,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Set the window size unconditionally, with the same caller-policy
    /// caveat as [`WindowAction::Move`].
    Resize {
        /// Window to resize.
        window_id: String,
        /// New width.
        w: i32,
        /// New height.
        h: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_window`] for the shell to execute.
pub enum WindowEffect {
    /// Move keyboard focus into the window's primary input.
    FocusInput(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum WindowError {
    /// The target window id is not in the registry. Callers treat this as a
    /// no-op signal; it never unwinds into the presentation layer.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`WindowAction`] to the window-manager state.
///
/// Every raise consumes a fresh value from the state's monotonic z counter,
/// so stacking ranks strictly increase across all windows and operations with
/// no reuse.
///
/// # Errors
///
/// Returns [`WindowError::WindowNotFound`] when the action references an
/// unregistered window. State is unchanged on error.
pub fn reduce_window(
    state: &mut DesktopState,
    action: WindowAction,
) -> Result<Vec<WindowEffect>, WindowError> {
    let mut effects = Vec::new();
    match action {
        WindowAction::Open { window_id } => {
            let index = find_window_index(state, &window_id)?;
            let z = state.alloc_z();
            let window = &mut state.windows[index];
            window.is_open = true;
            window.minimized = false;
            window.z_index = z;
            effects.push(WindowEffect::FocusInput(window_id));
        }
        WindowAction::Close { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            window.is_open = false;
            window.minimized = false;
            window.maximized = false;
        }
        WindowAction::Minimize { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            window.minimized = true;
        }
        WindowAction::Focus { window_id } => {
            let index = find_window_index(state, &window_id)?;
            let z = state.alloc_z();
            let window = &mut state.windows[index];
            window.is_open = true;
            window.minimized = false;
            window.z_index = z;
            effects.push(WindowEffect::FocusInput(window_id));
        }
        WindowAction::BringToFront { window_id } => {
            let index = find_window_index(state, &window_id)?;
            let z = state.alloc_z();
            state.windows[index].z_index = z;
        }
        WindowAction::ToggleMaximize { window_id } => {
            let index = find_window_index(state, &window_id)?;
            let z = state.alloc_z();
            let window = &mut state.windows[index];
            window.maximized = !window.maximized;
            window.z_index = z;
        }
        WindowAction::Move { window_id, x, y } => {
            let window = find_window_mut(state, &window_id)?;
            window.rect.x = x;
            window.rect.y = y;
        }
        WindowAction::Resize { window_id, w, h } => {
            let window = find_window_mut(state, &window_id)?;
            window.rect.w = w;
            window.rect.h = h;
        }
    }
    Ok(effects)
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &str,
) -> Result<&'a mut WindowRecord, WindowError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(WindowError::WindowNotFound)
}

fn find_window_index(state: &DesktopState, window_id: &str) -> Result<usize, WindowError> {
    state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(WindowError::WindowNotFound)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{default_registry, Viewport};

    fn state() -> DesktopState {
        DesktopState::register(default_registry(), Viewport::default())
    }

    fn z_of(state: &DesktopState, id: &str) -> u32 {
        state.window(id).expect("window").z_index
    }

    #[test]
    fn z_allocation_is_strictly_monotonic_across_interleaved_operations() {
        let mut state = state();
        let ops = [
            WindowAction::Open {
                window_id: "notes".into(),
            },
            WindowAction::Focus {
                window_id: "finder".into(),
            },
            WindowAction::BringToFront {
                window_id: "notes".into(),
            },
            WindowAction::ToggleMaximize {
                window_id: "finder".into(),
            },
            WindowAction::Open {
                window_id: "terminal".into(),
            },
            WindowAction::ToggleMaximize {
                window_id: "finder".into(),
            },
            WindowAction::Focus {
                window_id: "notes".into(),
            },
        ];

        let mut allocated = Vec::new();
        for op in ops {
            let id = match &op {
                WindowAction::Open { window_id }
                | WindowAction::Focus { window_id }
                | WindowAction::BringToFront { window_id }
                | WindowAction::ToggleMaximize { window_id } => window_id.clone(),
                _ => unreachable!(),
            };
            reduce_window(&mut state, op).expect("reduce");
            allocated.push(z_of(&state, &id));
        }

        for pair in allocated.windows(2) {
            assert!(pair[0] < pair[1], "z values must strictly increase");
        }
    }

    #[test]
    fn open_raises_and_clears_minimized() {
        let mut state = state();
        reduce_window(
            &mut state,
            WindowAction::Minimize {
                window_id: "finder".into(),
            },
        )
        .expect("minimize");
        let top_before = state.next_z;

        let effects = reduce_window(
            &mut state,
            WindowAction::Open {
                window_id: "finder".into(),
            },
        )
        .expect("open");

        let finder = state.window("finder").expect("finder");
        assert!(finder.is_open);
        assert!(!finder.minimized);
        assert_eq!(finder.z_index, top_before);
        assert_eq!(effects, vec![WindowEffect::FocusInput("finder".into())]);
    }

    #[test]
    fn close_resets_flags_but_preserves_geometry() {
        let mut state = state();
        reduce_window(
            &mut state,
            WindowAction::Move {
                window_id: "finder".into(),
                x: 300,
                y: 220,
            },
        )
        .expect("move");
        reduce_window(
            &mut state,
            WindowAction::Resize {
                window_id: "finder".into(),
                w: 640,
                h: 400,
            },
        )
        .expect("resize");
        reduce_window(
            &mut state,
            WindowAction::ToggleMaximize {
                window_id: "finder".into(),
            },
        )
        .expect("maximize");

        reduce_window(
            &mut state,
            WindowAction::Close {
                window_id: "finder".into(),
            },
        )
        .expect("close");

        let finder = state.window("finder").expect("finder");
        assert!(!finder.is_open);
        assert!(!finder.minimized);
        assert!(!finder.maximized);
        assert_eq!(finder.rect.x, 300);
        assert_eq!(finder.rect.y, 220);
        assert_eq!(finder.rect.w, 640);
        assert_eq!(finder.rect.h, 400);

        reduce_window(
            &mut state,
            WindowAction::Open {
                window_id: "finder".into(),
            },
        )
        .expect("reopen");
        let finder = state.window("finder").expect("finder");
        assert_eq!(finder.rect.x, 300);
        assert_eq!(finder.rect.w, 640);
    }

    #[test]
    fn minimize_touches_only_the_minimized_flag() {
        let mut state = state();
        let z_before = z_of(&state, "finder");

        reduce_window(
            &mut state,
            WindowAction::Minimize {
                window_id: "finder".into(),
            },
        )
        .expect("minimize");

        let finder = state.window("finder").expect("finder");
        assert!(finder.minimized);
        assert!(finder.is_open);
        assert_eq!(finder.z_index, z_before);
    }

    #[test]
    fn bring_to_front_changes_only_the_stacking_rank() {
        let mut state = state();
        reduce_window(
            &mut state,
            WindowAction::Minimize {
                window_id: "finder".into(),
            },
        )
        .expect("minimize");
        let top = state.next_z;

        reduce_window(
            &mut state,
            WindowAction::BringToFront {
                window_id: "finder".into(),
            },
        )
        .expect("raise");

        let finder = state.window("finder").expect("finder");
        assert_eq!(finder.z_index, top);
        assert!(finder.minimized, "bring-to-front must not restore");
    }

    #[test]
    fn toggle_maximize_flips_the_flag_and_raises() {
        let mut state = state();
        let first_top = state.next_z;

        reduce_window(
            &mut state,
            WindowAction::ToggleMaximize {
                window_id: "finder".into(),
            },
        )
        .expect("maximize");
        let finder = state.window("finder").expect("finder");
        assert!(finder.maximized);
        assert_eq!(finder.z_index, first_top);

        reduce_window(
            &mut state,
            WindowAction::ToggleMaximize {
                window_id: "finder".into(),
            },
        )
        .expect("restore");
        let finder = state.window("finder").expect("finder");
        assert!(!finder.maximized);
        assert_eq!(finder.z_index, first_top + 1);
    }

    #[test]
    fn unknown_window_id_is_a_not_found_error_and_leaves_state_unchanged() {
        let mut state = state();
        let before = state.clone();

        let err = reduce_window(
            &mut state,
            WindowAction::Open {
                window_id: "unknown".into(),
            },
        )
        .expect_err("unknown id");

        assert_eq!(err, WindowError::WindowNotFound);
        assert_eq!(state.windows, before.windows);
        assert_eq!(state.next_z, before.next_z, "no z value is consumed");
    }

    #[test]
    fn open_window_ids_orders_by_stacking_rank() {
        let mut state = state();
        reduce_window(
            &mut state,
            WindowAction::Open {
                window_id: "notes".into(),
            },
        )
        .expect("open notes");
        reduce_window(
            &mut state,
            WindowAction::Focus {
                window_id: "finder".into(),
            },
        )
        .expect("focus finder");

        assert_eq!(state.open_window_ids(), vec!["notes", "finder"]);
    }
}
