//! Turning a window selection into an ordered list of dispatches.
//!
//! The plan has three parts:
//!
//! 1. `togglegroup`, which turns the active window's container into a group
//!    (or dissolves it),
//! 2. for every other selected window, `repeat` copies of
//!    `focuswindow` + `moveintogroup l/r/u/d`,
//! 3. a single `focuswindow` back to the window that was active.
//!
//! Hyprland does not reliably attach a window on the first try, so the
//! block in step 2 is repeated.  The final focus is emitted once, after
//! every block, so the window left focused does not depend on how many
//! windows were moved.

use crate::command::{Command, Direction, Window};

/// Default number of attach attempts per window.
pub const DEFAULT_REPEAT: u32 = 3;

/// Upper bound on attach attempts per window.
pub const MAX_REPEAT: u32 = 16;

/// Commands in one attach block: one focus plus one move per direction.
pub const BLOCK_LEN: usize = 1 + Direction::ALL.len();

/// The first step of every plan.
pub fn toggle_step() -> Command {
    Command::ToggleGroup
}

/// Bring a configured repeat count into `1..=MAX_REPEAT`.
pub fn effective_repeat(repeat: u32) -> u32 {
    repeat.clamp(1, MAX_REPEAT)
}

/// Everything after the toggle: the attach blocks followed by the focus
/// restore.
///
/// Windows whose address equals `active_address` are skipped.  If the
/// active window is not part of `selected` at all, nothing is skipped and
/// focus is still restored to it.  `repeat` goes through
/// [`effective_repeat`].
pub fn attach_steps(active_address: &str, selected: &[Window], repeat: u32) -> Vec<Command> {
    let repeat = effective_repeat(repeat);
    let others = selected
        .iter()
        .filter(|w| w.address != active_address);

    let mut commands = Vec::new();
    for window in others {
        for _ in 0..repeat {
            commands.push(Command::focus(window.address.as_str()));
            commands.extend(Direction::ALL.into_iter().map(Command::MoveIntoGroup));
        }
    }

    commands.push(Command::focus(active_address));
    commands
}
