//! Choosing the windows that take part in a grouping run.

use crate::command::Window;

/// Return the windows whose workspace id is `workspace_id`, in input order.
///
/// An empty result is not an error: it means there is nothing to group.
pub fn select_by_workspace(windows: &[Window], workspace_id: i64) -> Vec<Window> {
    windows
        .iter()
        .filter(|w| w.workspace.id == workspace_id)
        .cloned()
        .collect()
}
