//! The orchestrator that ties queries, selection, planning and dispatch
//! together.
//!
//! [`GroupToggler`] runs one grouping pass against a [`Transport`]:
//!
//! 1. `j/activeworkspace` and `j/clients`, filtered to the active workspace,
//! 2. `togglegroup`, unconditionally,
//! 3. a fresh `j/activewindow` (focus may have moved during the toggle),
//! 4. the attach blocks and focus restore from [`planner::attach_steps`].
//!
//! Every failure is tagged with the [`Stage`] it happened in.

use crate::command::{Command, Window, Workspace};
use crate::error::{GroupError, IpcError, Stage, StageExt};
use crate::executor::{Executor, Strategy};
use crate::hyprland::decode;
use crate::planner;
use crate::selector::select_by_workspace;
use crate::traits::Transport;
use log::{debug, info, warn};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Only `togglegroup` was dispatched: either no window lived on the
    /// active workspace, or nothing was focused after the toggle.
    Toggled,
    /// The group was toggled and `attached` other windows were pulled in.
    Grouped { attached: usize },
}

/// Orchestrates one grouping pass.
///
/// # Typical usage
///
/// ```ignore
/// let socket = HyprlandSocket::new(&Endpoint::from_env()?);
/// let toggler = GroupToggler::new(socket, Strategy::Batched { max_bytes: 8192 }, 3);
/// toggler.run()?;
/// ```
pub struct GroupToggler<T: Transport> {
    transport: T,
    strategy: Strategy,
    repeat: u32,
}

impl<T: Transport> GroupToggler<T> {
    pub fn new(transport: T, strategy: Strategy, repeat: u32) -> Self {
        Self {
            transport,
            strategy,
            repeat,
        }
    }

    /// Run the whole pipeline once.
    pub fn run(&self) -> Result<Outcome, GroupError> {
        let workspace = self.active_workspace().stage(Stage::QueryWorkspace)?;
        let windows = self.clients().stage(Stage::QueryClients)?;
        let selected = select_by_workspace(&windows, workspace.id);
        debug!(
            "workspace {} ({:?}): {} of {} window(s) selected",
            workspace.id,
            workspace.name,
            selected.len(),
            windows.len()
        );

        let executor = Executor::new(&self.transport, self.strategy);
        executor
            .execute(&[planner::toggle_step()])
            .stage(Stage::ToggleGroup)?;

        if selected.is_empty() {
            info!("no windows on workspace {}, group toggled", workspace.id);
            return Ok(Outcome::Toggled);
        }

        let active = match self.active_window().stage(Stage::QueryActiveWindow)? {
            Some(w) => w,
            None => {
                warn!("no active window after togglegroup, nothing to attach");
                return Ok(Outcome::Toggled);
            }
        };

        let steps = planner::attach_steps(&active.address, &selected, self.repeat);
        debug!("attach plan: {} command(s)", steps.len());
        executor.execute(&steps).stage(Stage::AttachWindows)?;

        let attached = selected
            .iter()
            .filter(|w| w.address != active.address)
            .count();
        info!(
            "grouped {} window(s) around {} on workspace {}",
            attached, active.address, workspace.id
        );
        Ok(Outcome::Grouped { attached })
    }

    fn query(&self, cmd: Command) -> Result<Vec<u8>, IpcError> {
        self.transport.exchange(&cmd.to_string())
    }

    fn active_workspace(&self) -> Result<Workspace, IpcError> {
        decode::decode_workspace(&self.query(Command::ActiveWorkspace)?)
    }

    fn clients(&self) -> Result<Vec<Window>, IpcError> {
        decode::decode_window_list(&self.query(Command::Clients)?)
    }

    fn active_window(&self) -> Result<Option<Window>, IpcError> {
        decode::decode_active_window(&self.query(Command::ActiveWindow)?)
    }
}
