//! Commands and types used throughout hyprgroup.
//!
//! [`Workspace`] and [`Window`] are the snapshot records read from the
//! compositor.  [`Command`] covers the handful of queries and dispatches the pipeline
//! needs.  Its [`Display`](fmt::Display) impl renders the exact text that
//! goes on the wire, so a plan can be logged, compared in tests, and sent
//! without any further formatting.
//!
//! [`CommandBatch`] joins several commands into a single `[[BATCH]]`
//! payload, which Hyprland executes in order within one exchange.

use std::fmt;

/// Prefix that marks a payload as a batch of commands.
pub const BATCH_MARKER: &str = "[[BATCH]]";

/// Prefix of the JSON data queries (`j/clients`, ...).
pub const QUERY_PREFIX: &str = "j/";

/// Separator between commands inside a batch payload.
pub const BATCH_SEPARATOR: char = ';';

/// A workspace as reported by the compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: i64,
    /// Human-readable name (often just the id as text).
    pub name: String,
}

/// A mapped window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Stable handle used to target dispatches at this window
    /// (e.g. `"0x55d1c0a3e2b0"`).
    pub address: String,
    /// Workspace the window lived on when the snapshot was taken.
    pub workspace: Workspace,
}

/// Direction argument for `moveintogroup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions in the order they are dispatched.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "l"),
            Direction::Right => write!(f, "r"),
            Direction::Up => write!(f, "u"),
            Direction::Down => write!(f, "d"),
        }
    }
}

/// A single request to the compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `j/activeworkspace` — the focused workspace as JSON.
    ActiveWorkspace,
    /// `j/clients` — every mapped window as a JSON array.
    Clients,
    /// `j/activewindow` — the focused window, or `{}`.
    ActiveWindow,
    /// Turn the active window's container into a group, or back.
    ToggleGroup,
    /// Focus the window with the given address.
    FocusWindow { address: String },
    /// Move the active window into the group lying in `Direction`.
    MoveIntoGroup(Direction),
}

impl Command {
    pub fn focus(address: impl Into<String>) -> Self {
        Command::FocusWindow {
            address: address.into(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ActiveWorkspace => write!(f, "j/activeworkspace"),
            Command::Clients => write!(f, "j/clients"),
            Command::ActiveWindow => write!(f, "j/activewindow"),
            Command::ToggleGroup => write!(f, "dispatch togglegroup"),
            Command::FocusWindow { address } => {
                write!(f, "dispatch focuswindow address:{}", address)
            }
            Command::MoveIntoGroup(dir) => write!(f, "dispatch moveintogroup {}", dir),
        }
    }
}

/// An ordered run of commands sent as one `[[BATCH]]` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBatch {
    commands: Vec<Command>,
}

impl CommandBatch {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render the wire payload: the marker followed by the commands joined
    /// with `;`.
    pub fn payload(&self) -> String {
        let mut out = String::from(BATCH_MARKER);
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(BATCH_SEPARATOR);
            }
            out.push_str(&cmd.to_string());
        }
        out
    }

    /// Split `commands` into consecutive batches whose payloads fit in
    /// `max_bytes`.
    ///
    /// Commands are packed greedily and order is preserved across and
    /// within batches.  A command that cannot fit even on its own still
    /// gets a batch to itself; nothing is ever dropped or truncated.
    pub fn split(commands: &[Command], max_bytes: usize) -> Vec<CommandBatch> {
        let mut batches = Vec::new();
        let mut current: Vec<Command> = Vec::new();
        let mut current_len = BATCH_MARKER.len();

        for cmd in commands {
            let cmd_len = cmd.to_string().len();
            let added = if current.is_empty() { cmd_len } else { cmd_len + 1 };
            if !current.is_empty() && current_len + added > max_bytes {
                batches.push(CommandBatch::new(std::mem::take(&mut current)));
                current_len = BATCH_MARKER.len();
                current.push(cmd.clone());
                current_len += cmd_len;
            } else {
                current.push(cmd.clone());
                current_len += added;
            }
        }
        if !current.is_empty() {
            batches.push(CommandBatch::new(current));
        }
        batches
    }
}
