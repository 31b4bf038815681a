//! **hyprgroup** — toggle a group around every window on the active
//! Hyprland workspace.
//!
//! One invocation runs a short, strictly sequential pipeline against the
//! compositor's command socket:
//!
//! 1. query the active workspace and the client list,
//! 2. keep the windows living on that workspace,
//! 3. dispatch `togglegroup`,
//! 4. pull every other window into the group and hand focus back to the
//!    window that was active.
//!
//! # Architecture
//!
//! * [`traits::Transport`] — one request/response exchange.  The pipeline
//!   never touches a socket directly, so tests drive it with scripted
//!   responses.
//! * [`hyprland`] — the concrete socket transport, endpoint resolution and
//!   JSON decoding.
//! * [`selector`], [`planner`] — pure functions: filtering and command
//!   construction.
//! * [`executor`] — sends a plan sequentially or as `[[BATCH]]` payloads.
//! * [`grouper`] — ties the stages together.

pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod grouper;
pub mod hyprland;
pub mod planner;
pub mod selector;
pub mod traits;
