//! Location of the Hyprland command socket.
//!
//! Hyprland ≥ 0.40 keeps its sockets at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
//! The two inputs are captured once into an [`Endpoint`] and handed to the
//! transport, so nothing deeper in the crate reads the environment.

use crate::error::IpcError;
use std::path::PathBuf;

pub const RUNTIME_DIR_VAR: &str = "XDG_RUNTIME_DIR";
pub const INSTANCE_SIGNATURE_VAR: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// A resolved Hyprland instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub runtime_dir: PathBuf,
    pub instance_signature: String,
}

impl Endpoint {
    /// Read both inputs from the process environment.
    pub fn from_env() -> Result<Self, IpcError> {
        Self::from_vars(
            std::env::var(RUNTIME_DIR_VAR).ok(),
            std::env::var(INSTANCE_SIGNATURE_VAR).ok(),
        )
    }

    /// Build an endpoint from explicit values.
    ///
    /// Absent and empty values are both rejected with
    /// [`IpcError::Precondition`] naming the missing variable.
    pub fn from_vars(
        runtime_dir: Option<String>,
        instance_signature: Option<String>,
    ) -> Result<Self, IpcError> {
        let runtime_dir = require(RUNTIME_DIR_VAR, runtime_dir)?;
        let instance_signature = require(INSTANCE_SIGNATURE_VAR, instance_signature)?;
        Ok(Self {
            runtime_dir: PathBuf::from(runtime_dir),
            instance_signature,
        })
    }

    /// Path of the command socket (`.socket.sock`).
    pub fn socket_path(&self) -> PathBuf {
        self.runtime_dir
            .join("hypr")
            .join(&self.instance_signature)
            .join(".socket.sock")
    }
}

fn require(name: &str, value: Option<String>) -> Result<String, IpcError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(IpcError::Precondition(format!(
            "{} is not set, is Hyprland running?",
            name
        ))),
    }
}
