//! Error types shared by the transport, the decoder and the pipeline.

use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong while talking to Hyprland.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// The command socket could not be dialed.
    #[error("cannot connect to {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the command or reading the response failed mid-exchange.
    #[error("{op} failed: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The response was not the JSON shape we asked for.  Truncated
    /// responses end up here too.
    #[error("malformed {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Information needed to locate the compositor is missing.
    #[error("{0}")]
    Precondition(String),
}

/// A pipeline step, used to tell the user where a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveEndpoint,
    QueryWorkspace,
    QueryClients,
    ToggleGroup,
    QueryActiveWindow,
    AttachWindows,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolveEndpoint => write!(f, "resolve endpoint"),
            Stage::QueryWorkspace => write!(f, "query active workspace"),
            Stage::QueryClients => write!(f, "query clients"),
            Stage::ToggleGroup => write!(f, "toggle group"),
            Stage::QueryActiveWindow => write!(f, "query active window"),
            Stage::AttachWindows => write!(f, "attach windows"),
        }
    }
}

/// A failed run: the step that failed plus the underlying cause.
///
/// Commands dispatched before the failure are not rolled back.
#[derive(Debug, thiserror::Error)]
#[error("failed to {stage}: {source}")]
pub struct GroupError {
    pub stage: Stage,
    #[source]
    pub source: IpcError,
}

impl GroupError {
    pub fn new(stage: Stage, source: IpcError) -> Self {
        Self { stage, source }
    }
}

/// Extension for tagging an [`IpcError`] result with the stage it came from.
pub trait StageExt<T> {
    fn stage(self, stage: Stage) -> Result<T, GroupError>;
}

impl<T> StageExt<T> for Result<T, IpcError> {
    fn stage(self, stage: Stage) -> Result<T, GroupError> {
        self.map_err(|e| GroupError::new(stage, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_error_names_stage_and_cause() {
        let err = GroupError::new(
            Stage::QueryClients,
            IpcError::Precondition("XDG_RUNTIME_DIR is not set".into()),
        );
        assert_eq!(
            err.to_string(),
            "failed to query clients: XDG_RUNTIME_DIR is not set"
        );
    }

    #[test]
    fn missing_endpoint_is_labelled_with_its_stage() {
        let err: Result<(), GroupError> =
            Err(IpcError::Precondition("XDG_RUNTIME_DIR is not set".into()))
                .stage(Stage::ResolveEndpoint);
        assert_eq!(
            err.unwrap_err().to_string(),
            "failed to resolve endpoint: XDG_RUNTIME_DIR is not set"
        );
    }

    #[test]
    fn connection_error_mentions_path() {
        let err = IpcError::Connection {
            path: PathBuf::from("/run/user/1000/hypr/abc/.socket.sock"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err
            .to_string()
            .starts_with("cannot connect to /run/user/1000/hypr/abc/.socket.sock"));
    }

    #[test]
    fn source_chain_is_preserved() {
        use std::error::Error;
        let err = GroupError::new(
            Stage::ToggleGroup,
            IpcError::Io {
                op: "write",
                source: std::io::Error::from(std::io::ErrorKind::BrokenPipe),
            },
        );
        let inner = err.source().expect("ipc error");
        assert!(inner.to_string().starts_with("write failed"));
        assert!(inner.source().is_some());
    }
}
