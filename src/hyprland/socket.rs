//! [`Transport`] implementation backed by Hyprland's command socket.
//!
//! Hyprland answers exactly one request per connection and then closes its
//! end, so a response is framed by the connection itself: we read until
//! EOF instead of guessing a buffer size.

use super::endpoint::Endpoint;
use crate::error::IpcError;
use crate::traits::Transport;
use log::debug;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// Hyprland command socket.
///
/// No connection is opened eagerly; each [`exchange`](Transport::exchange)
/// dials, writes, reads to EOF and drops the stream, whether or not the
/// exchange succeeded.
#[derive(Debug, Clone)]
pub struct HyprlandSocket {
    path: PathBuf,
}

impl HyprlandSocket {
    pub fn new(endpoint: &Endpoint) -> Self {
        Self::at(endpoint.socket_path())
    }

    /// Talk to a socket at an explicit path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for HyprlandSocket {
    fn exchange(&self, command: &str) -> Result<Vec<u8>, IpcError> {
        let mut stream = UnixStream::connect(&self.path).map_err(|e| IpcError::Connection {
            path: self.path.clone(),
            source: e,
        })?;

        stream
            .write_all(command.as_bytes())
            .map_err(|e| IpcError::Io {
                op: "write",
                source: e,
            })?;

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .map_err(|e| IpcError::Io {
                op: "read",
                source: e,
            })?;

        debug!("{:?} -> {} bytes", command, response.len());
        Ok(response)
    }
}
