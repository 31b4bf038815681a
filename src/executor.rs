//! Sending a plan to the compositor.
//!
//! [`Executor`] supports two strategies:
//!
//! * [`Strategy::Sequential`] — one exchange per command.
//! * [`Strategy::Batched`] — commands are packed into `[[BATCH]]` payloads
//!   of bounded size, one exchange per payload.
//!
//! Both preserve plan order and stop at the first failed exchange.
//! Commands already sent are not undone.

use crate::command::{Command, CommandBatch, QUERY_PREFIX};
use crate::error::IpcError;
use crate::traits::Transport;
use log::{debug, warn};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Batched { max_bytes: usize },
}

/// Dispatches plans over a [`Transport`].
pub struct Executor<T: Transport> {
    transport: T,
    strategy: Strategy,
}

impl<T: Transport> Executor<T> {
    pub fn new(transport: T, strategy: Strategy) -> Self {
        Self {
            transport,
            strategy,
        }
    }

    /// Send every command of `plan` in order.
    ///
    /// An empty plan sends nothing.
    pub fn execute(&self, plan: &[Command]) -> Result<(), IpcError> {
        match self.strategy {
            Strategy::Sequential => {
                for cmd in plan {
                    let payload = cmd.to_string();
                    let response = self.transport.exchange(&payload)?;
                    check_ack(&payload, &response);
                }
            }
            Strategy::Batched { max_bytes } => {
                let batches = CommandBatch::split(plan, max_bytes);
                debug!(
                    "{} command(s) in {} batch(es) of at most {} bytes",
                    plan.len(),
                    batches.len(),
                    max_bytes
                );
                for batch in batches {
                    let payload = batch.payload();
                    if payload.len() > max_bytes {
                        warn!(
                            "single command exceeds batch limit ({} > {} bytes), sending anyway",
                            payload.len(),
                            max_bytes
                        );
                    }
                    let response = self.transport.exchange(&payload)?;
                    check_ack(&payload, &response);
                }
            }
        }
        Ok(())
    }
}

/// Log any part of a dispatch acknowledgement that is not `ok`.
///
/// Batch responses concatenate one answer per command, separated by blank
/// lines.  The answers do not affect control flow.
fn check_ack(payload: &str, response: &[u8]) {
    let text = String::from_utf8_lossy(response);
    for answer in text.split("\n\n").map(str::trim).filter(|a| !a.is_empty()) {
        if answer != "ok" {
            warn!("compositor answered {:?} to {:?}", answer, payload);
        }
    }
}

/// A [`Transport`] that forwards queries but only prints dispatches.
///
/// Used by `--dry-run`: the pipeline still reads real compositor state,
/// while every mutating payload is written to `out` and answered with
/// `ok`.
pub struct DryRun<T, W> {
    inner: T,
    out: std::cell::RefCell<W>,
}

impl<T: Transport, W: Write> DryRun<T, W> {
    pub fn new(inner: T, out: W) -> Self {
        Self {
            inner,
            out: std::cell::RefCell::new(out),
        }
    }

    pub fn into_output(self) -> W {
        self.out.into_inner()
    }
}

impl<T: Transport, W: Write> Transport for DryRun<T, W> {
    fn exchange(&self, command: &str) -> Result<Vec<u8>, IpcError> {
        if command.starts_with(QUERY_PREFIX) {
            return self.inner.exchange(command);
        }
        writeln!(self.out.borrow_mut(), "{}", command).map_err(|e| IpcError::Io {
            op: "write",
            source: e,
        })?;
        Ok(b"ok".to_vec())
    }
}
