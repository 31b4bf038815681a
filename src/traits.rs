//! The seam between the pipeline and the compositor.
//!
//! Everything above the socket — decoding, selection, planning, dispatch —
//! talks to Hyprland only through [`Transport`].  Tests substitute a
//! scripted implementation; `--dry-run` wraps the real one.

use crate::error::IpcError;

/// One request/response exchange with the compositor.
///
/// # Contract
///
/// * Each call is a complete exchange: the implementation sends `command`
///   and returns the **entire** response.
/// * No state is carried between calls.  The Hyprland implementation
///   opens and closes a fresh connection every time.
/// * Failures are reported, never retried.
pub trait Transport {
    fn exchange(&self, command: &str) -> Result<Vec<u8>, IpcError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn exchange(&self, command: &str) -> Result<Vec<u8>, IpcError> {
        (**self).exchange(command)
    }
}


#[cfg(test)]
mod tests {
    use super::mock::ScriptedTransport;
    use super::*;

    #[test]
    fn scripted_transport_records_commands() {
        let t = ScriptedTransport::new().respond("j/clients", "[]");
        assert_eq!(t.exchange("j/clients").unwrap(), b"[]");
        assert_eq!(t.exchange("dispatch togglegroup").unwrap(), b"ok");
        assert_eq!(t.sent(), vec!["j/clients", "dispatch togglegroup"]);
    }

    #[test]
    fn reference_forwards_to_inner_transport() {
        fn toggle<T: Transport>(transport: T) {
            transport.exchange("dispatch togglegroup").unwrap();
        }
        let t = ScriptedTransport::new();
        toggle(&t);
        assert_eq!(t.sent(), vec!["dispatch togglegroup"]);
    }

    #[test]
    fn scripted_failure_is_reported() {
        let t = ScriptedTransport::new().fail_on("dispatch togglegroup");
        assert!(matches!(
            t.exchange("dispatch togglegroup"),
            Err(IpcError::Io { op: "write", .. })
        ));
    }
}
