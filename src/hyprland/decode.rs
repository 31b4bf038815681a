//! Decoding of Hyprland's JSON query responses.
//!
//! Only the fields the pipeline needs are declared; serde ignores the rest.
//! Required fields (`id`, `address`, `workspace.id`) have no defaults, so
//! a truncated or reshaped payload fails instead of yielding a zeroed
//! record.

use crate::command::{Window, Workspace};
use crate::error::IpcError;
use serde::Deserialize;

//  Minimal serde structs for the JSON we care about

/// Subset of `j/activeworkspace` and of the `workspace` object nested in
/// each client.
#[derive(Deserialize)]
struct WorkspaceJson {
    id: i64,
    #[serde(default)]
    name: String,
}

/// Subset of a `j/clients` entry and of `j/activewindow`.
#[derive(Deserialize)]
struct WindowJson {
    address: String,
    workspace: WorkspaceJson,
}

impl From<WorkspaceJson> for Workspace {
    fn from(w: WorkspaceJson) -> Self {
        Workspace {
            id: w.id,
            name: w.name,
        }
    }
}

impl From<WindowJson> for Window {
    fn from(w: WindowJson) -> Self {
        Window {
            address: w.address,
            workspace: w.workspace.into(),
        }
    }
}

fn parse<'a, T: Deserialize<'a>>(what: &'static str, bytes: &'a [u8]) -> Result<T, IpcError> {
    serde_json::from_slice(bytes).map_err(|source| IpcError::Decode { what, source })
}

/// Decode a `j/activeworkspace` response.
pub fn decode_workspace(bytes: &[u8]) -> Result<Workspace, IpcError> {
    parse::<WorkspaceJson>("workspace", bytes).map(Into::into)
}

/// Decode a `j/clients` response.
pub fn decode_window_list(bytes: &[u8]) -> Result<Vec<Window>, IpcError> {
    let windows: Vec<WindowJson> = parse("client list", bytes)?;
    Ok(windows.into_iter().map(Into::into).collect())
}

/// Decode a single window object.
pub fn decode_window(bytes: &[u8]) -> Result<Window, IpcError> {
    parse::<WindowJson>("window", bytes).map(Into::into)
}

/// Decode a `j/activewindow` response.
///
/// Hyprland returns an empty object `{}` when no window is focused; that
/// maps to `None`.  Any other object must be a complete window.
pub fn decode_active_window(bytes: &[u8]) -> Result<Option<Window>, IpcError> {
    let value: serde_json::Value = parse("active window", bytes)?;
    if value.as_object().is_some_and(|o| o.is_empty()) {
        return Ok(None);
    }
    serde_json::from_value::<WindowJson>(value)
        .map(|w| Some(w.into()))
        .map_err(|source| IpcError::Decode {
            what: "active window",
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENTS: &str = r#"[
        {
            "address": "0x5581a2b0",
            "mapped": true,
            "at": [10, 40],
            "size": [940, 1030],
            "workspace": { "id": 3, "name": "3" },
            "class": "kitty",
            "title": "~",
            "grouped": []
        },
        {
            "address": "0x5581c4d0",
            "workspace": { "id": -98, "name": "special:scratch" },
            "class": "firefox"
        }
    ]"#;

    #[test]
    fn workspace_fields_survive() {
        let ws = decode_workspace(
            br#"{"id":3,"name":"code","monitor":"DP-1","windows":2,"hasfullscreen":false}"#,
        )
        .unwrap();
        assert_eq!(
            ws,
            Workspace {
                id: 3,
                name: "code".into()
            }
        );
    }

    #[test]
    fn workspace_name_is_optional() {
        let ws = decode_workspace(br#"{"id":7}"#).unwrap();
        assert_eq!(ws.id, 7);
        assert_eq!(ws.name, "");
    }

    #[test]
    fn window_list_keeps_order_and_fields() {
        let windows = decode_window_list(CLIENTS.as_bytes()).unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].address, "0x5581a2b0");
        assert_eq!(windows[0].workspace.id, 3);
        assert_eq!(windows[0].workspace.name, "3");
        assert_eq!(windows[1].address, "0x5581c4d0");
        assert_eq!(windows[1].workspace.id, -98);
    }

    #[test]
    fn empty_client_list() {
        assert!(decode_window_list(b"[]").unwrap().is_empty());
    }

    #[test]
    fn truncated_workspace_is_a_decode_error() {
        let err = decode_workspace(br#"{"id":3,"na"#).unwrap_err();
        assert!(matches!(err, IpcError::Decode { what: "workspace", .. }));
    }

    #[test]
    fn truncated_client_list_is_a_decode_error() {
        let cut = &CLIENTS.as_bytes()[..CLIENTS.len() / 2];
        assert!(matches!(
            decode_window_list(cut),
            Err(IpcError::Decode { .. })
        ));
    }

    #[test]
    fn empty_payload_is_a_decode_error() {
        assert!(matches!(decode_workspace(b""), Err(IpcError::Decode { .. })));
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        assert!(matches!(
            decode_window_list(br#"{"id":3}"#),
            Err(IpcError::Decode { .. })
        ));
        assert!(matches!(
            decode_workspace(b"[]"),
            Err(IpcError::Decode { .. })
        ));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(decode_workspace(br#"{"name":"3"}"#).is_err());
        assert!(decode_window(br#"{"workspace":{"id":1}}"#).is_err());
        assert!(decode_window(br#"{"address":"0x1","workspace":{"name":"1"}}"#).is_err());
    }

    #[test]
    fn active_window_decodes() {
        let w = decode_active_window(
            br#"{"address":"0xA","workspace":{"id":3,"name":"3"},"title":"vim"}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(w.address, "0xA");
        assert_eq!(w.workspace.id, 3);
    }

    #[test]
    fn empty_active_window_is_none() {
        assert_eq!(decode_active_window(b"{}").unwrap(), None);
        assert_eq!(decode_active_window(b" {}\n").unwrap(), None);
    }

    #[test]
    fn partial_active_window_is_an_error() {
        let err = decode_active_window(br#"{"title":"vim"}"#).unwrap_err();
        assert!(matches!(err, IpcError::Decode { what: "active window", .. }));
    }
}
