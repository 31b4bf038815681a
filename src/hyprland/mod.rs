//! Hyprland-specific implementations.
//!
//! This module owns everything that knows about Hyprland's command
//! socket: where it lives ([`endpoint`]), how to talk to it ([`socket`]),
//! and how to read its JSON answers ([`decode`]).
//!
//! Nothing outside this module should reference the socket layout or the
//! JSON field names directly.

pub mod decode;
pub mod endpoint;
pub mod socket;
