//! Connection state probing.
//!
//! The VPN client offers no structured status; the only signal is whether the
//! text printed by `vpn status` mentions `Connected`.

use crate::error::VpnError;
use crate::vpncli::{VpnClient, STATUS_ARG};

/// Marker the client prints while a tunnel is up. Matched case-sensitively, so
/// `Disconnected` does not qualify.
const CONNECTED_MARKER: &str = "Connected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    NotConnected,
}

impl ConnectionState {
    /// Classifies the text printed by the client's `status` command.
    pub fn classify(output: &str) -> Self {
        if output.contains(CONNECTED_MARKER) {
            ConnectionState::Connected
        } else {
            ConnectionState::NotConnected
        }
    }

    /// Maps a probe result onto a state. Any failure to run the probe counts
    /// as not connected.
    pub fn from_probe(result: Result<String, VpnError>) -> Self {
        match result {
            Ok(output) => Self::classify(&output),
            Err(e) => {
                log::debug!("Status probe failed, assuming not connected: {}", e);
                ConnectionState::NotConnected
            }
        }
    }

    pub fn is_connected(self) -> bool {
        self == ConnectionState::Connected
    }

    /// The line printed by the `status` command.
    pub fn report(self) -> String {
        format!("VPN Connected: {}", self)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Connected => write!(f, "Yes"),
            ConnectionState::NotConnected => write!(f, "No"),
        }
    }
}

/// Asks the client for its status. Never fails; see [`ConnectionState::from_probe`].
pub fn probe<C: VpnClient + ?Sized>(client: &C) -> ConnectionState {
    let state = ConnectionState::from_probe(client.capture_output(&[STATUS_ARG]));
    log::debug!("Probed VPN state: {:?}", state);
    state
}
