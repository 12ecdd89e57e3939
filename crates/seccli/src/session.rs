//! Connect / disconnect orchestration.
//!
//! The client's own exit status is not a reliable signal of tunnel state, so
//! every operation probes status before and after running its script.

use crate::credentials::{CredentialsProvider, PASSWORD_PROMPT};
use crate::error::{FailureCause, VpnError};
use crate::script::SessionScript;
use crate::status::{probe, ConnectionState};
use crate::vpncli::{VpnClient, SCRIPT_MODE_ARG};

/// Second-factor method used when none is configured.
pub const DEFAULT_SECONDARY_METHOD: &str = "push";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectParameters {
    pub host: String,
    pub username: String,
    /// Passed verbatim to the client's second-factor prompt (push, sms, phone, a passcode...).
    pub method: String,
    /// Show the client's own output while the script runs.
    pub verbose: bool,
}

impl ConnectParameters {
    /// Validates the user-supplied values. `host` and `username` must be
    /// present and non-empty; an absent or empty `method` falls back to
    /// [`DEFAULT_SECONDARY_METHOD`]. Each value becomes one script line, so
    /// line breaks are rejected.
    pub fn new(
        host: Option<String>,
        username: Option<String>,
        method: Option<String>,
        verbose: bool,
    ) -> Result<Self, VpnError> {
        fn single_line(value: String, flag: &'static str) -> Result<String, VpnError> {
            if value.contains(['\n', '\r']) {
                return Err(VpnError::InvalidParameter(flag));
            }
            Ok(value)
        }

        fn required(value: Option<String>, flag: &'static str) -> Result<String, VpnError> {
            let value = value
                .filter(|v| !v.is_empty())
                .ok_or(VpnError::MissingParameter(flag))?;
            single_line(value, flag)
        }

        let username = required(username, "username")?;
        let host = required(host, "vpn-host")?;
        let method = single_line(
            method
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_SECONDARY_METHOD.to_string()),
            "method",
        )?;

        Ok(Self {
            host,
            username,
            method,
            verbose,
        })
    }
}

pub struct VpnSession<C> {
    client: C,
}

impl<C: VpnClient> VpnSession<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn status(&self) -> ConnectionState {
        probe(&self.client)
    }

    /// Connects using `params`, asking `credentials` for the password only
    /// once the client reports no active tunnel.
    pub fn connect(
        &self,
        params: &ConnectParameters,
        credentials: &dyn CredentialsProvider,
    ) -> Result<(), VpnError> {
        if self.status().is_connected() {
            return Err(VpnError::AlreadyConnected);
        }

        let password = credentials
            .request_password(PASSWORD_PROMPT)
            .map_err(|e| VpnError::CredentialRead(e.to_string()))?;

        let script = SessionScript::connect(&params.host, &params.username, &password, &params.method);
        drop(password);

        log::info!(
            "Connecting to {} as {} (method: {})",
            params.host,
            params.username,
            params.method
        );
        self.client
            .run_scripted(&[SCRIPT_MODE_ARG], &script.to_input(), params.verbose)
            .map_err(|e| VpnError::ConnectFailed(FailureCause::Command(e.to_string())))?;

        if !self.status().is_connected() {
            log::warn!("Script finished but the client does not report a connection");
            return Err(VpnError::ConnectFailed(FailureCause::Postcondition));
        }

        log::info!("Connected to {}", params.host);
        Ok(())
    }

    pub fn disconnect(&self, verbose: bool) -> Result<(), VpnError> {
        if !self.status().is_connected() {
            return Err(VpnError::NotConnected);
        }

        log::info!("Disconnecting");
        self.client
            .run_scripted(&[SCRIPT_MODE_ARG], &SessionScript::disconnect().to_input(), verbose)
            .map_err(|e| VpnError::DisconnectFailed(FailureCause::Command(e.to_string())))?;

        if self.status().is_connected() {
            log::warn!("Client still reports a connection after disconnect");
            return Err(VpnError::DisconnectFailed(FailureCause::Postcondition));
        }

        log::info!("Disconnected");
        Ok(())
    }
}
