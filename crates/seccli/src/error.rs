/// Why a connect or disconnect attempt did not reach the expected state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// The scripted run of the VPN client itself failed (spawn error or non-zero exit).
    Command(String),
    /// The script ran, but the follow-up status probe disagrees with the expected outcome.
    Postcondition,
}

/// Error types returned by the session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VpnError {
    /// Neither the install candidates nor the search path yielded a VPN client.
    ExecutableNotFound,
    /// A parameter required by `connect` was absent or empty. Holds the flag name.
    MissingParameter(&'static str),
    /// A parameter would span several script lines. Holds the flag name.
    InvalidParameter(&'static str),
    AlreadyConnected,
    NotConnected,
    /// The non-echoing password prompt could not be read.
    CredentialRead(String),
    /// The VPN client could not be spawned or exited unsuccessfully.
    Process { program: String, reason: String },
    ConnectFailed(FailureCause),
    DisconnectFailed(FailureCause),
}

impl VpnError {
    /// Returns true if the error was raised by a status probe after the scripted run.
    pub fn is_postcondition_failure(&self) -> bool {
        matches!(
            self,
            VpnError::ConnectFailed(FailureCause::Postcondition)
                | VpnError::DisconnectFailed(FailureCause::Postcondition)
        )
    }
}

impl std::fmt::Display for VpnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VpnError::ExecutableNotFound => {
                write!(f, "could not locate Cisco Secure Client/AnyConnect executable")
            }
            VpnError::MissingParameter(flag) => {
                write!(f, "--{} is required for connect command", flag)
            }
            VpnError::InvalidParameter(flag) => {
                write!(f, "--{} must not contain line breaks", flag)
            }
            VpnError::AlreadyConnected => write!(f, "VPN is already connected"),
            VpnError::NotConnected => write!(f, "VPN is not connected."),
            VpnError::CredentialRead(reason) => write!(f, "failed to read password: {}", reason),
            VpnError::Process { program, reason } => write!(f, "{}: {}", program, reason),
            VpnError::ConnectFailed(FailureCause::Command(reason)) => {
                write!(f, "VPN command failed: {}", reason)
            }
            VpnError::ConnectFailed(FailureCause::Postcondition) => {
                write!(f, "VPN connection failed")
            }
            VpnError::DisconnectFailed(FailureCause::Command(reason)) => {
                write!(f, "VPN disconnect command failed: {}", reason)
            }
            VpnError::DisconnectFailed(FailureCause::Postcondition) => {
                write!(f, "VPN disconnection failed")
            }
        }
    }
}

impl std::error::Error for VpnError {}
