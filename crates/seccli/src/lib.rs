//! # Cisco Secure Client Wrapper Library
//!
//! This library drives the Cisco Secure Client / AnyConnect command-line client
//! (`vpn`, `vpncli.exe`) through its script mode to connect, disconnect, and
//! report connection status.

pub mod credentials;
pub mod error;
pub mod logger;
pub mod script;
pub mod session;
pub mod status;
pub mod vpncli;

// Re-export commonly used items
pub use credentials::{CredentialsProvider, TerminalCredentialsProvider};
pub use error::{FailureCause, VpnError};
pub use logger::init_logger;
pub use session::{ConnectParameters, VpnSession, DEFAULT_SECONDARY_METHOD};
pub use status::ConnectionState;
pub use vpncli::{locate_vpn_client, OsFamily, VpnCli, VpnClient};
