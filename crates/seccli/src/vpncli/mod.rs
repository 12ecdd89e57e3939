//! Cisco Secure Client (`vpn` / `vpncli`) executable management.
//!
//! Locating the installed client lives here; spawning it lives in [`process`].
//! The [`VpnClient`] trait is the seam the session controller talks through.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::VpnError;

pub mod process;

pub use process::{capture_output, run_scripted};

/// Binary names tried on the search path once no install candidate matched.
pub const FALLBACK_NAMES: [&str; 2] = ["vpn", "vpncli"];

/// Argument that puts the client into script mode (prompts answered from stdin).
pub const SCRIPT_MODE_ARG: &str = "-s";

/// Argument that asks the client for its connection state.
pub const STATUS_ARG: &str = "status";

// ── OsFamily ──────────────────────────────────────────────────────────────────

/// Operating system families with a known install layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl OsFamily {
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value onto a family.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "macos" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            "windows" => OsFamily::Windows,
            _ => OsFamily::Other,
        }
    }

    /// Known install locations, most preferred first. Unknown systems get none.
    pub fn install_candidates(self) -> &'static [&'static str] {
        match self {
            OsFamily::MacOs => &[
                "/opt/cisco/secureclient/bin/vpn",
                "/Applications/Cisco/Cisco Secure Client.app/Contents/MacOS/vpn",
                "/Applications/Cisco AnyConnect Secure Mobility Client.app/Contents/MacOS/vpn",
            ],
            OsFamily::Linux => &[
                "/opt/cisco/secureclient/bin/vpn",
                "/opt/cisco/anyconnect/bin/vpn",
                "/usr/local/bin/vpn",
                "/usr/bin/vpn",
            ],
            OsFamily::Windows => &[
                r"C:\Program Files (x86)\Cisco\Cisco Secure Client\vpncli.exe",
                r"C:\Program Files (x86)\Cisco\Cisco AnyConnect Secure Mobility Client\vpncli.exe",
                r"C:\Program Files\Cisco\Cisco Secure Client\vpncli.exe",
                r"C:\Program Files\Cisco\Cisco AnyConnect Secure Mobility Client\vpncli.exe",
            ],
            OsFamily::Other => &[],
        }
    }
}

// ── locate_vpn_client ─────────────────────────────────────────────────────────

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Attempts to locate the VPN client for `os`.
///
/// Resolution order:
/// 1. The first install candidate that exists and is executable.
/// 2. [`FALLBACK_NAMES`] looked up via `PATH`, in order.
pub fn locate_vpn_client(os: OsFamily) -> Result<PathBuf, VpnError> {
    locate_in(os.install_candidates(), None::<&OsStr>)
}

/// Same as [`locate_vpn_client`] with explicit candidates and, optionally, an
/// explicit search path instead of the process `PATH`.
pub fn locate_in<P, S>(candidates: &[P], search_path: Option<S>) -> Result<PathBuf, VpnError>
where
    P: AsRef<Path>,
    S: AsRef<OsStr>,
{
    if let Some(found) = candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p: &&Path| is_executable(p))
    {
        log::debug!("Found VPN client at install location {}", found.display());
        return Ok(found.to_path_buf());
    }

    let search_path: Option<&OsStr> = search_path.as_ref().map(|s| s.as_ref());
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    FALLBACK_NAMES
        .iter()
        .find_map(|name| {
            let found = match search_path {
                Some(paths) => which::which_in(name, Some(paths), &cwd),
                None => which::which(name),
            };
            found.ok()
        })
        .inspect(|p| log::debug!("Found VPN client on search path: {}", p.display()))
        .ok_or(VpnError::ExecutableNotFound)
}

// ── VpnClient ─────────────────────────────────────────────────────────────────

/// Operations the session controller needs from the VPN client binary.
pub trait VpnClient {
    /// Runs the client with `args` and returns its trimmed output.
    fn capture_output(&self, args: &[&str]) -> Result<String, VpnError>;

    /// Runs the client with `args`, writing `input` to its stdin.
    fn run_scripted(&self, args: &[&str], input: &str, stream_output: bool)
        -> Result<(), VpnError>;
}

/// A resolved VPN client executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpnCli {
    pub path: PathBuf,
}

impl VpnCli {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `override_path` verbatim when given, otherwise locates the client
    /// for the running operating system.
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, VpnError> {
        let path = match override_path {
            Some(path) => {
                log::debug!("Using VPN client override {}", path.display());
                path
            }
            None => locate_vpn_client(OsFamily::current())?,
        };
        log::info!("VPN client: {}", path.display());
        Ok(Self { path })
    }
}

impl VpnClient for VpnCli {
    fn capture_output(&self, args: &[&str]) -> Result<String, VpnError> {
        capture_output(&self.path, args)
    }

    fn run_scripted(
        &self,
        args: &[&str],
        input: &str,
        stream_output: bool,
    ) -> Result<(), VpnError> {
        run_scripted(&self.path, args, input, stream_output)
    }
}
