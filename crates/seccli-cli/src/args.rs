use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI wrapper around Cisco Secure Client
#[derive(Parser, Debug)]
#[command(name = "seccli", author, version, about, long_about = None)]
pub struct Args {
    /// Log verbosity for seccli's own diagnostics (written to stderr)
    #[arg(short, long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to VPN
    Connect(ConnectArgs),
    /// Disconnect from VPN
    Disconnect(DisconnectArgs),
    /// Show VPN connection status
    Status(StatusArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConnectArgs {
    /// Your VPN username
    #[arg(short, long)]
    pub username: Option<String>,

    /// VPN URL
    #[arg(short = 'H', long)]
    pub vpn_host: Option<String>,

    /// Authentication method (push, sms, phone or a passcode)
    #[arg(short, long, env = "VPN_METHOD")]
    pub method: Option<String>,

    #[command(flatten)]
    pub exec: ExecArgs,

    /// Show verbose output from VPN tool
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::Args, Debug)]
pub struct DisconnectArgs {
    #[command(flatten)]
    pub exec: ExecArgs,

    /// Show verbose output from VPN tool
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub exec: ExecArgs,
}

#[derive(clap::Args, Debug)]
pub struct ExecArgs {
    /// Path to VPN executable (auto-detected if not provided)
    #[arg(long, value_name = "PATH")]
    pub vpn_exec: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
