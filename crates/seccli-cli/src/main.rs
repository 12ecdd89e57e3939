//! # seccli
//!
//! Connects to, disconnects from, and reports the state of a Cisco Secure
//! Client VPN by scripting the vendor's `vpn` command-line client.

mod args;
mod credentials;
mod progress;

use args::{Args, Command, ConnectArgs, DisconnectArgs, StatusArgs};
use clap::error::ErrorKind;
use clap::Parser;
use console::Style;
use credentials::CliCredentialsProvider;
use progress::Spinner;
use seccli::{init_logger, ConnectParameters, VpnCli, VpnSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return usage_error(e),
    };
    init_logger(args.level.into());

    log::debug!("Parsed arguments: {:?}", args);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Help and version requests keep clap's own output and exit code; every
/// other parse error is reported like any other failure.
fn usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        _ => {
            let rendered = e.to_string();
            eprint!("Error: {}", rendered.strip_prefix("error: ").unwrap_or(&rendered));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Connect(args) => connect(args),
        Command::Disconnect(args) => disconnect(args),
        Command::Status(args) => status(args),
    }
}

fn success(message: &str) {
    println!("{}", Style::new().green().apply_to(message));
}

fn connect(args: ConnectArgs) -> anyhow::Result<()> {
    // Validate before touching the filesystem or spawning anything.
    let params = ConnectParameters::new(args.vpn_host, args.username, args.method, args.verbose)?;
    log::debug!("Second-factor method: {}", params.method);
    let session = VpnSession::new(VpnCli::resolve(args.exec.vpn_exec)?);

    let spinner = Spinner::new();
    spinner.start("Checking VPN status...");
    let provider = CliCredentialsProvider {
        spinner: &spinner,
        verbose: params.verbose,
    };
    let result = session.connect(&params, &provider);
    spinner.stop();
    result?;

    success("VPN connection successful");
    Ok(())
}

fn disconnect(args: DisconnectArgs) -> anyhow::Result<()> {
    let session = VpnSession::new(VpnCli::resolve(args.exec.vpn_exec)?);

    // Streamed client output and a spinner would overwrite each other.
    let spinner = Spinner::new();
    if !args.verbose {
        spinner.start("Disconnecting from VPN...");
    }
    let result = session.disconnect(args.verbose);
    spinner.stop();
    result?;

    success("VPN disconnection successful");
    Ok(())
}

fn status(args: StatusArgs) -> anyhow::Result<()> {
    let session = VpnSession::new(VpnCli::resolve(args.exec.vpn_exec)?);

    let spinner = Spinner::new();
    spinner.start("Checking VPN status...");
    let state = session.status();
    spinner.stop();

    println!("{}", state.report());
    Ok(())
}
