use crate::progress::Spinner;
use seccli::{CredentialsProvider, TerminalCredentialsProvider};
use std::io;

/// Terminal credentials provider that suspends the spinner while prompting.
///
/// Unless the client's own output is being streamed, a "Connecting" spinner is
/// started once the password has been read.
pub(crate) struct CliCredentialsProvider<'a> {
    pub(crate) spinner: &'a Spinner,
    pub(crate) verbose: bool,
}

impl CredentialsProvider for CliCredentialsProvider<'_> {
    fn request_password(&self, prompt: &str) -> io::Result<String> {
        self.spinner.stop();
        let password = TerminalCredentialsProvider.request_password(prompt)?;
        if !self.verbose {
            self.spinner.start("Connecting to VPN...");
        }
        Ok(password)
    }
}
