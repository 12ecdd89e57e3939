use std::io;

/// Prompt shown before reading the VPN password.
pub const PASSWORD_PROMPT: &str = "Enter VPN password: ";

/// Trait for obtaining the VPN password.
///
/// The password is read once per connect attempt and never cached.
pub trait CredentialsProvider {
    fn request_password(&self, prompt: &str) -> io::Result<String>;
}

/// Reads the password from the controlling terminal without echoing it.
pub struct TerminalCredentialsProvider;

impl CredentialsProvider for TerminalCredentialsProvider {
    fn request_password(&self, prompt: &str) -> io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}
