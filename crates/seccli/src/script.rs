//! Input scripts for the client's script mode (`vpn -s`).
//!
//! A script is exactly what a user would type at the interactive prompts, one
//! answer per line. Connect scripts contain the password, so [`SessionScript`]
//! redacts itself in `Debug` output and has no `Display`.

/// Answer to the client's "accept this banner?" prompt.
const CONFIRM: &str = "y";
const EXIT: &str = "exit";

pub struct SessionScript {
    lines: Vec<String>,
}

impl SessionScript {
    /// Prompt order: server, username, password, second factor, banner, exit.
    pub fn connect(host: &str, username: &str, password: &str, method: &str) -> Self {
        Self {
            lines: vec![
                format!("connect {}", host),
                username.to_string(),
                password.to_string(),
                method.to_string(),
                CONFIRM.to_string(),
                EXIT.to_string(),
            ],
        }
    }

    pub fn disconnect() -> Self {
        Self {
            lines: vec!["disconnect".to_string(), EXIT.to_string()],
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The text written to the client's stdin, every line newline-terminated.
    pub fn to_input(&self) -> String {
        self.lines.iter().fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
    }
}

impl std::fmt::Debug for SessionScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionScript({} lines, redacted)", self.lines.len())
    }
}
