use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};
use std::io::Write;

/// Environment variable holding env_logger directives that override the CLI level.
pub const LOG_ENV: &str = "SECCLI_LOG";

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".purple(),
    }
}

/// Installs the global logger. Output goes to stderr so it never mixes with
/// the status lines printed on stdout.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] - {}", level_label(record.level()), record.args()))
        .init();
}
