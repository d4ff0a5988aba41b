//! Command-line interface for strictly_gobblet.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Gobblet - stacking tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_gobblet")]
#[command(about = "Two-player stacking tic-tac-toe, played with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (geometry overrides, log filter)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives the tracing output
    #[arg(long, default_value = "strictly_gobblet.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["strictly_gobblet"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.log_file, PathBuf::from("strictly_gobblet.log"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "strictly_gobblet",
            "--config",
            "gobblet.toml",
            "--log-file",
            "/tmp/g.log",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("gobblet.toml")));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/g.log"));
    }
}
