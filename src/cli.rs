use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "team-ratings", author, version, about = "Team rating report built from the UTR directory")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Resolve every roster member and print per-team ratings and averages
    Report {
        /// JSON roster file (optional, defaults to the built-in roster)
        #[arg(short, long)]
        roster: Option<PathBuf>,
    },
    /// Show how a single name is matched against the directory
    Resolve {
        /// Full player name, e.g. "Jane Doe"
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_without_roster() {
        let cli = Cli::try_parse_from(["team-ratings", "report"]).unwrap();
        assert_eq!(cli.command, Command::Report { roster: None });
    }

    #[test]
    fn test_report_with_roster() {
        let cli = Cli::try_parse_from(["team-ratings", "report", "--roster", "teams.json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Report {
                roster: Some(PathBuf::from("teams.json"))
            }
        );
    }

    #[test]
    fn test_resolve_collects_name_tokens() {
        let cli = Cli::try_parse_from(["team-ratings", "resolve", "Jane", "Van", "Doe"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Resolve {
                name: vec!["Jane".to_string(), "Van".to_string(), "Doe".to_string()]
            }
        );
    }

    #[test]
    fn test_resolve_requires_name() {
        assert!(Cli::try_parse_from(["team-ratings", "resolve"]).is_err());
    }
}
