//! Command-line argument definitions for smartdo.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "smartdo")]
#[command(about = "A to-do list that understands plain-English task entry")]
#[command(long_about = "smartdo - A smart to-do list for the command line

Type tasks the way you would say them. Dates, times and priorities are
picked out of the text and the rest becomes the title.

QUICK START:
  smartdo add \"Submit report by 15/03/2025 5pm high priority\"
  smartdo add \"buy milk tomorrow\"
  smartdo list
  smartdo done 1

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  smartdo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Task file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task written in natural language
    ///
    /// Picks a priority, a due date and a time out of the text. Whatever
    /// is left becomes the title.
    ///
    /// # Examples
    ///
    ///   smartdo add "Submit report by 15/03/2025 5pm high priority"
    ///   smartdo add buy milk tomorrow
    ///   smartdo add "pay rent on 2025-04-01 priority: low"
    ///
    /// # Supported Patterns
    ///
    ///   Dates:      DD/MM/YYYY, YYYY-MM-DD, today, tomorrow
    ///   Times:      5pm, 5:30 pm, 17:30, 9
    ///   Priority:   high priority, priority: low, priority-medium
    #[command(alias = "a")]
    Add(AddArgs),

    /// List all tasks
    ///
    /// Shows every task with its position, status, priority and due time.
    /// Positions are what `edit`, `done` and `delete` expect.
    #[command(alias = "ls")]
    List,

    /// Show tasks matching a search term
    ///
    /// A task matches when the term appears, ignoring case, in its title,
    /// due time, priority or status.
    ///
    /// # Examples
    ///
    ///   smartdo filter report
    ///   smartdo filter high
    ///   smartdo filter 2025-03
    Filter {
        /// Text to search for
        term: String,
    },

    /// Edit fields of a task
    ///
    /// Only the given fields change. Invalid values are reported and leave
    /// their field as it was; the other fields are still updated.
    Edit(EditArgs),

    /// Mark a task as done
    Done {
        /// Position of the task, as shown by `list`
        position: usize,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Position of the task, as shown by `list`
        position: usize,
    },

    /// Show a motivational quote
    ///
    /// Fetched from the configured quote service when an API key is
    /// available, otherwise picked from a built-in list.
    Quote(QuoteArgs),

    /// Generate shell completions
    ///
    /// Example: smartdo completions bash > ~/.bash_completion.d/smartdo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// The task description in natural language
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Only parse and show what would be created, don't save it
    #[arg(long)]
    pub parse_only: bool,
}

impl AddArgs {
    /// The description words joined back into one line.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args)]
pub struct EditArgs {
    /// Position of the task, as shown by `list`
    pub position: usize,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New due time as "YYYY-MM-DD HH:MM"; an empty value clears it
    #[arg(long)]
    pub due: Option<String>,

    /// New priority (high, medium, low)
    #[arg(long)]
    pub priority: Option<String>,

    /// New status (pending, done)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct QuoteArgs {
    /// API key for the quote service
    #[arg(long, env = "QUOTE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_add_joins_words() {
        let cli = Cli::try_parse_from(["smartdo", "add", "buy", "milk", "tomorrow"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.joined_text(), "buy milk tomorrow");
                assert!(!args.parse_only);
            },
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_add_quoted_with_parse_only() {
        let cli = Cli::try_parse_from([
            "smartdo",
            "add",
            "Submit report by 15/03/2025 5pm high priority",
            "--parse-only",
        ])
        .unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.joined_text(), "Submit report by 15/03/2025 5pm high priority");
                assert!(args.parse_only);
            },
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_add_requires_text() {
        assert!(Cli::try_parse_from(["smartdo", "add"]).is_err());
    }

    #[test]
    fn test_cli_add_alias() {
        let cli = Cli::try_parse_from(["smartdo", "a", "stretch"]).unwrap();
        assert!(matches!(cli.command, Commands::Add(_)));
    }

    #[test]
    fn test_cli_list_alias() {
        let cli = Cli::try_parse_from(["smartdo", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_filter() {
        let cli = Cli::try_parse_from(["smartdo", "filter", "report"]).unwrap();
        match cli.command {
            Commands::Filter { term } => assert_eq!(term, "report"),
            _ => panic!("Expected Filter command"),
        }
    }

    #[test]
    fn test_cli_edit() {
        let cli = Cli::try_parse_from([
            "smartdo",
            "edit",
            "2",
            "--title",
            "call mom",
            "--due",
            "",
            "--priority",
            "low",
        ])
        .unwrap();
        match cli.command {
            Commands::Edit(args) => {
                assert_eq!(args.position, 2);
                assert_eq!(args.title.as_deref(), Some("call mom"));
                assert_eq!(args.due.as_deref(), Some(""));
                assert_eq!(args.priority.as_deref(), Some("low"));
                assert!(args.status.is_none());
            },
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_cli_done_and_delete() {
        let cli = Cli::try_parse_from(["smartdo", "done", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Done { position: 3 }));

        let cli = Cli::try_parse_from(["smartdo", "rm", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { position: 1 }));
    }

    #[test]
    fn test_cli_position_must_be_number() {
        assert!(Cli::try_parse_from(["smartdo", "done", "first"]).is_err());
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["smartdo", "completions", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Zsh }));
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["smartdo", "list"]).unwrap();
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "smartdo", "list", "--output", "json", "-vv", "--file", "/tmp/t.json",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.json")));
    }
}
