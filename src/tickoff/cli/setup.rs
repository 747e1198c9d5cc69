use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tickoff", bin_name = "tickoff", version = get_version())]
#[command(about = "A small, ordered todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Todo list file to use instead of the one in the data directory
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print command results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo to the end of the list
    #[command(alias = "a")]
    Add {
        /// Task description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
    },

    /// List todos in the order they were added
    #[command(alias = "ls")]
    List {
        /// Only show pending todos
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Only show completed todos
        #[arg(long)]
        completed: bool,
    },

    /// Toggle a todo between pending and completed
    #[command(alias = "done")]
    Toggle {
        /// Id (3 or #3) or exact task text
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,

        /// Match task text even when it looks like an id
        #[arg(long)]
        task: bool,
    },

    /// Remove a todo
    #[command(alias = "rm")]
    Remove {
        /// Id (3 or #3) or exact task text
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,

        /// Match task text even when it looks like an id
        #[arg(long)]
        task: bool,
    },

    /// Remove every completed todo
    Clear,

    /// Show completed and pending counts
    Status,

    /// Run the built-in walkthrough against a throwaway list
    Demo,
}

/// Installs the stderr log subscriber.
///
/// `TICKOFF_LOG` takes precedence; otherwise `--verbose` selects debug level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "tickoff=debug" } else { "tickoff=warn" };
    let filter =
        EnvFilter::try_from_env("TICKOFF_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_aliases_and_globals() {
        let cli = Cli::try_parse_from(["tickoff", "done", "#2", "--file", "x.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        match cli.command {
            Some(Commands::Toggle { selector, task }) => {
                assert_eq!(selector, vec!["#2"]);
                assert!(!task);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn add_keeps_task_words() {
        let cli = Cli::try_parse_from(["tickoff", "add", "Walk", "the", "dog"]).unwrap();
        match cli.command {
            Some(Commands::Add { task }) => assert_eq!(task, vec!["Walk", "the", "dog"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn pending_and_completed_conflict() {
        assert!(Cli::try_parse_from(["tickoff", "ls", "--pending", "--completed"]).is_err());
    }

    #[test]
    fn task_flag_on_remove_and_toggle() {
        let cli = Cli::try_parse_from(["tickoff", "rm", "--task", "3"]).unwrap();
        match cli.command {
            Some(Commands::Remove { selector, task }) => {
                assert_eq!(selector, vec!["3"]);
                assert!(task);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["tickoff", "done", "3", "--task"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Toggle { task: true, .. })
        ));
    }
}
