use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Query ZenHub boards and epics of GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "zenq")]
#[command(version)]
#[command(about = "Query ZenHub boards and epics of GitHub repositories", long_about = None)]
pub struct Args {
    /// GitHub API token
    #[arg(long, env = "ZENQ_GITHUB_API_TOKEN", hide_env_values = true)]
    pub github_api_token: String,

    /// ZenHub API token
    #[arg(long, env = "ZENQ_ZENHUB_API_TOKEN", hide_env_values = true)]
    pub zenhub_api_token: String,

    /// GitHub API root, e.g. for GitHub Enterprise [default: https://api.github.com]
    #[arg(long, env = "ZENQ_GITHUB_API_URL", value_name = "URL")]
    pub github_api_url: Option<String>,

    /// ZenHub API root [default: https://api.zenhub.io]
    #[arg(long, env = "ZENQ_ZENHUB_API_URL", value_name = "URL")]
    pub zenhub_api_url: Option<String>,

    /// Path to a config file (defaults to ./zenq.config.yml when present)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print each remote call to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Repository selection shared by the board commands
#[derive(ClapArgs, Debug, Clone, Copy, Default)]
pub struct RepoArgs {
    /// Numeric GitHub repository id (see `list-repo-ids`)
    #[arg(short, long, env = "ZENQ_REPO_ID")]
    pub repo_id: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show points and issue counts for each pipeline of a repository board
    GetBoard {
        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Show the summary and sub-issues of an epic
    GetEpic {
        #[command(flatten)]
        repo: RepoArgs,

        /// Issue number of the epic
        #[arg(short, long)]
        epic_id: u64,
    },

    /// List the epics of a repository
    ListEpics {
        #[command(flatten)]
        repo: RepoArgs,
    },

    /// List and optionally filter the repositories your GitHub token can see
    ListRepoIds {
        /// Only repositories owned by this login (exact match)
        #[arg(short = 'o', long)]
        match_owner: Option<String>,

        /// Only repositories whose name contains this text (any case)
        #[arg(short = 'n', long)]
        filter_name: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
