mod cli;

use cli::{Args, Command};
use owo_colors::{OwoColorize, Stream};
use std::path::Path;
use std::process;
use zenq::config::{
    discover_config, load_config_from_path, resolve_api_url, resolve_repo_id, ConfigFile,
};
use zenq::prelude::*;

fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            ExitCode::for_error(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let progress_reporter = StderrProgressReporter::new(args.verbose);

    // Create adapters (Dependency Injection)
    let github_api_url = resolve_api_url(
        args.github_api_url.as_deref(),
        config.github_api_url.as_deref(),
        GitHubClient::API_ENDPOINT,
    );
    let zenhub_api_url = resolve_api_url(
        args.zenhub_api_url.as_deref(),
        config.zenhub_api_url.as_deref(),
        ZenHubClient::API_ENDPOINT,
    );
    let clients = ApiClients::new(
        GitHubClient::with_api_url(args.github_api_token, &github_api_url)?,
        ZenHubClient::with_api_url(args.zenhub_api_token, &zenhub_api_url)?,
    );

    let outcome = match args.command {
        Command::GetBoard { repo } => {
            let request = BoardRequest::new(resolve_repo_id(repo.repo_id, &config)?);
            GetBoardUseCase::new(&clients, &progress_reporter).execute(request)?
        }
        Command::GetEpic { repo, epic_id } => {
            let request = EpicRequest::new(resolve_repo_id(repo.repo_id, &config)?, epic_id);
            GetEpicUseCase::new(&clients, &progress_reporter).execute(request)?
        }
        Command::ListEpics { repo } => {
            let request = EpicListRequest::new(resolve_repo_id(repo.repo_id, &config)?);
            ListEpicsUseCase::new(&clients, &progress_reporter).execute(request)?
        }
        Command::ListRepoIds {
            match_owner,
            filter_name,
        } => {
            let request = RepositoryListRequest::new(match_owner, filter_name);
            ListRepoIdsUseCase::new(&clients, &progress_reporter).execute(request)?
        }
    };

    let writer = ReportWriter::new(SingleTableRenderer::for_stdout(), TerminalPresenter::new());
    writer.write(&outcome)
}

/// Explicit `--config` must exist; otherwise look for one in the working directory
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn report_error(error: &anyhow::Error) {
    let headline = format!("❌ {}", error);
    eprintln!(
        "{}",
        headline.if_supports_color(Stream::Stderr, |text| text.red())
    );

    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }
}
