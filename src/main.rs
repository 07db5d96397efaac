use clap::Parser;
use sprint_dl::{Config, Error, SprintDownloader};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "sprint-dl",
    version,
    about = "Download keyword-matching attachments from an active Jira sprint"
)]
struct Cli {
    /// Jira base URL (e.g., https://your-domain.atlassian.net)
    #[arg(long, env = "JIRA_BASE_URL")]
    base_url: Option<String>,
    /// Jira username (e.g., email@example.com)
    #[arg(long, env = "JIRA_USERNAME")]
    username: Option<String>,
    /// Jira API token
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,
    /// Board name (case-insensitive)
    #[arg(long, env = "JIRA_BOARD")]
    board: Option<String>,
    /// Word contained in the active sprint's name (case-insensitive)
    #[arg(long, env = "JIRA_SPRINT")]
    sprint: Option<String>,
    /// Issue type to keep, e.g. "Task" (case-sensitive)
    #[arg(long, env = "JIRA_ISSUE_TYPE")]
    issue_type: Option<String>,
    /// Substring attachment filenames must contain, e.g. "screenshot" (case-sensitive)
    #[arg(long, env = "JIRA_ATTACHMENT_KEYWORD")]
    keyword: Option<String>,
    /// Directory for downloaded attachments and report.txt
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Per-request timeout in seconds (0 = no timeout)
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

/// Use the supplied value or ask for it on stdin
fn value_or_prompt(value: Option<String>, prompt: &str) -> std::io::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn build_config(cli: Cli) -> std::io::Result<Config> {
    Ok(Config {
        base_url: value_or_prompt(
            cli.base_url,
            "Enter your Jira Base URL (e.g., https://your-domain.atlassian.net):",
        )?,
        username: value_or_prompt(
            cli.username,
            "Enter your Jira Username (e.g., email@example.com):",
        )?,
        api_token: value_or_prompt(cli.api_token, "Enter your Jira API Token:")?,
        board_name: value_or_prompt(cli.board, "Enter the Target Board Name:")?,
        sprint_keyword: value_or_prompt(cli.sprint, "Enter the Targeted Sprint Name:")?,
        issue_type: value_or_prompt(
            cli.issue_type,
            "Enter the Issue Type to Filter (e.g., 'Task'):",
        )?,
        attachment_keyword: value_or_prompt(
            cli.keyword,
            "Enter the Keyword to Match in Attachments (e.g., 'screenshot'):",
        )?,
        output_dir: cli.output_dir,
        request_timeout: (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs)),
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match build_config(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let downloader = match SprintDownloader::new(config) {
        Ok(downloader) => downloader,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match downloader.start().await {
        Ok(summary) => {
            println!(
                "Matched issues: {}, downloaded attachments: {}",
                summary.counters.matched_issues, summary.counters.downloaded
            );
            if !summary.is_clean() {
                println!(
                    "Skipped {} issue(s) and {} attachment(s){}",
                    summary.issues_skipped,
                    summary.downloads_skipped,
                    if summary.pagination_interrupted {
                        "; issue listing stopped early"
                    } else {
                        ""
                    }
                );
            }
        }
        Err(Error::BoardNotFound { .. }) => println!("Board not found."),
        Err(Error::SprintNotFound { .. }) => {
            println!("No active sprint found with the specified keyword.")
        }
        Err(e) => println!("{}", e),
    }

    ExitCode::SUCCESS
}
