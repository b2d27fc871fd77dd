mod cli;

use std::io::{IsTerminal, Write};
use std::time::Duration;

use clap::Parser;
use crossterm::{cursor, execute, terminal};
use finsense_rs::{
    Action, Dashboard, FsClient, NewsBuilder, PredictBuilder, ViewMode, health,
    render::{RenderOptions, render_page, render_prediction},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliError, Command, GlobalArgs};

const HELP: &str = "commands: :news | :custom | :search [TICKER] | :retry | :quit\n\
                    the ':' is optional in the news view; in the custom view any other line is analyzed";

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(error) = run(Cli::parse()).await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli.global)?;
    let opts = RenderOptions {
        color: !cli.global.no_color && std::io::stdout().is_terminal(),
    };

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => interactive(client, opts).await,
        Command::News { ticker, limit } => {
            let mut builder = NewsBuilder::new(&client).limit(limit);
            if let Some(t) = ticker {
                builder = builder.ticker(t);
            }
            let feed = builder.fetch().await?;
            if cli.global.json {
                println!("{}", serde_json::to_string_pretty(&feed)?);
            } else {
                let view = if feed.is_empty() {
                    finsense_rs::NewsView::Empty
                } else {
                    finsense_rs::NewsView::Results(&feed.articles)
                };
                print!("{}", finsense_rs::render::render_news_view(view, opts));
            }
            Ok(())
        }
        Command::Analyze { text } => {
            let sentiment = PredictBuilder::new(&client, text.join(" ")).fetch().await?;
            if cli.global.json {
                println!("{}", serde_json::to_string_pretty(&sentiment)?);
            } else {
                print!("{}", render_prediction(&sentiment, opts));
            }
            Ok(())
        }
        Command::Status => {
            let status = health::status(&client).await?;
            if cli.global.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{} ({})", status.message, status.status);
            }
            if status.is_active() {
                Ok(())
            } else {
                Err(CliError::Inactive(status.status))
            }
        }
    }
}

fn build_client(global: &GlobalArgs) -> Result<FsClient, CliError> {
    let mut builder = FsClient::builder().timeout(Duration::from_secs(global.timeout_secs));
    if let Some(url) = &global.base_url {
        builder = builder.base_url(url.clone());
    }
    Ok(builder.build()?)
}

async fn interactive(client: FsClient, opts: RenderOptions) -> Result<(), CliError> {
    let mut dashboard = Dashboard::new(client);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    step(&mut dashboard, Action::Mount, opts).await?;

    while let Some(line) = lines.next_line().await? {
        let action = match parse_line(&line, dashboard.state().mode()) {
            Input::Act(action) => action,
            Input::Quit => break,
            Input::Help => {
                println!("{HELP}");
                continue;
            }
        };
        let submit = matches!(action, Action::EditAnalysis(_));
        step(&mut dashboard, action, opts).await?;
        if submit {
            step(&mut dashboard, Action::SubmitAnalysis, opts).await?;
        }
    }
    Ok(())
}

/// Apply one action, drawing once before the network call and once after.
async fn step(
    dashboard: &mut Dashboard<FsClient>,
    action: Action,
    opts: RenderOptions,
) -> Result<(), CliError> {
    let effect = dashboard.begin(action);
    draw(&render_page(dashboard.state(), opts), opts)?;
    if let Some(effect) = effect {
        dashboard.complete(effect).await;
        draw(&render_page(dashboard.state(), opts), opts)?;
    }
    Ok(())
}

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Act(Action),
    Quit,
    Help,
}

/// Commands take a `:` prefix. In the news view the prefix may be omitted; in
/// the custom view an unprefixed line is always text to analyze.
fn parse_line(line: &str, mode: ViewMode) -> Input {
    let line = line.trim();
    let command = match line.strip_prefix(':') {
        Some(cmd) => Some(cmd.trim_start()),
        None if mode == ViewMode::News => Some(line),
        None => None,
    };

    if let Some(command) = command {
        let (cmd, rest) = command.split_once(' ').unwrap_or((command, ""));
        return match cmd {
            "news" => Input::Act(Action::SelectMode(ViewMode::News)),
            "custom" => Input::Act(Action::SelectMode(ViewMode::Custom)),
            "search" | "s" => Input::Act(Action::SubmitSearch(rest.to_string())),
            "retry" | "r" => Input::Act(Action::Retry),
            "quit" | "q" | "exit" => Input::Quit,
            _ => Input::Help,
        };
    }

    if line.is_empty() {
        Input::Help
    } else {
        Input::Act(Action::EditAnalysis(line.to_string()))
    }
}

fn draw(page: &str, opts: RenderOptions) -> Result<(), CliError> {
    let mut stdout = std::io::stdout();
    if opts.color {
        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
    }
    writeln!(stdout, "{page}")?;
    stdout.flush()?;
    Ok(())
}
