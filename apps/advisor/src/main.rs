use std::{path::PathBuf, process::ExitCode, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    FileDownloadSink, FileSessionStore, FormInputs, FormWorkflow, HtmlView,
    HttpRecommendationApi, Layout, PageBindings, ReportOutcome, ResultPage, ResultView,
    SessionStore, SubmitOutcome, TextView,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use crate::config::{load_settings, Settings};
use crate::terminal::{FormArgs, StderrAlerts, TerminalControl};

const SUBMIT_LABEL: &str = "Get Recommendation";

#[derive(Parser, Debug)]
#[command(about = "Crop recommendation client")]
struct Cli {
    /// Settings file; defaults to ./advisor.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Directory holding this session's cached result.
    #[arg(long, global = true)]
    session_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    download_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit soil and weather readings and show the recommended crop.
    Recommend(FormArgs),
    /// Show the last recommendation of this session.
    Show,
    /// Download a PDF report for the last recommendation.
    Report,
    /// End the session, forgetting the cached recommendation.
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
}

impl Cli {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(v) = &self.base_url {
            settings.base_url = v.clone();
        }
        if let Some(v) = &self.session_dir {
            settings.session_dir = v.clone();
        }
        if let Some(v) = &self.download_dir {
            settings.download_dir = v.clone();
        }
        if let Some(v) = self.timeout_secs {
            settings.request_timeout_secs = Some(v);
        }
    }
}

fn stdout_view(format: Format, layout: Layout) -> Box<dyn ResultView> {
    match format {
        Format::Text => Box::new(TextView::new(std::io::stdout())),
        Format::Html => Box::new(HtmlView::new(layout, std::io::stdout())),
    }
}

fn build_workflow(
    settings: &Settings,
    session: Arc<dyn SessionStore>,
    form: Option<Box<dyn FormInputs>>,
    format: Format,
) -> Result<FormWorkflow> {
    let timeout = settings.request_timeout_secs.map(Duration::from_secs);
    let api = HttpRecommendationApi::with_timeout(&settings.base_url, timeout)
        .with_context(|| format!("cannot use service url '{}'", settings.base_url))?;
    Ok(FormWorkflow::new(
        Arc::new(api),
        session,
        PageBindings {
            form,
            submit: Box::new(TerminalControl::new(SUBMIT_LABEL)),
            view: stdout_view(format, Layout::Inline),
            alerts: Box::new(StderrAlerts),
            downloads: Box::new(FileDownloadSink::new(&settings.download_dir)),
        },
    ))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);
    info!(
        base_url = %settings.base_url,
        session_dir = %settings.session_dir.display(),
        "advisor: settings loaded"
    );

    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&settings.session_dir));

    match cli.command {
        Command::Recommend(form) => {
            let inputs: Box<dyn FormInputs> = Box::new(form.into_inputs());
            let mut workflow = build_workflow(&settings, session, Some(inputs), cli.format)?;
            match workflow.submit().await {
                SubmitOutcome::Rendered(_) | SubmitOutcome::Detached => Ok(ExitCode::SUCCESS),
                SubmitOutcome::Failed(_) => Ok(ExitCode::FAILURE),
            }
        }
        Command::Show => {
            let mut page = ResultPage::new(session, stdout_view(cli.format, Layout::ResultPage));
            if page.load()?.is_none() {
                println!("No recommendation cached for this session.");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Report => {
            let mut workflow = build_workflow(&settings, session, None, cli.format)?;
            match workflow.generate_report().await {
                ReportOutcome::Saved {
                    file_name,
                    size_bytes,
                } => {
                    println!(
                        "Saved {} ({size_bytes} bytes)",
                        settings.download_dir.join(file_name).display()
                    );
                    Ok(ExitCode::SUCCESS)
                }
                ReportOutcome::Failed(_) => Ok(ExitCode::FAILURE),
            }
        }
        Command::Clear => {
            session.clear()?;
            println!("Session cleared.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
