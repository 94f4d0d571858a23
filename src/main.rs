use clap::{Parser, Subcommand};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use talent_shortlist::config::{ApiBase, LoggingSettings, Settings, SettingsError};
use talent_shortlist::core::{top_candidates, App, JdForm, SubmitOutcome, TOP_N};
use talent_shortlist::models::{Category, ExperienceLevel};
use talent_shortlist::services::{ApiClient, ApiError};
use talent_shortlist::view::{render_header, render_panel, Alerts, Browser, TerminalAlerts, TerminalBrowser};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Errors surfaced by a subcommand
#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render output")]
    Render(#[from] std::fmt::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shortlist", version, about = "Shortlist resumes against a job description")]
struct Cli {
    /// Base URL of the shortlisting API (overrides API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a job description and show the top three candidates
    Run {
        /// Job description text
        #[arg(long, conflicts_with = "jd_file")]
        jd: Option<String>,

        /// Read the job description from a file
        #[arg(long)]
        jd_file: Option<PathBuf>,

        /// Experience level: fresher, mid, senior or leadership
        #[arg(long, default_value = "fresher")]
        level: ExperienceLevel,

        /// Category: Sales or Pre-Sales
        #[arg(long, default_value = "Pre-Sales")]
        category: Category,

        /// Open the resume of the candidate at this rank (1-3)
        #[arg(long)]
        open: Option<usize>,

        /// Print the shortlist as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show backend statistics
    Stats,
    /// List ingested resumes
    Resumes {
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Check that the backend is reachable
    Health,
    /// Open or save a resume file
    Download {
        resume_id: String,

        /// Save the file here instead of printing its link
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    // Missing configuration is fatal: nothing is rendered and no request is made
    let api_base = match resolve_api_base(cli.api_base.as_deref(), settings) {
        Ok(base) => base,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Using shortlisting API at {}", api_base);
    let api = ApiClient::new(api_base);

    match run(cli.command, api).await {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    // stdout carries the rendered output, logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.compact().init();
    }
}

fn resolve_api_base(
    flag: Option<&str>,
    settings: Result<Settings, SettingsError>,
) -> Result<ApiBase, SettingsError> {
    match flag {
        Some(raw) => ApiBase::parse(raw),
        None => settings?.api_base(),
    }
}

async fn run(command: Commands, api: ApiClient) -> Result<ExitCode, CommandError> {
    match command {
        Commands::Run {
            jd,
            jd_file,
            level,
            category,
            open,
            json,
        } => {
            let jd = read_job_description(jd, jd_file.as_deref())?;
            let form = JdForm::new(jd, level, category);
            run_shortlist(App::new(api), &form, open, json).await
        }
        Commands::Stats => {
            let stats = api.get_stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resumes { limit } => {
            let resumes = api.list_resumes(Some(limit)).await?;
            println!("{}", serde_json::to_string_pretty(&resumes)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Health => {
            let health = api.health().await?;
            println!("{}", health.status);
            Ok(if health.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Download { resume_id, output } => match output {
            None => {
                TerminalBrowser.open_new_context(&api.download_url(&resume_id));
                Ok(ExitCode::SUCCESS)
            }
            Some(path) => {
                let file = api.download_resume(&resume_id).await?;
                // Never trust a backend-chosen path; keep only a bare file name
                let target = if path.is_dir() {
                    path.join(file.save_name(&resume_id))
                } else {
                    path
                };
                tokio::fs::write(&target, &file.bytes).await?;
                info!("Saved {} ({} bytes, {})", target.display(), file.bytes.len(), file.content_type);
                println!("{}", target.display());
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}

async fn run_shortlist(
    mut app: App,
    form: &JdForm,
    open: Option<usize>,
    json: bool,
) -> Result<ExitCode, CommandError> {
    let mut alerts = TerminalAlerts;

    if !json {
        let mut header = String::new();
        render_header(&mut header, app.api().base())?;
        print!("{}", header);
    }

    match app.submit(form, &mut alerts).await {
        SubmitOutcome::Shortlisted { .. } => {}
        SubmitOutcome::Invalid | SubmitOutcome::Failed => return Ok(ExitCode::FAILURE),
    }

    let panel = app.panel();
    if json {
        let top = top_candidates(&app.state().results, TOP_N);
        println!("{}", serde_json::to_string_pretty(&top)?);
    } else {
        let mut out = String::new();
        render_panel(&mut out, &panel)?;
        print!("{}", out);
    }

    if let Some(rank) = open {
        let top = top_candidates(&app.state().results, TOP_N);
        match rank.checked_sub(1).and_then(|i| top.get(i)) {
            Some(candidate) => {
                panel.download(candidate, &mut alerts, &mut TerminalBrowser);
            }
            None => alerts.alert(&format!("No candidate at rank {}.", rank)),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Text from `--jd`, `--jd-file`, or standard input
fn read_job_description(jd: Option<String>, jd_file: Option<&Path>) -> std::io::Result<String> {
    if let Some(jd) = jd {
        return Ok(jd);
    }
    if let Some(path) = jd_file {
        return std::fs::read_to_string(path);
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste the job description, then press Ctrl-D:");
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}
