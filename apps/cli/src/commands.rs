//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use skillmeta_core::Summarizer;
use skillmeta_core::pipeline::{
    BatchConfig, BatchResult, ProgressReporter, summarize_file, summarize_manifest,
};
use skillmeta_shared::{AppConfig, SkillTarget, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// skillmeta — structured metadata from skill READMEs.
#[derive(Parser)]
#[command(
    name = "skillmeta",
    version,
    about = "Extract titles, descriptions, examples and requirements from skill READMEs.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Summarize a single README and print the record as JSON.
    Summarize {
        /// README file to read.
        readme: PathBuf,

        /// Canonical skill name.
        #[arg(short, long)]
        name: String,

        /// Author / account name (derived from --url when omitted).
        #[arg(short, long)]
        author: Option<String>,

        /// Repository URL, e.g. https://github.com/<author>/<repo>.
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Summarize every skill listed in a manifest.
    Batch {
        /// Manifest file (`skills.toml` or `.json`).
        manifest: PathBuf,

        /// Write compact JSON here instead of printing it.
        #[arg(short, long)]
        output_file: Option<PathBuf>,

        /// READMEs processed at once (defaults to config value).
        #[arg(short, long)]
        concurrency: Option<u32>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout stays JSON.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "skillmeta=info",
        1 => "skillmeta=debug",
        _ => "skillmeta=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Summarize {
            readme,
            name,
            author,
            url,
        } => cmd_summarize(&readme, &name, author.as_deref(), url.as_deref()).await,
        Command::Batch {
            manifest,
            output_file,
            concurrency,
        } => cmd_batch(manifest, output_file.as_deref(), concurrency).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

async fn cmd_summarize(
    readme: &Path,
    name: &str,
    author: Option<&str>,
    url: Option<&str>,
) -> Result<()> {
    let config = load_config()?;

    let target = SkillTarget::resolve(name, url, author)?
        .ok_or_else(|| eyre!("either --author or --url is required"))?;

    info!(skill = name, readme = %readme.display(), "summarizing README");

    let summarizer = Summarizer::new(config.extraction);
    let summary = summarize_file(&summarizer, readme, &target).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

async fn cmd_batch(
    manifest: PathBuf,
    output_file: Option<&Path>,
    concurrency: Option<u32>,
) -> Result<()> {
    let config = load_config()?;
    let concurrency = concurrency.unwrap_or(config.defaults.concurrency);
    if concurrency == 0 {
        return Err(eyre!("--concurrency must be at least 1"));
    }

    let batch_config = BatchConfig {
        manifest_path: manifest,
        concurrency: concurrency as usize,
        extraction: config.extraction,
    };

    let reporter = CliProgress::new()?;
    let result = summarize_manifest(&batch_config, &reporter).await?;

    match output_file {
        Some(path) => {
            write_json(path, &result.summaries)?;
            info!(path = %path.display(), count = result.summaries.len(), "summaries written");
        }
        None => println!("{}", serde_json::to_string_pretty(&result.summaries)?),
    }

    eprintln!();
    eprintln!("  Summarized: {}", result.summaries.len());
    eprintln!("  Failed:     {}", result.failures.len());
    eprintln!("  Skipped:    {}", result.skipped.len());
    eprintln!("  Time:       {:.1}s", result.elapsed.as_secs_f64());
    for (name, error) in &result.failures {
        eprintln!("    {name}: {error}");
    }
    eprintln!();

    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string(value)?;
    std::fs::write(path, json).map_err(|e| eyre!("cannot write '{}': {e}", path.display()))
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")?
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Ok(Self { spinner })
    }
}

impl ProgressReporter for CliProgress {
    fn started(&self, total: usize) {
        self.spinner.set_message(format!("Summarizing {total} skills"));
    }

    fn skill_done(&self, name: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Summarized [{current}/{total}] {name}"));
    }

    fn skill_failed(&self, name: &str, error: &str) {
        self.spinner.println(format!("  failed: {name}: {error}"));
    }

    fn done(&self, _result: &BatchResult) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
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
    fn parses_summarize_args() {
        let cli = Cli::parse_from([
            "skillmeta",
            "-vv",
            "summarize",
            "README.md",
            "--name",
            "weather-skill",
            "--url",
            "https://github.com/MycroftAI/skill-weather",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Summarize { name, url, author, .. } => {
                assert_eq!(name, "weather-skill");
                assert!(url.is_some());
                assert!(author.is_none());
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn parses_batch_args() {
        let cli = Cli::parse_from(["skillmeta", "batch", "skills.toml", "-o", "out.json", "-c", "8"]);
        match cli.command {
            Command::Batch {
                manifest,
                output_file,
                concurrency,
            } => {
                assert_eq!(manifest, PathBuf::from("skills.toml"));
                assert_eq!(output_file, Some(PathBuf::from("out.json")));
                assert_eq!(concurrency, Some(8));
            }
            _ => panic!("expected batch"),
        }
    }
}
