use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use api_semver::analyzer::{change_from_history, VersionSelector};
use api_semver::config::{self, Config};
use api_semver::domain::{ReleaseLabels, VersionBump, VersionHistory};
use api_semver::git::Git2Repository;
use api_semver::inspect::ManifestInspector;
use api_semver::sources::CollectedHistory;
use api_semver::ui;

#[derive(clap::Parser)]
#[command(
    name = "api-semver",
    version,
    about = "Recommend the next semantic version from API differences and version history"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Print only the version")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compare two artifacts and recommend the next version
    Analyze {
        #[arg(long, help = "Manifest of the previously released artifact")]
        previous: PathBuf,

        #[arg(long, help = "Manifest of the artifact being released")]
        current: PathBuf,

        #[command(flatten)]
        history: HistoryArgs,

        #[command(flatten)]
        labels: LabelArgs,
    },
    /// Next version for a breaking change, from history alone
    Breaking {
        #[command(flatten)]
        history: HistoryArgs,

        #[command(flatten)]
        labels: LabelArgs,
    },
    /// Next version for added functionality, from history alone
    Feature {
        #[command(flatten)]
        history: HistoryArgs,

        #[command(flatten)]
        labels: LabelArgs,
    },
}

#[derive(clap::Args)]
struct HistoryArgs {
    #[arg(long = "history", value_name = "VERSION", help = "Released version (repeatable)")]
    versions: Vec<String>,

    #[arg(long, value_name = "FILE", help = "File with one released version per line")]
    history_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = ".",
        help = "Read released versions from the git tags of a repository"
    )]
    git_tags: Option<PathBuf>,
}

#[derive(clap::Args)]
struct LabelArgs {
    #[arg(long, value_name = "LABEL", help = "Pre-release label (empty for a release)")]
    prerelease: Option<String>,

    #[arg(long, value_name = "LABEL", help = "Build metadata label")]
    build: Option<String>,
}

impl LabelArgs {
    fn parse(&self) -> Result<ReleaseLabels> {
        let labels = ReleaseLabels::parse(self.prerelease.as_deref(), self.build.as_deref())?;
        Ok(labels)
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;
    let quiet = args.quiet;

    match args.command {
        Command::Analyze {
            previous,
            current,
            history,
            labels,
        } => {
            let labels = labels.parse()?;
            let default_prerelease = config.default_prerelease()?;
            let collected = collect_history(&config, &history, quiet)?;

            let selector = VersionSelector::new(ManifestInspector::new())
                .with_default_prerelease(default_prerelease);
            let result = selector.analyze(&previous, &current, &collected.entries, &labels)?;

            if quiet {
                println!("{}", result.version);
            } else {
                for warning in &result.warnings {
                    ui::display_boundary_warning(warning);
                }
                ui::display_analysis(&result);
            }
        }
        Command::Breaking { history, labels } => {
            bump_from_history(&config, VersionBump::Major, &history, &labels, quiet)?
        }
        Command::Feature { history, labels } => {
            bump_from_history(&config, VersionBump::Minor, &history, &labels, quiet)?
        }
    }

    Ok(())
}

fn bump_from_history(
    config: &Config,
    bump: VersionBump,
    history: &HistoryArgs,
    labels: &LabelArgs,
    quiet: bool,
) -> Result<()> {
    let labels = labels.parse()?;
    let default_prerelease = config.default_prerelease()?;
    let collected = collect_history(config, history, quiet)?;
    let history = VersionHistory::parse(&collected.entries);
    let version = change_from_history(&history, bump, &labels, &default_prerelease)?;

    if quiet {
        println!("{}", version);
    } else {
        for warning in history.skipped() {
            ui::display_boundary_warning(warning);
        }
        ui::display_version(&version);
    }
    Ok(())
}

/// Merge configured, literal, file and git-tag history into one list
fn collect_history(config: &Config, args: &HistoryArgs, quiet: bool) -> Result<CollectedHistory> {
    let mut collected = CollectedHistory::new();
    collected.add_entries(&config.history.sources);
    collected.add_entries(&args.versions);

    if let Some(path) = &args.history_file {
        collected
            .add_file(path)
            .with_context(|| format!("Failed to read history file '{}'", path.display()))?;
    }

    if let Some(path) = &args.git_tags {
        let repo = Git2Repository::open(path)
            .with_context(|| format!("Failed to open git repository at '{}'", path.display()))?;
        collected.add_tags(&repo, &config.tag_pattern()?)?;
    }

    if !quiet {
        for warning in &collected.warnings {
            ui::display_boundary_warning(warning);
        }
    }

    Ok(collected)
}
