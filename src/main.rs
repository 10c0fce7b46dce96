use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use stagewatch::areas::session::Session;
use stagewatch::artifacts::core::PagerWriter;
use stagewatch::artifacts::core::config::ConfigOverrides;
use stagewatch::commands::parse::parse_report;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stagewatch",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Keep a live view of staged and unstaged changes",
    long_about = "stagewatch polls `git status` on a steady cadence and keeps the staged \
    and working-tree change sets in sync across polls, preserving per-file selection \
    and working-tree statistics between updates.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    verbose: bool,
    #[arg(
        short = 'C',
        long,
        global = true,
        help = "Run as if started in this directory"
    )]
    path: Option<PathBuf>,
    #[arg(long, global = true, help = "Report ignored files as well")]
    ignored: bool,
    #[arg(
        long,
        global = true,
        help = "List individual files inside untracked directories"
    )]
    untracked_files_all: bool,
    #[arg(long, global = true, help = "The git executable to run")]
    git: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Poll once and show staged and unstaged changes",
        long_about = "This command runs a single poll against the repository and prints the staged \
        set, the working-tree set and the working-tree statistics."
    )]
    Status {
        #[arg(long, help = "Print one tab-separated record per line")]
        porcelain: bool,
    },
    #[command(
        name = "watch",
        about = "Keep polling and report whenever the status changes",
        long_about = "This command ticks on a fixed interval, polls every `rate` ticks and prints \
        a timestamped summary each time a poll changes the staged or working-tree set."
    )]
    Watch {
        #[arg(short, long, help = "Ticks between two polls")]
        rate: Option<u64>,
        #[arg(long = "tick-ms", help = "Milliseconds per tick")]
        tick_ms: Option<u64>,
        #[arg(long, help = "Stop after this many polls")]
        max_polls: Option<usize>,
        #[arg(long, help = "Print one tab-separated record per line")]
        porcelain: bool,
    },
    #[command(
        name = "diff",
        about = "Show the unstaged diff of the selected files",
        long_about = "This command selects the given paths in the working-tree set and prints \
        their diff. Without paths, every unstaged change is selected."
    )]
    Diff {
        #[arg(index = 1, num_args = 0.., help = "Working-tree paths to select")]
        paths: Vec<String>,
    },
    #[command(
        name = "stage",
        about = "Stage working-tree changes",
        long_about = "This command selects the given paths in the working-tree set and adds them \
        to the index, deletions included."
    )]
    Stage {
        #[arg(index = 1, required = true, help = "Working-tree paths to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "unstage",
        about = "Move staged changes back to the working tree",
        long_about = "This command selects the given paths in the staged set and resets them to \
        HEAD in the index. The working tree is left alone."
    )]
    Unstage {
        #[arg(index = 1, required = true, help = "Staged paths to unstage")]
        paths: Vec<String>,
    },
    #[command(
        name = "remove",
        about = "Delete files and stage the deletion",
        long_about = "This command selects the given paths in the working-tree set and removes them \
        with `git rm`. Files with unstaged modifications are listed and kept unless --force is given."
    )]
    Remove {
        #[arg(index = 1, required = true, help = "Working-tree paths to remove")]
        paths: Vec<String>,
        #[arg(short, long, help = "Remove files even if their unstaged edits would be lost")]
        force: bool,
    },
    #[command(
        name = "parse",
        about = "Reconcile a saved status report",
        long_about = "This command reads a `git status --porcelain` report from a file or stdin, \
        reconciles it into empty sets and prints the result."
    )]
    Parse {
        #[arg(index = 1, help = "Report file; reads stdin when omitted")]
        file: Option<PathBuf>,
        #[arg(long, help = "Print one tab-separated record per line")]
        porcelain: bool,
    },
}

impl Commands {
    fn is_paged(&self) -> bool {
        match self {
            Commands::Status { porcelain } => !porcelain,
            Commands::Diff { .. } => true,
            Commands::Watch { .. }
            | Commands::Stage { .. }
            | Commands::Unstage { .. }
            | Commands::Remove { .. }
            | Commands::Parse { .. } => false,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("stagewatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout_is_terminal = std::io::stdout().is_terminal();
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }

    let use_pager =
        stdout_is_terminal && std::env::var_os("NO_PAGER").is_none() && cli.command.is_paged();
    let pager = Pager::new();
    let writer: Box<dyn Write> = if use_pager {
        Box::new(PagerWriter::new(pager.clone()))
    } else {
        Box::new(std::io::stdout())
    };

    let mut overrides = ConfigOverrides {
        include_ignored: cli.ignored.then_some(true),
        untracked_files_all: cli.untracked_files_all.then_some(true),
        git_binary: cli.git.clone(),
        ..ConfigOverrides::default()
    };
    let path = match &cli.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Status { porcelain } => {
            let mut session = Session::open(&path, writer, &overrides).await?;
            session.status(porcelain).await?
        }
        Commands::Watch {
            rate,
            tick_ms,
            max_polls,
            porcelain,
        } => {
            overrides.update_rate = rate;
            overrides.tick_interval_ms = tick_ms;

            let mut session = Session::open(&path, writer, &overrides).await?;
            session.watch(max_polls, porcelain).await?
        }
        Commands::Diff { paths } => {
            let mut session = Session::open(&path, writer, &overrides).await?;
            session.diff(&paths).await?
        }
        Commands::Stage { paths } => {
            let mut session = Session::open(&path, writer, &overrides).await?;
            session.stage(&paths).await?
        }
        Commands::Unstage { paths } => {
            let mut session = Session::open(&path, writer, &overrides).await?;
            session.unstage(&paths).await?
        }
        Commands::Remove { paths, force } => {
            let mut session = Session::open(&path, writer, &overrides).await?;
            session.remove(&paths, force).await?
        }
        Commands::Parse { file, porcelain } => {
            let report = match file {
                Some(file) => std::fs::read_to_string(&file)
                    .with_context(|| format!("failed to read {}", file.display()))?,
                None => std::io::read_to_string(std::io::stdin())
                    .context("failed to read report from stdin")?,
            };

            let mut writer = writer;
            parse_report(&report, writer.as_mut(), porcelain)?
        }
    }

    if use_pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
