use anyhow::{Context, Result};
use biome_migrate::migrate::{MigrationOptions, Migrator};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "BIOME_MIGRATE_LOG";

#[derive(Parser)]
#[command(name = "biome-migrate")]
#[command(about = "Migrate a JavaScript project from ESLint and Prettier to Biome", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIMESTAMP"), ")"))]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    migrate: MigrateArgs,

    /// Print debug logs and the full package.json diff
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up legacy config, install Biome and rewrite package.json (default)
    Migrate(MigrateArgs),

    /// Show what a migration would change without touching anything
    Detect {
        /// Directory inside the project (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Default)]
struct MigrateArgs {
    /// Directory inside the project (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Skip the uncommitted-changes warning
    #[arg(long)]
    no_git_check: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("biome_migrate=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout carries the report and the package manager's own output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn start_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to read the current directory"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Detect { dir }) => {
            let start = start_dir(dir)?;
            println!("{} Inspecting {}...\n", "🔍".blue(), start.display());
            Migrator::default().plan(&start).print();
            println!(
                "\n{} Run {} to apply these changes",
                "Tip:".blue().bold(),
                "biome-migrate".yellow()
            );
        }

        Some(Commands::Migrate(args)) => run_migration(args, cli.verbose)?,
        None => run_migration(cli.migrate, cli.verbose)?,
    }

    Ok(())
}

fn run_migration(args: MigrateArgs, verbose: bool) -> Result<()> {
    let start = start_dir(args.dir)?;
    if !start.is_dir() {
        anyhow::bail!("Not a directory: {}", start.display());
    }

    let migrator = Migrator::new(MigrationOptions {
        check_git: !args.no_git_check,
    });

    let mut outcome = migrator.migrate(&start);
    outcome.report(verbose);

    if outcome.is_aborted() {
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}
