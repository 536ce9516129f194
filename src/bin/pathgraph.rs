//! CLI entry point for the `pathgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pathgraph::cli::commands;
use pathgraph::{DriverConfig, GraphError, ScriptMode};

#[derive(Parser)]
#[command(
    name = "pathgraph",
    about = "Labeled graphs with fewest-hops and shortest-path search"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file (defaults to ./pathgraph.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a graph test script from a file, or interactively from stdin
    Script {
        /// Script file; omit to read from stdin
        file: Option<PathBuf>,
        /// Treat edge labels as costs and search by minimum cost
        #[arg(long)]
        weighted: bool,
        /// Directory LoadGraph resolves dataset files against
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Suppress the banner lines
        #[arg(long)]
        quiet: bool,
    },
    /// Find the fewest-hops path between two heroes
    Heroes {
        /// Tab-separated file with hero and book columns
        file: PathBuf,
        /// Starting hero
        from: String,
        /// Destination hero
        to: String,
    },
    /// Query a campus map
    Campus {
        /// Tab-separated buildings file
        buildings: PathBuf,
        /// Tab-separated paths file
        paths: PathBuf,
        #[command(subcommand)]
        action: CampusAction,
    },
}

#[derive(Subcommand)]
enum CampusAction {
    /// Shortest walking route between two buildings (short names)
    Route {
        /// Starting building short name
        from: String,
        /// Destination building short name
        to: String,
    },
    /// List all buildings
    Buildings,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Script {
            file,
            weighted,
            data_dir,
            quiet,
        } => DriverConfig::load_or_default(cli.config.as_deref()).and_then(|mut config| {
            if weighted {
                config.mode = ScriptMode::Weighted;
            }
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            if quiet {
                config.banner = false;
            }
            commands::cmd_script(file.as_deref(), &config)
        }),
        Commands::Heroes { file, from, to } => commands::cmd_heroes(&file, &from, &to, json),
        Commands::Campus {
            buildings,
            paths,
            action,
        } => match action {
            CampusAction::Route { from, to } => {
                commands::cmd_campus_route(&buildings, &paths, &from, &to, json)
            }
            CampusAction::Buildings => commands::cmd_campus_buildings(&buildings, &paths, json),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Dataset(_) | GraphError::Config(_) => 2,
            GraphError::UnknownNode(_)
            | GraphError::UnknownBuilding(_)
            | GraphError::UnknownGraph(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
