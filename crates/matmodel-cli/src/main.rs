//! matmodel CLI — inspect, export and validate the material model registry.

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "matmodel")]
#[command(version, about = "matmodel — material model UUID registry")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List declared models.
    List {
        /// Only list one category (e.g. mechanical, render_engine).
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print the UUID for a model name.
    Get {
        /// Model name, e.g. Density or RenderCycles.
        name: String,
    },

    /// Find the model a UUID identifies.
    Lookup {
        uuid: String,
    },

    /// Export the registry or a binding descriptor.
    Export {
        /// Export config (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Output file. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (json, toml). Overrides the config.
        #[arg(short, long)]
        format: Option<String>,

        /// Emit a binding descriptor instead of a registry export.
        #[arg(long)]
        bindings: bool,
    },

    /// Validate an exported registry file (.json or .toml).
    Validate {
        path: String,
    },

    /// Self-check the built-in registry.
    Check,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded; keep going.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List { category } => commands::list(category.as_deref()),
        Commands::Get { name } => commands::get(&name),
        Commands::Lookup { uuid } => commands::lookup(&uuid),
        Commands::Export {
            config,
            output,
            format,
            bindings,
        } => commands::export(config.as_deref(), output.as_deref(), format.as_deref(), bindings),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Check => commands::check(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
