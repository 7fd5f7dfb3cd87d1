mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use weave_registry::ComponentMode;

use crate::commands::{cmd_generate, cmd_names, cmd_print};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Build mode the components are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    All,
    Client,
    Server,
}

impl From<ModeArg> for ComponentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::All => ComponentMode::All,
            ModeArg::Client => ComponentMode::Client,
            ModeArg::Server => ComponentMode::Server,
        }
    }
}

/// A single generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TemplateArg {
    /// components.plugin.mjs
    Plugin,
    /// components.global.mjs
    Global,
    /// components.mjs
    Components,
    /// components.islands.mjs
    Islands,
    /// components.d.ts
    Declarations,
    /// components.json
    Metadata,
}

/// Component template generator for front-end builds.
#[derive(Parser)]
#[command(
    name = "weave",
    version,
    about = "Component template generator for front-end builds"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log progress to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to a weave.toml config file (default: ./weave.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every component template into the build directory
    Generate {
        /// Path to the component registry JSON
        registry: PathBuf,
        /// Build directory (overrides build_dir from the config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Build mode to generate for. `all` keeps every component, so
        /// pascal names must be unique across the whole registry; use
        /// `client` or `server` when a name has per-environment variants
        #[arg(long, default_value = "all", value_enum)]
        mode: ModeArg,
    },

    /// Print one generated template to stdout
    Print {
        /// Template to render
        #[arg(value_enum)]
        template: TemplateArg,
        /// Path to the component registry JSON
        registry: PathBuf,
        /// Build mode to generate for. `all` keeps every component, so
        /// pascal names must be unique across the whole registry; use
        /// `client` or `server` when a name has per-environment variants
        #[arg(long, default_value = "all", value_enum)]
        mode: ModeArg,
    },

    /// List the names of all non-island components
    Names {
        /// Path to the component registry JSON
        registry: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            registry,
            out,
            mode,
        } => {
            cmd_generate(
                &registry,
                out.as_deref(),
                mode.into(),
                cli.config.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Print {
            template,
            registry,
            mode,
        } => {
            cmd_print(
                template,
                &registry,
                mode.into(),
                cli.config.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Names { registry } => {
            cmd_names(&registry, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
