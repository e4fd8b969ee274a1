//! `microtpl`: pick a folder of note templates, render one, and insert it at a
//! cursor position in a document, landing the cursor on the `$cur` marker.

mod app;
mod commands;
mod error;
mod output;
mod prompt;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use microtpl_core::settings::SettingsStore;
use microtpl_core::MarkerColumn;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::error::CtlResult;

#[derive(Debug, Parser)]
#[command(
    name = "microtpl",
    version,
    about = "Insert rendered note templates at the cursor",
    styles = output::clap_styles()
)]
struct Cli {
    /// Vault root: the folder whose files and subfolders are listed.
    #[arg(long, global = true, env = "MICROTPL_VAULT", default_value = ".")]
    vault: PathBuf,

    /// Settings file. Defaults to ./.micro-templates.toml, then ~/.config/micro-templates.toml.
    #[arg(long, global = true, env = "MICROTPL_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Choose the folder templates are read from
    SelectDir {
        /// Set the folder directly (vault-relative) instead of picking it
        #[arg(long)]
        dir: Option<String>,
    },
    /// List templates in the configured folder
    List,
    /// Render a template and print the result
    Render {
        /// Template file name, or name without extension
        template: String,
    },
    /// Render a template and insert it into a document at a cursor position
    Insert(InsertArgs),
    /// Show or edit settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub(crate) struct InsertArgs {
    /// Document to insert into
    #[arg(long)]
    pub file: PathBuf,

    /// Cursor line (zero-indexed)
    #[arg(long, default_value_t = 0)]
    pub line: usize,

    /// Cursor column in characters (zero-indexed)
    #[arg(long, default_value_t = 0)]
    pub ch: usize,

    /// Template to insert; picked interactively when omitted
    #[arg(long, short)]
    pub template: Option<String>,

    /// Override the marker column policy from settings
    #[arg(long, value_enum)]
    pub marker_column: Option<MarkerColumnArg>,

    /// Print the resulting document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum MarkerColumnArg {
    /// Marker column counted from the start of its own line
    LineRelative,
    /// First-line markers offset by the insertion column
    CursorAdjusted,
}

impl From<MarkerColumnArg> for MarkerColumn {
    fn from(arg: MarkerColumnArg) -> Self {
        match arg {
            MarkerColumnArg::LineRelative => MarkerColumn::LineRelative,
            MarkerColumnArg::CursorAdjusted => MarkerColumn::CursorAdjusted,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum ConfigCommands {
    /// Print the current settings
    Show,
    /// Set the templates folder (vault-relative; surrounding whitespace is trimmed)
    SetDir { dir: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let Cli {
        vault,
        config,
        verbose,
        command,
    } = Cli::parse();

    init_tracing(verbose);

    let store = match config {
        Some(path) => SettingsStore::at(path),
        None => SettingsStore::discover(),
    };

    if let Err(e) = run(vault, store, command).await {
        output::error(e);
        std::process::exit(1);
    }
}

async fn run(vault: PathBuf, store: SettingsStore, command: Commands) -> CtlResult<()> {
    let mut app = App::load(vault, store)?;

    match command {
        Commands::SelectDir { dir } => commands::handle_select_dir_command(&mut app, dir).await,
        Commands::List => commands::handle_list_command(&app).await,
        Commands::Render { template } => commands::handle_render_command(&app, &template).await,
        Commands::Insert(args) => commands::handle_insert_command(&app, args).await,
        Commands::Config(cmd) => commands::handle_config_command(cmd, &mut app).await,
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
