//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Subcommand;
use wordreveal_core::{FileStore, Session, Settings, Store};

pub mod generate_config;
pub mod session;
pub mod settings;
pub mod split;
pub mod study;
pub mod transfer;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive study screen
    Study(study::StudyArgs),

    /// Print the chunks a text splits into
    Split(split::SplitArgs),

    /// Reveal the next units of the stored session
    Next(session::StepArgs),

    /// Hide the last revealed units of the stored session
    Back(session::StepArgs),

    /// Hide everything and clear highlights
    Reset,

    /// Shuffle the chunks and start over
    Shuffle,

    /// Toggle the highlight of one chunk
    Highlight {
        /// Chunk id as printed by `split` (e.g. chunk-word-4)
        chunk_id: String,
    },

    /// Print the study text with hidden chunks masked
    Show(session::ShowArgs),

    /// Print progress of the stored session
    Status(session::StatusArgs),

    /// Replace the study text with the contents of a file
    Import(transfer::ImportArgs),

    /// Write the study text to a file
    Export(transfer::ExportArgs),

    /// Show or change settings
    Settings(settings::SettingsArgs),

    /// Generate a CLI configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Commands::Study(args) => args.execute(ctx),
            Commands::Split(args) => args.execute(),
            Commands::Next(args) => session::next(ctx, args),
            Commands::Back(args) => session::back(ctx, args),
            Commands::Reset => session::reset(ctx),
            Commands::Shuffle => session::shuffle(ctx),
            Commands::Highlight { chunk_id } => session::highlight(ctx, chunk_id),
            Commands::Show(args) => args.execute(ctx),
            Commands::Status(args) => args.execute(ctx),
            Commands::Import(args) => args.execute(ctx),
            Commands::Export(args) => args.execute(ctx),
            Commands::Settings(args) => args.execute(ctx),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Study(_))
    }
}

/// Configuration and storage shared by all commands
#[derive(Debug)]
pub struct AppContext {
    pub config: CliConfig,
    pub store: FileStore,
}

impl AppContext {
    pub fn new(config: CliConfig, store: FileStore) -> Self {
        Self { config, store }
    }

    pub fn settings(&self) -> Settings {
        self.store.load_settings()
    }

    /// Stored session, rebuilt when its mode differs from `settings`
    pub fn session(&self, settings: &Settings) -> Session {
        self.store.load_session().with_mode(settings.reveal_mode)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.store
            .save_settings(settings)
            .context("Failed to save settings")
    }

    pub fn save_session(&self, session: &Session) -> Result<()> {
        self.store
            .save_session(session)
            .context("Failed to save session")
    }
}
