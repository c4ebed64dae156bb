//! Commands that operate on the stored session

use super::AppContext;
use crate::error::CliError;
use crate::output::render_session;
use crate::progress::{progress_bar, StatusReport};
use anyhow::Result;
use clap::{Args, ValueEnum};
use wordreveal_core::{now_millis, Session};

/// Arguments for the next and back commands
#[derive(Debug, Args, Default)]
pub struct StepArgs {
    /// Number of units (default: the step size from settings)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,
}

/// Arguments for the show command
#[derive(Debug, Args, Default)]
pub struct ShowArgs {
    /// Print hidden chunks in [brackets] instead of masking them
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: StatusFormat,
}

/// Supported status formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFormat {
    /// Human-readable lines
    Text,
    /// A single JSON object
    Json,
}

fn commit(ctx: &AppContext, session: &Session) -> Result<()> {
    ctx.save_session(session)?;
    println!("{}", StatusReport::of(session, now_millis()).status_line());
    Ok(())
}

/// Reveal the next units
pub fn next(ctx: &AppContext, args: &StepArgs) -> Result<()> {
    let settings = ctx.settings();
    let count = args.count.unwrap_or(settings.words_per_step);
    let session = wordreveal_core::advance(&ctx.session(&settings), count);
    log::info!("Revealed {count} {}", settings.reveal_mode.unit_label());
    commit(ctx, &session)
}

/// Hide the last revealed units
pub fn back(ctx: &AppContext, args: &StepArgs) -> Result<()> {
    let settings = ctx.settings();
    let count = args.count.unwrap_or(settings.words_per_step);
    let session = wordreveal_core::retract(&ctx.session(&settings), count);
    log::info!("Hid {count} {}", settings.reveal_mode.unit_label());
    commit(ctx, &session)
}

pub fn reset(ctx: &AppContext) -> Result<()> {
    let session = wordreveal_core::reset(&ctx.session(&ctx.settings()));
    commit(ctx, &session)
}

pub fn shuffle(ctx: &AppContext) -> Result<()> {
    let session = wordreveal_core::shuffle(&ctx.session(&ctx.settings()));
    commit(ctx, &session)
}

/// Toggle one highlight; unknown ids are an error here
pub fn highlight(ctx: &AppContext, chunk_id: &str) -> Result<()> {
    let session = ctx.session(&ctx.settings());
    if session.chunk(chunk_id).is_none() {
        return Err(CliError::UnknownChunk(chunk_id.to_string()).into());
    }

    let session = wordreveal_core::toggle_highlight(&session, chunk_id);
    ctx.save_session(&session)?;

    if let Some(chunk) = session.chunk(chunk_id) {
        let state = if chunk.is_highlighted() {
            "Highlighted"
        } else {
            "Unhighlighted"
        };
        println!("{state} {chunk_id}: {:?}", chunk.text);
    }
    Ok(())
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let session = ctx.session(&ctx.settings());
        if session.is_empty() {
            println!("No study text. Import a file with `wordreveal import <FILE>`.");
            return Ok(());
        }
        println!("{}", render_session(&session, self.all));
        Ok(())
    }
}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let session = ctx.session(&ctx.settings());
        let report = StatusReport::of(&session, now_millis());

        match self.format {
            StatusFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            StatusFormat::Text => {
                println!("Mode:      {}", report.mode);
                println!(
                    "Progress:  {} {:.2}%",
                    progress_bar(report.percent, 30),
                    report.percent
                );
                println!("Revealed:  {} of {} chunks", report.revealed, report.total);
                println!("Remaining: {}", report.remaining);
                println!("Elapsed:   {}", report.elapsed);
                println!("Streak:    {} day(s)", report.streak);
                if report.complete {
                    println!("Complete!");
                }
            }
        }
        Ok(())
    }
}
