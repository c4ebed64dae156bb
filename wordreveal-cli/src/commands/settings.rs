//! Settings command implementation

use super::AppContext;
use crate::input::KeyBinding;
use anyhow::{Context, Result};
use clap::Args;
use wordreveal_core::{RevealMode, Settings, Theme};

/// Arguments for the settings command
///
/// Without any flag the current settings are printed.
#[derive(Debug, Args, Default)]
pub struct SettingsArgs {
    /// Reveal mode (word, sentence, row); changing it rebuilds the session
    #[arg(long)]
    pub mode: Option<RevealMode>,

    /// Units revealed or hidden per step (1-50)
    #[arg(long, value_name = "N")]
    pub step: Option<usize>,

    /// Font size of the study view (12-32)
    #[arg(long, value_name = "N")]
    pub font_size: Option<u16>,

    /// Color theme (light, dark)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Key that reveals the next units (e.g. ArrowRight, Space, n)
    #[arg(long, value_name = "KEY")]
    pub key_next: Option<String>,

    /// Key that hides the previous units (e.g. ArrowLeft, Backspace, p)
    #[arg(long, value_name = "KEY")]
    pub key_prev: Option<String>,

    /// Save progress automatically in the study screen
    #[arg(long, value_name = "BOOL")]
    pub autosave: Option<bool>,

    /// Clicking a chunk in the study screen toggles its highlight
    #[arg(long, value_name = "BOOL")]
    pub highlight_mode: Option<bool>,
}

impl SettingsArgs {
    fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.step.is_none()
            && self.font_size.is_none()
            && self.theme.is_none()
            && self.key_next.is_none()
            && self.key_prev.is_none()
            && self.autosave.is_none()
            && self.highlight_mode.is_none()
    }

    /// Apply the given flags on top of `settings`
    pub fn apply(&self, settings: &Settings) -> Result<Settings> {
        let mut updated = settings.clone();
        if let Some(mode) = self.mode {
            updated.reveal_mode = mode;
        }
        if let Some(step) = self.step {
            updated.words_per_step = step;
        }
        if let Some(font_size) = self.font_size {
            updated.font_size = font_size;
        }
        if let Some(theme) = self.theme {
            updated.theme = theme;
        }
        if let Some(key) = &self.key_next {
            updated.key_next = KeyBinding::parse(key)?.name().to_string();
        }
        if let Some(key) = &self.key_prev {
            updated.key_prev = KeyBinding::parse(key)?.name().to_string();
        }
        if let Some(auto_save) = self.autosave {
            updated.auto_save = auto_save;
        }
        if let Some(highlight_mode) = self.highlight_mode {
            updated.highlight_mode = highlight_mode;
        }

        updated.validate().context("Invalid settings")?;
        Ok(updated)
    }

    /// Execute the settings command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let current = ctx.settings();
        if self.is_empty() {
            print_settings(&current);
            return Ok(());
        }

        let updated = self.apply(&current)?;
        ctx.save_settings(&updated)?;

        if updated.reveal_mode != current.reveal_mode {
            // Stored chunks were split for the old mode
            let session = ctx.session(&updated);
            ctx.save_session(&session)?;
            log::info!("Rebuilt session for {} mode", updated.reveal_mode);
        }

        print_settings(&updated);
        Ok(())
    }
}

fn print_settings(settings: &Settings) {
    println!("Reveal mode:     {}", settings.reveal_mode);
    println!("{:<16} {}", format!("{}:", settings.step_label()), settings.words_per_step);
    println!("Font size:       {}", settings.font_size);
    println!("Theme:           {}", settings.theme);
    println!("Next key:        {}", settings.key_next);
    println!("Previous key:    {}", settings.key_prev);
    println!("Auto-save:       {}", settings.auto_save);
    println!("Highlight mode:  {}", settings.highlight_mode);
}
