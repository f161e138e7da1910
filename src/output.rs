//! How results are shown: decorated for a person at a terminal, bare for a git hook.

use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::ServiceError;

const RULE: &str = "====================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Interactive,
  Hook
}

impl Mode {
  pub fn from_hook_flag(hook: bool) -> Self {
    if hook {
      Mode::Hook
    } else {
      Mode::Interactive
    }
  }

  pub fn presenter(self) -> Box<dyn Presenter> {
    match self {
      Mode::Interactive => Box::new(InteractivePresenter),
      Mode::Hook => Box::new(HookPresenter)
    }
  }
}

pub trait Presenter {
  /// Notice shown while the service call blocks.
  fn progress(&self) -> Result<Option<ProgressBar>>;

  /// Output when nothing is staged, if any.
  fn no_changes(&self) -> Option<String>;

  fn message(&self, message: &str) -> String;

  fn error(&self, error: &ServiceError) -> String;

  /// A failed call is rendered like any other message.
  fn outcome(&self, outcome: &Result<String, ServiceError>) -> String {
    match outcome {
      Ok(message) => self.message(message),
      Err(error) => self.message(&self.error(error))
    }
  }
}

/// Plain output for `prepare-commit-msg` and friends: one line, no framing.
pub struct HookPresenter;

impl Presenter for HookPresenter {
  fn progress(&self) -> Result<Option<ProgressBar>> {
    Ok(None)
  }

  fn no_changes(&self) -> Option<String> {
    None
  }

  fn message(&self, message: &str) -> String {
    message.to_string()
  }

  fn error(&self, error: &ServiceError) -> String {
    format!("Error: {}", error)
  }
}

pub struct InteractivePresenter;

impl Presenter for InteractivePresenter {
  fn progress(&self) -> Result<Option<ProgressBar>> {
    let style = ProgressStyle::default_spinner()
      .tick_strings(&["-", "\\", "|", "/", "-"])
      .template("{spinner:.blue} {msg}")
      .context("Failed to create progress bar style")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(format!("{} Calling the Git Commit Genie... (please wait)", Emoji("🤖", "")));
    pb.enable_steady_tick(Duration::from_millis(150));
    Ok(Some(pb))
  }

  fn no_changes(&self) -> Option<String> {
    Some("✅ No staged changes found. Nothing to commit.".to_string())
  }

  fn message(&self, message: &str) -> String {
    [
      String::new(),
      RULE.to_string(),
      "✨ Generated Commit Message:".bold().to_string(),
      message.to_string(),
      RULE.to_string(),
      String::new(),
      "If you like it, run this command:".to_string(),
      suggested_command(message)
    ]
    .join("\n")
  }

  fn error(&self, error: &ServiceError) -> String {
    format!("🚨 Error generating commit message: {}", error)
  }
}

/// The copy-paste command; the message is inserted as-is, quotes included.
pub fn suggested_command(message: &str) -> String {
  format!("git commit -m \"{}\"", message)
}
