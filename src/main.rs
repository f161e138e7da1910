use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use genie::config::{self, Settings};
use genie::git::Repo;
use genie::{GeminiClient, Generator, Mode};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates a Conventional Commits headline for your staged changes")]
struct Cli {
  #[clap(long, help = "Print only the message, for use from a git hook")]
  hook: bool,

  /// Arguments git passes to hooks (message file, source, sha); ignored
  #[clap(hide = true)]
  hook_args: Vec<String>
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  dotenv().ok();
  env_logger::init();

  // Without a key there is nothing to do; stay silent so a hook never blocks
  let Some(api_key) = config::api_key_from_env() else {
    log::debug!("No API key set, exiting");
    process::exit(1);
  };

  let cli = Cli::parse();
  log::debug!("Ignoring hook arguments: {:?}", cli.hook_args);
  let presenter = Mode::from_hook_flag(cli.hook).presenter();

  let settings = Settings::load(api_key)?;
  let credentials = settings.credentials().context("No API key in settings")?;

  let diff = {
    genie::profile!("Fetch staged diff");
    Repo::new()
      .staged_diff()
      .context("Failed to read staged changes")?
  };

  if diff.is_empty() {
    if let Some(notice) = presenter.no_changes() {
      println!("{}", notice);
    }
    return Ok(());
  }

  let generator = Generator::new(GeminiClient::new(credentials));

  let progress = presenter.progress()?;
  let outcome = generator.generate(&diff).await;
  if let Some(pb) = progress {
    pb.finish_and_clear();
  }

  if let Err(err) = &outcome {
    log::warn!("Commit message generation failed: {}", err);
  }

  println!("{}", presenter.outcome(&outcome));
  Ok(())
}
