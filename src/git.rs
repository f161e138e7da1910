use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
  #[error("Failed to run git: {0}")]
  Spawn(#[from] std::io::Error),

  #[error("`git {command}` failed ({status}): {stderr}")]
  CommandFailed {
    command: String,
    status:  ExitStatus,
    stderr:  String
  },

  #[error("git output is not valid UTF-8: {0}")]
  Encoding(#[from] std::string::FromUtf8Error)
}

pub type Result<T, E = GitError> = std::result::Result<T, E>;

/// A working copy, addressed by directory. All operations shell out to `git`.
pub struct Repo {
  workdir: PathBuf
}

impl Repo {
  pub fn new() -> Self {
    Self::new_with_path(".")
  }

  pub fn new_with_path(path: impl AsRef<Path>) -> Self {
    Repo { workdir: path.as_ref().to_path_buf() }
  }

  /// Output of `git diff --staged`, possibly empty.
  pub fn staged_diff(&self) -> Result<String> {
    let diff = self.run(&["diff", "--staged"])?;
    log::debug!("[diff] {} bytes staged", diff.len());
    Ok(diff)
  }

  fn run(&self, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
      .args(args)
      .current_dir(&self.workdir)
      .output()?;

    if !output.status.success() {
      return Err(GitError::CommandFailed {
        command: args.join(" "),
        status:  output.status,
        stderr:  String::from_utf8_lossy(&output.stderr).trim().to_string()
      });
    }

    Ok(String::from_utf8(output.stdout)?)
  }
}

impl Default for Repo {
  fn default() -> Self {
    Self::new()
  }
}
