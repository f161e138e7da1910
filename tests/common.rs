#![allow(dead_code)]
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

pub const BIN: &str = env!("CARGO_BIN_EXE_git-genie");

pub struct TestRepo {
  pub repo:      git2::Repository,
  pub repo_path: TempDir
}

impl Default for TestRepo {
  fn default() -> Self {
    let repo_path = TempDir::new().unwrap();
    let repo = git2::Repository::init(repo_path.path()).unwrap();

    Self { repo, repo_path }
  }
}

impl TestRepo {
  pub fn path(&self) -> &Path {
    self.repo_path.path()
  }

  pub fn create_file(&self, name: &str, content: &str) -> Result<GitFile> {
    let file_path = self.repo_path.path().join(name);
    std::fs::write(&file_path, content)?;
    let repo = git2::Repository::open(self.repo.path())?;
    Ok(GitFile::new(repo, file_path, self.repo_path.path().to_path_buf()))
  }
}

pub struct GitFile {
  pub repo:      git2::Repository,
  pub path:      PathBuf,
  pub repo_path: PathBuf
}

impl GitFile {
  pub fn new(repo: git2::Repository, path: PathBuf, repo_path: PathBuf) -> Self {
    Self { repo, path, repo_path }
  }

  pub fn stage(&self) -> Result<()> {
    let mut index = self.repo.index()?;

    let relative_path = self.path.strip_prefix(&self.repo_path)?;
    if !self.path.exists() {
      index.remove_path(relative_path)?;
    } else {
      index.add_path(relative_path)?;
    }
    index.write()?;

    Ok(())
  }

  pub fn commit(&self) -> Result<()> {
    let mut index = self.repo.index()?;
    let oid = index.write_tree()?;
    let signature = git2::Signature::now("Your Name", "email@example.com")?;
    let tree = self.repo.find_tree(oid)?;

    match self.repo.head().ok().and_then(|head| head.peel_to_commit().ok()) {
      Some(parent_commit) => {
        self
          .repo
          .commit(Some("HEAD"), &signature, &signature, "Commit message", &tree, &[&parent_commit])?;
      },
      None => {
        self
          .repo
          .commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])?;
      }
    }

    Ok(())
  }

  pub fn delete(&self) -> Result<()> {
    std::fs::remove_file(&self.path)?;
    Ok(())
  }
}

/// Runs the binary in `dir` with a scrubbed environment: no user config, no
/// parent repository, and the API key only when given.
pub fn run_genie(dir: &Path, api_key: Option<&str>, args: &[&str]) -> Output {
  run_genie_with_env(dir, api_key, &[], args)
}

/// Like [`run_genie`], with extra environment variables set last.
pub fn run_genie_with_env(dir: &Path, api_key: Option<&str>, envs: &[(&str, &str)], args: &[&str]) -> Output {
  let mut cmd = Command::new(BIN);
  cmd
    .args(args)
    .current_dir(dir)
    .env("HOME", dir)
    .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
    .env_remove("GOOGLE_API_KEY")
    .env_remove("GENIE_MODEL")
    .env_remove("GENIE_BASE_URL")
    .env_remove("RUST_LOG");

  if let Some(key) = api_key {
    cmd.env("GOOGLE_API_KEY", key);
  }

  for (key, value) in envs {
    cmd.env(key, value);
  }

  cmd.output().expect("Failed to run git-genie")
}
