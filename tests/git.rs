mod common;

use common::*;
use genie::git::{GitError, Repo};
use tempfile::TempDir;

#[test]
fn test_empty_repository_has_empty_diff() {
  let repo = TestRepo::default();
  let diff = Repo::new_with_path(repo.path()).staged_diff().unwrap();
  assert!(diff.is_empty());
}

#[test]
fn test_staged_new_file() {
  let repo = TestRepo::default();
  let file = repo.create_file("README.md", "# Hello\n").unwrap();
  file.stage().unwrap();

  let diff = Repo::new_with_path(repo.path()).staged_diff().unwrap();
  assert!(diff.contains("diff --git a/README.md b/README.md"));
  assert!(diff.contains("new file mode"));
  assert!(diff.contains("+# Hello"));
}

#[test]
fn test_unstaged_changes_are_ignored() {
  let repo = TestRepo::default();
  let file = repo.create_file("notes.txt", "first\n").unwrap();
  file.stage().unwrap();
  file.commit().unwrap();

  repo.create_file("notes.txt", "second\n").unwrap();
  repo.create_file("untracked.txt", "nobody staged me\n").unwrap();

  let diff = Repo::new_with_path(repo.path()).staged_diff().unwrap();
  assert!(diff.is_empty());
}

#[test]
fn test_staged_modification_and_deletion() {
  let repo = TestRepo::default();
  let kept = repo.create_file("kept.txt", "old line\n").unwrap();
  kept.stage().unwrap();
  let gone = repo.create_file("gone.txt", "bye\n").unwrap();
  gone.stage().unwrap();
  gone.commit().unwrap();

  let kept = repo.create_file("kept.txt", "new line\n").unwrap();
  kept.stage().unwrap();
  gone.delete().unwrap();
  gone.stage().unwrap();

  let diff = Repo::new_with_path(repo.path()).staged_diff().unwrap();
  assert!(diff.contains("-old line"));
  assert!(diff.contains("+new line"));
  assert!(diff.contains("deleted file mode"));
}

#[test]
fn test_staged_non_ascii_content() {
  let repo = TestRepo::default();
  let file = repo.create_file("greeting.txt", "héllo wörld ✨\n").unwrap();
  file.stage().unwrap();

  let diff = Repo::new_with_path(repo.path()).staged_diff().unwrap();
  assert!(diff.contains("+héllo wörld ✨"));
}

#[test]
fn test_outside_repository_fails() {
  let dir = TempDir::new().unwrap();
  let nested = dir.path().join("nested");
  std::fs::create_dir(&nested).unwrap();

  // Keep git from discovering a repository above the temp dir
  std::env::set_var("GIT_CEILING_DIRECTORIES", dir.path());
  let result = Repo::new_with_path(&nested).staged_diff();

  match result {
    Err(GitError::CommandFailed { command, status, .. }) => {
      assert_eq!(command, "diff --staged");
      assert!(!status.success());
    },
    other => panic!("Expected a failed git command, got {:?}", other)
  }
}
