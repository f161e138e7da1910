use crate::error::ServiceError;
use crate::gemini::Completion;

/// Returned instead of calling the service when there is nothing staged.
pub const NO_DIFF_MESSAGE: &str = "Could not generate commit message because there was no diff.";

/// The full prompt sent to the model, with the diff embedded verbatim.
pub fn build_prompt(diff: &str) -> String {
  format!(
    "As an expert programmer, analyze the following code changes from 'git diff --staged' and generate a concise and informative commit message.

**Guidelines:**
1.  Follow the **Conventional Commits specification**.
2.  The format MUST be: `<type>[optional scope]: <description>`
3.  `<type>` must be one of: **feat, fix, docs, style, refactor, perf, test, chore**.
4.  The `<description>` should be a short summary (max 50 chars) in the imperative mood (e.g., 'Add feature' not 'Added feature').
5.  Do NOT include a message body or any extra text, just the single commit headline.

**Code Diff:**
```diff
{}
```

**Commit Message:**
",
    diff
  )
}

/// Turns a staged diff into a single commit headline.
pub struct Generator<C> {
  client: C
}

impl<C: Completion> Generator<C> {
  pub fn new(client: C) -> Self {
    Self { client }
  }

  pub fn client(&self) -> &C {
    &self.client
  }

  /// Blocks on one service call; empty diffs short-circuit to [`NO_DIFF_MESSAGE`].
  pub async fn generate(&self, diff: &str) -> Result<String, ServiceError> {
    if diff.is_empty() {
      log::debug!("Empty diff, skipping service call");
      return Ok(NO_DIFF_MESSAGE.to_string());
    }

    let prompt = build_prompt(diff);
    log::debug!("Prompt is {} bytes", prompt.len());

    let response = self.client.complete(&prompt).await?;
    log::debug!("Raw response: {:?}", response);

    Ok(response.trim().to_string())
  }
}
