pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod git;
pub mod output;
pub mod profiling;

// Re-exports
pub use gemini::{Completion, GeminiClient, GeminiConfig};
pub use generator::{Generator, NO_DIFF_MESSAGE};
pub use output::{Mode, Presenter};
pub use profiling::Profile;
