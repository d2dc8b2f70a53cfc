//! Kernel module - server infrastructure and dependencies.

pub mod completion;
pub mod deps;
pub mod fixtures;

pub use completion::{BaseCompletionService, GeminiClient, NoopCompletionService};
pub use deps::ServerDeps;
pub use fixtures::FixtureData;
