//! Moorcheh API client.
//!
//! Keep the public surface small and predictable: one client, built once,
//! handing out borrowed resource handles. Implementation details are split
//! into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod dispatch;
pub(crate) mod validation;

pub use builder::MoorchehClientBuilder;
pub use self::core::{AnswerDefaults, ClientConfig, MoorchehClient};
pub(crate) use dispatch::RequestSpec;
