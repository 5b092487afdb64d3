//! reelprompt: turn short video ideas into structured prompts for text-to-video models.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{DefaultController, open_controller, open_controller_at};
pub use app::{Controller, GenerateOutcome};
pub use domain::{AppError, BuiltinStyle, CustomStyle, HistoryEntry};
