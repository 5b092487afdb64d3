pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
mod context;
pub mod stores;

pub use context::AppContext;
pub use controller::{Controller, GenerateOutcome};
