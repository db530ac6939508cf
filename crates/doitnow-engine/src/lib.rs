//! DoItNow Engine - Orchestration layer
//!
//! Command handlers coordinate validation in `doitnow-core` with persistence
//! in `doitnow-store` and own lifecycle logging. `AppState` sits on top as
//! the state container a presentation layer talks to.

pub mod app_state;
pub mod commands;

pub use app_state::AppState;
