//! surgicode-app
//!
//! Application shell around the onboarding engine: config file, logging
//! setup, per-process state and the command handlers a UI bridge calls.

pub mod commands;
pub mod config;
pub mod state;
pub mod telemetry;
