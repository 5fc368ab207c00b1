//! Core library for the `skywatch` CLI.
//!
//! This crate defines:
//! - Fetching current conditions and the one-day range from Open-Meteo
//! - Sky & moon presentation (condition labels, lunar phase, werewolf lore)
//! - Webhook message assembly and delivery
//!
//! It is used by `skywatch-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod embed;
pub mod fetch;
pub mod lore;
pub mod model;
pub mod moon;
pub mod report;
pub mod sky;
pub mod webhook;

pub use config::{Config, REPORT_VERSION};
pub use model::Observation;
pub use moon::{LunarState, MoonPhase};
pub use report::{Delivery, ReportOutcome, preview, run};
pub use sky::SkyCondition;
