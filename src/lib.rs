//! HealthHub - a terminal health and wellness hub
//!
//! Water, calorie and wellness calculators, a contact form and a guided
//! meditation player, navigated like pages of a single-page site.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod runtime;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
