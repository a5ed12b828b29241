//! Autonomous Finder Bot Check Library
//!
//! Verifies that the Autonomous Finder Telegram bot can reach its admin.
//!
//! This crate provides the core functionality for:
//! - Loading bot credentials from the environment
//! - Sending notifications through the Telegram Bot API
//! - Reading and validating the automation configuration
//! - Running the interaction check end to end

pub mod check;
pub mod config;
pub mod monitoring;
pub mod telegram;
