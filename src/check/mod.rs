//! Bot interaction check module.
//!
//! Sends a fixed notification to the admin chat and reports
//! the automation configuration summary afterwards.

mod message;
mod runner;

pub use message::TEST_MESSAGE;
pub use runner::{CheckError, InteractionCheck};
