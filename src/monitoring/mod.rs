//! Access to the monitoring manager's automation settings.

mod source;

pub use source::{AutomationConfigSource, FileConfigSource};
