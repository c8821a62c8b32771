pub mod core;
pub mod models;
pub mod providers;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result, Severity};
pub use crate::core::logger::{ActivityLog, LogKind};
pub use crate::core::runtime::{Runtime, RuntimeOptions};
pub use crate::models::{FetchPolicy, Tweet};
