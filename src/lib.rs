pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::http::HttpBackend;
pub use crate::config::settings::Settings;
pub use crate::core::{manager::ForwardManager, rules::is_create_valid};
pub use crate::domain::model::{Domain, Forward, NewForward};
pub use crate::utils::error::{ForwardError, Result};
