pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, AppSettings};
pub use crate::core::{directory::EmployeeDirectory, engine::BatchEngine, pipeline::BadgePipeline};
pub use utils::error::{Result, StaffQrError};
