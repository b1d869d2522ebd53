pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::LineConsole;
pub use app::{prompts::Prompts, shell::InteractiveShell};
pub use config::{Settings, TomlConfig};
pub use self::core::{
    engine::PackingEngine,
    first_fit::{first_fit, first_fit_loads, FirstFitPacker},
};
pub use domain::model::{OutputFormat, OversizePolicy, Packing, PackingReport};
pub use utils::error::{PackerError, Result};
