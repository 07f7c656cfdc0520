//! Runner configuration loaded from TOML.
//!
//! # Example
//!
//! ```no_run
//! use kaa::config::ConfigurationLoader;
//! use kaa::{CommandTree, ExitWithUsage};
//! use std::path::Path;
//!
//! let loader = ConfigurationLoader::new(Some(Path::new("config/cli.toml"))).unwrap();
//! let runner = &loader.config.runner;
//!
//! let tree = CommandTree::from_command(clap::Command::new("tool"))
//!     .with_mode(runner.bind_mode);
//! tree.run(ExitWithUsage::from_config(runner));
//! ```

pub mod config;

// Re-export main types for convenience
pub use self::config::{Configuration, ConfigurationLoader, RunnerConfig};
