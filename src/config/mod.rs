//! Configuration file management and option merging.

mod manager;

pub use manager::{ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, Settings, resolve_config};
