//! Configuration module for accessorgen
//!
//! Configuration hierarchy (later wins):
//! 1. Built-in target defaults
//! 2. User config (~/.config/accessorgen/config.toml)
//! 3. Project config (./accessorgen.toml)
//! 4. Explicit `--config` file
//! 5. Environment variables (ACCESSORGEN_*)
//! 6. CLI flags

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub(crate) use loader::{find_line_number, suggest_key};
pub use loader::{user_config_path, PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
pub use types::{Config, EmitConfig, NamingConfig, OutputConfig};
