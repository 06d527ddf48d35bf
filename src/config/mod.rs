//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use takeout_installer::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let config = parse_config("packages: [tightenco/takeout]", Path::new("config.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.dependency_manager.command, "composer");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use schema::{
    BootstrapConfig, ContainerDocs, DependencyManagerConfig, OutputMode, RuntimeConfig, Settings,
};

pub use loader::{
    load_config, load_config_file, load_config_from, parse_config, user_config_path,
    ConfigSource, CONFIG_DIR, CONFIG_FILE,
};

pub use validator::{validate, validate_config, ValidationError};
