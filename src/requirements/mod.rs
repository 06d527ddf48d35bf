//! Tool detection and version requirements.
//!
//! # Modules
//!
//! - [`probe`] - Executable lookup on PATH
//! - [`version`] - Version extraction and numeric comparison
//! - [`gate`] - The base runtime's presence and minimum-version check

pub mod gate;
pub mod probe;
pub mod version;

pub use gate::verify_runtime;
pub use probe::{is_executable, parse_system_path, resolve_tool_path, ToolProbe};
pub use version::{current_version, extract_version, is_acceptable, Version};
