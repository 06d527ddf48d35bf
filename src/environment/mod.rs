//! Host environment detection.

pub mod os;

pub use os::{detect_os, OperatingSystem};
