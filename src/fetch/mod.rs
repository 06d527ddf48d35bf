//! Integrity-checked remote installers.
//!
//! # Modules
//!
//! - [`http`] - Blocking HTTP downloads
//! - [`checksum`] - Local digest computation
//! - [`verify`] - Download, verify, discard on mismatch
//! - [`artifact`] - Run a verified payload and install its output

pub mod artifact;
pub mod checksum;
pub mod http;
pub mod verify;

pub use artifact::{artifact_path, install_artifact, run_payload, InstallMethod};
pub use checksum::{expected_digest, FileDigest, HashAlgorithm};
pub use http::HttpFetcher;
pub use verify::{fetch_and_verify, PayloadSource, Verification, VerifiedPayload};
