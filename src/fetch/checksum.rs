//! Payload digests.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::Result;

/// Hash algorithm a published checksum was produced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
    /// An algorithm this host cannot compute.
    Unsupported(String),
}

impl HashAlgorithm {
    /// Parse an algorithm name such as `sha384` or `SHA-384`.
    ///
    /// Unknown names are kept as [`HashAlgorithm::Unsupported`] rather
    /// than rejected, so the caller decides how to degrade.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "");
        match normalized.as_str() {
            "sha256" => HashAlgorithm::Sha256,
            "sha384" => HashAlgorithm::Sha384,
            "sha512" => HashAlgorithm::Sha512,
            _ => HashAlgorithm::Unsupported(name.trim().to_string()),
        }
    }

    /// The function computing this algorithm's digest, or `None` when the
    /// host cannot compute it.
    pub fn digester(&self) -> Option<FileDigest> {
        match self {
            HashAlgorithm::Sha256 => Some(digest_path::<Sha256> as FileDigest),
            HashAlgorithm::Sha384 => Some(digest_path::<Sha384> as FileDigest),
            HashAlgorithm::Sha512 => Some(digest_path::<Sha512> as FileDigest),
            HashAlgorithm::Unsupported(_) => None,
        }
    }
}

/// Computes the lowercase hex digest of a file.
pub type FileDigest = fn(&Path) -> Result<String>;

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Sha384 => write!(f, "sha384"),
            HashAlgorithm::Sha512 => write!(f, "sha512"),
            HashAlgorithm::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

fn digest_path<D: Digest>(path: &Path) -> Result<String> {
    let mut reader = File::open(path)?;
    let mut hasher = D::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Extract the expected digest from a published checksum document.
///
/// Only surrounding whitespace is removed; the comparison itself is exact.
pub fn expected_digest(document: &str) -> &str {
    document.trim()
}
