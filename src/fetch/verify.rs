//! Download-then-verify for remote installer payloads.
//!
//! A payload only leaves this module when its digest matched the
//! published checksum, or when the host cannot compute the digest at all
//! (reported as [`Verification::Skipped`]). On mismatch the downloaded
//! file is removed before the error is returned.

use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{InstallerError, Result};
use crate::fetch::checksum::{expected_digest, HashAlgorithm};
use crate::fetch::http::HttpFetcher;

/// Outcome of the integrity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Digest matched the published checksum.
    Verified { digest: String },
    /// The digest could not be computed on this host.
    Skipped { reason: String },
}

/// A downloaded payload that passed (or was allowed past) verification.
///
/// The backing file is deleted when this value is dropped or closed.
#[derive(Debug)]
pub struct VerifiedPayload {
    file: NamedTempFile,
    verification: Verification,
}

impl VerifiedPayload {
    /// Location of the payload on disk.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn verification(&self) -> &Verification {
        &self.verification
    }

    /// Delete the payload file now, reporting any removal error.
    pub fn close(self) -> Result<()> {
        self.file.close()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(file: NamedTempFile, verification: Verification) -> Self {
        Self { file, verification }
    }
}

/// Where to get a payload and its checksum, and how to check it.
#[derive(Debug, Clone)]
pub struct PayloadSource<'a> {
    pub payload_url: &'a str,
    pub checksum_url: &'a str,
    pub algorithm: HashAlgorithm,
}

/// Download a payload into `scratch_dir` and verify it.
///
/// # Errors
///
/// - `DownloadFailed` if either download fails
/// - `IntegrityMismatch` if the digest differs from the published checksum
pub fn fetch_and_verify(
    fetcher: &HttpFetcher,
    source: &PayloadSource<'_>,
    scratch_dir: &Path,
) -> Result<VerifiedPayload> {
    let mut file = NamedTempFile::new_in(scratch_dir)?;
    fetcher.download_to(source.payload_url, file.as_file_mut())?;

    let Some(digest) = source.algorithm.digester() else {
        let reason = format!(
            "{} digests are not available on this host; skipping checksum verification",
            source.algorithm
        );
        tracing::warn!("{}", reason);
        return Ok(VerifiedPayload {
            file,
            verification: Verification::Skipped { reason },
        });
    };

    let published = fetcher.fetch_text(source.checksum_url)?;
    let expected = expected_digest(&published).to_string();
    let actual = digest(file.path())?;

    if actual != expected {
        tracing::error!(
            "Checksum mismatch for {}: expected {}, got {}",
            source.payload_url,
            expected,
            actual
        );
        if let Err(e) = file.close() {
            tracing::warn!("Failed to remove corrupt download: {}", e);
        }
        return Err(InstallerError::IntegrityMismatch {
            url: source.payload_url.to_string(),
            expected,
            actual,
        });
    }

    tracing::debug!("Verified {} ({} {})", source.payload_url, source.algorithm, actual);
    Ok(VerifiedPayload {
        file,
        verification: Verification::Verified { digest: actual },
    })
}
