//! Version extraction and minimum-version policy.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{InstallerError, Result};
use crate::shell::{display_command, CommandOptions, CommandRunner};

/// A dotted numeric version, compared component-wise.
///
/// Missing components count as zero, so `7.4` equals `7.4.0`.
#[derive(Debug, Clone)]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    fn component(&self, index: usize) -> u64 {
        self.parts.get(index).copied().unwrap_or(0)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('v');
        if trimmed.is_empty() {
            return Err("empty version".to_string());
        }
        let parts = trimmed
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| format!("invalid version component '{}' in '{}'", part, s))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.parts.iter().map(u64::to_string).collect();
        write!(f, "{}", text.join("."))
    }
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+){1,2}").expect("version pattern is valid"))
}

/// Pull the first version-shaped token out of a tool's self-report.
///
/// `"PHP 8.2.12 (cli) (built: Oct 24 2023)"` yields `8.2.12`.
pub fn extract_version(output: &str) -> Option<Version> {
    version_pattern()
        .find(output)
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether `version` meets `minimum`. Equal versions are acceptable.
pub fn is_acceptable(version: &Version, minimum: &Version) -> bool {
    version >= minimum
}

/// Run a tool's version command and extract its version.
pub fn current_version(
    runner: &dyn CommandRunner,
    tool: &str,
    version_args: &[String],
) -> Result<Version> {
    let result = runner.run_checked(tool, version_args, &CommandOptions::captured())?;

    // Some tools print their banner on stderr.
    let combined = format!("{}\n{}", result.stdout, result.stderr);
    let version = extract_version(&combined).ok_or_else(|| InstallerError::VersionUnreadable {
        tool: display_command(tool, version_args),
        output: combined.trim().to_string(),
    })?;

    tracing::debug!("{} reports version {}", tool, version);
    Ok(version)
}
