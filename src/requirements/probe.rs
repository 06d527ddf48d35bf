//! Executable lookup on the current search path.
//!
//! The probe captures `PATH` once at startup and answers "is this tool
//! installed?" without spawning anything. Lookups never fail: an unreadable
//! directory or a missing file is simply "not found".
//!
//! # Example
//!
//! ```no_run
//! use takeout_installer::requirements::ToolProbe;
//!
//! let probe = ToolProbe::from_env();
//! if probe.tool_exists("php") {
//!     println!("php is at {}", probe.resolve("php").unwrap().display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behaviour varies across systems and is
/// sometimes a shell builtin.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Answers whether named executables are available.
#[derive(Debug, Clone, Default)]
pub struct ToolProbe {
    path: Vec<PathBuf>,
}

impl ToolProbe {
    /// Probe using the process `PATH`.
    pub fn from_env() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Probe an explicit list of directories (used by tests).
    pub fn with_path(path: Vec<PathBuf>) -> Self {
        Self { path }
    }

    /// Whether `name` resolves to an executable.
    pub fn tool_exists(&self, name: &str) -> bool {
        let found = self.resolve(name).is_some();
        tracing::debug!("Probe {}: {}", name, if found { "found" } else { "missing" });
        found
    }

    /// Full path of the first executable named `name`.
    ///
    /// A name containing a path separator is checked directly instead of
    /// being searched for.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.components().count() > 1 {
            return (direct.is_file() && is_executable(direct)).then(|| direct.to_path_buf());
        }
        resolve_tool_path(name, &self.path)
    }

    /// Whether `dir` is one of the searched directories.
    pub fn searches(&self, dir: &Path) -> bool {
        let wanted = normalize(dir);
        self.path.iter().any(|entry| normalize(entry) == wanted)
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        let text = path.to_string_lossy();
        PathBuf::from(text.trim_end_matches('/'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Create a non-executable file at a path.
    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_fake_binary(&dir_a.join("php"));
        create_fake_binary(&dir_b.join("php"));

        let result = resolve_tool_path("php", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("php")));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_non_executable_file(&dir_a.join("composer"));
        create_fake_binary(&dir_b.join("composer"));

        let result = resolve_tool_path("composer", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("composer")));
    }

    #[test]
    fn tool_exists_is_false_for_missing_tool() {
        let temp = TempDir::new().unwrap();
        let probe = ToolProbe::with_path(vec![temp.path().to_path_buf()]);
        assert!(!probe.tool_exists("php"));
    }

    #[test]
    fn tool_exists_is_false_for_unreadable_path_entries() {
        let probe = ToolProbe::with_path(vec![
            PathBuf::from("/definitely/not/a/dir"),
            PathBuf::new(),
        ]);
        assert!(!probe.tool_exists("php"));
    }

    #[test]
    fn tool_exists_finds_fake_binary() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("php"));
        let probe = ToolProbe::with_path(vec![temp.path().to_path_buf()]);
        assert!(probe.tool_exists("php"));
    }

    #[test]
    fn resolve_accepts_explicit_path() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin").join("composer");
        create_fake_binary(&bin);

        let probe = ToolProbe::default();
        assert_eq!(probe.resolve(bin.to_str().unwrap()), Some(bin.clone()));
    }

    #[test]
    fn searches_ignores_trailing_slash() {
        let probe = ToolProbe::with_path(vec![PathBuf::from("/opt/tools/bin/")]);
        assert!(probe.searches(Path::new("/opt/tools/bin")));
        assert!(!probe.searches(Path::new("/opt/other/bin")));
    }
}
