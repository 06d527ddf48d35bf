//! Closing banner and follow-up instructions.

use std::path::Path;

use crate::config::ContainerDocs;
use crate::environment::OperatingSystem;

/// ASCII logo shown when the run finishes.
pub const LOGO: &str = r"
 _____     _                _
|_   _|_ _| | _____  ___   _| |_
  | |/ _` | |/ / _ \/ _ \ | | | __|
  | | (_| |   <  __/ (_) || |_| |_
  |_|\__,_|_|\_\___|\___/ \__,_|\__|
";

/// Documentation URL for installing the container tool on `os`.
pub fn container_docs_url<'a>(docs: &'a ContainerDocs, os: &OperatingSystem) -> &'a str {
    match os {
        OperatingSystem::Linux => &docs.linux,
        OperatingSystem::MacOs => &docs.macos,
        OperatingSystem::Unknown(_) => &docs.other,
    }
}

/// Follow-up lines printed under the banner.
pub fn follow_up_instructions(
    docs: &ContainerDocs,
    os: &OperatingSystem,
    path_hint: Option<&Path>,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} must be installed separately. Installation guide for {}:",
        docs.name, os
    )];
    lines.push(format!("  {}", container_docs_url(docs, os)));

    if let Some(dir) = path_hint {
        lines.push(String::new());
        lines.push(format!(
            "{} is not on your PATH. Add it to your shell profile:",
            dir.display()
        ));
        lines.push(path_export_line(dir));
    }

    lines
}

/// Shell line that appends `dir` to `PATH`.
pub fn path_export_line(dir: &Path) -> String {
    format!("  export PATH=\"$PATH:{}\"", dir.display())
}
