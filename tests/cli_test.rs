//! Integration tests for the installer binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn installer(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("takeout-installer"));
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("TAKEOUT_INSTALLER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.yml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Composer"))
        .stdout(predicate::str::contains("--config"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn missing_config_file_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .arg("--config")
        .arg(temp.path().join("nope.yml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn config_path_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer(temp.path())
        .env("TAKEOUT_INSTALLER_CONFIG", temp.path().join("missing.yml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.yml"));
    Ok(())
}

#[test]
fn malformed_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = write_config(temp.path(), "packages: [unterminated\n");
    installer(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn invalid_config_values_exit_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = write_config(
        temp.path(),
        "runtime:\n  minimum_version: banana\npackages: [\"bad id\"]\n",
    );
    installer(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("packages[0]"));
    Ok(())
}

#[test]
fn missing_runtime_halts_with_instructions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = write_config(
        temp.path(),
        "runtime:\n  name: PHP\n  command: definitely-not-a-real-php-binary\n",
    );
    installer(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PHP is not installed"))
        .stdout(predicate::str::contains("docs.docker.com").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn checksum_mismatch_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    use httpmock::prelude::*;
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new()?;
    let fake_php = temp.path().join("fake-php");
    fs::write(&fake_php, "#!/bin/sh\necho 'PHP 8.2.1 (cli)'\n")?;
    fs::set_permissions(&fake_php, fs::Permissions::from_mode(0o755))?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/installer");
        then.status(200).body("<?php echo 'tampered';");
    });
    server.mock(|when, then| {
        when.method(GET).path("/installer.sig");
        then.status(200).body("0123456789abcdef");
    });

    let install_dir = temp.path().join("bin");
    let config = write_config(
        temp.path(),
        &format!(
            "runtime:\n  command: {}\n\
             dependency_manager:\n  command: not-installed-composer\n  \
             installer_url: {}\n  checksum_url: {}\n  install_dir: {}\n",
            fake_php.display(),
            server.url("/installer"),
            server.url("/installer.sig"),
            install_dir.display()
        ),
    );

    installer(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Checksum mismatch"));

    assert!(!install_dir.join("not-installed-composer").exists());
    Ok(())
}
