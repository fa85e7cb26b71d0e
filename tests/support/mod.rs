use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphwalk with a config dir that holds no config file
pub fn graphwalk(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env("GRAPHWALK_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG");
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
