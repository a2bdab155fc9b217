//! Shared helpers for `add-two` binary tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::time::Duration;

pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Build a Command for the `add-two` binary with logging at its default level.
pub fn add_two_cmd() -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("add-two");
    cmd.timeout(TIMEOUT);
    cmd.env_remove("RUST_LOG");
    cmd
}
