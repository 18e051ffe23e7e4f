use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary with arguments against an isolated catalog file.
pub fn run_cli(args: &[&str], catalog: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bookshare"));
    cmd.args(args);
    cmd.env("BOOKSHARE_CATALOG", catalog);
    cmd.env_remove("BOOKSHARE_SOURCE_BASE");
    cmd.env_remove("BOOKSHARE_TIMEOUT_SECS");
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], catalog: &Path) -> String {
    let output = run_cli(args, catalog);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure.
pub fn run_cli_failure(args: &[&str], catalog: &Path) -> String {
    let output = run_cli(args, catalog);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// A localhost base URL with nothing listening on it.
pub fn dead_source_base() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}/")
}
