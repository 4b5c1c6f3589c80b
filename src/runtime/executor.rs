use color_eyre::eyre::{eyre, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Runs `program args...` and returns stdout. Fails on a missing binary, a
/// non-zero exit, or when `limit` elapses (the child is killed).
pub async fn run_command(program: &str, args: &[&str], limit: Duration) -> Result<String> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(limit, child)
        .await
        .map_err(|_| eyre!("{program} did not answer within {}s", limit.as_secs()))?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                eyre!("{program} not found in PATH")
            } else {
                eyre!("Failed to run {program}: {e}")
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(eyre!("{program} {} failed: {}", args.join(" "), stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
