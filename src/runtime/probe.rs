use super::executor::run_command;
use crate::platform::ContainerRuntime;
use async_trait::async_trait;
use color_eyre::eyre::Result;
use std::time::Duration;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Answers whether a container runtime is usable on this machine. Any failure
/// to find out counts as "no".
#[async_trait]
pub trait RuntimeProbe: Send + Sync {
    async fn is_installed(&self, runtime: ContainerRuntime) -> bool;
    async fn is_running(&self, runtime: ContainerRuntime) -> bool;
}

/// Probes by invoking the runtime's own CLI.
pub struct CommandProbe {
    timeout: Duration,
    // Replaces the runtime binary; the subcommand is appended after these.
    launcher: Option<(String, Vec<String>)>,
}

impl CommandProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            launcher: None,
        }
    }

    #[cfg(test)]
    fn with_launcher(program: &str, args: &[&str], timeout: Duration) -> Self {
        Self {
            timeout,
            launcher: Some((
                program.to_string(),
                args.iter().map(ToString::to_string).collect(),
            )),
        }
    }

    async fn run(&self, runtime: ContainerRuntime, subcommand: &str) -> Result<String> {
        match &self.launcher {
            None => run_command(runtime.binary(), &[subcommand], self.timeout).await,
            Some((program, prefix)) => {
                let mut args: Vec<&str> = prefix.iter().map(String::as_str).collect();
                args.push(subcommand);
                run_command(program, &args, self.timeout).await
            }
        }
    }
}

#[async_trait]
impl RuntimeProbe for CommandProbe {
    async fn is_installed(&self, runtime: ContainerRuntime) -> bool {
        match self.run(runtime, "--version").await {
            Ok(version) => {
                tracing::debug!("{} installed: {}", runtime.binary(), version.trim());
                true
            }
            Err(e) => {
                tracing::debug!("{} not installed: {e}", runtime.binary());
                false
            }
        }
    }

    // `info` needs the daemon (Docker) or the machine/service (Podman).
    async fn is_running(&self, runtime: ContainerRuntime) -> bool {
        match self.run(runtime, "info").await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("{} not running: {e}", runtime.binary());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ContainerRuntime::Docker;

    const SHORT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn missing_binary_is_not_installed() {
        let probe = CommandProbe::with_launcher("girus-no-such-runtime", &[], SHORT);
        assert!(!probe.is_installed(Docker).await);
        assert!(!probe.is_running(Docker).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_commands_mean_yes() {
        let probe = CommandProbe::with_launcher("sh", &["-c", "echo ok", "sh"], SHORT);
        assert!(probe.is_installed(Docker).await);
        assert!(probe.is_running(Docker).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_info_is_not_running() {
        let probe = CommandProbe::with_launcher("sh", &["-c", "exit 1", "sh"], SHORT);
        assert!(!probe.is_running(Docker).await);
    }

    // $1 is the subcommand the probe appends.
    #[cfg(unix)]
    #[tokio::test]
    async fn installed_uses_version_and_running_uses_info() {
        let probe = CommandProbe::with_launcher("sh", &["-c", r#"test "$1" = info"#, "sh"], SHORT);
        assert!(!probe.is_installed(Docker).await);
        assert!(probe.is_running(Docker).await);

        let probe =
            CommandProbe::with_launcher("sh", &["-c", r#"test "$1" = --version"#, "sh"], SHORT);
        assert!(probe.is_installed(Docker).await);
        assert!(!probe.is_running(Docker).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_runtime_times_out_as_not_running() {
        let probe = CommandProbe::with_launcher(
            "sh",
            &["-c", "sleep 5", "sh"],
            Duration::from_millis(100),
        );
        assert!(!probe.is_running(Docker).await);
    }
}
