use crate::banner::ColorChoice;
use crate::content;
use crate::platform::{ContainerRuntime, OperatingSystem};
use crate::runtime::probe::DEFAULT_PROBE_TIMEOUT;
use clap::{Parser, Subcommand};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_NUMBER"));

#[derive(Parser, Debug)]
#[command(
    name = "girus",
    version = VERSION,
    about = "Girus: laboratórios interativos em um cluster local"
)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Enable verbose logging to $XDG_STATE_HOME/girus/debug.log
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = content::CREATE_CMD_SHORT)]
    Create {
        #[command(subcommand)]
        target: CreateTarget,
    },

    /// Print container runtime install instructions
    Instructions {
        /// Operating system (defaults to the current one)
        #[arg(long, value_enum)]
        os: Option<OperatingSystem>,

        /// Container runtime
        #[arg(short, long, value_enum, default_value_t = ContainerRuntime::Docker)]
        runtime: ContainerRuntime,
    },
}

#[derive(Subcommand, Debug)]
pub enum CreateTarget {
    #[command(
        about = content::CREATE_CLUSTER_CMD_SHORT,
        long_about = content::CREATE_CLUSTER_CMD_LONG
    )]
    Cluster {
        /// Container runtime to use (auto-detected when omitted)
        #[arg(short, long, value_enum)]
        runtime: Option<ContainerRuntime>,

        /// Seconds to wait for each runtime probe
        #[arg(
            long,
            default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs(),
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        probe_timeout: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn create_cluster_defaults() {
        let cli = Cli::try_parse_from(["girus", "create", "cluster"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.verbose);
        match cli.command {
            Command::Create {
                target: CreateTarget::Cluster { runtime, probe_timeout },
            } => {
                assert_eq!(runtime, None);
                assert_eq!(probe_timeout, DEFAULT_PROBE_TIMEOUT.as_secs());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn create_cluster_with_podman() {
        let cli = Cli::try_parse_from([
            "girus", "create", "cluster", "--runtime", "podman", "--color", "never",
        ])
        .unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(matches!(
            cli.command,
            Command::Create {
                target: CreateTarget::Cluster {
                    runtime: Some(ContainerRuntime::Podman),
                    ..
                }
            }
        ));
    }

    #[test]
    fn zero_probe_timeout_rejected() {
        let parsed = Cli::try_parse_from(["girus", "create", "cluster", "--probe-timeout", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn instructions_accepts_darwin_alias() {
        let cli = Cli::try_parse_from(["girus", "instructions", "--os", "darwin", "-r", "podman"])
            .unwrap();
        match cli.command {
            Command::Instructions { os, runtime } => {
                assert_eq!(os, Some(OperatingSystem::MacOs));
                assert_eq!(runtime, ContainerRuntime::Podman);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn create_requires_target() {
        assert!(Cli::try_parse_from(["girus", "create"]).is_err());
    }
}
