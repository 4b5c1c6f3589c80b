use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OperatingSystem {
    #[value(name = "macos", alias = "darwin")]
    MacOs,
    Linux,
    Windows,
    Other,
}

impl OperatingSystem {
    pub const ALL: [OperatingSystem; 4] = [
        OperatingSystem::MacOs,
        OperatingSystem::Linux,
        OperatingSystem::Windows,
        OperatingSystem::Other,
    ];

    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Maps an OS name (`std::env::consts::OS`, Go-style `GOOS`, or a
    /// user-typed alias) into the closed set. Unknown names become `Other`.
    pub fn from_identifier(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "macos" | "darwin" | "osx" | "mac" => OperatingSystem::MacOs,
            "linux" => OperatingSystem::Linux,
            "windows" | "win" => OperatingSystem::Windows,
            _ => OperatingSystem::Other,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatingSystem::MacOs => "macOS",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::Windows => "Windows",
            OperatingSystem::Other => "outros sistemas",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ContainerRuntime {
    Docker,
    Podman,
}

impl ContainerRuntime {
    /// Probe order when the user did not pick a runtime.
    pub const ALL: [ContainerRuntime; 2] = [ContainerRuntime::Docker, ContainerRuntime::Podman];

    pub fn binary(self) -> &'static str {
        match self {
            ContainerRuntime::Docker => "docker",
            ContainerRuntime::Podman => "podman",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ContainerRuntime::Docker => "Docker",
            ContainerRuntime::Podman => "Podman",
        }
    }
}

impl fmt::Display for ContainerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
