use crate::content;
use crate::platform::{ContainerRuntime, OperatingSystem};

/// Install instructions for a runtime on an OS. Pairs without a dedicated
/// entry get the generic download pointer.
pub fn install_instructions(os: OperatingSystem, runtime: ContainerRuntime) -> &'static str {
    match (os, runtime) {
        (OperatingSystem::MacOs, ContainerRuntime::Docker) => content::DOCKER_MACOS_INSTRUCTIONS,
        (OperatingSystem::MacOs, ContainerRuntime::Podman) => content::PODMAN_MACOS_INSTRUCTIONS,
        (OperatingSystem::Linux, ContainerRuntime::Docker) => content::DOCKER_LINUX_INSTRUCTIONS,
        (OperatingSystem::Linux, ContainerRuntime::Podman) => content::PODMAN_LINUX_INSTRUCTIONS,
        (OperatingSystem::Windows, ContainerRuntime::Podman) => {
            content::PODMAN_WINDOWS_INSTRUCTIONS
        }
        (OperatingSystem::Windows | OperatingSystem::Other, _) => content::OTHER_OS_INSTRUCTIONS,
    }
}

/// How to start an installed runtime. Empty for Windows and other systems.
pub fn start_hint(os: OperatingSystem, runtime: ContainerRuntime) -> &'static str {
    match (os, runtime) {
        (OperatingSystem::MacOs, ContainerRuntime::Docker) => content::DOCKER_START_HINT_MACOS,
        (OperatingSystem::MacOs, ContainerRuntime::Podman) => content::PODMAN_START_HINT_MACOS,
        (OperatingSystem::Linux, ContainerRuntime::Docker) => content::DOCKER_START_HINT_LINUX,
        (OperatingSystem::Linux, ContainerRuntime::Podman) => content::PODMAN_START_HINT_LINUX,
        _ => "",
    }
}
