use super::probe::RuntimeProbe;
use crate::catalog;
use crate::platform::{ContainerRuntime, OperatingSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready(ContainerRuntime),
    NotRunning(ContainerRuntime),
    NotInstalled(ContainerRuntime),
}

impl Readiness {
    pub fn runtime(self) -> ContainerRuntime {
        match self {
            Readiness::Ready(rt) | Readiness::NotRunning(rt) | Readiness::NotInstalled(rt) => rt,
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Readiness::Ready(_))
    }
}

/// Picks a runtime and reports whether it can host the cluster.
///
/// With `preferred`, only that runtime is looked at. Otherwise the first
/// installed runtime in `ContainerRuntime::ALL` order wins; when none is
/// installed the verdict names Docker.
pub async fn check(probe: &dyn RuntimeProbe, preferred: Option<ContainerRuntime>) -> Readiness {
    let candidates: &[ContainerRuntime] = match &preferred {
        Some(rt) => std::slice::from_ref(rt),
        None => &ContainerRuntime::ALL,
    };

    for &runtime in candidates {
        if !probe.is_installed(runtime).await {
            continue;
        }
        let verdict = if probe.is_running(runtime).await {
            Readiness::Ready(runtime)
        } else {
            Readiness::NotRunning(runtime)
        };
        tracing::info!("runtime check: {verdict:?}");
        return verdict;
    }

    let verdict = Readiness::NotInstalled(candidates[0]);
    tracing::info!("runtime check: {verdict:?}");
    verdict
}

/// Text to show the user for a verdict, if any.
pub fn guidance(readiness: Readiness, os: OperatingSystem) -> Option<&'static str> {
    match readiness {
        Readiness::Ready(_) => None,
        Readiness::NotInstalled(rt) => Some(catalog::install_instructions(os, rt)),
        Readiness::NotRunning(rt) => {
            let hint = catalog::start_hint(os, rt);
            (!hint.is_empty()).then_some(hint)
        }
    }
}
