use crate::banner::{emphasize, render_header};
use crate::catalog;
use crate::platform::{ContainerRuntime, OperatingSystem};
use crate::runtime::check::{self, Readiness};
use crate::runtime::probe::RuntimeProbe;
use color_eyre::eyre::{eyre, Result};
use std::io::Write;

/// Header, runtime check and guidance for `create cluster`. Returns an error
/// when the runtime cannot host the cluster.
pub async fn create_cluster<W: Write>(
    out: &mut W,
    probe: &dyn RuntimeProbe,
    os: OperatingSystem,
    preferred: Option<ContainerRuntime>,
    color: bool,
) -> Result<Readiness> {
    writeln!(out, "{}", render_header(color))?;
    tracing::info!("create cluster on {os:?}, preferred runtime {preferred:?}");

    let readiness = check::check(probe, preferred).await;
    let runtime = readiness.runtime();

    if readiness.is_ready() {
        writeln!(
            out,
            "{}",
            emphasize(&format!("✓ {runtime} está em execução"), color)
        )?;
        return Ok(readiness);
    }

    if let Readiness::NotInstalled(_) = readiness {
        writeln!(out, "✗ {runtime} não encontrado. Instruções de instalação:")?;
    } else {
        writeln!(out, "✗ {runtime} está instalado, mas não está em execução.")?;
    }

    if let Some(text) = check::guidance(readiness, os) {
        write!(out, "{text}")?;
    }
    out.flush()?;

    Err(match readiness {
        Readiness::NotInstalled(_) => eyre!("{runtime} não está instalado"),
        _ => eyre!("{runtime} não está em execução"),
    })
}

/// Install instructions followed by the start hint, when there is one.
pub fn print_instructions<W: Write>(
    out: &mut W,
    os: OperatingSystem,
    runtime: ContainerRuntime,
) -> Result<()> {
    writeln!(out, "{runtime} em {os}:")?;
    write!(out, "{}", catalog::install_instructions(os, runtime))?;
    let hint = catalog::start_hint(os, runtime);
    if !hint.is_empty() {
        write!(out, "{hint}")?;
    }
    out.flush()?;
    Ok(())
}
