use anyhow::Result;
use console::style;
use std::io::Write;

use crate::bootstrap::Bootstrapper;
use crate::cli::Cli;
use crate::locale::{FixedPreferences, LocalePreference, PreferenceProvider, SystemPreferences};
use crate::menu::TerminalMenu;
use crate::registry::{CoverageReport, RegistryConfig};

pub fn create_provider(cli: &Cli) -> Box<dyn PreferenceProvider> {
    if cli.lang.is_empty() {
        Box::new(SystemPreferences)
    } else {
        Box::new(FixedPreferences(Some(LocalePreference::Ordered(
            cli.lang.clone(),
        ))))
    }
}

/// Initialize translations, then either mount the menu or print coverage.
pub fn run<W: Write>(
    cli: &Cli,
    provider: &dyn PreferenceProvider,
    config: RegistryConfig,
    mut out: W,
) -> Result<()> {
    let boot = Bootstrapper::new(provider, config)?;

    if cli.coverage {
        let report = boot.translator().registry().coverage();
        return write_coverage(&report, &mut out);
    }

    let registry = boot.translator().registry();
    if cli.verbose {
        eprintln!(
            "tauview: locale {} (serving {})",
            registry.active_locale(),
            registry.resolved_locale()
        );
    }

    boot.mount(TerminalMenu::new(out))?;
    Ok(())
}

fn write_coverage<W: Write>(report: &CoverageReport, out: &mut W) -> Result<()> {
    writeln!(out, "fallback: {}", report.fallback_locale)?;
    for locale in &report.locales {
        writeln!(
            out,
            "{}: {}/{} ({:.1}%)",
            style(&locale.locale).bold(),
            locale.translated,
            locale.total,
            locale.percent()
        )?;
        for key in &locale.missing {
            writeln!(out, "  missing: {key}")?;
        }
    }
    Ok(())
}
