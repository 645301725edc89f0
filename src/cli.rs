//! Terminal reporting shared by the binaries.
//!
//! Output goes through injected writers so the exact CLI contract can be
//! tested without spawning a process.

use std::any::Any;
use std::io::{self, Write};

use crate::docs::CatalogCounts;
use crate::plugins::ValidationReport;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Text of a caught panic payload, for the unexpected-failure message.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "validator panicked".to_string())
}

/// Prints a validation outcome and returns the process exit code.
///
/// `Err` is the unexpected-failure path; with `debug` set the full error
/// chain is printed as well.
pub fn report_validation(
    result: anyhow::Result<ValidationReport>,
    verbose: bool,
    debug: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            writeln!(err, "Validation failed with unexpected error: {e}")?;
            if debug {
                writeln!(err, "{e:?}")?;
            }
            return Ok(EXIT_FAILURE);
        }
    };

    if report.plugin_count == 0 {
        writeln!(err, "Warning: No plugins found in marketplace.json")?;
    }

    if !report.is_ok() {
        writeln!(err, "Validation errors:\n")?;
        for issue in &report.errors {
            writeln!(err, "  - {issue}")?;
        }
        return Ok(EXIT_FAILURE);
    }

    writeln!(
        out,
        "All {} plugins validated successfully",
        report.plugin_count
    )?;

    if verbose && !report.skipped_refs.is_empty() {
        writeln!(
            out,
            "\nSkipped {} data/ references (external submodules):",
            report.skipped_refs.len()
        )?;
        for skipped in &report.skipped_refs {
            writeln!(out, "  - {skipped}")?;
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Prints the per-catalog summary after generation.
pub fn report_docs(counts: &CatalogCounts, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Documentation generated:")?;
    writeln!(out, "   - {} agents", counts.agents)?;
    writeln!(out, "   - {} commands", counts.commands)?;
    writeln!(out, "   - {} skills", counts.skills)?;
    writeln!(out, "   - {} plugins", counts.plugins)?;
    Ok(())
}
