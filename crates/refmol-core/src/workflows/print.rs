use crate::core::io::coords::{self, CoordFormat, CoordWriteError};
use crate::core::models::molecule::Molecule;
use std::io::Write;
use tracing::{info, instrument};

/// Settings for one coordinate report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Rendering settings shared by every block in the report.
    pub format: CoordFormat,
}

/// Renders the molecules as consecutive labeled coordinate blocks, in the
/// order given.
///
/// Each block ends with a blank line, so the report separates blocks without
/// extra glue. Progress is reported through `tracing` only; nothing besides
/// the blocks themselves reaches the writer.
///
/// # Errors
///
/// Returns [`CoordWriteError`] if writing or the final flush fails.
#[instrument(skip_all, name = "coordinate_report")]
pub fn run(
    molecules: &[Molecule],
    config: &ReportConfig,
    writer: &mut impl Write,
) -> Result<(), CoordWriteError> {
    for molecule in molecules {
        info!(
            "Rendering '{}': {} atoms, molar mass {:.6} u.",
            molecule.name(),
            molecule.len(),
            molecule.molar_mass()
        );
        coords::write_block(molecule, config.format, writer)?;
    }
    writer.flush()?;
    Ok(())
}
