use crate::core::models::molecule::Molecule;
use std::io::{self, Write};
use thiserror::Error;

/// Default number of decimal places for coordinate values. Matches the
/// precision the bundled geometries are defined with, so their constants
/// survive a render round-trip.
pub const DEFAULT_PRECISION: usize = 12;

/// Errors for coordinate-block rendering.
#[derive(Debug, Error)]
pub enum CoordWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Fixed-point rendering settings for coordinate values.
///
/// Columns are right-aligned to a common width derived from the precision,
/// leaving room for a sign, the integer digit, and the decimal point.
/// Alignment is cosmetic; the values and the row/column structure are what
/// a block guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordFormat {
    /// Decimal places per value.
    pub precision: usize,
}

impl Default for CoordFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CoordFormat {
    fn column_width(&self) -> usize {
        self.precision + 4
    }
}

/// Writes one labeled coordinate block for a molecule.
///
/// The block is the label line `<name> coordinates`, then one line per atom
/// with the x, y, z values separated by single spaces, then a blank line.
///
/// # Errors
///
/// Returns [`CoordWriteError::Io`] if the underlying writer fails.
pub fn write_block(
    molecule: &Molecule,
    format: CoordFormat,
    writer: &mut impl Write,
) -> Result<(), CoordWriteError> {
    let width = format.column_width();
    writeln!(writer, "{} coordinates", molecule.name())?;
    for atom in molecule.atoms() {
        let position = &atom.position;
        writeln!(
            writer,
            "{:>width$.precision$} {:>width$.precision$} {:>width$.precision$}",
            position.x,
            position.y,
            position.z,
            width = width,
            precision = format.precision,
        )?;
    }
    writeln!(writer)?;
    Ok(())
}
