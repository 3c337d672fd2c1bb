use super::atom::Atom;
use thiserror::Error;

/// Errors for molecule construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoleculeError {
    /// A molecule must hold at least one atom.
    #[error("molecule '{0}' must contain at least one atom")]
    Empty(String),
}

/// A named, ordered collection of atoms.
///
/// The atom list is fixed at construction: there are no mutating accessors,
/// so the row count and row order a molecule is built with are the ones it
/// reports forever. Row order is meaningful; it identifies the atoms in the
/// rendered coordinate table (the table itself carries no element column).
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    name: String,
    atoms: Vec<Atom>,
}

impl Molecule {
    /// Creates a molecule from a display name and an ordered atom list.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::Empty`] if `atoms` is empty.
    pub fn new(name: &str, atoms: Vec<Atom>) -> Result<Self, MoleculeError> {
        if atoms.is_empty() {
            return Err(MoleculeError::Empty(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            atoms,
        })
    }

    /// The display name, used as-is in the coordinate block label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The atoms, in construction order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The number of atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Always false for a constructed molecule; kept for API symmetry with
    /// `len`.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The molar mass in unified atomic mass units, summed over the atoms'
    /// element weights.
    pub fn molar_mass(&self) -> f64 {
        self.atoms.iter().map(|atom| atom.element.weight()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;
    use nalgebra::Point3;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn dihydrogen() -> Molecule {
        Molecule::new(
            "Dihydrogen",
            vec![
                Atom::new(Element::Hydrogen, Point3::new(0.0, 0.0, 0.0)),
                Atom::new(Element::Hydrogen, Point3::new(0.0, 0.0, 1.4)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn construction_fixes_name_order_and_count() {
        let molecule = dihydrogen();
        assert_eq!(molecule.name(), "Dihydrogen");
        assert_eq!(molecule.len(), 2);
        assert!(!molecule.is_empty());
        assert_eq!(molecule.atoms()[1].position.z, 1.4);
    }

    #[test]
    fn empty_atom_list_is_rejected() {
        let result = Molecule::new("Nothing", Vec::new());
        assert_eq!(result, Err(MoleculeError::Empty("Nothing".to_string())));
    }

    #[test]
    fn molar_mass_sums_element_weights() {
        let molecule = dihydrogen();
        assert!(f64_approx_equal(molecule.molar_mass(), 2.0 * 1.007825032));
    }
}
