use super::element::Element;
use nalgebra::Point3;

/// A single atom: its element and its position in space.
///
/// Coordinates are in the Bohr-scale atomic units used throughout the
/// bundled reference geometries; the same unit applies to every atom of a
/// molecule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// The chemical element of this atom.
    pub element: Element,
    /// The 3D coordinates of the atom.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` at the given position.
    pub fn new(element: Element, position: Point3<f64>) -> Self {
        Self { element, position }
    }
}
