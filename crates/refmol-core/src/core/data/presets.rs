use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;

/// The bundled water geometry (atoms O, H, H), in Bohr-scale atomic units.
pub fn water() -> Molecule {
    Molecule::new(
        "Water",
        vec![
            Atom::new(
                Element::Oxygen,
                Point3::new(0.000000000000, 0.000000000000, -0.134503695264),
            ),
            Atom::new(
                Element::Hydrogen,
                Point3::new(0.000000000000, -1.684916670000, 1.067335684736),
            ),
            Atom::new(
                Element::Hydrogen,
                Point3::new(0.000000000000, 1.684916670000, 1.067335684736),
            ),
        ],
    )
    .expect("built-in geometries are non-empty")
}

/// The bundled formaldehyde geometry (atoms C, O, H, H), in Bohr-scale
/// atomic units.
pub fn formaldehyde() -> Molecule {
    Molecule::new(
        "Formaldehyde",
        vec![
            Atom::new(
                Element::Carbon,
                Point3::new(0.000025165297, 0.000000000000, 0.144571523302),
            ),
            Atom::new(
                Element::Oxygen,
                Point3::new(-0.000038305955, 0.000000000000, 1.343510833886),
            ),
            Atom::new(
                Element::Hydrogen,
                Point3::new(0.938708677255, 0.000000000000, -0.443151260635),
            ),
            Atom::new(
                Element::Hydrogen,
                Point3::new(-0.938658598164, 0.000000000000, -0.443084756552),
            ),
        ],
    )
    .expect("built-in geometries are non-empty")
}

/// All built-in geometries, in report order (water first).
pub fn builtin() -> Vec<Molecule> {
    vec![water(), formaldehyde()]
}

/// Looks up a built-in geometry by name, case-insensitively.
pub fn by_name(name: &str) -> Option<Molecule> {
    builtin()
        .into_iter()
        .find(|molecule| molecule.name().eq_ignore_ascii_case(name.trim()))
}
