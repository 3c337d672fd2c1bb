use phf::{Map, phf_map};

/// Atomic weights in unified atomic mass units, keyed by element symbol.
///
/// Covers exactly the elements of the bundled reference geometries plus
/// nitrogen. Built at compile time and never mutated.
static ATOMIC_WEIGHTS: Map<&'static str, f64> = phf_map! {
    "H" => 1.007825032,
    "C" => 12.011,
    "N" => 14.007,
    "O" => 15.99491462,
};

/// Looks up the atomic weight for an element symbol.
///
/// # Arguments
///
/// * `symbol` - The conventional element symbol (e.g. "H", "O"). Surrounding
///   whitespace is ignored.
///
/// # Return
///
/// Returns `Some(weight)` for a covered symbol, otherwise `None`.
pub fn atomic_weight(symbol: &str) -> Option<f64> {
    ATOMIC_WEIGHTS.get(symbol.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn covered_symbols_return_their_weight() {
        assert!(f64_approx_equal(atomic_weight("H").unwrap(), 1.007825032));
        assert!(f64_approx_equal(atomic_weight("C").unwrap(), 12.011));
        assert!(f64_approx_equal(atomic_weight("N").unwrap(), 14.007));
        assert!(f64_approx_equal(atomic_weight("O").unwrap(), 15.99491462));
    }

    #[test]
    fn unknown_symbols_return_none() {
        assert_eq!(atomic_weight("He"), None);
        assert_eq!(atomic_weight("h"), None);
        assert_eq!(atomic_weight(""), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(atomic_weight(" O ").is_some());
    }
}
