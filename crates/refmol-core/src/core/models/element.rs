use crate::core::data::weights;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The chemical elements covered by the bundled reference data.
///
/// This is deliberately not a full periodic table: it mirrors exactly the
/// set of elements the atomic-weight table knows about, so every variant is
/// guaranteed a weight lookup that succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
}

/// Errors for element symbol parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ElementError {
    /// The symbol does not name any element this library knows about.
    #[error("unknown element symbol '{0}'")]
    UnknownSymbol(String),
}

impl Element {
    /// Returns the conventional one-letter symbol (e.g. "H", "O").
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
        }
    }

    /// Returns the atomic number.
    pub fn atomic_number(&self) -> u8 {
        match self {
            Element::Hydrogen => 1,
            Element::Carbon => 6,
            Element::Nitrogen => 7,
            Element::Oxygen => 8,
        }
    }

    /// Returns the atomic weight in unified atomic mass units.
    pub fn weight(&self) -> f64 {
        weights::atomic_weight(self.symbol())
            .expect("the weight table covers every Element variant")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ElementError;

    /// Parses a conventional element symbol. Surrounding whitespace is
    /// ignored; capitalization is significant ("H", not "h").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "H" => Ok(Element::Hydrogen),
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            other => Err(ElementError::UnknownSymbol(other.to_string())),
        }
    }
}
