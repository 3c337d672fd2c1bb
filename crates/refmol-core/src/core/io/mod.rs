//! Rendering of molecular data to output streams. One format lives here:
//! the labeled plain-text coordinate block ([`coords`]).

pub mod coords;
