//! Compile-time reference data: the atomic-weight table ([`weights`]) and
//! the bundled reference geometries ([`presets`]).

pub mod presets;
pub mod weights;
