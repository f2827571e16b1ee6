//! GeoJSON validation toolbox.
//!
//! Re-exports the value tree ([`geoscalar_core`]) and the validator ([`geoscalar_geometry`]), and
//! adds what the command line tool is built from: the YAML [`config::Config`] and the
//! [`check::Checker`] that turns text into a verdict.

pub mod check;
pub mod config;

pub use geoscalar_core::json;
pub use geoscalar_geometry::*;
