//! Impact physics and mitigation planning for near-Earth asteroids.
//!
//! The calculator core is pure arithmetic over three scalar inputs; the
//! surrounding crates supply catalog records, feed import, and CSV export.
//! Keeping the logic in library crates lets multiple front-ends (CLI, GUI,
//! web) share it.

pub use neo_core::{constants, units};

pub use neo_catalog as catalog;
pub use neo_config as config;
pub use neo_export as export;
pub use neo_impact as impact;
pub use neo_importer as importer;
pub use neo_mitigation as mitigation;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
