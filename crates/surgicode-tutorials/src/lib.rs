//! surgicode-tutorials
//!
//! The built-in tutorial catalog. Pure data: each tutorial is authored as a
//! code literal in [`tutorials`], grouped into [`sequences`], and validated
//! once into a [`Catalog`].

pub mod catalog;
pub mod error;
pub mod sequences;
pub mod tutorials;

use std::sync::LazyLock;

use surgicode_core::models::Tutorial;

pub use catalog::{prerequisites_met, Catalog};
pub use error::CatalogError;
pub use sequences::Sequence;

/// Return all built-in tutorials in picker order.
pub fn all_tutorials() -> Vec<Tutorial> {
    vec![
        tutorials::basics::tutorial(),
        tutorials::code_search::tutorial(),
        tutorials::case_logging::tutorial(),
        tutorials::resident_tracking::tutorial(),
        tutorials::analytics_overview::tutorial(),
        tutorials::favorites_and_templates::tutorial(),
        tutorials::leaderboards::tutorial(),
    ]
}

/// The validated built-in catalog.
///
/// # Panics
///
/// Panics on first access if the authored tutorials violate a catalog
/// invariant. The definitions are compile-time literals, so this indicates
/// an authoring bug caught by the catalog tests.
pub fn builtin() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::new(all_tutorials(), sequences::builtin_sequences())
            .unwrap_or_else(|e| panic!("built-in tutorial catalog is invalid: {e}"))
    });
    &CATALOG
}

/// Look up a built-in tutorial by id.
pub fn get_tutorial(id: &str) -> Result<&'static Tutorial, CatalogError> {
    builtin().get(id)
}
