//! Reference catalogs — set-aside programs and NAICS codes.
//!
//! Both catalogs are explicit mappings with a mandatory fallback
//! branch: an unknown tag or code resolves to a generic descriptor,
//! never an error.

pub mod naics;
pub mod set_aside;

pub use naics::NaicsCatalog;
pub use set_aside::{SetAsideCatalog, SetAsideDescriptor};
