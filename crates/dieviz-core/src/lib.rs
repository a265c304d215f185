//! # dieviz-core - Core Domain Types
//!
//! Foundation crate for DieViz. Provides the architecture variants, the
//! die layout generator, the per-variant unit catalogs, the static spec
//! sheets, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Architecture (`arch`)
//! - [`Architecture`] - Closed set of supported die designs (Hopper, Blackwell)
//!
//! ### Layout (`layout`)
//! - [`DieConfig`] - Fixed per-variant die parameters (GPC/TPC/SM counts,
//!   disabled-GPC index set)
//! - [`TpcSlot`] - One TPC slot with its two SM ids and disabled flag
//! - [`gpc_slots()`] - Generate the ordered slot sequence for one GPC
//!
//! ### Catalog (`catalog`)
//! - [`UnitKey`] - Closed enumeration of activatable hardware units
//! - [`UnitInfo`] - Authored descriptor (title, description, sections, specs)
//! - [`unit_info()`] - Variant-aware lookup; absent entries are `None`
//!
//! ### Spec Sheets (`specs`)
//! - [`DieStat`], [`DieFeature`] - Static specification-table content
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dieviz_core::prelude::*;
//! ```

pub mod arch;
pub mod catalog;
pub mod error;
pub mod layout;
pub mod logging;
pub mod specs;

/// Prelude for common imports used throughout all DieViz crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use arch::Architecture;
pub use catalog::{unit_info, UnitInfo, UnitKey, UnitSection, UnitSpec};
pub use error::{Error, Result, ResultExt};
pub use layout::{gpc_slots, DieConfig, TpcSlot, BLACKWELL_DIE, HOPPER_DIE};
pub use specs::{die_features, die_stats, DieFeature, DieStat};
