//! Priority- and thickness-aware guillotine strip-packing engine.
//!
//! Parts are grouped by thickness class and, within each thickness, by
//! priority. Packing proceeds thickness by thickness in priority order,
//! probing each thickness's demand against a shared sheet length with an
//! unbounded-length packer, and falling back to a length-bounded recursive
//! packer when the probe would overrun the sheet. Lengths measured at one
//! thickness are converted to another thickness's equivalent length via a
//! linear cross-thickness deformation model, so that different thicknesses
//! of the same material can share one sheet of stock length.
//!
//! Quick example:
//! ```
//! use std::collections::BTreeMap;
//! use strip_pack_core::{pack, Part, PackConfig};
//!
//! let mut parts = BTreeMap::new();
//! let mut by_priority = BTreeMap::new();
//! by_priority.insert(1.into(), vec![Part::new(4.0, 6.0), Part::new(3.0, 3.0)]);
//! parts.insert(2.0.into(), by_priority);
//!
//! let out = pack(10.0, 20.0, &parts, PackConfig::default()).unwrap();
//! assert!(out.remaining_length <= 20.0);
//! ```

use std::collections::BTreeMap;

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod packer;
pub mod report;
pub mod scaling;
pub mod scheduler;

pub use config::{PackConfig, PackConfigBuilder, SortKey};
pub use error::{PackError, Result};
pub use model::{Part, PlacedRect, Priority, Thickness};
pub use scheduler::{packaging, PackOutput};

/// Parts to pack, grouped by thickness then by priority bucket.
pub type PartMap = BTreeMap<Thickness, BTreeMap<Priority, Vec<Part>>>;

/// Worklists of not-yet-placed indices, same shape as [`PartMap`]. An index
/// refers to a position in the corresponding `PartMap` bucket and stays
/// stable across normalization and sorting.
pub type IndexMap = BTreeMap<Thickness, BTreeMap<Priority, Vec<usize>>>;

/// Accepted placements, same shape as [`PartMap`] but holding placed
/// rectangles in sheet coordinates instead of unplaced parts.
pub type PlacementMap = BTreeMap<Thickness, BTreeMap<Priority, Vec<PlacedRect>>>;

/// Length of sheet already consumed by each thickness's own sub-strip.
pub type LengthMarking = BTreeMap<Thickness, f64>;

/// Packs `parts` into a sheet of `width` x `length`.
///
/// This is the crate's single entry point; see [`scheduler::packaging`] for
/// the algorithm itself. `cfg` is validated before packing starts.
pub fn pack(width: f64, length: f64, parts: &PartMap, cfg: PackConfig) -> Result<PackOutput> {
    cfg.validate()?;
    packaging(width, length, parts, cfg)
}

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{PackConfig, PackConfigBuilder, SortKey};
    pub use crate::error::{PackError, Result};
    pub use crate::model::{Part, PlacedRect, Priority, Thickness};
    pub use crate::scheduler::PackOutput;
    pub use crate::{pack, IndexMap, LengthMarking, PartMap, PlacementMap};
}
