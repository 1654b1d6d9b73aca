//! Justified row layout for mixed-aspect-ratio image galleries.
//!
//! Packs an ordered list of items into rows that span a container's width at
//! close to a requested row height, without cropping. Pure geometry with no
//! drawing or I/O. `no_std` compatible (row assembly needs `alloc`).
//!
//! # Modules
//!
//! - [`ratio`]: Aspect ratio normalization and the [`LayoutItem`] trait
//! - [`packer`]: Greedy grouping of items into rows
//! - [`scaler`]: Fill-the-width row scaling
//! - [`last_row`]: Trailing-row policy
//! - [`justify`]: Layout assembly, pixel snapping, render contract
//! - [`controller`]: Resize debouncing and memoized recompute
//! - [`breakpoint`]: Per-view responsive row heights
//! - `query`: Query string configuration (feature `query`)
//! - `svg`: SVG visualization (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenjustify::{Item, JustifyConfig};
//!
//! let photos = [
//!     Item::new("harbour", 800.0, 600.0),
//!     Item::new("lighthouse", 600.0, 900.0),
//!     Item::new("dunes", 1600.0, 600.0),
//!     Item::new("gull", 800.0, 800.0),
//! ];
//! let layout = JustifyConfig::new(1000.0, 240.0).gap(4.0).compute(&photos).unwrap();
//!
//! let order: Vec<&str> = layout.tiles().map(|t| t.key).collect();
//! assert_eq!(order, ["harbour", "lighthouse", "dunes", "gull"]);
//! for row in layout.rows().iter().filter(|r| r.is_filled()) {
//!     assert!((row.width() - 1000.0).abs() < 1e-6);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod breakpoint;
pub mod config;
pub mod last_row;
pub mod ratio;
pub mod scaler;

#[cfg(feature = "alloc")]
pub mod controller;
#[cfg(feature = "alloc")]
pub mod justify;
#[cfg(feature = "alloc")]
pub mod packer;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types
pub use breakpoint::{RowHeights, ViewPreset};
pub use config::{JustifyConfig, LayoutError};
pub use last_row::{LastRow, RowFill};
pub use ratio::{Dimensions, Item, LayoutItem};
pub use scaler::RowScale;

#[cfg(feature = "alloc")]
pub use controller::{
    ControllerConfig, FireOutcome, LayoutController, RecomputeTicket, ResizeAction,
};
#[cfg(feature = "alloc")]
pub use justify::{Layout, Row, Size, Tile, justify};
#[cfg(feature = "alloc")]
pub use packer::{RowGroup, pack_rows};
