//! Scaling stack layout: children sized and offset by rules that track the
//! container, all pinned to one of nine alignment anchors.
//!
//! Pure geometry with no rendering or view tree. `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`]: Points, sizes, unit points, rects, size proposals
//! - [`alignment`]: The nine anchors and their unit/concrete points
//! - [`sizing`]: Sizing rules and the resolution engine
//! - [`stack`]: Per-child placement composition
//! - `query`: Query-string configuration (feature `query`)
//! - `svg`: Placement diagrams (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod alignment;
pub mod geometry;
#[cfg(feature = "query")]
pub mod query;
pub mod sizing;
pub mod stack;
#[cfg(feature = "svg")]
pub mod svg;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use geometry::{Point, ProposedSize, Rect, Size, UnitPoint};
pub use sizing::{MIN_DIMENSION, ReferenceSizes, Resolution, SizingFn, SizingRule};
pub use stack::{Child, Placement, ScalingStack};
