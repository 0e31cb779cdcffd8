//! `tagcloud` places axis-aligned rectangles around a fixed center point, one at a time,
//! approximating a circular "tag cloud" silhouette without any overlap.
//!
//! ```
//! use tagcloud::Layouter;
//! use tagcloud::geometry::primitives::{Point, Size};
//!
//! let mut layouter = Layouter::new(Point(0, 0));
//! let first = layouter.place_next(Size::new(684, 76)).unwrap();
//! assert_eq!(first.origin, Point(-342, -38));
//! ```

/// Entities produced by a [`Layouter`]: read-only snapshots and their statistics
pub mod entities;

/// Errors returned while configuring or running a [`Layouter`]
pub mod error;

/// Geometric primitives and traits
pub mod geometry;

/// The spiral search and radial compaction algorithm
pub mod layouter;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::LayoutError;
#[doc(inline)]
pub use layouter::Layouter;
#[doc(inline)]
pub use util::LayouterConfig;
