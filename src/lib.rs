//! Plücker coordinates for lines in 3D space, homogeneous planes, and the
//! predicates, constructions and distance formulas that combine them.
//!
//! ```
//! use plucker::geometry::Plucker;
//! use plucker::math::Point3;
//! use plucker::operations::find::find_line_intersection;
//!
//! let a = Plucker::through_points(&Point3::new(0.0, 2.0, 6.0), &Point3::new(0.0, 2.0, 4.0));
//! let b = Plucker::through_points(&Point3::new(0.0, 2.0, 0.0), &Point3::new(2.0, 2.0, 0.0));
//!
//! let hit = find_line_intersection(&a, &b, 1e-8).and_then(plucker::math::hnormalized);
//! assert!(hit.is_some());
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, Result};
pub use geometry::{Plane, Plucker};
pub use math::Real;
