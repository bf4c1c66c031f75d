//! # Geometry
//!
//! Small 2D/3D Euclidean vector value types.
//!
//! Both vector types are `Copy` values of `f64` components. Binary operators
//! return fresh vectors and never touch their operands; only `+=`/`-=` (and
//! their named forms `add_in_place`/`sub_in_place`) mutate.
//!
//! ## Angles
//!
//! [`Vector2D`] carries the direction logic of the crate:
//!
//! - [`Vector2D::angle`]: signed angle from the positive x-axis, in (-π, π]
//! - [`Vector2D::create_from_angle`]: inverse of `angle`/`length`
//! - [`Vector2D::angle_between`]: signed rotation from one vector to another
//!
//! [`Vector3D`] has no angle operations; it adds the cross product instead.
//!
//! ## Example
//!
//! ```rust
//! use geometry::Vector2D;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let north = Vector2D::new(0.0, 1.0);
//! let east = Vector2D::new(1.0, 0.0);
//!
//! assert_eq!(north.angle(), FRAC_PI_2);
//! assert!((Vector2D::angle_between(north, east) + FRAC_PI_2).abs() < 1e-12);
//!
//! let mut v = Vector2D::zero();
//! v += Vector2D::new(3.0, 4.0);
//! v += 1.0;
//! assert_eq!(v, [4.0, 5.0]);
//! assert_eq!(v.to_string(), "[4, 5]");
//! ```

pub mod error;
pub mod operand;
mod parse;
pub mod vector2d;
pub mod vector3d;

// Re-export public API
pub use error::{GeometryError, GeometryResult};
pub use operand::{Comparand, Operand};
pub use vector2d::Vector2D;
pub use vector3d::Vector3D;
