//! # snapvec Quickstart
//!
//! 2-D and 3-D vector value types with in-place mutation, linear
//! interpolation, bounded clamping, and lightweight change tracking: a dirty
//! flag plus an optional bounded history of past snapshots.
//!
//! ```rust
//! use snapvec::prelude::*;
//!
//! // Track up to 3 past snapshots.
//! let mut pos = Vector2::with_options(0.0, 0.0, Options::with_history(3));
//! assert!(!pos.dirty());
//!
//! // Ease toward a target; the change is observable until saved.
//! pos.lerp_to(10.0, 4.0, 0.5);
//! assert!(pos.dirty());
//! assert_eq!(pos.coords(), [5.0, 2.0]);
//! pos.save();
//! assert!(!pos.dirty());
//!
//! // Clamp against per-axis bounds.
//! pos.set_min(0.0, 0.0);
//! pos.set_max(4.0, 4.0);
//! pos.clamp().unwrap();
//! assert_eq!(pos.coords(), [4.0, 2.0]);
//! ```
//!
//! Construction accepts three equivalent shapes, resolved by a closed
//! argument enum per dimensionality:
//!
//! ```rust
//! use snapvec::{Vector2, VectorError};
//!
//! let a = Vector2::new(1.0, 2.0);
//! let b = Vector2::try_new([1.0, 2.0]).unwrap();
//! let c = Vector2::try_new(&a).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a, c);
//!
//! // Sequences of any other length are rejected.
//! let err = Vector2::try_new(vec![1.0, 2.0, 3.0]).unwrap_err();
//! assert_eq!(err, VectorError::InvalidLength { expected: 2, actual: 3 });
//! ```

pub mod error;
pub mod options;
pub mod prelude;
pub mod vector2;
pub mod vector3;

mod scalar;

pub use error::{Result, VectorError};
pub use options::Options;
pub use vector2::{Arg2, Vector2};
pub use vector3::{Arg3, Vector3};
