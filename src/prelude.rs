//! The "everything" import for snapvec.
//!
//! Brings you the commonly used types with one glob:
//! ```rust
//! use snapvec::prelude::*;
//! ```

pub use crate::error::VectorError;
pub use crate::options::Options;
pub use crate::vector2::{Arg2, Vector2};
pub use crate::vector3::{Arg3, Vector3};
