//! The 3-D twin of [`Vector2`](crate::Vector2): identical design with a
//! third coordinate.

use std::collections::VecDeque;
use std::fmt;
use std::ops::{AddAssign, Neg, SubAssign};

use crate::error::{Result, VectorError};
use crate::options::Options;
use crate::scalar;

/// An accepted construction argument for [`Vector3`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg3 {
    /// Explicit `(x, y, z)` scalars.
    Triple(f64, f64, f64),
    /// A sequence; parsing fails unless it has exactly three elements.
    Seq(Vec<f64>),
    /// Coordinates copied out of another `Vector3`.
    Vector([f64; 3]),
}

impl From<(f64, f64, f64)> for Arg3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Arg3::Triple(x, y, z)
    }
}

impl From<[f64; 3]> for Arg3 {
    fn from(arr: [f64; 3]) -> Self {
        Arg3::Seq(arr.to_vec())
    }
}

impl From<Vec<f64>> for Arg3 {
    fn from(seq: Vec<f64>) -> Self {
        Arg3::Seq(seq)
    }
}

impl From<&[f64]> for Arg3 {
    fn from(seq: &[f64]) -> Self {
        Arg3::Seq(seq.to_vec())
    }
}

impl From<&Vector3> for Arg3 {
    fn from(v: &Vector3) -> Self {
        Arg3::Vector(v.coords)
    }
}

fn parse(arg: Arg3) -> Result<[f64; 3]> {
    match arg {
        Arg3::Triple(x, y, z) => Ok([x, y, z]),
        Arg3::Seq(seq) => match seq[..] {
            [x, y, z] => Ok([x, y, z]),
            _ => Err(VectorError::InvalidLength {
                expected: 3,
                actual: seq.len(),
            }),
        },
        Arg3::Vector(coords) => Ok(coords),
    }
}

/// A 3-D vector with change tracking.
///
/// See [`Vector2`](crate::Vector2) for the full behavioral contract; every
/// operation here is the same with a third axis.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    coords: [f64; 3],
    saved: [f64; 3],
    history: VecDeque<[f64; 3]>,
    opts: Options,
    min: Option<[f64; 3]>,
    max: Option<[f64; 3]>,
}

impl Vector3 {
    /// Construct from explicit scalar coordinates. Never dirty when fresh.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_coords([x, y, z], Options::default())
    }

    /// Construct from explicit scalars with tracking options.
    pub fn with_options(x: f64, y: f64, z: f64, opts: Options) -> Self {
        Self::from_coords([x, y, z], opts)
    }

    /// Construct from any accepted argument shape.
    pub fn try_new(arg: impl Into<Arg3>) -> Result<Self> {
        Self::try_with_options(arg, Options::default())
    }

    /// Construct from any accepted argument shape, with tracking options.
    pub fn try_with_options(arg: impl Into<Arg3>, opts: Options) -> Result<Self> {
        Ok(Self::from_coords(parse(arg.into())?, opts))
    }

    fn from_coords(coords: [f64; 3], opts: Options) -> Self {
        let mut v = Self {
            coords,
            saved: coords,
            history: VecDeque::new(),
            opts,
            min: None,
            max: None,
        };
        v.save();
        v
    }

    /// X coordinate.
    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    /// Y coordinate.
    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    /// Z coordinate.
    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Write the X coordinate. Does not save.
    #[inline(always)]
    pub fn set_x(&mut self, x: f64) {
        self.coords[0] = x;
    }

    /// Write the Y coordinate. Does not save.
    #[inline(always)]
    pub fn set_y(&mut self, y: f64) {
        self.coords[1] = y;
    }

    /// Write the Z coordinate. Does not save.
    #[inline(always)]
    pub fn set_z(&mut self, z: f64) {
        self.coords[2] = z;
    }

    /// The current coordinate buffer.
    #[inline(always)]
    pub fn coords(&self) -> [f64; 3] {
        self.coords
    }

    /// Replace the coordinates wholesale; does not save. On a parse failure
    /// the vector is left untouched.
    pub fn set(&mut self, arg: impl Into<Arg3>) -> Result<()> {
        self.coords = parse(arg.into())?;
        Ok(())
    }

    /// Add to each axis in place.
    pub fn add(&mut self, dx: f64, dy: f64, dz: f64) {
        self.coords[0] += dx;
        self.coords[1] += dy;
        self.coords[2] += dz;
    }

    /// Subtract from each axis in place.
    pub fn subtract(&mut self, dx: f64, dy: f64, dz: f64) {
        self.coords[0] -= dx;
        self.coords[1] -= dy;
        self.coords[2] -= dz;
    }

    /// Move each axis toward the target by linear interpolation.
    pub fn lerp_to(&mut self, tx: f64, ty: f64, tz: f64, amt: f64) {
        self.coords[0] = scalar::lerp(self.coords[0], tx, amt);
        self.coords[1] = scalar::lerp(self.coords[1], ty, amt);
        self.coords[2] = scalar::lerp(self.coords[2], tz, amt);
    }

    /// Checkpoint the current coordinates; retains a bounded history when
    /// [`Options::history`] is above zero.
    pub fn save(&mut self) {
        self.saved = self.coords;
        if self.opts.history > 0 {
            self.history.push_front(self.coords);
            self.history.truncate(self.opts.history);
        }
    }

    /// True iff any axis differs from the last saved snapshot.
    pub fn dirty(&self) -> bool {
        self.coords != self.saved
    }

    /// Past snapshots, most recent first.
    pub fn history(&self) -> &VecDeque<[f64; 3]> {
        &self.history
    }

    /// A new, fully independent vector built from the current coordinates,
    /// with default options, fresh history and no bounds.
    pub fn copy(&self) -> Self {
        Self::from_coords(self.coords, Options::default())
    }

    /// A new vector with every axis negated.
    pub fn opposite(&self) -> Self {
        Self::from_coords(
            [-self.coords[0], -self.coords[1], -self.coords[2]],
            Options::default(),
        )
    }

    /// True iff any axis is non-zero.
    pub fn has_value(&self) -> bool {
        self.coords.iter().any(|&c| c != 0.0)
    }

    /// Set the per-axis lower bound; does not retroactively clamp.
    pub fn set_min(&mut self, x: f64, y: f64, z: f64) {
        self.min = Some([x, y, z]);
    }

    /// Set the per-axis upper bound.
    pub fn set_max(&mut self, x: f64, y: f64, z: f64) {
        self.max = Some([x, y, z]);
    }

    /// The stored lower bound, if set.
    pub fn min_bound(&self) -> Option<[f64; 3]> {
        self.min
    }

    /// The stored upper bound, if set.
    pub fn max_bound(&self) -> Option<[f64; 3]> {
        self.max
    }

    fn bounds(&self) -> Result<([f64; 3], [f64; 3])> {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => Ok((lo, hi)),
            _ => Err(VectorError::BoundsNotSet),
        }
    }

    /// Clamp each axis in place to the stored bounds; fails with
    /// [`VectorError::BoundsNotSet`] unless both have been set.
    pub fn clamp(&mut self) -> Result<()> {
        let (lo, hi) = self.bounds()?;
        for i in 0..3 {
            self.coords[i] = scalar::clamp(self.coords[i], lo[i], hi[i]);
        }
        Ok(())
    }

    /// A new vector holding the clamped coordinates, leaving this one
    /// untouched.
    pub fn limited(&self) -> Result<Self> {
        let (lo, hi) = self.bounds()?;
        let mut out = self.coords;
        for i in 0..3 {
            out[i] = scalar::clamp(out[i], lo[i], hi[i]);
        }
        Ok(Self::from_coords(out, Options::default()))
    }

    /// A new vector interpolated between `a` and `b`; neither input is
    /// mutated.
    pub fn lerp(a: &Self, b: &Self, amt: f64) -> Self {
        Self::from_coords(
            [
                scalar::lerp(a.coords[0], b.coords[0], amt),
                scalar::lerp(a.coords[1], b.coords[1], amt),
                scalar::lerp(a.coords[2], b.coords[2], amt),
            ],
            Options::default(),
        )
    }
}

impl Default for Vector3 {
    /// The zero vector.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_coords(arr, Options::default())
    }
}

/// Equality compares current coordinates only.
impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Neg for &Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self.opposite()
    }
}

impl AddAssign<[f64; 3]> for Vector3 {
    fn add_assign(&mut self, rhs: [f64; 3]) {
        self.add(rhs[0], rhs[1], rhs[2]);
    }
}

impl SubAssign<[f64; 3]> for Vector3 {
    fn sub_assign(&mut self, rhs: [f64; 3]) {
        self.subtract(rhs[0], rhs[1], rhs[2]);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.coords[0], self.coords[1], self.coords[2])
    }
}
