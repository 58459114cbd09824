//! A tracked 2-D vector: mutable coordinates plus dirty flag, bounded
//! snapshot history, and optional per-axis clamping bounds.

use std::collections::VecDeque;
use std::fmt;
use std::ops::{AddAssign, Neg, SubAssign};

use crate::error::{Result, VectorError};
use crate::options::Options;
use crate::scalar;

/// An accepted construction argument for [`Vector2`].
///
/// One variant per shape: an explicit scalar pair, a sequence that must have
/// exactly two elements, or the coordinates of another vector. Built through
/// the `From` conversions below, so callers normally never name it.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg2 {
    /// Explicit `(x, y)` scalars.
    Pair(f64, f64),
    /// A sequence; parsing fails unless it has exactly two elements.
    Seq(Vec<f64>),
    /// Coordinates copied out of another `Vector2`.
    Vector([f64; 2]),
}

impl From<(f64, f64)> for Arg2 {
    fn from((x, y): (f64, f64)) -> Self {
        Arg2::Pair(x, y)
    }
}

impl From<[f64; 2]> for Arg2 {
    fn from(arr: [f64; 2]) -> Self {
        Arg2::Seq(arr.to_vec())
    }
}

impl From<Vec<f64>> for Arg2 {
    fn from(seq: Vec<f64>) -> Self {
        Arg2::Seq(seq)
    }
}

impl From<&[f64]> for Arg2 {
    fn from(seq: &[f64]) -> Self {
        Arg2::Seq(seq.to_vec())
    }
}

impl From<&Vector2> for Arg2 {
    fn from(v: &Vector2) -> Self {
        Arg2::Vector(v.coords)
    }
}

/// Normalize an argument into a coordinate buffer.
///
/// Pure: never touches history or bounds.
fn parse(arg: Arg2) -> Result<[f64; 2]> {
    match arg {
        Arg2::Pair(x, y) => Ok([x, y]),
        Arg2::Seq(seq) => match seq[..] {
            [x, y] => Ok([x, y]),
            _ => Err(VectorError::InvalidLength {
                expected: 2,
                actual: seq.len(),
            }),
        },
        Arg2::Vector(coords) => Ok(coords),
    }
}

/// A 2-D vector with change tracking.
///
/// The current coordinates are mutated in place by [`add`](Self::add),
/// [`subtract`](Self::subtract), [`lerp_to`](Self::lerp_to), [`set`](Self::set)
/// and the axis setters. [`save`](Self::save) checkpoints them;
/// [`dirty`](Self::dirty) reports whether anything changed since the last
/// checkpoint. With [`Options::history`] above zero, each save also retains a
/// bounded most-recent-first log of snapshots.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    coords: [f64; 2],
    saved: [f64; 2],
    history: VecDeque<[f64; 2]>,
    opts: Options,
    min: Option<[f64; 2]>,
    max: Option<[f64; 2]>,
}

impl Vector2 {
    /// Construct from explicit scalar coordinates.
    ///
    /// A fresh vector is saved immediately, so it is never dirty.
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_coords([x, y], Options::default())
    }

    /// Construct from explicit scalars with tracking options.
    pub fn with_options(x: f64, y: f64, opts: Options) -> Self {
        Self::from_coords([x, y], opts)
    }

    /// Construct from any accepted argument shape.
    ///
    /// Fails with [`VectorError::InvalidLength`] when a sequence does not
    /// have exactly two elements.
    pub fn try_new(arg: impl Into<Arg2>) -> Result<Self> {
        Self::try_with_options(arg, Options::default())
    }

    /// Construct from any accepted argument shape, with tracking options.
    pub fn try_with_options(arg: impl Into<Arg2>, opts: Options) -> Result<Self> {
        Ok(Self::from_coords(parse(arg.into())?, opts))
    }

    fn from_coords(coords: [f64; 2], opts: Options) -> Self {
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

    /// The current coordinate buffer.
    #[inline(always)]
    pub fn coords(&self) -> [f64; 2] {
        self.coords
    }

    /// Replace the coordinates wholesale from any accepted argument shape.
    ///
    /// Does not save: the change stays observable through
    /// [`dirty`](Self::dirty) until the caller checkpoints. On a parse
    /// failure the vector is left untouched.
    pub fn set(&mut self, arg: impl Into<Arg2>) -> Result<()> {
        self.coords = parse(arg.into())?;
        Ok(())
    }

    /// Add to each axis in place.
    pub fn add(&mut self, dx: f64, dy: f64) {
        self.coords[0] += dx;
        self.coords[1] += dy;
    }

    /// Subtract from each axis in place.
    pub fn subtract(&mut self, dx: f64, dy: f64) {
        self.coords[0] -= dx;
        self.coords[1] -= dy;
    }

    /// Move each axis toward the target by linear interpolation.
    ///
    /// `amt` outside `[0, 1]` extrapolates past the endpoints; that is the
    /// caller's responsibility.
    pub fn lerp_to(&mut self, tx: f64, ty: f64, amt: f64) {
        self.coords[0] = scalar::lerp(self.coords[0], tx, amt);
        self.coords[1] = scalar::lerp(self.coords[1], ty, amt);
    }

    /// Checkpoint the current coordinates.
    ///
    /// Copies `coords` into the saved snapshot, clearing the dirty flag.
    /// When [`Options::history`] is above zero, also pushes a copy onto the
    /// front of the history and evicts the oldest entry past the bound.
    pub fn save(&mut self) {
        self.saved = self.coords;
        if self.opts.history > 0 {
            self.history.push_front(self.coords);
            self.history.truncate(self.opts.history);
        }
    }

    /// True iff any axis differs from the last saved snapshot.
    ///
    /// Exact comparison, no epsilon.
    pub fn dirty(&self) -> bool {
        self.coords != self.saved
    }

    /// Past snapshots, most recent first. Empty unless
    /// [`Options::history`] was set above zero.
    pub fn history(&self) -> &VecDeque<[f64; 2]> {
        &self.history
    }

    /// A new, fully independent vector built from the current coordinates.
    ///
    /// The copy starts clean: default options, fresh history, no bounds.
    pub fn copy(&self) -> Self {
        Self::from_coords(self.coords, Options::default())
    }

    /// A new vector with every axis negated.
    pub fn opposite(&self) -> Self {
        Self::from_coords([-self.coords[0], -self.coords[1]], Options::default())
    }

    /// True iff any axis is non-zero.
    pub fn has_value(&self) -> bool {
        self.coords.iter().any(|&c| c != 0.0)
    }

    /// Set the per-axis lower bound used by the clamp family.
    ///
    /// Stores a snapshot of the given values; does not retroactively clamp.
    pub fn set_min(&mut self, x: f64, y: f64) {
        self.min = Some([x, y]);
    }

    /// Set the per-axis upper bound used by the clamp family.
    pub fn set_max(&mut self, x: f64, y: f64) {
        self.max = Some([x, y]);
    }

    /// The stored lower bound, if set.
    pub fn min_bound(&self) -> Option<[f64; 2]> {
        self.min
    }

    /// The stored upper bound, if set.
    pub fn max_bound(&self) -> Option<[f64; 2]> {
        self.max
    }

    fn bounds(&self) -> Result<([f64; 2], [f64; 2])> {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => Ok((lo, hi)),
            _ => Err(VectorError::BoundsNotSet),
        }
    }

    /// Clamp each axis in place to the stored bounds.
    ///
    /// Fails with [`VectorError::BoundsNotSet`] (before mutating anything)
    /// unless both `min` and `max` have been set.
    pub fn clamp(&mut self) -> Result<()> {
        let (lo, hi) = self.bounds()?;
        for i in 0..2 {
            self.coords[i] = scalar::clamp(self.coords[i], lo[i], hi[i]);
        }
        Ok(())
    }

    /// A new vector holding the clamped coordinates, leaving this one
    /// untouched. Same bound requirement as [`clamp`](Self::clamp).
    pub fn limited(&self) -> Result<Self> {
        let (lo, hi) = self.bounds()?;
        let mut out = self.coords;
        for i in 0..2 {
            out[i] = scalar::clamp(out[i], lo[i], hi[i]);
        }
        Ok(Self::from_coords(out, Options::default()))
    }

    /// A new vector interpolated between `a` and `b`.
    ///
    /// `lerp(a, b, 0)` equals `a`, `lerp(a, b, 1)` equals `b`; neither input
    /// is mutated.
    pub fn lerp(a: &Self, b: &Self, amt: f64) -> Self {
        Self::from_coords(
            [
                scalar::lerp(a.coords[0], b.coords[0], amt),
                scalar::lerp(a.coords[1], b.coords[1], amt),
            ],
            Options::default(),
        )
    }
}

impl Default for Vector2 {
    /// The zero vector.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(arr: [f64; 2]) -> Self {
        Self::from_coords(arr, Options::default())
    }
}

/// Equality compares current coordinates only; tracking state, options and
/// bounds are ignored.
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Neg for &Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        self.opposite()
    }
}

impl AddAssign<[f64; 2]> for Vector2 {
    fn add_assign(&mut self, rhs: [f64; 2]) {
        self.add(rhs[0], rhs[1]);
    }
}

impl SubAssign<[f64; 2]> for Vector2 {
    fn sub_assign(&mut self, rhs: [f64; 2]) {
        self.subtract(rhs[0], rhs[1]);
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.coords[0], self.coords[1])
    }
}
