// Copyright 2025 the Ledmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;
use core::f32::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `cos`
use kurbo::Affine;

use crate::PointXY;

/// Component transform over normalized `[0, 1]` coordinates.
///
/// A point is rotated about the origin, then scaled per axis, then offset per
/// axis. `rotation` is a fraction of a full turn (`0.25` is a quarter turn),
/// not radians.
///
/// This is a plain value. To share one mutable state between several owners,
/// wrap it in a [`FloatTransform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatTransformState {
    /// Horizontal multiplier.
    pub scale_x: f32,
    /// Vertical multiplier.
    pub scale_y: f32,
    /// Horizontal offset added after scaling.
    pub offset_x: f32,
    /// Vertical offset added after scaling.
    pub offset_y: f32,
    /// Rotation as a fraction of a full turn.
    pub rotation: f32,
}

impl FloatTransformState {
    /// The state that leaves every point unchanged.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        rotation: 0.0,
    };

    /// Returns [`Self::IDENTITY`].
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the smaller of the two axis scales.
    ///
    /// A single uniform scale of this value never overshoots the more
    /// constrained axis.
    #[must_use]
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale_x.min(self.scale_y)
    }

    /// Sets both axis scales to `scale`.
    #[inline]
    pub fn set_scale(&mut self, scale: f32) {
        self.scale_x = scale;
        self.scale_y = scale;
    }

    /// Returns `true` if every field holds exactly its identity value.
    ///
    /// There is no tolerance: a field that drifted away from its default
    /// through arithmetic makes this `false`.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.offset_x == 0.0
            && self.offset_y == 0.0
            && self.rotation == 0.0
    }

    /// Applies rotation, then scale, then offset, skipping identity stages.
    #[must_use]
    pub fn transform(&self, xy: PointXY<f32>) -> PointXY<f32> {
        let mut out = xy;
        if self.rotation != 0.0 {
            out = rotate_turns(out, self.rotation);
        }
        if self.scale_x != 1.0 {
            out.x *= self.scale_x;
        }
        if self.scale_y != 1.0 {
            out.y *= self.scale_y;
        }
        if self.offset_x != 0.0 {
            out.x += self.offset_x;
        }
        if self.offset_y != 0.0 {
            out.y += self.offset_y;
        }
        out
    }

    /// Applies every stage unconditionally.
    #[must_use]
    pub fn transform_general(&self, xy: PointXY<f32>) -> PointXY<f32> {
        let rotated = rotate_turns(xy, self.rotation);
        PointXY::new(
            rotated.x * self.scale_x + self.offset_x,
            rotated.y * self.scale_y + self.offset_y,
        )
    }

    /// Returns the equivalent [`Affine`], computed in `f64`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate((f64::from(self.offset_x), f64::from(self.offset_y)))
            * Affine::scale_non_uniform(f64::from(self.scale_x), f64::from(self.scale_y))
            * Affine::rotate(f64::from(self.rotation) * core::f64::consts::TAU)
    }
}

impl Default for FloatTransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn rotate_turns(xy: PointXY<f32>, turns: f32) -> PointXY<f32> {
    let radians = turns * TAU;
    let (sin, cos) = (radians.sin(), radians.cos());
    PointXY::new(xy.x * cos - xy.y * sin, xy.x * sin + xy.y * cos)
}

/// A shared handle to a [`FloatTransformState`].
///
/// Cloning a `FloatTransform` does **not** copy the state: both handles refer
/// to the same state, and a setter called through either one is visible
/// through the other. [`share`](Self::share) is the explicit spelling of that
/// clone. Use [`detached`](Self::detached) to get a handle with its own copy.
///
/// A newly created handle always owns a fresh identity state.
///
/// The handle is reference counted without synchronization, so it is neither
/// `Send` nor `Sync`.
///
/// ```rust
/// use ledmap_transform::{FloatTransform, PointXY};
///
/// let a = FloatTransform::new();
/// let b = a.share();
/// b.set_rotation(0.25);
/// assert_eq!(a.rotation(), 0.25);
///
/// let c = FloatTransform::new();
/// assert!(c.is_identity());
///
/// let d = a.detached();
/// d.set_scale(0.5);
/// assert_eq!(a.scale(), 1.0);
/// assert_eq!(d.transform(PointXY::new(0.0, 0.0)), PointXY::new(0.0, 0.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FloatTransform {
    state: Rc<Cell<FloatTransformState>>,
}

impl FloatTransform {
    /// Creates a handle to a new identity state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle to a new state initialized from `state`.
    #[must_use]
    pub fn from_state(state: FloatTransformState) -> Self {
        Self {
            state: Rc::new(Cell::new(state)),
        }
    }

    /// Returns another handle to the same state.
    #[must_use]
    #[inline]
    pub fn share(&self) -> Self {
        self.clone()
    }

    /// Returns a handle to a new state holding a copy of this one.
    ///
    /// `self` keeps referring to its original state.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self::from_state(self.state())
    }

    /// Returns `true` if `self` and `other` refer to the same state.
    #[must_use]
    #[inline]
    pub fn shares_state_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Number of handles referring to this state, including `self`.
    #[must_use]
    #[inline]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.state)
    }

    /// Returns a copy of the current state.
    #[must_use]
    #[inline]
    pub fn state(&self) -> FloatTransformState {
        self.state.get()
    }

    /// Replaces the shared state; visible through every aliasing handle.
    #[inline]
    pub fn set_state(&self, state: FloatTransformState) {
        self.state.set(state);
    }

    fn update(&self, f: impl FnOnce(&mut FloatTransformState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
    }

    /// Horizontal scale.
    #[must_use]
    pub fn scale_x(&self) -> f32 {
        self.state().scale_x
    }

    /// Vertical scale.
    #[must_use]
    pub fn scale_y(&self) -> f32 {
        self.state().scale_y
    }

    /// Horizontal offset.
    #[must_use]
    pub fn offset_x(&self) -> f32 {
        self.state().offset_x
    }

    /// Vertical offset.
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.state().offset_y
    }

    /// Rotation as a fraction of a full turn.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.state().rotation
    }

    /// See [`FloatTransformState::scale`].
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.state().scale()
    }

    /// Sets both axis scales.
    pub fn set_scale(&self, scale: f32) {
        self.update(|s| s.set_scale(scale));
    }

    /// Sets the horizontal scale.
    pub fn set_scale_x(&self, scale: f32) {
        self.update(|s| s.scale_x = scale);
    }

    /// Sets the vertical scale.
    pub fn set_scale_y(&self, scale: f32) {
        self.update(|s| s.scale_y = scale);
    }

    /// Sets the horizontal offset.
    pub fn set_offset_x(&self, offset: f32) {
        self.update(|s| s.offset_x = offset);
    }

    /// Sets the vertical offset.
    pub fn set_offset_y(&self, offset: f32) {
        self.update(|s| s.offset_y = offset);
    }

    /// Sets the rotation as a fraction of a full turn.
    pub fn set_rotation(&self, rotation: f32) {
        self.update(|s| s.rotation = rotation);
    }

    /// See [`FloatTransformState::transform`].
    #[must_use]
    pub fn transform(&self, xy: PointXY<f32>) -> PointXY<f32> {
        self.state().transform(xy)
    }

    /// See [`FloatTransformState::is_identity`].
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.state().is_identity()
    }

    /// See [`FloatTransformState::to_affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.state().to_affine()
    }

    /// Snapshot of the shared state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> FloatTransformDebugInfo {
        let state = self.state();
        FloatTransformDebugInfo {
            state,
            handle_count: self.handle_count(),
            is_identity: state.is_identity(),
        }
    }
}

impl From<FloatTransformState> for FloatTransform {
    fn from(state: FloatTransformState) -> Self {
        Self::from_state(state)
    }
}

/// Debug snapshot of a [`FloatTransform`].
#[derive(Clone, Copy, Debug)]
pub struct FloatTransformDebugInfo {
    /// The shared state at the time of the snapshot.
    pub state: FloatTransformState,
    /// Number of handles aliasing the state.
    pub handle_count: usize,
    /// Whether the state was exactly the identity.
    pub is_identity: bool,
}
