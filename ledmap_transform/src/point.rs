// Copyright 2025 the Ledmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An `(x, y)` pair of coordinate components.
///
/// `PointXY` is a plain value type with no behavior of its own. The transforms
/// in this crate use it with [`Alpha16`](crate::Alpha16) components (fixed
/// point, `[0, 0xFFFF]`) and with `f32` components (normalized `[0, 1]`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointXY<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T> PointXY<T> {
    /// Creates a point from its components.
    #[must_use]
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for PointXY<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<PointXY<T>> for (T, T) {
    #[inline]
    fn from(p: PointXY<T>) -> Self {
        (p.x, p.y)
    }
}

impl From<PointXY<f32>> for kurbo::Point {
    #[inline]
    fn from(p: PointXY<f32>) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<kurbo::Point> for PointXY<f32> {
    /// Narrows to `f32`; values outside the `f32` range become infinite.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "coordinates are normalized, f32 precision is the working precision"
    )]
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}
