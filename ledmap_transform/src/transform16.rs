// Copyright 2025 the Ledmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PointXY;
use crate::alpha16::{ALPHA16_ONE, Alpha16, Rotation16, alpha16_add, alpha16_mul};

/// Component transform over the fixed-point square `[0, 0xFFFF]²`.
///
/// A point is rotated (about the square's center), then scaled per axis,
/// then offset per axis. Every field independently defaults to its identity
/// value, and [`transform`](Self::transform) skips any stage whose field is
/// at that value. Skipping the rotation stage avoids trigonometry entirely.
///
/// Fields may be assigned directly; nothing is validated. Inputs outside the
/// square cannot be expressed in [`Alpha16`], and intermediate results
/// saturate at the square's edges (see [`crate::alpha16`]).
///
/// ```rust
/// use ledmap_transform::{FixedPointTransform, PointXY};
///
/// // Place the unit square into the rectangle (1000, 2000)..(3000, 6000).
/// let tx = FixedPointTransform::to_bounds_rect(
///     PointXY::new(1000, 2000),
///     PointXY::new(3000, 6000),
///     0,
/// );
/// assert_eq!(tx.transform(PointXY::new(0, 0)), PointXY::new(1000, 2000));
/// assert_eq!(tx.transform(PointXY::new(0xFFFF, 0xFFFF)), PointXY::new(3000, 6000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedPointTransform {
    /// Horizontal multiplier; `0xFFFF` is `1.0`.
    pub scale_x: Alpha16,
    /// Vertical multiplier; `0xFFFF` is `1.0`.
    pub scale_y: Alpha16,
    /// Horizontal offset added after scaling.
    pub offset_x: Alpha16,
    /// Vertical offset added after scaling.
    pub offset_y: Alpha16,
    /// Binary angle, `0x10000` units per turn.
    pub rotation: Alpha16,
}

impl FixedPointTransform {
    /// The transform that leaves every point unchanged.
    pub const IDENTITY: Self = Self {
        scale_x: ALPHA16_ONE,
        scale_y: ALPHA16_ONE,
        offset_x: 0,
        offset_y: 0,
        rotation: 0,
    };

    /// Maps the canonical square onto `[0, max_value]²`.
    ///
    /// With `max_value == 0xFFFF` this is the identity.
    #[must_use]
    pub fn to_bounds(max_value: Alpha16) -> Self {
        Self::to_bounds_rect(
            PointXY::new(0, 0),
            PointXY::new(max_value, max_value),
            0,
        )
    }

    /// Maps the canonical square onto the rectangle spanned by `min` and `max`.
    ///
    /// Scale comes from `max - min` per axis and offset from `min`. A nonzero
    /// `rotation` is applied before scale and offset. An axis where `max` is
    /// below `min` collapses to `min.x`/`min.y`.
    #[must_use]
    pub fn to_bounds_rect(min: PointXY<Alpha16>, max: PointXY<Alpha16>, rotation: Alpha16) -> Self {
        Self {
            scale_x: max.x.saturating_sub(min.x),
            scale_y: max.y.saturating_sub(min.y),
            offset_x: min.x,
            offset_y: min.y,
            rotation,
        }
    }

    /// Maps the canonical square onto `[0, width] × [0, height]`.
    #[must_use]
    pub fn from_size(width: u16, height: u16) -> Self {
        Self::to_bounds_rect(PointXY::new(0, 0), PointXY::new(width, height), 0)
    }

    /// Returns `true` if every field holds its identity value.
    #[must_use]
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Applies rotation, then scale, then offset, skipping identity stages.
    ///
    /// The output is bit-identical to [`transform_general`](Self::transform_general).
    #[must_use]
    pub fn transform(&self, xy: PointXY<Alpha16>) -> PointXY<Alpha16> {
        let mut out = xy;
        if self.rotation != 0 {
            out = Rotation16::from_angle(self.rotation).apply(out);
        }
        if self.scale_x != ALPHA16_ONE {
            out.x = alpha16_mul(out.x, self.scale_x);
        }
        if self.scale_y != ALPHA16_ONE {
            out.y = alpha16_mul(out.y, self.scale_y);
        }
        if self.offset_x != 0 {
            out.x = alpha16_add(out.x, self.offset_x);
        }
        if self.offset_y != 0 {
            out.y = alpha16_add(out.y, self.offset_y);
        }
        out
    }

    /// Applies every stage unconditionally.
    #[must_use]
    pub fn transform_general(&self, xy: PointXY<Alpha16>) -> PointXY<Alpha16> {
        let rotated = Rotation16::from_angle(self.rotation).apply(xy);
        PointXY::new(
            alpha16_add(alpha16_mul(rotated.x, self.scale_x), self.offset_x),
            alpha16_add(alpha16_mul(rotated.y, self.scale_y), self.offset_y),
        )
    }
}

impl Default for FixedPointTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
