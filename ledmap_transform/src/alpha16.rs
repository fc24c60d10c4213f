// Copyright 2025 the Ledmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 16-bit fixed-point primitives.
//!
//! All values are [`Alpha16`]: the real interval `[0, 1]` encoded as
//! `[0, 0xFFFF]`. The conventions are:
//!
//! - [`alpha16_mul`] rounds to nearest and never overflows. Multiplying by
//!   [`ALPHA16_ONE`] is exact.
//! - [`alpha16_add`] saturates at `0xFFFF`.
//! - [`Rotation16`] rotates about [`ALPHA16_CENTER`] and clamps the result into
//!   `[0, 0xFFFF]`. Angles are binary angles with `0x10000` units per turn, so
//!   they wrap naturally.

use core::f32::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `cos`, `round`

use crate::PointXY;

/// Fixed-point representation of `[0, 1]` as `[0, 0xFFFF]`.
pub type Alpha16 = u16;

/// `1.0` in [`Alpha16`].
pub const ALPHA16_ONE: Alpha16 = 0xFFFF;

/// Center of the canonical `[0, 0xFFFF]` square, the pivot for [`Rotation16`].
pub const ALPHA16_CENTER: Alpha16 = 0x8000;

/// Number of binary angle units in a full turn.
const UNITS_PER_TURN: f32 = 65536.0;

/// `1.0` in the Q16 format used for rotation coefficients.
const Q16_ONE: f32 = 65536.0;

/// Multiplies two fixed-point values, rounding to nearest.
///
/// `alpha16_mul(x, ALPHA16_ONE) == x` for every `x`.
#[must_use]
#[inline]
#[expect(clippy::cast_possible_truncation, reason = "quotient <= 0xFFFF")]
pub fn alpha16_mul(a: Alpha16, b: Alpha16) -> Alpha16 {
    // 0xFFFF * 0xFFFF + 0x7FFF still fits in a u32.
    let product = u32::from(a) * u32::from(b) + 0x7FFF;
    (product / u32::from(ALPHA16_ONE)) as Alpha16
}

/// Adds two fixed-point values, saturating at `0xFFFF`.
#[must_use]
#[inline]
pub fn alpha16_add(a: Alpha16, b: Alpha16) -> Alpha16 {
    a.saturating_add(b)
}

/// Clamps a widened intermediate back into the [`Alpha16`] range.
#[inline]
fn saturate(v: i64) -> Alpha16 {
    Alpha16::try_from(v.clamp(0, i64::from(ALPHA16_ONE))).unwrap_or(ALPHA16_ONE)
}

/// A rotation by a binary angle, as a pair of Q16 coefficients.
///
/// Building a `Rotation16` is the only place trigonometry is evaluated. The
/// coefficients for angle `0` are exactly `cos = 1.0`, `sin = 0.0`, so
/// applying it leaves every point unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation16 {
    cos: i32,
    sin: i32,
}

impl Rotation16 {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        cos: 1 << 16,
        sin: 0,
    };

    /// Builds the rotation for `angle`, where `0x4000` is a quarter turn.
    #[must_use]
    pub fn from_angle(angle: Alpha16) -> Self {
        let radians = f32::from(angle) * (TAU / UNITS_PER_TURN);
        Self {
            cos: to_q16(radians.cos()),
            sin: to_q16(radians.sin()),
        }
    }

    /// Rotates `xy` counter-clockwise (y up) about [`ALPHA16_CENTER`].
    ///
    /// Products are rounded half-up and the result saturates at the edges of
    /// the canonical square; corners rotated outside it are clamped, not wrapped.
    #[must_use]
    pub fn apply(self, xy: PointXY<Alpha16>) -> PointXY<Alpha16> {
        let center = i64::from(ALPHA16_CENTER);
        let (cos, sin) = (i64::from(self.cos), i64::from(self.sin));
        let dx = i64::from(xy.x) - center;
        let dy = i64::from(xy.y) - center;
        let rx = (dx * cos - dy * sin + 0x8000) >> 16;
        let ry = (dx * sin + dy * cos + 0x8000) >> 16;
        PointXY::new(saturate(rx + center), saturate(ry + center))
    }
}

impl Default for Rotation16 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "|v| <= 1, so the scaled value fits in i32"
)]
fn to_q16(v: f32) -> i32 {
    (v * Q16_ONE).round() as i32
}
