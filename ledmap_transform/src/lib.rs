// Copyright 2025 the Ledmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ledmap Transform: component transforms for remapping LED layout coordinates.
//!
//! Logical pixel positions on an LED layout are usually normalized, either as
//! 16-bit fixed point or as `f32` in `[0, 1]`. This crate maps such positions
//! onto a target addressing space, for example to fit a logical panel into a
//! physical bounding rectangle, or to rotate or scale a coordinate grid.
//!
//! Two independent representations share the same pipeline (rotate, then
//! scale, then offset):
//! - [`FixedPointTransform`] works on [`Alpha16`] values (`[0, 0xFFFF]`) with
//!   integer arithmetic. Its conventions are documented in [`alpha16`].
//! - [`FloatTransformState`] works on `f32` values, and [`FloatTransform`] is
//!   a cheaply clonable shared handle to one.
//!
//! Transforms are stored as components rather than a matrix so that stages
//! whose parameters are at their identity value can be skipped. In
//! particular, a zero rotation never evaluates trigonometry. The skipped and
//! unskipped pipelines produce the same output; both are exposed as
//! `transform` and `transform_general`.
//!
//! ## Fitting a panel into a rectangle
//!
//! ```rust
//! use ledmap_transform::{FixedPointTransform, PointXY};
//!
//! let tx = FixedPointTransform::from_size(320, 240);
//! assert_eq!(tx.transform(PointXY::new(0xFFFF, 0xFFFF)), PointXY::new(320, 240));
//! assert_eq!(tx.transform(PointXY::new(0, 0)), PointXY::new(0, 0));
//! ```
//!
//! ## Shared float transforms
//!
//! ```rust
//! use ledmap_transform::{FloatTransform, PointXY};
//!
//! let tx = FloatTransform::new();
//! tx.set_scale_x(0.5);
//! tx.set_offset_y(0.25);
//!
//! // Clones alias the same state.
//! let view = tx.share();
//! assert_eq!(view.transform(PointXY::new(1.0, 0.5)), PointXY::new(0.5, 0.75));
//! ```
//!
//! Nothing here clips, interpolates, or validates coordinates; out-of-range
//! inputs are transformed, not rejected.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod alpha16;
mod point;
mod transform16;
mod transform_float;

pub use alpha16::{ALPHA16_ONE, Alpha16};
pub use point::PointXY;
pub use transform16::FixedPointTransform;
pub use transform_float::{FloatTransform, FloatTransformDebugInfo, FloatTransformState};
