// Copyright 2025 the Ledmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `ledmap_transform` crate.
//!
//! These exercise the public API as a coordinate-remapping caller would, with
//! a focus on identity behavior, bounds fitting, and how shared float
//! transforms alias each other.

use ledmap_transform::{FixedPointTransform, FloatTransform, FloatTransformState, PointXY};

#[test]
fn default_transforms_are_identity() {
    let fixed = FixedPointTransform::default();
    for (x, y) in [(0_u16, 0_u16), (0xFFFF, 0), (0x4321, 0x8765), (0xFFFF, 0xFFFF)] {
        let p = PointXY::new(x, y);
        assert_eq!(fixed.transform(p), p);
    }

    let float = FloatTransform::default();
    assert!(float.is_identity());
    for (x, y) in [(0.0_f32, 0.0_f32), (1.0, 1.0), (0.33, 0.66)] {
        let p = PointXY::new(x, y);
        assert_eq!(float.transform(p), p);
    }
}

#[test]
fn to_bounds_maps_corners_onto_rectangle() {
    let full = FixedPointTransform::to_bounds_rect(
        PointXY::new(0, 0),
        PointXY::new(0xFFFF, 0xFFFF),
        0,
    );
    assert_eq!(full.transform(PointXY::new(0, 0)), PointXY::new(0, 0));
    assert_eq!(
        full.transform(PointXY::new(0xFFFF, 0xFFFF)),
        PointXY::new(0xFFFF, 0xFFFF)
    );

    let (min, max) = (PointXY::new(12, 3400), PointXY::new(40_000, 51_234));
    let tx = FixedPointTransform::to_bounds_rect(min, max, 0);
    assert_eq!(tx.transform(PointXY::new(0, 0)), min);
    assert_eq!(tx.transform(PointXY::new(0xFFFF, 0xFFFF)), max);
}

#[test]
fn fast_path_never_diverges_from_general_pipeline() {
    let mut seed = 0x2545_F491_u32;
    let mut next = move || {
        // xorshift32
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let [hi, lo, _, _] = seed.to_be_bytes();
        u16::from_be_bytes([hi, lo])
    };
    let pick = |raw: u16, identity: u16| if raw & 1 == 0 { identity } else { raw };

    for _ in 0..2000 {
        let tx = FixedPointTransform {
            scale_x: pick(next(), 0xFFFF),
            scale_y: pick(next(), 0xFFFF),
            offset_x: pick(next(), 0),
            offset_y: pick(next(), 0),
            rotation: pick(next(), 0),
        };
        let p = PointXY::new(next(), next());
        assert_eq!(tx.transform(p), tx.transform_general(p), "{tx:?} at {p:?}");
    }
}

#[test]
fn uniform_scale_and_minimum() {
    let tx = FloatTransform::new();
    tx.set_scale(0.5);
    assert_eq!(tx.scale_x(), 0.5);
    assert_eq!(tx.scale_y(), 0.5);
    assert_eq!(tx.scale(), 0.5);

    tx.set_scale_x(0.2);
    tx.set_scale_y(0.8);
    assert_eq!(tx.scale(), 0.2);
}

#[test]
fn copies_alias_fresh_handles_do_not() {
    let a = FloatTransform::new();
    let b = a.clone();
    b.set_rotation(0.25);
    assert_eq!(a.rotation(), 0.25);

    let c = FloatTransform::new();
    assert!(c.is_identity());
    assert_eq!(c.rotation(), 0.0);
}

#[test]
fn identity_check_has_no_tolerance() {
    let tx = FloatTransform::new();
    tx.set_offset_x(0.5);
    tx.set_scale(3.0);
    assert!(!tx.is_identity());
    tx.set_offset_x(0.0);
    tx.set_scale(1.0);
    assert!(tx.is_identity());

    // Undoing a nudge by subtraction leaves one epsilon behind.
    tx.set_offset_y(0.5 + f32::EPSILON);
    tx.set_offset_y(tx.offset_y() - 0.5);
    assert_eq!(tx.offset_y(), f32::EPSILON);
    assert!(!tx.is_identity());
}

#[test]
fn state_snapshot_round_trips_through_handle() {
    let state = FloatTransformState {
        scale_x: 0.5,
        scale_y: 0.5,
        offset_x: 0.25,
        offset_y: 0.25,
        rotation: 0.0,
    };
    let tx = FloatTransform::from(state);
    assert_eq!(tx.state(), state);
    assert_eq!(tx.transform(PointXY::new(1.0, 0.0)), PointXY::new(0.75, 0.25));

    let alias = tx.share();
    alias.set_state(FloatTransformState::identity());
    assert!(tx.is_identity());
}
