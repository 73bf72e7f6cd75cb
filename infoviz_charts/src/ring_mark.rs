// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring (stroked circle) mark generation.
//!
//! Gauges are drawn the way SVG progress rings usually are: a full circle stroked with a
//! single dash as long as the circumference, shifted by a dash offset so that only the
//! requested fraction is visible.

use core::f64::consts::TAU;

use infoviz_core::{Mark, MarkId, StrokeDash};
use kurbo::{Arc, BezPath, Point, Shape, Vec2};
use peniko::Color;

use crate::stroke::StrokeStyle;

/// A stroked ring, optionally showing only a leading fraction of its circumference.
///
/// Angles are in radians in scene space (y down), so a positive sweep runs clockwise on
/// screen. `-PI/2` is 12 o'clock.
#[derive(Clone, Debug)]
pub struct RingMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius of the stroke centerline.
    pub radius: f64,
    /// Angle at which the ring path (and therefore the visible arc) starts.
    pub start_angle: f64,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Visible fraction of the circumference in `[0, 1]`, or `None` for an undashed ring.
    pub visible_fraction: Option<f64>,
    /// Curve flattening tolerance when converting the circle to a `BezPath`.
    pub tolerance: f64,
    /// Rendering order hint (`infoviz_core::Mark::z_index`).
    pub z_index: i32,
}

impl RingMarkSpec {
    /// Creates a full ring starting at 12 o'clock.
    pub fn new(id: MarkId, center: Point, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            start_angle: -core::f64::consts::FRAC_PI_2,
            stroke: StrokeStyle::default(),
            visible_fraction: None,
            tolerance: 0.1,
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Shows only the leading `fraction` of the ring (clamped to `[0, 1]`).
    pub fn with_visible_fraction(mut self, fraction: f64) -> Self {
        self.visible_fraction = Some(fraction.clamp(0.0, 1.0));
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the ring circumference.
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Returns the dash offset that leaves exactly `fraction` of the ring drawn.
    pub fn dash_offset(&self, fraction: f64) -> f64 {
        let c = self.circumference();
        c - fraction * c
    }

    /// Returns the ring path: one clockwise turn starting at `start_angle`.
    pub fn path(&self) -> BezPath {
        let arc = Arc::new(
            self.center,
            Vec2::new(self.radius, self.radius),
            self.start_angle,
            TAU,
            0.0,
        );
        arc.path_elements(self.tolerance).collect()
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut builder = Mark::builder(self.id)
            .path()
            .z_index(self.z_index)
            .geometry(self.path())
            .fill(Color::TRANSPARENT)
            .stroke(self.stroke.brush.clone())
            .stroke_width(self.stroke.stroke_width)
            .stroke_cap(self.stroke.cap);

        if let Some(fraction) = self.visible_fraction {
            let c = self.circumference();
            builder = builder.dash(StrokeDash::new([c, c], self.dash_offset(fraction)));
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use infoviz_core::MarkPayload;
    use kurbo::PathEl;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn ring_starts_at_twelve_and_runs_clockwise() {
        let ring = RingMarkSpec::new(MarkId::from_raw(1), Point::new(50.0, 50.0), 40.0);
        let path = ring.path();
        let els = path.elements();
        let PathEl::MoveTo(start) = els[0] else {
            panic!("expected a leading move-to");
        };
        assert!((start.x - 50.0).abs() < 1e-9, "start {start:?}");
        assert!((start.y - 10.0).abs() < 1e-9, "start {start:?}");

        let next = els[1..]
            .iter()
            .find_map(|el| match el {
                PathEl::CurveTo(_, _, p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) => Some(*p),
                _ => None,
            })
            .unwrap();
        assert!(next.x > 50.0, "first segment heads right (clockwise): {next:?}");
    }

    #[test]
    fn visible_fraction_becomes_a_dash_offset() {
        let ring = RingMarkSpec::new(MarkId::from_raw(1), Point::new(0.0, 0.0), 10.0)
            .with_stroke(StrokeStyle::solid(css::NAVY, 4.0))
            .with_visible_fraction(0.25);
        let c = TAU * 10.0;
        let MarkPayload::Path(p) = ring.mark().payload else {
            panic!("expected path payload");
        };
        let dash = p.dash.expect("fractional ring is dashed");
        assert_eq!(dash.pattern.as_slice(), &[c, c]);
        assert!((dash.offset - 0.75 * c).abs() < 1e-9);
        assert_eq!(p.stroke_width, 4.0);
    }

    #[test]
    fn full_ring_has_no_dash() {
        let ring = RingMarkSpec::new(MarkId::from_raw(1), Point::new(0.0, 0.0), 10.0);
        let MarkPayload::Path(p) = ring.mark().payload else {
            panic!("expected path payload");
        };
        assert!(p.dash.is_none());
        assert!(p.path.bounding_box().width() > 19.0);
    }
}
