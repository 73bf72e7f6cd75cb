// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark generation.

extern crate alloc;

use alloc::vec::Vec;

use infoviz_core::{Mark, MarkId};
use kurbo::{BezPath, Point};
use peniko::Brush;

/// An area between a polyline and a horizontal baseline, drawn as one unstroked
/// [`infoviz_core::MarkKind::Path`] mark. Pair it with a line mark for the upper edge.
#[derive(Clone, Debug)]
pub struct AreaMarkSpec {
    /// Stable-id base for marks emitted by this spec.
    pub id_base: u64,
    /// Upper edge vertices in scene coordinates, ordered by x.
    pub points: Vec<Point>,
    /// Baseline y in scene coordinates.
    pub baseline: f64,
    /// Fill paint for the area.
    pub fill: Brush,
}

impl AreaMarkSpec {
    /// Creates an area mark with a default fill (`Brush::default()`).
    pub fn new(id_base: u64, points: impl IntoIterator<Item = Point>, baseline: f64) -> Self {
        Self {
            id_base,
            points: points.into_iter().collect(),
            baseline,
            fill: Brush::default(),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Returns the closed area path: baseline, up through every vertex, back to the baseline.
    pub fn area_path(&self) -> BezPath {
        let mut p = BezPath::new();
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return p;
        };
        p.move_to((first.x, self.baseline));
        for pt in &self.points {
            p.line_to(*pt);
        }
        p.line_to((last.x, self.baseline));
        p.close_path();
        p
    }

    /// Generates the area mark, painted in the series fill layer.
    pub fn mark(&self) -> Mark {
        Mark::builder(MarkId::from_raw(self.id_base))
            .path()
            .z_index(crate::z_order::SERIES_FILL)
            .geometry(self.area_path())
            .fill(self.fill.clone())
            .stroke_width(0.0)
            .build()
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
    fn area_closes_back_to_the_baseline() {
        let spec = AreaMarkSpec::new(
            5,
            [Point::new(0.0, 80.0), Point::new(50.0, 40.0)],
            100.0,
        )
        .with_fill(css::TOMATO);
        let els = spec.area_path();
        assert_eq!(
            els.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 100.0)),
                PathEl::LineTo(Point::new(0.0, 80.0)),
                PathEl::LineTo(Point::new(50.0, 40.0)),
                PathEl::LineTo(Point::new(50.0, 100.0)),
                PathEl::ClosePath,
            ]
        );
        assert_eq!(spec.mark().id, MarkId::from_raw(5));
    }

    #[test]
    fn area_is_a_single_unstroked_fill() {
        let mark = AreaMarkSpec::new(5, [Point::new(0.0, 1.0), Point::new(1.0, 0.0)], 1.0)
            .with_fill(css::TOMATO)
            .mark();
        assert_eq!(mark.z_index, crate::z_order::SERIES_FILL);
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.stroke_width, 0.0);
        assert_eq!(p.fill, Brush::Solid(css::TOMATO));
    }

    #[test]
    fn empty_points_produce_an_empty_area() {
        let spec = AreaMarkSpec::new(1, Vec::<Point>::new(), 10.0);
        assert!(spec.area_path().elements().is_empty());
    }
}
