// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use infoviz_core::{Mark, MarkId};
use kurbo::{BezPath, Point};
use peniko::Color;

use crate::stroke::StrokeStyle;

/// A polyline through a sequence of scene-space points.
///
/// This generates a single [`infoviz_core::MarkKind::Path`] mark.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable id for the mark emitted by this spec.
    pub id: MarkId,
    /// Vertices in scene coordinates, in drawing order.
    pub points: Vec<Point>,
    /// Stroke style for the line.
    pub stroke: StrokeStyle,
    /// Rendering order hint (`infoviz_core::Mark::z_index`).
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line mark spec with a black stroke at width 1.
    pub fn new(id: MarkId, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            id,
            points: points.into_iter().collect(),
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Returns the polyline path.
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, pt) in self.points.iter().copied().enumerate() {
            if i == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .path()
            .z_index(self.z_index)
            .geometry(self.path())
            .fill(Color::TRANSPARENT)
            .stroke(self.stroke.brush.clone())
            .stroke_width(self.stroke.stroke_width)
            .stroke_cap(self.stroke.cap)
            .build()
    }
}
