// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

extern crate alloc;

use alloc::vec::Vec;

use infoviz_core::{Mark, MarkId};
use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Brush;

/// Dot markers at a sequence of scene-space points.
///
/// This generates one circular [`infoviz_core::MarkKind::Path`] mark per point, with ids
/// `id_base + index`.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable-id base for marks emitted by this spec.
    pub id_base: u64,
    /// Dot centers in scene coordinates.
    pub points: Vec<Point>,
    /// Dot radius in scene coordinates.
    pub radius: f64,
    /// Fill paint for the dots.
    pub fill: Brush,
    /// Rendering order hint (`infoviz_core::Mark::z_index`).
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point mark spec with a radius of 2 and a default fill (`Brush::default()`).
    pub fn new(id_base: u64, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            id_base,
            points: points.into_iter().collect(),
            radius: 2.0,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the dot radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one mark per point.
    pub fn marks(&self) -> Vec<Mark> {
        self.points
            .iter()
            .zip(0_u64..)
            .map(|(center, i)| {
                Mark::builder(MarkId::from_raw(self.id_base.wrapping_add(i)))
                    .path()
                    .z_index(self.z_index)
                    .geometry(dot_path(*center, self.radius))
                    .fill(self.fill.clone())
                    .stroke_width(0.0)
                    .build()
            })
            .collect()
    }
}

fn dot_path(center: Point, radius: f64) -> BezPath {
    let circle = Circle::new(center, radius);
    // This is used for demo-scale geometry; in real renderers, the tolerance is usually based
    // on the target device/pixel size.
    let tolerance = 0.1;
    circle.path_elements(tolerance).collect()
}
