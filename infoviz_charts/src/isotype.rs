// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Isotype (pictogram grid) visualization.
//!
//! A count is drawn as that many identical markers, banded into groups of ten so larger
//! counts stay scannable. Groups flow left to right and wrap at a maximum width.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use infoviz_core::{Group, Mark, MarkId, RenderedVisual, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::{Brush, Color};
use peniko::color::palette::css;

use crate::marker::{MarkerGlyph, MarkerStyle};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Maximum number of markers an isotype grid will draw.
pub const MAX_MARKERS: usize = 100;
/// Markers per visual band.
pub const GROUP_SIZE: usize = 10;
/// Per-marker entrance delay step.
pub const STAGGER_STEP: Duration = Duration::from_millis(10);

// Marker ids start at `id_base + 0x100`; group ids use `id_base + index`.
const MARKER_ID_OFFSET: u64 = 0x100;

/// An isotype grid spec.
#[derive(Clone, Debug)]
pub struct IsotypeGridSpec {
    /// Stable-id base for groups and markers emitted by this spec.
    pub id_base: u64,
    /// Requested marker count. Clamped to `0..=100` when rendering.
    pub count: i32,
    /// Marker style.
    pub style: MarkerStyle,
    /// Marker color. Applies to geometric markers only.
    pub color: Color,
    /// Side of a marker cell.
    pub cell_size: f64,
    /// Gap between markers inside a group.
    pub marker_gap: f64,
    /// Padding between a group frame and its markers.
    pub group_padding: f64,
    /// Horizontal and vertical gaps between groups.
    pub group_gap: (f64, f64),
    /// Width at which groups wrap onto a new row.
    pub max_width: f64,
    /// Background fill for each group band.
    pub group_background: Brush,
    /// Fill used for pictogram text (emoji fonts usually ignore it).
    pub pictogram_fill: Brush,
}

impl IsotypeGridSpec {
    /// Creates an isotype grid spec with the default editorial layout.
    pub fn new(id_base: u64, count: i32, style: MarkerStyle, color: Color) -> Self {
        Self {
            id_base,
            count,
            style,
            color,
            cell_size: 16.0,
            marker_gap: 6.0,
            group_padding: 8.0,
            group_gap: (6.0, 12.0),
            max_width: 480.0,
            // slate-50 at half strength
            group_background: Brush::Solid(Color::from_rgb8(0xf8, 0xfa, 0xfc).with_alpha(0.5)),
            pictogram_fill: Brush::Solid(css::BLACK),
        }
    }

    /// Returns the number of markers that will actually be drawn.
    pub fn effective_count(&self) -> usize {
        usize::try_from(self.count.max(0))
            .unwrap_or(0)
            .min(MAX_MARKERS)
    }

    /// Returns the marker counts of each group, in order.
    pub fn group_sizes(&self) -> Vec<usize> {
        let n = self.effective_count();
        (0..n.div_ceil(GROUP_SIZE))
            .map(|g| (n - g * GROUP_SIZE).min(GROUP_SIZE))
            .collect()
    }

    fn group_extent(&self, markers: usize) -> (f64, f64) {
        let n = markers as f64;
        let pad = self.group_padding;
        let w = 2.0 * pad + n * self.cell_size + (n - 1.0).max(0.0) * self.marker_gap;
        let h = 2.0 * pad + self.cell_size;
        (w, h)
    }

    /// Lays group frames out left to right, wrapping at `max_width`.
    pub fn group_frames(&self) -> Vec<Rect> {
        let (gap_x, gap_y) = self.group_gap;
        let mut frames = Vec::new();
        let mut x = 0.0;
        let mut y = 0.0;
        let mut row_height: f64 = 0.0;
        for size in self.group_sizes() {
            let (w, h) = self.group_extent(size);
            if x > 0.0 && x + w > self.max_width {
                x = 0.0;
                y += row_height + gap_y;
                row_height = 0.0;
            }
            frames.push(Rect::new(x, y, x + w, y + h));
            x += w + gap_x;
            row_height = row_height.max(h);
        }
        frames
    }

    fn marker_mark(&self, glyph: &MarkerGlyph, index: usize, cell: Rect) -> Mark {
        let id = MarkId::from_raw(self.id_base.wrapping_add(MARKER_ID_OFFSET + index as u64));
        let delay = STAGGER_STEP * u32::try_from(index).unwrap_or(u32::MAX);
        match *glyph {
            MarkerGlyph::Pictogram(symbol) => TextMarkSpec::new(id, cell.center(), symbol)
                .with_font_size(self.cell_size)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_fill(self.pictogram_fill.clone())
                .with_enter_delay(delay)
                .with_z_index(z_order::SERIES_FILL)
                .mark(),
            MarkerGlyph::Geometric { .. } => Mark::builder(id)
                .path()
                .z_index(z_order::SERIES_FILL)
                .enter_delay(delay)
                .geometry(glyph.outline(cell).unwrap_or_default())
                .fill(self.color)
                .build(),
        }
    }

    /// Generates the markers without their group bands, in drawing order.
    pub fn marks(&self) -> Vec<Mark> {
        self.visual().marks().cloned().collect()
    }

    /// Generates the visual: one group per band of ten, each holding its markers.
    pub fn visual(&self) -> RenderedVisual {
        let glyph = self.style.glyph();
        let sizes = self.group_sizes();
        let frames = self.group_frames();
        log::trace!(
            "isotype: {} markers in {} groups ({:?})",
            self.effective_count(),
            sizes.len(),
            self.style
        );

        let view = frames
            .iter()
            .copied()
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO);
        let mut visual = RenderedVisual::new(view);

        let step = self.cell_size + self.marker_gap;
        let mut index = 0;
        for (g, (size, frame)) in sizes.into_iter().zip(frames).enumerate() {
            let mut group = Group::new(
                MarkId::from_raw(self.id_base.wrapping_add(g as u64)),
                frame,
            )
            .with_background(self.group_background.clone());
            for j in 0..size {
                let origin = Point::new(
                    frame.x0 + self.group_padding + j as f64 * step,
                    frame.y0 + self.group_padding,
                );
                let cell = Rect::from_origin_size(origin, (self.cell_size, self.cell_size));
                group.push_mark(self.marker_mark(&glyph, index, cell));
                index += 1;
            }
            visual.push_group(group);
        }

        visual
    }
}
