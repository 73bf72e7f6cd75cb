// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trend line visualization.
//!
//! The chart does not plot a real series. It synthesizes a five-point trajectory that ends at
//! the current value (`[20, 45, v - 10, v + 5, v]`) and draws it as a translucent area, a
//! stroked line, and a dot per sample in a 100x100 frame.

extern crate alloc;

use alloc::vec::Vec;

use infoviz_core::{Mark, MarkId, RenderedVisual, TextAnchor};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::area_mark::AreaMarkSpec;
use crate::line_mark::LineMarkSpec;
use crate::point_mark::PointMarkSpec;
use crate::scale::{MAX_DATA_VALUE, ScaleLinear, clamp_percent};
use crate::stroke::StrokeStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Number of synthesized samples.
pub const SAMPLE_COUNT: usize = 5;

const BACKGROUND_FILL: Color = Color::from_rgb8(0xf8, 0xfa, 0xfc);
const CAPTION_FILL: Color = Color::from_rgb8(0xcb, 0xd5, 0xe1);
const CAPTION_FONT_SIZE: f64 = 8.0;
// Area fill alpha (0x15 / 0xff).
const AREA_ALPHA: f32 = 21.0 / 255.0;

/// A synthesized trend line spec.
#[derive(Clone, Debug)]
pub struct TrendLineSpec {
    /// Stable-id base for marks emitted by this spec.
    pub id_base: u64,
    /// Current value the trend ends at.
    pub value: i32,
    /// Line, dot and area color.
    pub color: Color,
    /// Plot frame in scene coordinates.
    pub frame: Rect,
    /// Line stroke width.
    pub stroke_width: f64,
    /// Dot radius.
    pub point_radius: f64,
    /// Whether to draw the start/end captions below the frame.
    pub captions: bool,
}

impl TrendLineSpec {
    /// Creates a trend line in the normalized `100 x 100` frame.
    pub fn new(id_base: u64, value: i32, color: Color) -> Self {
        Self {
            id_base,
            value,
            color,
            frame: Rect::new(0.0, 0.0, 100.0, 100.0),
            stroke_width: 2.0,
            point_radius: 2.0,
            captions: true,
        }
    }

    /// Drops the "T-Minus 12mo" / "Present" captions.
    pub fn without_captions(mut self) -> Self {
        self.captions = false;
        self
    }

    /// Returns the synthesized samples for the (clamped) value.
    ///
    /// Samples are not clamped themselves; `v - 10` and `v + 5` may leave `0..=100`.
    pub fn samples(&self) -> [i32; SAMPLE_COUNT] {
        let v = clamp_percent(self.value);
        [20, 45, v - 10, v + 5, v]
    }

    /// Returns the samples mapped into the frame. Samples outside `0..=100` are pinned to
    /// the frame edge.
    pub fn points(&self) -> Vec<Point> {
        let y = ScaleLinear::percent((self.frame.y1, self.frame.y0));
        let step = self.frame.width() / (SAMPLE_COUNT - 1) as f64;
        self.samples()
            .into_iter()
            .zip(0_u32..)
            .map(|(sample, i)| {
                Point::new(
                    self.frame.x0 + f64::from(i) * step,
                    y.map(f64::from(sample.clamp(0, MAX_DATA_VALUE))),
                )
            })
            .collect()
    }

    fn id(&self, offset: u64) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(offset))
    }

    /// Generates the visual.
    pub fn visual(&self) -> RenderedVisual {
        let points = self.points();
        log::trace!("line: samples {:?}", self.samples());

        let mut view = self.frame;
        let mut visual = RenderedVisual::empty();

        visual.push_mark(
            Mark::builder(self.id(0x30))
                .rect()
                .z_index(z_order::PLOT_BACKGROUND)
                .bounds(self.frame)
                .fill(BACKGROUND_FILL)
                .build(),
        );
        visual.push_mark(
            AreaMarkSpec::new(self.id_base, points.iter().copied(), self.frame.y1)
                .with_fill(self.color.with_alpha(AREA_ALPHA))
                .mark(),
        );
        visual.push_mark(
            LineMarkSpec::new(self.id(2), points.iter().copied())
                .with_stroke(StrokeStyle::solid(self.color, self.stroke_width))
                .mark(),
        );
        visual.extend_marks(
            PointMarkSpec::new(self.id_base.wrapping_add(0x10), points)
                .with_radius(self.point_radius)
                .with_fill(self.color)
                .marks(),
        );

        if self.captions {
            let y = self.frame.y1 + CAPTION_FONT_SIZE;
            visual.extend_marks([
                TextMarkSpec::new(self.id(0x20), Point::new(self.frame.x0, y), "T-Minus 12mo")
                    .with_font_size(CAPTION_FONT_SIZE)
                    .with_fill(CAPTION_FILL)
                    .mark(),
                TextMarkSpec::new(self.id(0x21), Point::new(self.frame.x1, y), "Present")
                    .with_font_size(CAPTION_FONT_SIZE)
                    .with_anchor(TextAnchor::End)
                    .with_fill(CAPTION_FILL)
                    .mark(),
            ]);
            view.y1 = y + CAPTION_FONT_SIZE * 0.5;
        }

        visual.view = view;
        visual
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use infoviz_core::{MarkKind, MarkPayload};
    use kurbo::PathEl;

    use super::*;

    const EMERALD: Color = Color::from_rgb8(0x06, 0x5f, 0x46);

    #[test]
    fn samples_start_fixed_and_end_at_the_value() {
        assert_eq!(TrendLineSpec::new(0, 74, EMERALD).samples(), [20, 45, 64, 79, 74]);
        assert_eq!(TrendLineSpec::new(0, 5, EMERALD).samples(), [20, 45, -5, 10, 5]);
        assert_eq!(TrendLineSpec::new(0, 180, EMERALD).samples(), [20, 45, 90, 105, 100]);
    }

    #[test]
    fn points_spread_uniformly_and_invert_y() {
        let pts = TrendLineSpec::new(0, 50, EMERALD).points();
        let xs: std::vec::Vec<f64> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, [0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(pts[0].y, 80.0);
        assert_eq!(pts[1].y, 55.0);
        assert_eq!(pts[4].y, 50.0);
    }

    #[test]
    fn out_of_frame_samples_are_pinned_to_the_edges() {
        let low = TrendLineSpec::new(0, 3, EMERALD).points();
        assert_eq!(low[2].y, 100.0);
        let high = TrendLineSpec::new(0, 99, EMERALD).points();
        assert_eq!(high[3].y, 0.0);
    }

    #[test]
    fn emits_area_line_and_one_dot_per_sample() {
        let v = TrendLineSpec::new(0, 74, EMERALD).without_captions().visual();
        let area = v.mark(MarkId::from_raw(0)).unwrap();
        let MarkPayload::Path(area) = &area.payload else {
            panic!("area should be a path");
        };
        assert_eq!(area.fill, peniko::Brush::Solid(EMERALD.with_alpha(AREA_ALPHA)));
        assert!(matches!(area.path.elements().last(), Some(PathEl::ClosePath)));

        let MarkPayload::Path(line) = &v.mark(MarkId::from_raw(2)).unwrap().payload else {
            panic!("line should be a path");
        };
        assert_eq!(line.stroke_width, 2.0);
        assert_eq!(line.path.elements().len(), SAMPLE_COUNT);

        let dots = (0..SAMPLE_COUNT as u64)
            .filter_map(|i| v.mark(MarkId::from_raw(0x10 + i)))
            .count();
        assert_eq!(dots, SAMPLE_COUNT);
        assert!(v.marks().all(|m| m.kind() != MarkKind::Text));
        assert_eq!(v.view, Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn background_covers_the_frame_beneath_everything() {
        let v = TrendLineSpec::new(0, 74, EMERALD).visual();
        let bg = v.mark(MarkId::from_raw(0x30)).unwrap();
        let MarkPayload::Rect(r) = &bg.payload else {
            panic!("background should be a rect");
        };
        assert_eq!(r.rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(r.fill, peniko::Brush::Solid(BACKGROUND_FILL));
        assert!(v.marks().filter(|m| m.id != bg.id).all(|m| m.z_index > bg.z_index));
    }

    #[test]
    fn captions_sit_below_the_frame() {
        let v = TrendLineSpec::new(0, 40, EMERALD).visual();
        let labels: std::vec::Vec<&str> = v
            .marks()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["T-Minus 12mo", "Present"]);
        assert!(v.view.y1 > 100.0);
    }
}
