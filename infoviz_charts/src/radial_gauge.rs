// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial gauge ("pie") visualization.

extern crate alloc;

use alloc::format;

use infoviz_core::{MarkId, RenderedVisual, TextAnchor, TextBaseline};
use kurbo::{Cap, Point, Rect, Vec2};
use peniko::Color;

use crate::ring_mark::RingMarkSpec;
use crate::scale::{MAX_DATA_VALUE, clamp_percent};
use crate::stroke::StrokeStyle;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

const TRACK_FILL: Color = Color::from_rgb8(0xf1, 0xf5, 0xf9);
const LABEL_FILL: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
const CAPTION_FILL: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);

/// A ring gauge showing a percentage as the filled share of a circle.
///
/// The foreground ring starts at 12 o'clock and fills clockwise. Its extent is controlled by a
/// single dash of length `C` (the circumference) offset by `C - (v / 100) * C`.
#[derive(Clone, Debug)]
pub struct RadialGaugeSpec {
    /// Stable-id base for marks emitted by this spec.
    pub id_base: u64,
    /// Percentage shown.
    pub value: i32,
    /// Foreground ring color.
    pub color: Color,
    /// Frame the gauge is centered in.
    pub frame: Rect,
    /// Radius of the ring centerline.
    pub radius: f64,
    /// Ring stroke width.
    pub stroke_width: f64,
    /// Caption under the percentage label.
    pub caption: &'static str,
}

impl RadialGaugeSpec {
    /// Creates a gauge in the normalized `100 x 100` frame.
    pub fn new(id_base: u64, value: i32, color: Color) -> Self {
        Self {
            id_base,
            value,
            color,
            frame: Rect::new(0.0, 0.0, 100.0, 100.0),
            radius: 40.0,
            stroke_width: 12.0,
            caption: "Saturation",
        }
    }

    /// Returns the gauge center.
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Returns the ring circumference `C = 2 * PI * r`.
    pub fn circumference(&self) -> f64 {
        self.ring(0).circumference()
    }

    /// Returns the foreground dash offset for the (clamped) value.
    pub fn dash_offset(&self) -> f64 {
        self.ring(0).dash_offset(self.fraction())
    }

    fn fraction(&self) -> f64 {
        f64::from(clamp_percent(self.value)) / f64::from(MAX_DATA_VALUE)
    }

    fn ring(&self, offset: u64) -> RingMarkSpec {
        RingMarkSpec::new(self.id(offset), self.center(), self.radius)
    }

    /// Returns the id of the foreground ring.
    pub fn foreground_id(&self) -> MarkId {
        self.id(1)
    }

    /// Generates the visual: track ring, foreground ring, label and caption.
    pub fn visual(&self) -> RenderedVisual {
        let value = clamp_percent(self.value);
        log::trace!("pie: {value}% -> dash offset {:.3}", self.dash_offset());

        let center = self.center();
        let mut visual = RenderedVisual::new(self.frame);
        visual.extend_marks([
            self.ring(0)
                .with_stroke(StrokeStyle::solid(TRACK_FILL, self.stroke_width))
                .with_z_index(z_order::TRACKS)
                .mark(),
            self.ring(1)
                .with_stroke(StrokeStyle::solid(self.color, self.stroke_width).with_cap(Cap::Butt))
                .with_visible_fraction(self.fraction())
                .mark(),
            TextMarkSpec::new(self.id(2), center, format!("{value}%"))
                .with_font_size(18.0)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_fill(LABEL_FILL)
                .with_z_index(z_order::TITLES)
                .mark(),
            TextMarkSpec::new(self.id(3), center + Vec2::new(0.0, 14.0), self.caption)
                .with_font_size(4.0)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_fill(CAPTION_FILL)
                .mark(),
        ]);
        visual
    }

    fn id(&self, offset: u64) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(offset))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::TAU;

    use infoviz_core::MarkPayload;

    use super::*;

    const NAVY: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);

    fn foreground_dash(spec: &RadialGaugeSpec) -> (std::vec::Vec<f64>, f64) {
        let v = spec.visual();
        let MarkPayload::Path(p) = &v.mark(spec.foreground_id()).unwrap().payload else {
            panic!("foreground should be a path");
        };
        let dash = p.dash.as_ref().expect("foreground is dashed");
        (dash.pattern.to_vec(), dash.offset)
    }

    #[test]
    fn seventy_four_percent_leaves_a_quarter_gap() {
        let spec = RadialGaugeSpec::new(0, 74, NAVY);
        let c = TAU * 40.0;
        assert!((spec.circumference() - c).abs() < 1e-9);
        let (pattern, offset) = foreground_dash(&spec);
        assert_eq!(pattern, [c, c]);
        assert!((offset - c * 0.26).abs() < 1e-9, "offset {offset}");
    }

    #[test]
    fn extremes_are_empty_and_closed() {
        let c = TAU * 40.0;
        assert!((RadialGaugeSpec::new(0, 0, NAVY).dash_offset() - c).abs() < 1e-9);
        assert_eq!(RadialGaugeSpec::new(0, 100, NAVY).dash_offset(), 0.0);
        // Out-of-range values clamp instead of over- or under-drawing.
        assert_eq!(RadialGaugeSpec::new(0, 130, NAVY).dash_offset(), 0.0);
        assert!((RadialGaugeSpec::new(0, -1, NAVY).dash_offset() - c).abs() < 1e-9);
    }

    #[test]
    fn track_is_a_full_neutral_ring_below_the_foreground() {
        let spec = RadialGaugeSpec::new(0x10, 50, NAVY);
        let v = spec.visual();
        let track = v.mark(MarkId::from_raw(0x10)).unwrap();
        let fg = v.mark(spec.foreground_id()).unwrap();
        assert!(track.z_index < fg.z_index);
        let MarkPayload::Path(t) = &track.payload else {
            panic!("track should be a path");
        };
        assert!(t.dash.is_none());
        assert_eq!(t.stroke_width, 12.0);
        assert_eq!(t.stroke, peniko::Brush::Solid(TRACK_FILL));

        let MarkPayload::Path(f) = &fg.payload else {
            panic!("foreground should be a path");
        };
        assert_eq!(f.stroke, peniko::Brush::Solid(NAVY));
        assert_eq!(f.stroke_cap, Cap::Butt);
    }

    #[test]
    fn label_shows_the_percentage() {
        let v = RadialGaugeSpec::new(0, 74, NAVY).visual();
        let texts: std::vec::Vec<&str> = v
            .marks()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["74%", "Saturation"]);
    }
}
