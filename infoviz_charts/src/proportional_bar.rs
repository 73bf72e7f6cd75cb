// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional bar comparison.
//!
//! Two horizontal bars stacked vertically: a full-height primary bar and a half-height,
//! half-opacity secondary bar. Each row has a caption line (label on the left, percentage on
//! the right) above a bar group holding a neutral track and the colored fill along it. Only
//! the secondary bar group is translucent; its captions stay opaque.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use infoviz_core::{Group, Mark, MarkId, RenderedVisual, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::scale::{MAX_DATA_VALUE, ScaleLinear, clamp_percent};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

const CAPTION_FILL: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);
const VALUE_FILL: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
const TRACK_FILL: Color = Color::from_rgb8(0xf1, 0xf5, 0xf9);

const CAPTION_FONT_SIZE: f64 = 10.0;
// Caption row height including the gap above the track.
const CAPTION_ROW: f64 = 18.0;
const ROW_GAP: f64 = 24.0;

const SECONDARY_ID_OFFSET: u64 = 0x10;
const BAR_GROUP_OFFSET: u64 = 5;

#[derive(Clone, Copy, Debug)]
struct BarStyle {
    height: f64,
    opacity: f32,
}

fn bar_rect(id: MarkId, rect: Rect, fill: Color, z_index: i32) -> Mark {
    Mark::builder(id)
        .rect()
        .z_index(z_index)
        .bounds(rect)
        .fill(fill)
        .build()
}

/// A two-bar proportional comparison spec.
#[derive(Clone, Debug)]
pub struct ProportionalBarSpec {
    /// Stable-id base for groups and marks emitted by this spec.
    pub id_base: u64,
    /// Primary percentage.
    pub value: i32,
    /// Secondary percentage.
    pub secondary_value: i32,
    /// Fill color of both bars.
    pub color: Color,
    /// Track width in scene coordinates.
    pub width: f64,
    /// Primary track height. The secondary track is half as tall.
    pub bar_height: f64,
    /// Opacity of the secondary bar (track and fill, not its captions).
    pub secondary_opacity: f32,
    /// Caption above the primary bar.
    pub primary_label: String,
    /// Caption above the secondary bar.
    pub secondary_label: String,
}

impl ProportionalBarSpec {
    /// Creates a bar comparison with the editorial defaults.
    pub fn new(id_base: u64, value: i32, secondary_value: i32, color: Color) -> Self {
        Self {
            id_base,
            value,
            secondary_value,
            color,
            width: 400.0,
            bar_height: 48.0,
            secondary_opacity: 0.5,
            primary_label: String::from("Primary Metric"),
            secondary_label: String::from("Comparison Segment"),
        }
    }

    /// Sets the captions shown above the two bars.
    pub fn with_labels(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.primary_label = primary.into();
        self.secondary_label = secondary.into();
        self
    }

    /// Returns the primary fill as a fraction of the track width.
    pub fn primary_fraction(&self) -> f64 {
        f64::from(clamp_percent(self.value)) / f64::from(MAX_DATA_VALUE)
    }

    /// Returns the secondary fill as a fraction of the track width.
    pub fn secondary_fraction(&self) -> f64 {
        f64::from(clamp_percent(self.secondary_value)) / f64::from(MAX_DATA_VALUE)
    }

    fn row(&self, id_base: u64, top: f64, label: &str, value: i32, bar: BarStyle) -> Group {
        let id = |offset: u64| MarkId::from_raw(id_base.wrapping_add(offset));
        let x = ScaleLinear::percent((0.0, self.width));
        let caption_y = top + CAPTION_FONT_SIZE * 0.5;
        let track = Rect::new(0.0, top + CAPTION_ROW, self.width, top + CAPTION_ROW + bar.height);
        let fill = Rect::new(track.x0, track.y0, x.map(f64::from(value)), track.y1);

        let mut bar_group = Group::new(id(BAR_GROUP_OFFSET), track).with_opacity(bar.opacity);
        bar_group.extend_marks([
            bar_rect(id(3), track, TRACK_FILL, z_order::TRACKS),
            bar_rect(id(4), fill, self.color, z_order::SERIES_FILL),
        ]);

        let mut group = Group::new(id(0), Rect::new(0.0, top, self.width, track.y1));
        group.extend_marks([
            TextMarkSpec::new(id(1), Point::new(0.0, caption_y), label)
                .with_font_size(CAPTION_FONT_SIZE)
                .with_fill(CAPTION_FILL)
                .with_z_index(z_order::LABELS)
                .mark(),
            TextMarkSpec::new(id(2), Point::new(self.width, caption_y), format!("{value}%"))
                .with_font_size(CAPTION_FONT_SIZE)
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Middle)
                .with_fill(VALUE_FILL)
                .with_z_index(z_order::LABELS)
                .mark(),
        ]);
        group.push_group(bar_group);
        group
    }

    /// Generates the visual: a row group per bar, each holding its captions and a nested bar
    /// group. The secondary bar group is translucent.
    pub fn visual(&self) -> RenderedVisual {
        let value = clamp_percent(self.value);
        let secondary = clamp_percent(self.secondary_value);
        log::trace!("bar: primary {value}%, secondary {secondary}%");

        let primary = self.row(
            self.id_base,
            0.0,
            &self.primary_label,
            value,
            BarStyle {
                height: self.bar_height,
                opacity: 1.0,
            },
        );
        let secondary = self.row(
            self.id_base.wrapping_add(SECONDARY_ID_OFFSET),
            primary.frame.y1 + ROW_GAP,
            &self.secondary_label,
            secondary,
            BarStyle {
                height: self.bar_height * 0.5,
                opacity: self.secondary_opacity,
            },
        );

        let mut visual = RenderedVisual::new(primary.frame.union(secondary.frame));
        visual.push_group(primary);
        visual.push_group(secondary);
        visual
    }

    /// Returns the id of the nested group holding the primary track and fill.
    pub fn primary_bar_id(&self) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(BAR_GROUP_OFFSET))
    }

    /// Returns the id of the nested group holding the secondary track and fill.
    pub fn secondary_bar_id(&self) -> MarkId {
        MarkId::from_raw(
            self.id_base
                .wrapping_add(SECONDARY_ID_OFFSET + BAR_GROUP_OFFSET),
        )
    }

    /// Returns the id of the primary fill rectangle.
    pub fn primary_fill_id(&self) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(4))
    }

    /// Returns the id of the secondary fill rectangle.
    pub fn secondary_fill_id(&self) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(SECONDARY_ID_OFFSET + 4))
    }
}
