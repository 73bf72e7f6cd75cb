// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editorial infographic visualizations for `infoviz_core`.
//!
//! This crate turns a handful of typed parameters (chart kind, a percentage, a secondary
//! percentage, a color, a marker style) into a [`infoviz_core::RenderedVisual`]:
//! - **Isotype grids** draw a count as banded pictograms or geometric markers.
//! - **Proportional bars** compare a primary and a secondary share.
//! - **Trend lines** show a synthesized trajectory ending at the value.
//! - **Radial gauges** fill a ring clockwise from 12 o'clock.
//!
//! [`render`] dispatches on [`ChartKind`]. Rendering is pure and synchronous; [`RenderCache`]
//! memoizes it for hosts that re-render on every edit.
//!
//! The building blocks underneath (rect/text/line/area/point/ring mark specs and a linear
//! scale) are public so hosts can compose their own layouts from the same pieces.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod area_mark;
mod cache;
mod isotype;
mod line_mark;
mod marker;
mod palette;
mod point_mark;
mod proportional_bar;
mod radial_gauge;
mod ring_mark;
mod scale;
mod stroke;
mod text_mark;
mod trend_line;
mod visualization;
mod z_order;

pub use area_mark::AreaMarkSpec;
pub use cache::RenderCache;
pub use isotype::{GROUP_SIZE, IsotypeGridSpec, MAX_MARKERS, STAGGER_STEP};
pub use line_mark::LineMarkSpec;
pub use marker::{CornerRadius, MarkerGlyph, MarkerStyle, resolve_marker};
pub use palette::{ColorTokenError, ThemeColor, parse_color_token};
pub use point_mark::PointMarkSpec;
pub use proportional_bar::ProportionalBarSpec;
pub use radial_gauge::RadialGaugeSpec;
pub use ring_mark::RingMarkSpec;
pub use scale::{MAX_DATA_VALUE, PERCENT_DOMAIN, ScaleLinear, clamp_percent};
pub use stroke::StrokeStyle;
pub use text_mark::TextMarkSpec;
pub use trend_line::{SAMPLE_COUNT, TrendLineSpec};
pub use visualization::{ChartKind, VisualizationSpec, render};
pub use z_order::*;
