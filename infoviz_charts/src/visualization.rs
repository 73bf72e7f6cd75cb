// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visualization dispatch.
//!
//! [`render`] is the single entry point hosts call on every configuration change. It picks
//! exactly one renderer for the chart kind and forwards the parameters unchanged.

use infoviz_core::RenderedVisual;
use peniko::Color;

use crate::isotype::IsotypeGridSpec;
use crate::marker::MarkerStyle;
use crate::palette::ThemeColor;
use crate::proportional_bar::ProportionalBarSpec;
use crate::radial_gauge::RadialGaugeSpec;
use crate::trend_line::TrendLineSpec;

const ISOTYPE_ID_BASE: u64 = 0x1000;
const BAR_ID_BASE: u64 = 0x2000;
const LINE_ID_BASE: u64 = 0x3000;
const PIE_ID_BASE: u64 = 0x4000;

/// The kind of chart to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Grouped pictogram grid.
    #[default]
    Isotype,
    /// Primary/secondary horizontal bars.
    Bar,
    /// Synthesized trend line.
    Line,
    /// Radial gauge.
    Pie,
    /// A kind name this version does not know. Renders nothing.
    Unrecognized,
}

impl ChartKind {
    /// Every renderable kind.
    pub const ALL: [Self; 4] = [Self::Isotype, Self::Bar, Self::Line, Self::Pie];

    /// Parses a kind from its configuration name (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Unrecognized)
    }

    /// Returns the configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Isotype => "isotype",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Renders one visualization.
///
/// `secondary_value` is only used by [`ChartKind::Bar`]; `marker_style` only by
/// [`ChartKind::Isotype`]. Unrecognized kinds yield an empty visual.
pub fn render(
    kind: ChartKind,
    value: i32,
    secondary_value: i32,
    color: Color,
    marker_style: MarkerStyle,
) -> RenderedVisual {
    log::trace!("render {kind:?} value={value} secondary={secondary_value}");
    match kind {
        ChartKind::Isotype => {
            IsotypeGridSpec::new(ISOTYPE_ID_BASE, value, marker_style, color).visual()
        }
        ChartKind::Bar => {
            ProportionalBarSpec::new(BAR_ID_BASE, value, secondary_value, color).visual()
        }
        ChartKind::Line => TrendLineSpec::new(LINE_ID_BASE, value, color).visual(),
        ChartKind::Pie => RadialGaugeSpec::new(PIE_ID_BASE, value, color).visual(),
        ChartKind::Unrecognized => {
            log::debug!("unrecognized chart kind, rendering nothing");
            RenderedVisual::empty()
        }
    }
}

/// The full parameter set of one visualization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualizationSpec {
    /// Chart kind.
    pub kind: ChartKind,
    /// Primary value (`0..=100`).
    pub value: i32,
    /// Secondary value (`0..=100`), bar charts only.
    pub secondary_value: i32,
    /// Chart color.
    pub color: Color,
    /// Marker style, isotype grids only.
    pub marker_style: MarkerStyle,
}

impl VisualizationSpec {
    /// Creates a spec with the default secondary value, color and marker style.
    pub fn new(kind: ChartKind, value: i32) -> Self {
        Self {
            kind,
            value,
            ..Self::default()
        }
    }

    /// Sets the secondary value.
    pub fn with_secondary_value(mut self, secondary_value: i32) -> Self {
        self.secondary_value = secondary_value;
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the marker style.
    pub fn with_marker_style(mut self, marker_style: MarkerStyle) -> Self {
        self.marker_style = marker_style;
        self
    }

    /// Renders this spec. Equivalent to calling [`render`] with its fields.
    pub fn render(&self) -> RenderedVisual {
        render(
            self.kind,
            self.value,
            self.secondary_value,
            self.color,
            self.marker_style,
        )
    }
}

impl Default for VisualizationSpec {
    fn default() -> Self {
        Self {
            kind: ChartKind::Isotype,
            value: 74,
            secondary_value: 18,
            color: ThemeColor::Red.color(),
            marker_style: MarkerStyle::Hexagon,
        }
    }
}
