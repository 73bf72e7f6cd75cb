// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke styling shared by line-like marks.

use kurbo::Cap;
use peniko::Brush;
use peniko::color::palette::css;

/// A paint + width pair for stroked paths (trend lines, gauge rings).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Line cap at open ends and dash ends.
    pub cap: Cap,
}

impl StrokeStyle {
    /// Convenience for a solid stroke with butt caps.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            cap: Cap::Butt,
        }
    }

    /// Sets the line cap.
    pub fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}
