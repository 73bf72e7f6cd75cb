// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Every visualization here is driven by a percentage, so a linear scale from the percent
//! domain onto a scene-space span covers all the coordinate mapping we need.

/// Upper bound of the percentage inputs (`0..=MAX_DATA_VALUE`).
pub const MAX_DATA_VALUE: i32 = 100;

/// The percentage domain shared by every visualization.
pub const PERCENT_DOMAIN: (f64, f64) = (0.0, MAX_DATA_VALUE as f64);

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Creates a scale mapping `0..=100` onto `range`.
    pub fn percent(range: (f64, f64)) -> Self {
        Self::new(PERCENT_DOMAIN, range)
    }

    /// Maps a value from domain space into range space.
    ///
    /// Values outside the domain extrapolate linearly.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// Clamps a percentage input to `0..=MAX_DATA_VALUE`.
///
/// Every renderer applies this at its boundary so out-of-range inputs never produce geometry
/// outside the visualization frame.
pub fn clamp_percent(value: i32) -> i32 {
    let clamped = value.clamp(0, MAX_DATA_VALUE);
    if clamped != value {
        log::debug!("percentage {value} outside 0..={MAX_DATA_VALUE}, clamped to {clamped}");
    }
    clamped
}
