// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized rendering.
//!
//! Rendering is a pure function of its parameters, so hosts that re-render on every keystroke
//! can reuse visuals for parameter sets they have already seen.

use hashbrown::HashMap;
use infoviz_core::RenderedVisual;
use peniko::Color;

use crate::marker::MarkerStyle;
use crate::visualization::{ChartKind, VisualizationSpec, render};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: ChartKind,
    value: i32,
    secondary_value: i32,
    // Exact component bits; quantizing to 8-bit would alias distinct colors.
    color: [u32; 4],
    marker_style: MarkerStyle,
}

impl CacheKey {
    fn new(
        kind: ChartKind,
        value: i32,
        secondary_value: i32,
        color: Color,
        marker_style: MarkerStyle,
    ) -> Self {
        Self {
            kind,
            value,
            secondary_value,
            color: color.components.map(f32::to_bits),
            marker_style,
        }
    }
}

/// A bounded memo table in front of [`render`].
///
/// When the table is full it is cleared before the next insertion.
#[derive(Debug)]
pub struct RenderCache {
    entries: HashMap<CacheKey, RenderedVisual>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::with_capacity(32)
    }
}

impl RenderCache {
    /// Creates a cache holding at most `capacity` visuals (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the visual for these parameters, rendering it on a miss.
    pub fn render(
        &mut self,
        kind: ChartKind,
        value: i32,
        secondary_value: i32,
        color: Color,
        marker_style: MarkerStyle,
    ) -> &RenderedVisual {
        let key = CacheKey::new(kind, value, secondary_value, color, marker_style);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity {
                log::debug!("render cache full ({} entries), clearing", self.entries.len());
                self.entries.clear();
            }
        }
        self.entries
            .entry(key)
            .or_insert_with(|| render(kind, value, secondary_value, color, marker_style))
    }

    /// Renders a [`VisualizationSpec`] through the cache.
    pub fn render_spec(&mut self, spec: &VisualizationSpec) -> &RenderedVisual {
        self.render(
            spec.kind,
            spec.value,
            spec.secondary_value,
            spec.color,
            spec.marker_style,
        )
    }

    /// Number of cached visuals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to render.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every cached visual.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
