// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for visualization marks.
//!
//! `infoviz_core` marks carry an explicit `z_index` for render ordering. The renderers here set
//! z-indexes consistently so hosts don't have to hand-tune paint order.
//!
//! These values are intentionally coarse. Renderers should sort siblings by `(z_index, MarkId)`
//! for a deterministic tie-break.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Neutral tracks drawn behind value marks (bar tracks, gauge rings).
pub const TRACKS: i32 = -50;

/// Filled series marks (bars, areas, isotype markers).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines, gauge arcs).
pub const SERIES_STROKE: i32 = 10;
/// Point series marks drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Captions and value labels.
pub const LABELS: i32 = 40;
/// Headline figures (the centered gauge value).
pub const TITLES: i32 = 80;
