// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic visual tree for Infoviz.
//!
//! Chart code in `infoviz_charts` lowers its parameters into a [`RenderedVisual`]:
//! - **Marks** are leaf shapes (rectangles, paths, unshaped text) with a stable [`MarkId`].
//! - **Groups** cluster marks into visual bands with an optional background and opacity.
//!
//! A visual is plain data. It is rebuilt from scratch on every render and carries no
//! identity or lifecycle beyond its mark ids, so hosts are free to reconcile successive
//! visuals however they like (or simply replace them).
//!
//! Rasterization is out of scope; `kurbo` geometry and `peniko` paints are handed to
//! whatever renderer (SVG, Vello, a browser) the host uses.

#![no_std]

extern crate alloc;

mod mark;
mod visual;

pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathMark, RectMark, StrokeDash, TextAnchor,
    TextBaseline, TextMark,
};
pub use visual::{Group, Marks, Node, RenderedVisual};
