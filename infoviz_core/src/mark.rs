// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: the leaves of a [`crate::RenderedVisual`].

extern crate alloc;

use alloc::string::String;
use core::time::Duration;

use kurbo::{BezPath, Cap, Point, Rect, Shape};
use peniko::{Brush, Color};
use smallvec::SmallVec;

/// A stable mark identity.
///
/// Chart code derives ids deterministically from an id base plus a fixed offset, so the same
/// parameters always produce the same ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from its raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the id `offset` steps after this one.
    pub const fn offset(self, offset: u64) -> Self {
        Self(self.0.wrapping_add(offset))
    }
}

/// The kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned filled rectangle.
    Rect,
    /// A filled and/or stroked path.
    Path,
    /// A single run of unshaped text.
    Text,
}

/// Horizontal text anchor, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline, matching SVG `dominant-baseline`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is the vertical middle of the text.
    #[default]
    Middle,
    /// The anchor point is on the alphabetic baseline.
    Alphabetic,
    /// The anchor point is on the hanging baseline.
    Hanging,
    /// The anchor point is on the ideographic baseline.
    Ideographic,
}

/// A dash pattern applied to a path stroke.
///
/// Semantics follow SVG `stroke-dasharray`/`stroke-dashoffset`: `offset` shifts the start of
/// the pattern along the path, so a pattern of `[len, len]` with offset `len - visible`
/// draws exactly `visible` units of a path of length `len`.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeDash {
    /// Alternating dash/gap lengths in scene units.
    pub pattern: SmallVec<[f64; 2]>,
    /// Distance into the pattern at which the stroke starts.
    pub offset: f64,
}

impl StrokeDash {
    /// Creates a dash pattern.
    pub fn new(pattern: impl IntoIterator<Item = f64>, offset: f64) -> Self {
        Self {
            pattern: pattern.into_iter().collect(),
            offset,
        }
    }
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint. Ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Line cap used at open path ends and dash ends.
    pub stroke_cap: Cap,
    /// Optional dash pattern.
    pub dash: Option<StrokeDash>,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The concrete geometry and paint of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectMark),
    /// A path.
    Path(PathMark),
    /// Text.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns the fill paint.
    pub fn fill(&self) -> &Brush {
        match self {
            Self::Rect(r) => &r.fill,
            Self::Path(p) => &p.fill,
            Self::Text(t) => &t.fill,
        }
    }

    /// Returns conservative scene bounds, if they can be computed without text metrics.
    ///
    /// Text marks return `None`; empty paths return `None`.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    return None;
                }
                let b = p.path.bounding_box();
                if p.stroke_width > 0.0 {
                    Some(b.inflate(0.5 * p.stroke_width, 0.5 * p.stroke_width))
                } else {
                    Some(b)
                }
            }
            Self::Text(_) => None,
        }
    }
}

/// A single mark in a visual.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable mark id.
    pub id: MarkId,
    /// Rendering order hint. Renderers should sort siblings by `(z_index, id)`.
    pub z_index: i32,
    /// Presentational entrance delay (for staggered fade-in). Has no effect on geometry.
    pub enter_delay: Duration,
    /// Geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    ///
    /// The builder defaults to a rectangle mark.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns conservative scene bounds (see [`MarkPayload::bounds`]).
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

/// Builder for [`Mark`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    enter_delay: Duration,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    path: BezPath,
    text: String,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    fill: Brush,
    stroke: Brush,
    stroke_width: f64,
    stroke_cap: Cap,
    dash: Option<StrokeDash>,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            enter_delay: Duration::ZERO,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            path: BezPath::new(),
            text: String::new(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
            stroke_cap: Cap::Butt,
            dash: None,
        }
    }

    /// Makes this a rectangle mark.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Makes this a path mark.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Makes this a text mark.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the entrance delay.
    pub fn enter_delay(mut self, delay: Duration) -> Self {
        self.enter_delay = delay;
        self
    }

    /// Sets the x position (rect origin or text anchor).
    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets the y position (rect origin or text anchor).
    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rect width.
    pub fn w(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rect height.
    pub fn h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets origin and size from a rectangle.
    pub fn bounds(self, rect: Rect) -> Self {
        self.x(rect.x0)
            .y(rect.y0)
            .w(rect.width())
            .h(rect.height())
    }

    /// Sets the path geometry.
    pub fn geometry(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Sets the text content.
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the stroke paint.
    pub fn stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the stroke cap.
    pub fn stroke_cap(mut self, cap: Cap) -> Self {
        self.stroke_cap = cap;
        self
    }

    /// Sets the stroke dash pattern.
    pub fn dash(mut self, dash: StrokeDash) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectMark {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Path => MarkPayload::Path(PathMark {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
                stroke_cap: self.stroke_cap,
                dash: self.dash,
            }),
            MarkKind::Text => MarkPayload::Text(TextMark {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            enter_delay: self.enter_delay,
            payload,
        }
    }
}
