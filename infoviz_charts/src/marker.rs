// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker styles for isotype grids.
//!
//! A [`MarkerStyle`] resolves to a [`MarkerGlyph`]: either a pictogram (a fixed symbol string
//! that renders in its own colors) or a geometric shape described by an optional clip polygon
//! in unit-square coordinates plus a corner-rounding hint.

use kurbo::{BezPath, Rect, RoundedRect, Shape};

// Clip polygons in unit-square coordinates (`(0, 0)` top-left, `(1, 1)` bottom-right).
const DIAMOND: &[(f64, f64)] = &[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)];
const HEXAGON: &[(f64, f64)] = &[
    (0.25, 0.0),
    (0.75, 0.0),
    (1.0, 0.5),
    (0.75, 1.0),
    (0.25, 1.0),
    (0.0, 0.5),
];
const TRIANGLE: &[(f64, f64)] = &[(0.5, 0.0), (0.0, 1.0), (1.0, 1.0)];

/// The marker style used by isotype grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// A disc.
    Circle,
    /// A square with slightly rounded corners.
    Square,
    /// A square rotated by 45 degrees.
    Diamond,
    /// A flat-topped hexagon.
    #[default]
    Hexagon,
    /// An upward-pointing triangle.
    Triangle,
    /// Smiling face pictogram.
    Smiley,
    /// Thumbs-up pictogram.
    ThumbsUp,
    /// Man pictogram.
    Man,
    /// Woman pictogram.
    Woman,
    /// Person silhouette pictogram.
    Person,
    /// Heart pictogram.
    Heart,
    /// Star pictogram.
    Star,
    /// Lightning bolt pictogram.
    Bolt,
    /// Office building pictogram.
    Building,
    /// Light bulb pictogram.
    Idea,
    /// A style name the host sent that this version does not know.
    ///
    /// Renders as a plain, unclipped square.
    Unrecognized,
}

impl MarkerStyle {
    /// All known styles, geometric first.
    pub const ALL: [Self; 15] = [
        Self::Circle,
        Self::Square,
        Self::Diamond,
        Self::Hexagon,
        Self::Triangle,
        Self::Smiley,
        Self::ThumbsUp,
        Self::Man,
        Self::Woman,
        Self::Person,
        Self::Heart,
        Self::Star,
        Self::Bolt,
        Self::Building,
        Self::Idea,
    ];

    /// Parses a style from its configuration name (`"hexagon"`, `"thumbsup"`, ...).
    ///
    /// Matching is ASCII case-insensitive. Unknown names map to [`Self::Unrecognized`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Unrecognized)
    }

    /// Returns the configuration name of this style.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Hexagon => "hexagon",
            Self::Triangle => "triangle",
            Self::Smiley => "smiley",
            Self::ThumbsUp => "thumbsup",
            Self::Man => "man",
            Self::Woman => "woman",
            Self::Person => "person",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Bolt => "bolt",
            Self::Building => "building",
            Self::Idea => "idea",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Returns `true` for pictogram styles.
    pub fn is_pictogram(self) -> bool {
        matches!(self.glyph(), MarkerGlyph::Pictogram(_))
    }

    /// Resolves this style to a renderable glyph.
    pub fn glyph(self) -> MarkerGlyph {
        match self {
            Self::Smiley => MarkerGlyph::Pictogram("\u{1F60A}"),
            Self::ThumbsUp => MarkerGlyph::Pictogram("\u{1F44D}"),
            Self::Man => MarkerGlyph::Pictogram("\u{1F468}"),
            Self::Woman => MarkerGlyph::Pictogram("\u{1F469}"),
            Self::Person => MarkerGlyph::Pictogram("\u{1F464}"),
            Self::Heart => MarkerGlyph::Pictogram("\u{2764}\u{FE0F}"),
            Self::Star => MarkerGlyph::Pictogram("\u{2B50}"),
            Self::Bolt => MarkerGlyph::Pictogram("\u{26A1}"),
            Self::Building => MarkerGlyph::Pictogram("\u{1F3E2}"),
            Self::Idea => MarkerGlyph::Pictogram("\u{1F4A1}"),
            Self::Diamond => MarkerGlyph::clipped(DIAMOND),
            Self::Hexagon => MarkerGlyph::clipped(HEXAGON),
            Self::Triangle => MarkerGlyph::clipped(TRIANGLE),
            Self::Square => MarkerGlyph::rounded(CornerRadius::Slight),
            Self::Circle => MarkerGlyph::rounded(CornerRadius::Full),
            Self::Unrecognized => MarkerGlyph::rounded(CornerRadius::Sharp),
        }
    }
}

/// Resolves a marker style to its glyph. Equivalent to [`MarkerStyle::glyph`].
pub fn resolve_marker(style: MarkerStyle) -> MarkerGlyph {
    style.glyph()
}

/// Corner rounding hint for unclipped geometric markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerRadius {
    /// No rounding.
    Sharp,
    /// Minimal rounding (1/16 of the cell side).
    Slight,
    /// Full rounding, producing a disc.
    Full,
}

impl CornerRadius {
    /// Returns the corner radius for a cell of side `size`.
    pub fn radius(self, size: f64) -> f64 {
        match self {
            Self::Sharp => 0.0,
            Self::Slight => size / 16.0,
            Self::Full => size * 0.5,
        }
    }
}

/// A renderable marker glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerGlyph {
    /// A fixed symbol string. Drawn with its own appearance; marker color does not apply.
    Pictogram(&'static str),
    /// A filled geometric shape.
    Geometric {
        /// Optional clip polygon in unit-square coordinates.
        clip: Option<&'static [(f64, f64)]>,
        /// Corner rounding applied when there is no clip polygon.
        corner: CornerRadius,
    },
}

impl MarkerGlyph {
    fn clipped(polygon: &'static [(f64, f64)]) -> Self {
        Self::Geometric {
            clip: Some(polygon),
            corner: CornerRadius::Sharp,
        }
    }

    fn rounded(corner: CornerRadius) -> Self {
        Self::Geometric { clip: None, corner }
    }

    /// Returns the outline of a geometric glyph fitted into `cell`.
    ///
    /// Pictograms return `None`.
    pub fn outline(&self, cell: Rect) -> Option<BezPath> {
        let Self::Geometric { clip, corner } = *self else {
            return None;
        };
        match clip {
            Some(polygon) => Some(polygon_path(polygon, cell)),
            None => {
                let side = cell.width().min(cell.height());
                let rounded = RoundedRect::from_rect(cell, corner.radius(side));
                // Same fixed tolerance as the other demo-scale geometry; cells are a few
                // units wide.
                Some(rounded.path_elements(0.1).collect())
            }
        }
    }
}

fn polygon_path(polygon: &[(f64, f64)], cell: Rect) -> BezPath {
    let mut p = BezPath::new();
    for (i, &(u, v)) in polygon.iter().enumerate() {
        let pt = (cell.x0 + u * cell.width(), cell.y0 + v * cell.height());
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{PathEl, Point};

    use super::*;

    fn vertices(path: &BezPath) -> std::vec::Vec<Point> {
        path.elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn pictograms_resolve_to_symbols() {
        assert_eq!(MarkerStyle::Star.glyph(), MarkerGlyph::Pictogram("\u{2B50}"));
        assert_eq!(
            MarkerStyle::Heart.glyph(),
            MarkerGlyph::Pictogram("\u{2764}\u{FE0F}")
        );
        let pictograms = MarkerStyle::ALL.iter().filter(|s| s.is_pictogram()).count();
        assert_eq!(pictograms, 10);
    }

    #[test]
    fn hexagon_polygon_is_scaled_into_the_cell() {
        let cell = Rect::new(10.0, 20.0, 26.0, 36.0);
        let path = MarkerStyle::Hexagon.glyph().outline(cell).unwrap();
        assert_eq!(
            vertices(&path),
            [
                Point::new(14.0, 20.0),
                Point::new(22.0, 20.0),
                Point::new(26.0, 28.0),
                Point::new(22.0, 36.0),
                Point::new(14.0, 36.0),
                Point::new(10.0, 28.0),
            ]
        );
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
    }

    #[test]
    fn diamond_and_triangle_clip_polygons() {
        let cell = Rect::new(0.0, 0.0, 16.0, 16.0);
        let diamond = MarkerStyle::Diamond.glyph().outline(cell).unwrap();
        assert_eq!(vertices(&diamond).len(), 4);
        let triangle = MarkerStyle::Triangle.glyph().outline(cell).unwrap();
        assert_eq!(
            vertices(&triangle),
            [
                Point::new(8.0, 0.0),
                Point::new(0.0, 16.0),
                Point::new(16.0, 16.0),
            ]
        );
    }

    #[test]
    fn square_and_circle_use_corner_rounding() {
        assert_eq!(
            MarkerStyle::Square.glyph(),
            MarkerGlyph::Geometric {
                clip: None,
                corner: CornerRadius::Slight,
            }
        );
        assert_eq!(CornerRadius::Full.radius(16.0), 8.0);
        assert_eq!(CornerRadius::Slight.radius(16.0), 1.0);

        let cell = Rect::new(0.0, 0.0, 16.0, 16.0);
        let disc = MarkerStyle::Circle.glyph().outline(cell).unwrap();
        let b = disc.bounding_box();
        assert!((b.width() - 16.0).abs() < 1e-6, "disc spans the cell: {b:?}");
    }

    #[test]
    fn unrecognized_style_is_a_plain_square() {
        let glyph = MarkerStyle::from_name("pentagon").glyph();
        assert_eq!(
            glyph,
            MarkerGlyph::Geometric {
                clip: None,
                corner: CornerRadius::Sharp,
            }
        );
        let cell = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert_eq!(glyph.outline(cell).unwrap().bounding_box(), cell);
    }

    #[test]
    fn names_round_trip_case_insensitively() {
        for style in MarkerStyle::ALL {
            assert_eq!(MarkerStyle::from_name(style.name()), style);
        }
        assert_eq!(MarkerStyle::from_name("ThumbsUp"), MarkerStyle::ThumbsUp);
        assert_eq!(resolve_marker(MarkerStyle::Idea), MarkerStyle::Idea.glyph());
    }
}
