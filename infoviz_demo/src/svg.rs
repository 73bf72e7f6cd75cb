// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG serialization of a `RenderedVisual`.

use std::fmt::Write as _;

use infoviz_core::{
    Group, Mark, MarkPayload, Node, PathMark, RenderedVisual, TextAnchor, TextBaseline,
};
use kurbo::{Cap, Rect};
use peniko::Brush;

// Fade/rise entrance used by staggered marks; the per-mark delay is set inline.
const ENTER_STYLE: &str = "<style>.enter{opacity:0;animation:enter .4s ease-out forwards}\
@keyframes enter{from{opacity:0;transform:translateY(4px)}to{opacity:1;transform:none}}</style>";

const PADDING: f64 = 10.0;

/// Serializes a visual into a standalone SVG document.
pub(crate) fn to_svg_string(visual: &RenderedVisual) -> String {
    let view_box = view_box(visual);
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');
    if visual.marks().any(|m| !m.enter_delay.is_zero()) {
        out.push_str(ENTER_STYLE);
        out.push('\n');
    }
    write_nodes(&mut out, &visual.nodes);
    out.push_str("</svg>\n");
    out
}

fn write_nodes(out: &mut String, nodes: &[Node]) {
    // Marks paint in (z_index, id) order; groups keep their position relative to each other.
    let mut marks: Vec<&Mark> = nodes
        .iter()
        .filter_map(|n| match n {
            Node::Mark(m) => Some(m),
            Node::Group(_) => None,
        })
        .collect();
    marks.sort_by_key(|m| (m.z_index, m.id));

    for node in nodes {
        if let Node::Group(g) = node {
            write_group(out, g);
        }
    }
    for mark in marks {
        write_mark(out, mark);
    }
}

fn write_group(out: &mut String, group: &Group) {
    let _ = write!(out, r#"<g data-id="{}""#, group.id.0);
    if group.opacity < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, group.opacity);
    }
    out.push_str(">\n");
    if let Some(bg) = &group.background {
        let r = group.frame;
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="4""#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
        write_paint_attr(out, "fill", bg);
        out.push_str("/>\n");
    }
    write_nodes(out, &group.children);
    out.push_str("</g>\n");
}

fn write_mark(out: &mut String, mark: &Mark) {
    let timing = if mark.enter_delay.is_zero() {
        String::new()
    } else {
        format!(
            r#" class="enter" style="animation-delay:{}ms""#,
            mark.enter_delay.as_millis()
        )
    };
    match &mark.payload {
        MarkPayload::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            );
            write_paint_attr(out, "fill", &r.fill);
            out.push_str(&timing);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
                TextBaseline::Ideographic => "ideographic",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            );
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            out.push_str(&timing);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
        MarkPayload::Path(p) => {
            let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_stroke_attrs(out, p);
            }
            out.push_str(&timing);
            out.push_str("/>\n");
        }
    }
}

fn write_stroke_attrs(out: &mut String, p: &PathMark) {
    write_paint_attr(out, "stroke", &p.stroke);
    let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
    let cap = match p.stroke_cap {
        Cap::Butt => None,
        Cap::Round => Some("round"),
        Cap::Square => Some("square"),
    };
    if let Some(cap) = cap {
        let _ = write!(out, r#" stroke-linecap="{cap}""#);
    }
    if let Some(dash) = &p.dash {
        let pattern: Vec<String> = dash.pattern.iter().map(f64::to_string).collect();
        let _ = write!(
            out,
            r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
            pattern.join(" "),
            dash.offset
        );
    }
}

fn view_box(visual: &RenderedVisual) -> Rect {
    let mut rect: Option<Rect> = (!visual.is_empty()).then_some(visual.view);
    for mark in visual.marks() {
        let b = match &mark.payload {
            MarkPayload::Text(t) => Some(estimate_text_bounds_anchored(
                t.pos.x,
                t.pos.y,
                t.font_size,
                t.anchor,
                t.baseline,
                &t.text,
            )),
            _ => mark.bounds(),
        };
        if let Some(b) = b {
            rect = Some(rect.map_or(b, |r| r.union(b)));
        }
    }

    rect.map_or(Rect::new(0.0, 0.0, 100.0, 100.0), |r| r.inflate(PADDING, PADDING))
}

fn estimate_text_bounds_anchored(
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    text: &str,
) -> Rect {
    // Very rough heuristic: assume ~0.6em average glyph width.
    let glyph_w = 0.6 * font_size;
    let width = glyph_w * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let y_midline = match baseline {
        TextBaseline::Middle => y,
        TextBaseline::Alphabetic => y - 0.3 * font_size,
        TextBaseline::Hanging => y + 0.3 * font_size,
        TextBaseline::Ideographic => y - 0.2 * font_size,
    };
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y_midline - half_height, x1, y_midline + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use infoviz_charts::{ChartKind, MarkerStyle, ThemeColor, render};

    use super::*;

    #[test]
    fn gauge_svg_carries_the_dash() {
        let v = render(ChartKind::Pie, 74, 0, ThemeColor::Navy.color(), MarkerStyle::Circle);
        let svg = to_svg_string(&v);
        assert!(svg.contains("stroke-dasharray"), "{svg}");
        assert!(svg.contains("stroke-dashoffset"), "{svg}");
        assert!(svg.contains(">74%</text>"), "{svg}");
    }

    #[test]
    fn isotype_svg_groups_and_staggers() {
        let v = render(ChartKind::Isotype, 12, 0, ThemeColor::Red.color(), MarkerStyle::Hexagon);
        let svg = to_svg_string(&v);
        assert_eq!(svg.matches("<g ").count(), 2);
        assert!(svg.contains("animation-delay:110ms"), "{svg}");
        assert!(svg.contains(r##"fill="#c32026""##), "{svg}");
    }

    #[test]
    fn secondary_bar_group_is_translucent() {
        let v = render(ChartKind::Bar, 74, 18, ThemeColor::Gold.color(), MarkerStyle::Hexagon);
        let svg = to_svg_string(&v);
        let start = svg.find(r#" opacity="0.5">"#).expect("translucent bar group");
        let end = start + svg[start..].find("</g>").unwrap();
        let translucent = &svg[start..end];
        assert_eq!(translucent.matches("<rect").count(), 2, "{translucent}");
        assert!(!translucent.contains("Comparison Segment"), "{translucent}");
        assert!(svg.contains(">Comparison Segment</text>"), "{svg}");
    }

    #[test]
    fn empty_visual_is_a_valid_document() {
        let svg = to_svg_string(&RenderedVisual::empty());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(r#"viewBox="0 0 100 100""#));
    }

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }
}
