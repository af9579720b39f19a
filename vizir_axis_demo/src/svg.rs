// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `vizir_axis_demo`.

use std::fmt::Write as _;

use kurbo::{Point, Rect};
use peniko::Brush;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug)]
enum Item {
    Rect {
        rect: Rect,
        fill: Brush,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Brush,
        width: f64,
    },
    Text {
        pos: Point,
        text: String,
        font_size: f64,
        anchor: Anchor,
        fill: Brush,
    },
}

/// Collects primitives and serializes them in insertion order.
#[derive(Debug, Default)]
pub(crate) struct SvgDoc {
    items: Vec<Item>,
    view_box: Option<Rect>,
}

impl SvgDoc {
    pub(crate) fn rect(&mut self, rect: Rect, fill: Brush) {
        self.grow(rect);
        self.items.push(Item::Rect { rect, fill });
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, stroke: Brush, width: f64) {
        self.grow(Rect::from_points(from, to));
        self.items.push(Item::Line {
            from,
            to,
            stroke,
            width,
        });
    }

    pub(crate) fn text(
        &mut self,
        pos: Point,
        text: &str,
        font_size: f64,
        anchor: Anchor,
        fill: Brush,
    ) {
        self.grow(estimate_text_bounds(pos, font_size, anchor, text));
        self.items.push(Item::Text {
            pos,
            text: text.to_string(),
            font_size,
            anchor,
            fill,
        });
    }

    fn grow(&mut self, b: Rect) {
        self.view_box = Some(match self.view_box {
            None => b,
            Some(r) => r.union(b),
        });
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .map(|r| r.inset(10.0))
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );

        for item in &self.items {
            match item {
                Item::Rect { rect, fill } => {
                    let _ = write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                    );
                    write_paint_attr(&mut out, "fill", fill);
                    out.push_str("/>\n");
                }
                Item::Line {
                    from,
                    to,
                    stroke,
                    width,
                } => {
                    let _ = write!(
                        out,
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{width}""#,
                        from.x, from.y, to.x, to.y
                    );
                    write_paint_attr(&mut out, "stroke", stroke);
                    out.push_str("/>\n");
                }
                Item::Text {
                    pos,
                    text,
                    font_size,
                    anchor,
                    fill,
                } => {
                    let _ = write!(
                        out,
                        r#"<text x="{}" y="{}" font-size="{font_size}" dominant-baseline="middle""#,
                        pos.x, pos.y
                    );
                    out.push_str(match anchor {
                        Anchor::Start => r#" text-anchor="start""#,
                        Anchor::Middle => r#" text-anchor="middle""#,
                        Anchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", fill);
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn estimate_text_bounds(pos: Point, font_size: f64, anchor: Anchor, text: &str) -> Rect {
    // Rough heuristic: ~0.6em average glyph width. Only used for the view box.
    let width = 0.6 * font_size * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let (x0, x1) = match anchor {
        Anchor::Start => (pos.x, pos.x + width),
        Anchor::Middle => (pos.x - width / 2.0, pos.x + width / 2.0),
        Anchor::End => (pos.x - width, pos.x),
    };
    Rect::new(x0, pos.y - half_height, x1, pos.y + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
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

fn escape_xml(s: &str) -> String {
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
