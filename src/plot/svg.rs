//! Minimal SVG document writer

use std::fmt::Write;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

/// Horizontal anchoring of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Accumulates SVG elements into a string buffer.
#[derive(Debug)]
pub struct SvgDocument {
    out: String,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="sans-serif">"#
        );
        out.push('\n');
        SvgDocument { out }
    }

    pub fn rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<(Color, f64)>) {
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
        match fill {
            Some(color) => write_paint_attr(&mut self.out, "fill", color),
            None => self.out.push_str(r#" fill="none""#),
        }
        if let Some((color, width)) = stroke {
            write_paint_attr(&mut self.out, "stroke", color);
            let _ = write!(self.out, r#" stroke-width="{width}""#);
        }
        self.out.push_str("/>\n");
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Color, width: f64) {
        let _ = write!(
            self.out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            from.x, from.y, to.x, to.y
        );
        write_paint_attr(&mut self.out, "stroke", stroke);
        let _ = write!(self.out, r#" stroke-width="{width}"/>"#);
        self.out.push('\n');
    }

    /// Stroke a path. `class` tags the element so consumers can find series.
    pub fn path(&mut self, path: &BezPath, stroke: Color, width: f64, class: &str) {
        let d = path.to_svg();
        let _ = write!(self.out, r#"<path class="{class}" d="{d}" fill="none""#);
        write_paint_attr(&mut self.out, "stroke", stroke);
        let _ = write!(
            self.out,
            r#" stroke-width="{width}" stroke-linejoin="round"/>"#
        );
        self.out.push('\n');
    }

    pub fn text(&mut self, pos: Point, size: f64, anchor: Anchor, fill: Color, text: &str) {
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" dominant-baseline="middle""#,
            pos.x,
            pos.y,
            size,
            anchor.as_str()
        );
        write_paint_attr(&mut self.out, "fill", fill);
        self.out.push('>');
        self.out.push_str(&escape_xml(text));
        self.out.push_str("</text>\n");
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
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
