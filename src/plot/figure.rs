//! Multi-panel line chart model and SVG rendering

use std::path::Path;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use super::axis::AxisKind;
use super::scale::{data_to_pixels, Range};
use super::svg::{Anchor, SvgDocument};
use super::PlotError;

/// Output resolution used to turn a figure size in inches into pixels.
pub const PIXELS_PER_INCH: f64 = 100.0;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 70.0;
const PANEL_GAP: f64 = 16.0;
const DATA_MARGIN: f64 = 0.05;

const BACKGROUND: Color = Color::from_rgb8(255, 255, 255);
const FRAME_COLOR: Color = Color::from_rgb8(128, 128, 128);
const TEXT_COLOR: Color = Color::from_rgb8(32, 32, 32);

// Matplotlib "tab10" cycle
const SERIES_COLORS: [Color; 10] = [
    Color::from_rgb8(31, 119, 180),
    Color::from_rgb8(255, 127, 14),
    Color::from_rgb8(44, 160, 44),
    Color::from_rgb8(214, 39, 40),
    Color::from_rgb8(148, 103, 189),
    Color::from_rgb8(140, 86, 75),
    Color::from_rgb8(227, 119, 194),
    Color::from_rgb8(127, 127, 127),
    Color::from_rgb8(188, 189, 34),
    Color::from_rgb8(23, 190, 207),
];

/// Figure dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub const fn new(width: f64, height: f64) -> Self {
        FigureSize { width, height }
    }

    pub fn pixels(&self) -> (f64, f64) {
        (self.width * PIXELS_PER_INCH, self.height * PIXELS_PER_INCH)
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        FigureSize::new(14.0, 10.0)
    }
}

/// One subplot: a single column drawn against the shared x-axis
#[derive(Debug, Clone)]
pub struct Panel {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl Panel {
    fn y_range(&self) -> Range {
        Range::from_values(self.values.iter().flatten().copied())
            .unwrap_or(Range::new(0.0, 1.0))
            .pad(DATA_MARGIN)
    }
}

/// Vertically stacked subplots sharing one x-axis
#[derive(Debug, Clone)]
pub struct Figure {
    size: FigureSize,
    x_label: String,
    x_values: Vec<Option<f64>>,
    x_kind: AxisKind,
    panels: Vec<Panel>,
}

impl Figure {
    pub fn new(size: FigureSize, x_label: &str, x_values: Vec<Option<f64>>) -> Self {
        Figure {
            size,
            x_label: x_label.to_string(),
            x_values,
            x_kind: AxisKind::Numeric,
            panels: Vec::new(),
        }
    }

    /// Interpret the x values as dates or times when labelling ticks.
    pub fn set_x_kind(&mut self, kind: AxisKind) -> &mut Self {
        self.x_kind = kind;
        self
    }

    pub fn x_kind(&self) -> AxisKind {
        self.x_kind
    }

    pub fn add_panel(&mut self, label: &str, values: Vec<Option<f64>>) -> &mut Self {
        self.panels.push(Panel {
            label: label.to_string(),
            values,
        });
        self
    }

    pub fn size(&self) -> FigureSize {
        self.size
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panel labels in drawing order (top to bottom).
    pub fn panel_labels(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.label.as_str()).collect()
    }

    fn x_range(&self) -> Range {
        Range::from_values(self.x_values.iter().flatten().copied())
            .unwrap_or(Range::new(0.0, 1.0))
            .pad(DATA_MARGIN)
    }

    /// Pixel rectangles of every panel, top to bottom.
    pub fn panel_rects(&self) -> Vec<Rect> {
        let n = self.panels.len();
        if n == 0 {
            return Vec::new();
        }
        let (width, height) = self.size.pixels();
        let usable = (height - MARGIN_TOP - MARGIN_BOTTOM - PANEL_GAP * (n - 1) as f64).max(0.0);
        let panel_height = usable / n as f64;

        (0..n)
            .map(|i| {
                let y0 = MARGIN_TOP + i as f64 * (panel_height + PANEL_GAP);
                let x1 = (width - MARGIN_RIGHT).max(MARGIN_LEFT);
                Rect::new(MARGIN_LEFT, y0, x1, y0 + panel_height)
            })
            .collect()
    }

    /// Render the figure as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (width, height) = self.size.pixels();
        let mut doc = SvgDocument::new(width, height);
        doc.rect(Rect::new(0.0, 0.0, width, height), Some(BACKGROUND), None);

        let x_range = self.x_range();
        let rects = self.panel_rects();
        let last = rects.len().saturating_sub(1);

        for (i, (panel, rect)) in self.panels.iter().zip(&rects).enumerate() {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let y_range = panel.y_range();
            let transform = data_to_pixels(x_range, y_range, *rect);

            doc.rect(*rect, None, Some((FRAME_COLOR, 1.0)));

            let mut path = BezPath::new();
            for segment in line_segments(&self.x_values, &panel.values) {
                for (j, (x, y)) in segment.into_iter().enumerate() {
                    let point = transform * Point::new(x, y);
                    if j == 0 {
                        path.move_to(point);
                    } else {
                        path.line_to(point);
                    }
                }
            }
            if !path.elements().is_empty() {
                doc.path(&path, color, 1.5, "series");
            }

            let ticks = y_range.nice_ticks(4);
            for value in ticks.values.iter().copied().filter(|v| y_range.contains(*v)) {
                let py = (transform * Point::new(x_range.min, value)).y;
                doc.line(
                    Point::new(rect.x0, py),
                    Point::new(rect.x0 - 6.0, py),
                    FRAME_COLOR,
                    1.0,
                );
                doc.text(
                    Point::new(rect.x0 - 9.0, py),
                    11.0,
                    Anchor::End,
                    TEXT_COLOR,
                    &ticks.label(value),
                );
            }

            // Legend entry
            doc.line(
                Point::new(rect.x1 - 110.0, rect.y0 + 14.0),
                Point::new(rect.x1 - 90.0, rect.y0 + 14.0),
                color,
                2.0,
            );
            doc.text(
                Point::new(rect.x1 - 85.0, rect.y0 + 14.0),
                12.0,
                Anchor::Start,
                TEXT_COLOR,
                &panel.label,
            );

            if i == last {
                let ticks = self.x_kind.ticks(x_range, 8);
                for (value, label) in ticks.into_iter().filter(|(v, _)| x_range.contains(*v)) {
                    let px = (transform * Point::new(value, y_range.min)).x;
                    doc.line(
                        Point::new(px, rect.y1),
                        Point::new(px, rect.y1 + 6.0),
                        FRAME_COLOR,
                        1.0,
                    );
                    doc.text(
                        Point::new(px, rect.y1 + 18.0),
                        11.0,
                        Anchor::Middle,
                        TEXT_COLOR,
                        &label,
                    );
                }
                doc.text(
                    Point::new((rect.x0 + rect.x1) / 2.0, rect.y1 + 45.0),
                    14.0,
                    Anchor::Middle,
                    TEXT_COLOR,
                    &self.x_label,
                );
            }
        }

        doc.finish()
    }

    /// Write the SVG rendering to `path`.
    pub fn save(&self, path: &Path) -> Result<(), PlotError> {
        std::fs::write(path, self.to_svg()).map_err(|source| PlotError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Split paired x/y values into drawable runs. A row with a missing or
/// non-finite coordinate ends the current run.
pub fn line_segments(x: &[Option<f64>], y: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (xv, yv) in x.iter().zip(y) {
        match (xv, yv) {
            (Some(xv), Some(yv)) if xv.is_finite() && yv.is_finite() => {
                current.push((*xv, *yv));
            }
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
