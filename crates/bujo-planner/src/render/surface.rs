//! Drawing surface abstraction
//!
//! Page routines only ever talk to a [`Surface`]; the PDF writer and the
//! dry-run counter are interchangeable behind it.

use crate::geometry::{Point, Rect};
use crate::style::Color;

/// Segments used to approximate a circle
const CIRCLE_SEGMENTS: usize = 32;

/// Average glyph advance as a fraction of the font size, for dry runs
const DRY_RUN_ADVANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Italic,
}

/// Stroke and fill of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub width: f32,
}

impl Paint {
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            stroke: Some(color),
            fill: None,
            width,
        }
    }

    pub fn fill(color: Color) -> Self {
        Self {
            stroke: None,
            fill: Some(color),
            width: 0.0,
        }
    }

    pub fn fill_and_stroke(fill: Color, stroke: Color, width: f32) -> Self {
        Self {
            stroke: Some(stroke),
            fill: Some(fill),
            width,
        }
    }
}

/// Vector drawing target, one page at a time
///
/// Coordinates are in page space: origin top-left, y grows downwards.
pub trait Surface {
    /// Open a new page and return its page number
    fn begin_page(&mut self) -> usize;

    /// Pages opened so far
    fn page_count(&self) -> usize;

    /// Draw a path through `points`; closed paths may be filled
    fn path(&mut self, points: &[Point], closed: bool, paint: Paint);

    /// Draw `text` with its top-left corner at (`x`, `y`)
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, face: FontFace);

    /// Advance width of `text` at `size`
    fn text_width(&self, text: &str, size: f32, face: FontFace) -> f32;

    fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.path(&[from, to], false, Paint::stroke(color, width));
    }

    fn rect(&mut self, rect: Rect, paint: Paint) {
        let corners = [
            Point::new(rect.left, rect.top),
            Point::new(rect.right, rect.top),
            Point::new(rect.right, rect.bottom),
            Point::new(rect.left, rect.bottom),
        ];
        self.path(&corners, true, paint);
    }

    fn circle(&mut self, center: Point, radius: f32, paint: Paint) {
        let points: Vec<Point> = (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        self.path(&points, true, paint);
    }
}

/// Surface that only counts what would be drawn
///
/// Text is measured with a fixed average advance, so layouts that depend on
/// text width come out close to, but not exactly like, the real document.
#[derive(Debug, Default, Clone)]
pub struct DryRunSurface {
    pages: usize,
    paths: usize,
    texts: usize,
}

impl DryRunSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> usize {
        self.paths
    }

    pub fn texts(&self) -> usize {
        self.texts
    }
}

impl Surface for DryRunSurface {
    fn begin_page(&mut self) -> usize {
        self.pages += 1;
        self.pages - 1
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn path(&mut self, points: &[Point], _closed: bool, _paint: Paint) {
        if points.len() >= 2 {
            self.paths += 1;
        }
    }

    fn text(&mut self, text: &str, _x: f32, _y: f32, _size: f32, _color: Color, _face: FontFace) {
        if !text.is_empty() {
            self.texts += 1;
        }
    }

    fn text_width(&self, text: &str, size: f32, _face: FontFace) -> f32 {
        text.chars().count() as f32 * size * DRY_RUN_ADVANCE
    }
}
