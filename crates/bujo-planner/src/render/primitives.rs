//! Shared drawing helpers
//!
//! A [`Canvas`] is handed to each page routine. It draws onto the current
//! page of a [`Surface`] and records link intents against that page.

use super::surface::{FontFace, Paint, Surface};
use crate::geometry::{Point, Rect};
use crate::links::LinkRegistry;
use crate::page_map::LogicalUnit;
use crate::style::{Color, Layout, Theme, Typography};

/// Lightning bolt outline in glyph units
const LIGHTNING: [(f32, f32); 8] = [
    (8.0, 0.0),
    (15.0, 0.0),
    (9.0, 10.0),
    (16.0, 10.0),
    (0.0, 26.0),
    (5.0, 13.0),
    (0.0, 13.0),
    (8.0, 0.0),
];

/// Space kept free below the footer divider
const FOOTER_OFFSET: f32 = 55.0;

pub struct Canvas<'a> {
    surface: &'a mut dyn Surface,
    links: &'a mut LinkRegistry,
    page: usize,
    pub layout: &'a Layout,
    pub theme: &'a Theme,
    pub typography: &'a Typography,
}

impl<'a> Canvas<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        links: &'a mut LinkRegistry,
        page: usize,
        layout: &'a Layout,
        theme: &'a Theme,
        typography: &'a Typography,
    ) -> Self {
        Self {
            surface,
            links,
            page,
            layout,
            theme,
            typography,
        }
    }

    /// Page number this canvas draws on
    pub fn page(&self) -> usize {
        self.page
    }

    /// Make `anchor` on this page navigate to `target`
    pub fn link(&mut self, anchor: Rect, target: LogicalUnit) {
        self.links.record(self.page, target, anchor);
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.surface.line(from, to, color, width);
    }

    /// Horizontal rule across the content box
    pub fn rule(&mut self, y: f32, color: Color, width: f32) {
        let (left, right) = (self.layout.content_left(), self.layout.content_right());
        self.line(Point::new(left, y), Point::new(right, y), color, width);
    }

    pub fn path(&mut self, points: &[Point], closed: bool, paint: Paint) {
        self.surface.path(points, closed, paint);
    }

    pub fn rect(&mut self, rect: Rect, paint: Paint) {
        self.surface.rect(rect, paint);
    }

    pub fn circle(&mut self, center: Point, radius: f32, paint: Paint) {
        self.surface.circle(center, radius, paint);
    }

    /// Black regular text with its top-left corner at (`x`, `y`)
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        let black = self.theme.black;
        self.surface.text(text, x, y, size, black, FontFace::Regular);
    }

    pub fn text_with(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, face: FontFace) {
        self.surface.text(text, x, y, size, color, face);
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        self.surface.text_width(text, size, FontFace::Regular)
    }

    /// Word-wrapped text where `|`-delimited runs are set in italic
    ///
    /// Returns the height consumed.
    pub fn rich_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        max_width: f32,
        line_height: f32,
    ) -> f32 {
        let words = text.split('|').enumerate().flat_map(|(i, part)| {
            let face = if i % 2 == 1 {
                FontFace::Italic
            } else {
                FontFace::Regular
            };
            part.split_whitespace().map(move |word| (word, face))
        });

        let space = self.surface.text_width(" ", size, FontFace::Regular);
        let black = self.theme.black;
        let mut cursor_x = x;
        let mut cursor_y = y;
        for (word, face) in words {
            let width = self.surface.text_width(word, size, face);
            if cursor_x + width > x + max_width && cursor_x > x {
                cursor_x = x;
                cursor_y += size * line_height;
            }
            self.surface.text(word, cursor_x, cursor_y, size, black, face);
            cursor_x += width + space;
        }

        cursor_y - y + size * line_height
    }

    /// Dot grid across the content width between `top` and `bottom`
    pub fn dot_grid(&mut self, top: f32, bottom: f32) {
        let spacing = self.layout.dot_spacing;
        let size = self.layout.dot_size;
        let paint = Paint::fill(self.theme.black);

        let mut y = top;
        while y < bottom {
            let mut x = self.layout.content_left();
            while x < self.layout.content_right() {
                self.surface.rect(Rect::from_size(x, y, size, size), paint);
                x += spacing;
            }
            y += spacing;
        }
    }

    /// Dot grid from below the page header down to the footer
    pub fn page_grid(&mut self) {
        let top = self.layout.content_top() + 115.0;
        let bottom = self.layout.height - 70.0;
        self.dot_grid(top, bottom);
    }

    pub fn lightning(&mut self, x: f32, y: f32, scale: f32, color: Color) {
        let points: Vec<Point> = LIGHTNING
            .iter()
            .map(|&(px, py)| Point::new(x + px * scale, y + py * scale))
            .collect();
        self.surface.path(&points, true, Paint::fill_and_stroke(color, color, 1.0));
    }

    /// Five-pointed star centred on (`x`, `y`)
    pub fn star(&mut self, x: f32, y: f32, size: f32) {
        let points: Vec<Point> = (0..10)
            .map(|i| {
                let radius = if i % 2 == 0 { size } else { size * 0.38 };
                let angle = (-90.0 + i as f32 * 36.0_f32).to_radians();
                Point::new(x + radius * angle.cos(), y + radius * angle.sin())
            })
            .collect();
        let black = self.theme.black;
        self.surface.path(&points, true, Paint::fill_and_stroke(black, black, 1.0));
    }

    pub fn lightbulb(&mut self, x: f32, y: f32, size: f32) {
        let black = self.theme.black;
        let stroke = 2.0;
        let r = size * 0.5;
        let center_y = y - r * 0.3;
        self.surface
            .circle(Point::new(x, center_y), r, Paint::stroke(black, stroke));

        let neck = r * 0.5;
        let neck_top = center_y + r * 0.9;
        let neck_bottom = center_y + r * 1.3;
        self.line(
            Point::new(x - neck, neck_top),
            Point::new(x - neck * 0.7, neck_bottom),
            black,
            stroke,
        );
        self.line(
            Point::new(x + neck, neck_top),
            Point::new(x + neck * 0.7, neck_bottom),
            black,
            stroke,
        );
        self.line(
            Point::new(x - neck * 0.7, neck_bottom),
            Point::new(x + neck * 0.7, neck_bottom),
            black,
            stroke,
        );

        let filament_y = center_y + r * 0.1;
        let filament = r * 0.35;
        let peak = Point::new(x, filament_y - r * 0.3);
        self.line(Point::new(x - filament, filament_y), peak, black, stroke * 0.7);
        self.line(peak, Point::new(x + filament, filament_y), black, stroke * 0.7);
    }

    pub fn eye(&mut self, x: f32, y: f32, size: f32) {
        let black = self.theme.black;
        let w = size * 0.9;
        let h = size * 0.45;
        let outline = [
            Point::new(x - w, y),
            Point::new(x - w * 0.3, y - h),
            Point::new(x + w * 0.3, y - h),
            Point::new(x + w, y),
            Point::new(x + w * 0.3, y + h),
            Point::new(x - w * 0.3, y + h),
        ];
        self.surface.path(&outline, true, Paint::stroke(black, 1.8));
        self.surface
            .circle(Point::new(x, y), size * 0.2, Paint::fill(black));
    }

    /// Right-pointing arrow starting at (`x`, `y`)
    pub fn arrow_right(&mut self, x: f32, y: f32, size: f32) {
        let black = self.theme.black;
        let (shaft, head, stroke) = (size * 1.2, size * 0.6, size * 0.12);
        let tip = Point::new(x + shaft, y);
        self.line(Point::new(x, y), tip.offset(-head * 0.3, 0.0), black, stroke);
        self.line(tip, tip.offset(-head, -head * 0.7), black, stroke);
        self.line(tip, tip.offset(-head, head * 0.7), black, stroke);
    }

    /// Left-pointing arrow whose tip is at (`x`, `y`)
    pub fn arrow_left(&mut self, x: f32, y: f32, size: f32) {
        let black = self.theme.black;
        let (shaft, head, stroke) = (size * 1.2, size * 0.6, size * 0.12);
        let tip = Point::new(x, y);
        self.line(Point::new(x + shaft, y), tip.offset(head * 0.3, 0.0), black, stroke);
        self.line(tip, tip.offset(head, -head * 0.7), black, stroke);
        self.line(tip, tip.offset(head, head * 0.7), black, stroke);
    }

    /// Gray divider, small lightning glyph and a hint line at the page foot
    pub fn footer(&mut self, hint: &str) {
        let line_y = self.layout.height - FOOTER_OFFSET;
        let text_y = line_y + 8.0;
        let gray = self.theme.gray;
        let black = self.theme.black;
        let left = self.layout.content_left();
        let size = self.typography.sizes.footer - 2.0;

        self.rule(line_y, gray, 0.5);
        self.lightning(left, text_y + 2.0, 1.4, black);
        self.text_with(
            &hint.replace('|', ""),
            left + 30.0,
            text_y,
            size,
            gray,
            FontFace::Regular,
        );
    }

    /// Text link preceded by a back arrow, in the navigation size
    pub fn nav_link(&mut self, text: &str, target: LogicalUnit, x: f32, y: f32) {
        let size = self.typography.sizes.nav;
        let arrow = size * 0.5;
        self.arrow_left(x, y + size * 0.65, arrow);
        let text_x = x + arrow * 1.5 + 8.0;
        self.link_text(text, target, x, text_x, y, size);
    }

    /// Text link without an arrow
    pub fn plain_link(&mut self, text: &str, target: LogicalUnit, x: f32, y: f32, size: f32) {
        self.link_text(text, target, x, x, y, size);
    }

    fn link_text(&mut self, text: &str, target: LogicalUnit, x: f32, text_x: f32, y: f32, size: f32) {
        self.text(text, text_x, y, size);
        let width = self.text_width(text, size);
        self.link(
            Rect::new(x - 5.0, y - 2.0, text_x + width + 10.0, y + size + 6.0),
            target,
        );
    }

    /// Right-aligned row of text links along the bottom edge
    pub fn bottom_nav(&mut self, links: &[(&str, LogicalUnit)]) {
        let size = self.typography.sizes.nav;
        let y = self.layout.height - 50.0;
        let mut x = self.layout.content_right() - 10.0;
        for &(text, target) in links.iter().rev() {
            x -= self.text_width(text, size) + 30.0;
            self.plain_link(text, target, x, y, size);
        }
    }

    /// Section heading followed by a gray rule to the right margin
    pub fn section_title(&mut self, title: &str, y: f32) {
        let size = self.typography.sizes.subheader;
        let left = self.layout.content_left();
        let right = self.layout.content_right();
        let gray = self.theme.gray;
        self.text(title, left, y, size);
        let rule_y = y + size * 0.45;
        let start = left + self.text_width(title, size) + 15.0;
        self.line(Point::new(start, rule_y), Point::new(right, rule_y), gray, 0.5);
    }
}
