//! printpdf-backed drawing surface

use super::surface::{FontFace, Paint, Surface};
use crate::geometry::Point;
use crate::style::{Color, Layout};
use crate::types::*;
use printpdf::font::ParsedFont;
use printpdf::graphics::{LinePoint, PaintMode, Polygon, PolygonRing, WindingOrder};
use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::text::TextItem;
use printpdf::{FontId, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb};
use std::path::Path;

/// Parsed regular and italic faces
pub struct FontSet {
    regular: ParsedFont,
    italic: ParsedFont,
}

impl FontSet {
    /// Load both faces, failing before any drawing if either is missing
    pub fn load(regular: &Path, italic: &Path) -> Result<Self> {
        Ok(Self {
            regular: load_font(regular)?,
            italic: load_font(italic)?,
        })
    }

    fn face(&self, face: FontFace) -> &ParsedFont {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Italic => &self.italic,
        }
    }
}

fn load_font(path: &Path) -> Result<ParsedFont> {
    if !path.is_file() {
        return Err(PlannerError::MissingAsset(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    let mut warnings = Vec::new();
    ParsedFont::from_bytes(&bytes, 0, &mut warnings)
        .ok_or_else(|| PlannerError::Font(format!("Failed to parse font {}", path.display())))
}

pub struct PdfSurface {
    doc: PdfDocument,
    fonts: FontSet,
    regular_id: FontId,
    italic_id: FontId,
    width: f32,
    height: f32,
    pages: Vec<Vec<Op>>,
}

impl PdfSurface {
    pub fn new(title: &str, layout: &Layout, fonts: FontSet) -> Self {
        let mut doc = PdfDocument::new(title);
        let regular_id = doc.add_font(&fonts.regular);
        let italic_id = doc.add_font(&fonts.italic);

        Self {
            doc,
            fonts,
            regular_id,
            italic_id,
            width: layout.width,
            height: layout.height,
            pages: Vec::new(),
        }
    }

    /// Serialize every page into PDF bytes
    pub fn finish(self) -> Vec<u8> {
        let Self {
            mut doc,
            pages,
            width,
            height,
            ..
        } = self;

        doc.pages = pages
            .into_iter()
            .map(|ops| PdfPage::new(Mm::from(Pt(width)), Mm::from(Pt(height)), ops))
            .collect();

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF writer reported {} warnings", warnings.len());
        }
        bytes
    }

    /// Ops of the current page; drawing before `begin_page` opens one
    fn ops(&mut self) -> &mut Vec<Op> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn font_id(&self, face: FontFace) -> FontId {
        match face {
            FontFace::Regular => self.regular_id.clone(),
            FontFace::Italic => self.italic_id.clone(),
        }
    }

    fn to_pdf(&self, point: Point) -> LinePoint {
        LinePoint {
            p: printpdf::graphics::Point {
                x: Pt(point.x),
                y: Pt(self.height - point.y),
            },
            bezier: false,
        }
    }
}

fn pdf_color(color: Color) -> printpdf::color::Color {
    printpdf::color::Color::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

impl Surface for PdfSurface {
    fn begin_page(&mut self) -> usize {
        self.pages.push(Vec::new());
        self.pages.len() - 1
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn path(&mut self, points: &[Point], closed: bool, paint: Paint) {
        if points.len() < 2 {
            return;
        }

        let mut ops = Vec::new();
        if let Some(fill) = paint.fill {
            ops.push(Op::SetFillColor {
                col: pdf_color(fill),
            });
        }
        if let Some(stroke) = paint.stroke {
            ops.push(Op::SetOutlineColor {
                col: pdf_color(stroke),
            });
            ops.push(Op::SetOutlineThickness {
                pt: Pt(paint.width),
            });
        }

        let mode = match (paint.fill, paint.stroke) {
            (Some(_), Some(_)) => PaintMode::FillStroke,
            (Some(_), None) => PaintMode::Fill,
            _ => PaintMode::Stroke,
        };

        if closed || paint.fill.is_some() {
            let ring = PolygonRing {
                points: points.iter().map(|&p| self.to_pdf(p)).collect(),
            };
            ops.push(Op::DrawPolygon {
                polygon: Polygon {
                    rings: vec![ring],
                    mode,
                    winding_order: WindingOrder::NonZero,
                },
            });
        } else {
            // open paths are stroked one segment at a time
            for pair in points.windows(2) {
                let ring = PolygonRing {
                    points: vec![self.to_pdf(pair[0]), self.to_pdf(pair[1])],
                };
                ops.push(Op::DrawPolygon {
                    polygon: Polygon {
                        rings: vec![ring],
                        mode: PaintMode::Stroke,
                        winding_order: WindingOrder::NonZero,
                    },
                });
            }
        }

        self.ops().extend(ops);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, face: FontFace) {
        if text.is_empty() {
            return;
        }
        let font = self.font_id(face);
        // baseline sits one font size below the top edge
        let baseline = self.height - (y + size);

        let ops = vec![
            Op::StartTextSection,
            Op::SetFillColor {
                col: pdf_color(color),
            },
            Op::SetFontSize {
                size: Pt(size),
                font: font.clone(),
            },
            Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(x), Pt(baseline)),
            },
            Op::WriteText {
                items: vec![TextItem::Text(text.to_string())],
                font,
            },
            Op::EndTextSection,
        ];
        self.ops().extend(ops);
    }

    fn text_width(&self, text: &str, size: f32, face: FontFace) -> f32 {
        let font = self.fonts.face(face);
        let units_per_em = font.font_metrics.units_per_em.max(1) as f32;
        text.chars()
            .filter_map(|ch| font.lookup_glyph_index(ch as u32))
            .map(|glyph| font.get_horizontal_advance(glyph) as f32 / units_per_em * size)
            .sum()
    }
}
