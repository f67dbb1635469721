//! Layout, colour and typography values
//!
//! These are plain values threaded from the entry point into the renderer;
//! nothing here is process-wide state.

use crate::constants::{MARGIN_BOTTOM, MARGIN_SIDE, PAGE_HEIGHT, PAGE_WIDTH, SAFE_ZONE_TOP};
use std::path::{Path, PathBuf};

/// RGB colour with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Self::rgb(level, level, level)
    }
}

/// Page geometry and the derived content box
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    /// Reserved top region kept free of content
    pub toolbar_height: f32,
    pub margin_side: f32,
    pub margin_bottom: f32,
    pub dot_spacing: f32,
    pub dot_size: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            toolbar_height: SAFE_ZONE_TOP,
            margin_side: MARGIN_SIDE,
            margin_bottom: MARGIN_BOTTOM,
            dot_spacing: 50.0,
            dot_size: 1.0,
        }
    }
}

impl Layout {
    pub fn content_left(&self) -> f32 {
        self.margin_side
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margin_side
    }

    pub fn content_top(&self) -> f32 {
        self.toolbar_height
    }

    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }

    pub fn content_width(&self) -> f32 {
        self.content_right() - self.content_left()
    }

    pub fn content_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }
}

/// Colour palette tuned for greyscale e-ink
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub black: Color,
    pub white: Color,
    pub gray: Color,
    pub light_gray: Color,
    pub dot_grid: Color,
    pub line: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            black: Color::gray(0.0),
            white: Color::gray(1.0),
            gray: Color::gray(0.5),
            light_gray: Color::gray(0.85),
            dot_grid: Color::gray(0.82),
            line: Color::gray(0.85),
        }
    }
}

/// Named font sizes used across page types
#[derive(Debug, Clone, PartialEq)]
pub struct FontSizes {
    pub title_cover: f32,
    pub title_page: f32,
    pub header: f32,
    pub subheader: f32,
    pub body: f32,
    pub nav: f32,
    pub footer: f32,
    pub small: f32,
    pub tiny: f32,
    pub day_number: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title_cover: 48.0,
            title_page: 52.0,
            header: 32.0,
            subheader: 28.0,
            body: 32.0,
            nav: 24.0,
            footer: 22.0,
            small: 24.0,
            tiny: 20.0,
            day_number: 26.0,
        }
    }
}

/// Font assets and sizes
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_path_regular: PathBuf,
    pub font_path_italic: PathBuf,
    pub sizes: FontSizes,
    pub arrow_size_large: f32,
    pub arrow_size_small: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_path_regular: PathBuf::from("fonts/EBGaramond-Regular.ttf"),
            font_path_italic: PathBuf::from("fonts/EBGaramond-Italic.ttf"),
            sizes: FontSizes::default(),
            arrow_size_large: 14.0,
            arrow_size_small: 10.0,
        }
    }
}

impl Typography {
    /// Font paths resolved against an asset root directory
    pub fn resolve_fonts(&self, asset_root: &Path) -> (PathBuf, PathBuf) {
        (
            asset_root.join(&self.font_path_regular),
            asset_root.join(&self.font_path_italic),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_box() {
        let layout = Layout::default();
        assert_eq!(layout.content_left(), 25.0);
        assert_eq!(layout.content_right(), 929.0);
        assert_eq!(layout.content_top(), 130.0);
        assert_eq!(layout.content_bottom(), 1596.0);
        assert_eq!(layout.content_width(), 904.0);
        assert_eq!(layout.content_height(), 1466.0);
    }

    #[test]
    fn test_resolve_fonts() {
        let typography = Typography::default();
        let (regular, italic) = typography.resolve_fonts(Path::new("/assets"));
        assert_eq!(regular, PathBuf::from("/assets/fonts/EBGaramond-Regular.ttf"));
        assert_eq!(italic, PathBuf::from("/assets/fonts/EBGaramond-Italic.ttf"));
    }
}
