//! Shared constants for journal generation
//!
//! This module centralizes the fixed page geometry and the page counts of
//! the multi-page logical units.

// =============================================================================
// Page Geometry
// =============================================================================

/// Target page width in logical units (points)
pub const PAGE_WIDTH: f32 = 954.0;

/// Target page height in logical units (points)
pub const PAGE_HEIGHT: f32 = 1696.0;

/// Height of the reserved top region covered by the device toolbar
pub const SAFE_ZONE_TOP: f32 = 130.0;

/// Horizontal margin on both sides of every page
pub const MARGIN_SIDE: f32 = 25.0;

/// Bottom margin below the content box
pub const MARGIN_BOTTOM: f32 = 100.0;

// =============================================================================
// Page Numbering
// =============================================================================

/// Index of the first page in the document
pub const FIRST_PAGE: usize = 0;

/// Pages in a monthly spread (timeline + action plan)
pub const MONTHLY_SPREAD_PAGES: usize = 2;

/// Pages in a weekly spread (action plan + reflection)
pub const WEEKLY_SPREAD_PAGES: usize = 2;

/// Quarters shown by the future log
pub const QUARTERS_PER_YEAR: usize = 4;

// =============================================================================
// Output
// =============================================================================

/// Document title written into the PDF metadata
pub const DOCUMENT_TITLE: &str = "Bullet Journal";

/// Default output path for a given year
pub fn default_output_path(year: i32) -> std::path::PathBuf {
    std::path::PathBuf::from(format!("output/BulletJournal_rPPM_{}.pdf", year))
}
