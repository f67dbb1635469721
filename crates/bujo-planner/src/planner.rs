//! End-to-end planner generation
//!
//! Calendar -> page map -> render -> resolve links -> apply links ->
//! validate, strictly in that order and on one thread. The async entry
//! point moves the whole pipeline onto the blocking pool.

use crate::calendar::{Calendar, derive_calendar};
use crate::constants::DOCUMENT_TITLE;
use crate::links::{LinkRegistry, ResolvedLink, apply_links};
use crate::page_map::{PageCounts, PageMap, build_page_map};
use crate::render::{DryRunSurface, FontSet, PageContext, PdfSurface, Surface, render_document};
use crate::settings::Settings;
use crate::style::{Layout, Theme, Typography};
use crate::types::*;
use crate::validate::{ValidationReport, validate, validate_layout};
use lopdf::Document;
use std::path::PathBuf;

/// Inputs of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerOptions {
    pub year: i32,
    pub settings: Settings,
    pub layout: Layout,
    pub theme: Theme,
    pub typography: Typography,
    /// Directory font paths are resolved against
    pub asset_root: PathBuf,
}

impl PlannerOptions {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            settings: Settings::default(),
            layout: Layout::default(),
            theme: Theme::default(),
            typography: Typography::default(),
            asset_root: PathBuf::from("."),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_asset_root(mut self, asset_root: impl Into<PathBuf>) -> Self {
        self.asset_root = asset_root.into();
        self
    }
}

/// A generated planner with links applied, ready to save
pub struct Planner {
    pub document: Document,
    pub page_map: PageMap,
    pub links: Vec<ResolvedLink>,
    pub report: ValidationReport,
}

impl Planner {
    pub fn page_counts(&self) -> PageCounts {
        self.page_map.page_counts()
    }
}

/// Outcome of a run against the counting surface
#[derive(Debug, Clone)]
pub struct DryRun {
    pub page_map: PageMap,
    pub links: Vec<ResolvedLink>,
    pub report: ValidationReport,
    /// Paths and text runs that would have been drawn
    pub primitives: usize,
}

impl DryRun {
    pub fn page_counts(&self) -> PageCounts {
        self.page_map.page_counts()
    }
}

/// Generate a planner on the blocking thread pool
pub async fn generate(options: PlannerOptions) -> Result<Planner> {
    tokio::task::spawn_blocking(move || build_planner(&options)).await?
}

/// Generate a planner on the current thread
pub fn build_planner(options: &PlannerOptions) -> Result<Planner> {
    let (calendar, page_map) = plan(options)?;

    let (regular, italic) = options.typography.resolve_fonts(&options.asset_root);
    let fonts = FontSet::load(&regular, &italic)?;

    let title = format!("{} {}", DOCUMENT_TITLE, options.year);
    let mut surface = PdfSurface::new(&title, &options.layout, fonts);
    let links = render(options, &calendar, &page_map, &mut surface)?;

    let bytes = surface.finish();
    log::debug!("Serialized {} bytes", bytes.len());
    let mut document = Document::load_mem(&bytes)?;
    apply_links(&mut document, &links, options.layout.height)?;

    let report = validate(&document, &page_map, &links);
    Ok(Planner {
        document,
        page_map,
        links,
        report,
    })
}

/// Run the pipeline without fonts or PDF output
pub fn dry_run(options: &PlannerOptions) -> Result<DryRun> {
    let (calendar, page_map) = plan(options)?;

    let mut surface = DryRunSurface::new();
    let links = render(options, &calendar, &page_map, &mut surface)?;
    let report = validate_layout(surface.page_count(), &page_map, &links);

    Ok(DryRun {
        page_map,
        links,
        report,
        primitives: surface.paths() + surface.texts(),
    })
}

fn plan(options: &PlannerOptions) -> Result<(Calendar, PageMap)> {
    let calendar = derive_calendar(options.year, &options.settings)?;
    log::info!(
        "Derived calendar for {}: {} weeks, {} days",
        calendar.year(),
        calendar.weeks().len(),
        calendar.total_days()
    );
    let page_map = build_page_map(&calendar, &options.settings)?;
    Ok((calendar, page_map))
}

fn render(
    options: &PlannerOptions,
    calendar: &Calendar,
    page_map: &PageMap,
    surface: &mut dyn Surface,
) -> Result<Vec<ResolvedLink>> {
    let ctx = PageContext {
        calendar,
        settings: &options.settings,
        layout: &options.layout,
        theme: &options.theme,
        typography: &options.typography,
    };

    let mut registry = LinkRegistry::new();
    render_document(&ctx, page_map, surface, &mut registry)?;
    registry.resolve_all(page_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_is_clean() {
        let run = dry_run(&PlannerOptions::new(2024)).unwrap();
        assert!(run.report.is_ok(), "{:?}", run.report.summary_lines());
        assert_eq!(run.page_counts().total_pages, 547);
        assert!(!run.links.is_empty());
        assert!(run.primitives > run.page_map.total_pages());
    }

    #[test]
    fn test_invalid_settings_fail_before_rendering() {
        let options = PlannerOptions::new(2024).with_settings(Settings {
            pages_per_day: 0,
            ..Settings::default()
        });
        assert!(matches!(dry_run(&options), Err(PlannerError::Config(_))));
        assert!(matches!(
            build_planner(&options),
            Err(PlannerError::Config(_))
        ));
    }

    #[test]
    fn test_build_planner_with_system_fonts() {
        let dir = PathBuf::from("/usr/share/fonts/truetype/dejavu");
        let (regular, italic) = (dir.join("DejaVuSerif.ttf"), dir.join("DejaVuSerif-Italic.ttf"));
        if !regular.is_file() || !italic.is_file() {
            return;
        }

        let mut options = PlannerOptions::new(2024);
        options.typography.font_path_regular = regular;
        options.typography.font_path_italic = italic;

        let planner = build_planner(&options).unwrap();
        assert_eq!(planner.document.get_pages().len(), planner.page_map.total_pages());
        assert_eq!(planner.page_counts().total_pages, 547);
        assert_eq!(
            crate::links::count_link_annotations(&planner.document),
            planner.links.len()
        );
        assert!(planner.report.is_ok(), "{:?}", planner.report.summary_lines());
    }

    #[test]
    fn test_missing_fonts_fail_fast() {
        let dir = tempfile::tempdir().unwrap();
        let options = PlannerOptions::new(2024).with_asset_root(dir.path());
        match build_planner(&options) {
            Err(PlannerError::MissingAsset(path)) => assert!(path.starts_with(dir.path())),
            Err(other) => panic!("Expected MissingAsset, got {:?}", other),
            Ok(_) => panic!("Expected MissingAsset"),
        }
    }
}
