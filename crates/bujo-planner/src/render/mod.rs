//! Page rendering
//!
//! [`render_document`] walks the page map in order and draws every page of
//! every unit onto a [`Surface`], recording navigation through a
//! [`LinkRegistry`] rather than looking up target pages.

pub mod guides;
pub mod pages;
pub mod pdf;
pub mod primitives;
pub mod surface;

pub use pdf::{FontSet, PdfSurface};
pub use primitives::Canvas;
pub use surface::{DryRunSurface, FontFace, Paint, Surface};

use crate::calendar::Calendar;
use crate::links::LinkRegistry;
use crate::page_map::{LogicalUnit, PageMap};
use crate::settings::Settings;
use crate::style::{Layout, Theme, Typography};
use crate::types::*;

/// Everything a page routine may read
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub calendar: &'a Calendar,
    pub settings: &'a Settings,
    pub layout: &'a Layout,
    pub theme: &'a Theme,
    pub typography: &'a Typography,
}

/// Draw every page of `page_map` onto `surface`
///
/// The surface must be empty. Returns the number of pages drawn.
pub fn render_document(
    ctx: &PageContext,
    page_map: &PageMap,
    surface: &mut dyn Surface,
    links: &mut LinkRegistry,
) -> Result<usize> {
    if surface.page_count() != page_map.first_page() {
        return Err(PlannerError::Config(format!(
            "Surface already holds {} pages",
            surface.page_count()
        )));
    }

    for span in page_map.spans() {
        for offset in 0..span.len {
            let page = surface.begin_page();
            let mut canvas = Canvas::new(
                &mut *surface,
                &mut *links,
                page,
                ctx.layout,
                ctx.theme,
                ctx.typography,
            );
            render_page(ctx, &mut canvas, span.unit, offset)?;
        }
    }

    log::info!("Rendered {} pages", surface.page_count());
    Ok(surface.page_count())
}

/// Draw page `offset` of `unit`
fn render_page(
    ctx: &PageContext,
    canvas: &mut Canvas,
    unit: LogicalUnit,
    offset: usize,
) -> Result<()> {
    match unit {
        LogicalUnit::Cover => pages::cover(ctx, canvas),
        LogicalUnit::MainIndex => pages::main_index(ctx, canvas),
        LogicalUnit::YearIndex => pages::year_index(ctx, canvas),
        LogicalUnit::Guide(index) => guides::guide_page(ctx, canvas, index),
        LogicalUnit::CollectionIndex(index) => pages::collection_index(ctx, canvas, index),
        LogicalUnit::FutureLog(index) => pages::future_log(ctx, canvas, index),
        LogicalUnit::Month(ordinal) => {
            let month = ctx
                .calendar
                .month(ordinal)
                .ok_or(PlannerError::UnknownUnit(unit))?;
            if offset == 0 {
                pages::monthly_timeline(ctx, canvas, month);
            } else {
                pages::monthly_action_plan(canvas, month);
            }
        }
        LogicalUnit::Week(id) => {
            let week = ctx
                .calendar
                .week(id)
                .ok_or(PlannerError::UnknownUnit(unit))?;
            pages::weekly_page(ctx, canvas, week, offset > 0);
        }
        LogicalUnit::Day(date) => {
            let day = ctx
                .calendar
                .day(date)
                .ok_or(PlannerError::UnknownUnit(unit))?;
            pages::daily_log(ctx, canvas, day, offset > 0);
        }
        LogicalUnit::CollectionEntry(index) => pages::collection_entry(ctx, canvas, index),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_map::build_page_map;

    struct Styles {
        layout: Layout,
        theme: Theme,
        typography: Typography,
    }

    fn render(year: i32, settings: &Settings) -> (PageMap, DryRunSurface, LinkRegistry) {
        let calendar = Calendar::for_year(year).unwrap();
        let page_map = build_page_map(&calendar, settings).unwrap();
        let styles = Styles {
            layout: Layout::default(),
            theme: Theme::default(),
            typography: Typography::default(),
        };
        let ctx = PageContext {
            calendar: &calendar,
            settings,
            layout: &styles.layout,
            theme: &styles.theme,
            typography: &styles.typography,
        };
        let mut surface = DryRunSurface::new();
        let mut links = LinkRegistry::new();
        render_document(&ctx, &page_map, &mut surface, &mut links).unwrap();
        (page_map, surface, links)
    }

    #[test]
    fn test_renders_one_page_per_mapped_page() {
        let (page_map, surface, _) = render(2024, &Settings::default());
        assert_eq!(surface.page_count(), page_map.total_pages());
        assert_eq!(surface.page_count(), 547);
    }

    #[test]
    fn test_every_intent_resolves() {
        for year in [2020, 2021, 2024, 2026] {
            let (page_map, _, links) = render(year, &Settings::default());
            let total = page_map.total_pages();
            let resolved = links.resolve_all(&page_map).unwrap();
            assert!(resolved.iter().all(|l| l.target_page < total && l.source_page < total));
        }
    }

    #[test]
    fn test_every_page_records_a_link_except_cover() {
        let (page_map, _, links) = render(2024, &Settings::default());
        let mut linked = vec![false; page_map.total_pages()];
        for intent in links.intents() {
            linked[intent.source_page] = true;
        }
        assert!(!linked[0]);
        assert!(linked[1..].iter().all(|&l| l));
    }

    #[test]
    fn test_year_index_links_every_day() {
        let (page_map, _, links) = render(2024, &Settings::default());
        let year_index = page_map.page_of(LogicalUnit::YearIndex).unwrap();
        let day_links = links
            .intents()
            .iter()
            .filter(|i| i.source_page == year_index)
            .filter(|i| matches!(i.target, LogicalUnit::Day(_)))
            .count();
        assert_eq!(day_links, 366);
    }

    #[test]
    fn test_main_index_links_every_week() {
        let (page_map, _, links) = render(2026, &Settings::default());
        let calendar = Calendar::for_year(2026).unwrap();
        let week_links = links
            .intents()
            .iter()
            .filter(|i| i.source_page == page_map.page_of(LogicalUnit::MainIndex).unwrap())
            .filter(|i| matches!(i.target, LogicalUnit::Week(_)))
            .count();
        assert_eq!(week_links, calendar.weeks().len());
    }

    #[test]
    fn test_rejects_used_surface() {
        let calendar = Calendar::for_year(2024).unwrap();
        let settings = Settings::default();
        let page_map = build_page_map(&calendar, &settings).unwrap();
        let (layout, theme, typography) =
            (Layout::default(), Theme::default(), Typography::default());
        let ctx = PageContext {
            calendar: &calendar,
            settings: &settings,
            layout: &layout,
            theme: &theme,
            typography: &typography,
        };
        let mut surface = DryRunSurface::new();
        surface.begin_page();
        let result = render_document(&ctx, &page_map, &mut surface, &mut LinkRegistry::new());
        assert!(matches!(result, Err(PlannerError::Config(_))));
    }
}
