//! Page map: deterministic page numbering for every logical unit
//!
//! The document order is fixed:
//! 1. Cover, main index, year index
//! 2. Guide pages, collection indexes, future log
//! 3. Per month: monthly spread, then per owned week: weekly spread followed
//!    by the daily logs of that week's in-year days
//! 4. Collection entries
//!
//! Offsets are threaded sequentially through a single pass, so page numbers
//! are contiguous and each unit's pages immediately follow the previous unit.

use crate::calendar::{Calendar, WeekId};
use crate::constants::{FIRST_PAGE, MONTHLY_SPREAD_PAGES, WEEKLY_SPREAD_PAGES};
use crate::settings::Settings;
use crate::types::*;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

/// A named span of content owning one or more pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalUnit {
    Cover,
    MainIndex,
    YearIndex,
    /// Zero-based guide page
    Guide(usize),
    /// Zero-based collection index ("Index C" is 0)
    CollectionIndex(usize),
    /// Zero-based future log page
    FutureLog(usize),
    /// Month ordinal 1..=12
    Month(u32),
    Week(WeekId),
    Day(NaiveDate),
    /// Zero-based collection entry across all indexes
    CollectionEntry(usize),
}

impl fmt::Display for LogicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalUnit::Cover => write!(f, "cover"),
            LogicalUnit::MainIndex => write!(f, "main index"),
            LogicalUnit::YearIndex => write!(f, "year index"),
            LogicalUnit::Guide(index) => write!(f, "guide page {}", index + 1),
            LogicalUnit::CollectionIndex(index) => {
                write!(f, "collection index {}", collection_index_label(*index))
            }
            LogicalUnit::FutureLog(index) => write!(f, "future log page {}", index + 1),
            LogicalUnit::Month(ordinal) => write!(f, "month {}", ordinal),
            LogicalUnit::Week(id) => write!(f, "week {}", id),
            LogicalUnit::Day(date) => write!(f, "day {}", date),
            LogicalUnit::CollectionEntry(index) => write!(f, "collection entry {}", index + 1),
        }
    }
}

/// Letter label for a collection index: "C", "D", ... then "Z2", "Z3", ...
pub fn collection_index_label(index: usize) -> String {
    const FIRST: u8 = b'C';
    const LETTERS: usize = (b'Z' - FIRST + 1) as usize;
    if index < LETTERS {
        ((FIRST + index as u8) as char).to_string()
    } else {
        format!("Z{}", index - LETTERS + 2)
    }
}

/// Contiguous pages owned by one logical unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    pub unit: LogicalUnit,
    pub start: usize,
    pub len: usize,
}

impl PageSpan {
    pub fn pages(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Page totals per document section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCounts {
    pub front_matter_pages: usize,
    pub guide_pages: usize,
    pub collection_index_pages: usize,
    pub future_log_pages: usize,
    pub monthly_pages: usize,
    pub weekly_pages: usize,
    pub daily_pages: usize,
    pub collection_pages: usize,
    pub total_pages: usize,
}

/// Immutable mapping between logical units and page numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMap {
    first_page: usize,
    spans: Vec<PageSpan>,
    index: HashMap<LogicalUnit, usize>,
}

/// Build the page map in one sequential pass over the fixed section order
pub fn build_page_map(calendar: &Calendar, settings: &Settings) -> Result<PageMap> {
    settings.validate()?;

    let mut builder = PageMapBuilder::new(FIRST_PAGE);

    builder.push(LogicalUnit::Cover, 1);
    builder.push(LogicalUnit::MainIndex, 1);
    builder.push(LogicalUnit::YearIndex, 1);

    builder.section("guides");
    for index in 0..settings.num_guide_pages {
        builder.push(LogicalUnit::Guide(index), 1);
    }

    builder.section("collection indexes");
    for index in 0..settings.num_collection_indexes {
        builder.push(LogicalUnit::CollectionIndex(index), 1);
    }

    builder.section("future log");
    for index in 0..settings.num_future_log_pages {
        builder.push(LogicalUnit::FutureLog(index), 1);
    }

    builder.section("calendar");
    for month in calendar.months() {
        builder.push(LogicalUnit::Month(month.ordinal), MONTHLY_SPREAD_PAGES);
        for week in calendar.weeks_of_month(month.ordinal) {
            builder.push(LogicalUnit::Week(week.id), WEEKLY_SPREAD_PAGES);
            for day in calendar.days_of_week(week) {
                builder.push(LogicalUnit::Day(day.date), settings.pages_per_day);
            }
        }
    }

    builder.section("collections");
    for index in 0..settings.total_collections() {
        builder.push(LogicalUnit::CollectionEntry(index), settings.pages_per_collection);
    }

    let map = builder.finish();
    log::info!(
        "Page map for {}: {} pages across {} units",
        calendar.year(),
        map.total_pages(),
        map.spans.len()
    );
    Ok(map)
}

struct PageMapBuilder {
    first_page: usize,
    cursor: usize,
    spans: Vec<PageSpan>,
    index: HashMap<LogicalUnit, usize>,
}

impl PageMapBuilder {
    fn new(first_page: usize) -> Self {
        Self {
            first_page,
            cursor: first_page,
            spans: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn section(&self, name: &str) {
        log::debug!("Section '{}' starts at page {}", name, self.cursor);
    }

    fn push(&mut self, unit: LogicalUnit, len: usize) {
        let previous = self.index.insert(unit, self.spans.len());
        debug_assert!(previous.is_none(), "{} mapped twice", unit);
        self.spans.push(PageSpan {
            unit,
            start: self.cursor,
            len,
        });
        self.cursor += len;
    }

    fn finish(self) -> PageMap {
        PageMap {
            first_page: self.first_page,
            spans: self.spans,
            index: self.index,
        }
    }
}

impl PageMap {
    /// First page of a unit
    pub fn page_of(&self, unit: LogicalUnit) -> Result<usize> {
        self.span_of(unit).map(|span| span.start)
    }

    /// All pages of a unit
    pub fn pages_of(&self, unit: LogicalUnit) -> Result<Range<usize>> {
        self.span_of(unit).map(PageSpan::pages)
    }

    pub fn span_of(&self, unit: LogicalUnit) -> Result<&PageSpan> {
        self.index
            .get(&unit)
            .map(|&position| &self.spans[position])
            .ok_or(PlannerError::UnknownUnit(unit))
    }

    /// Unit owning a page
    pub fn unit_at(&self, page: usize) -> Result<LogicalUnit> {
        self.span_at(page).map(|(span, _)| span.unit)
    }

    /// Span owning a page, with the page's offset inside the span
    pub fn span_at(&self, page: usize) -> Result<(&PageSpan, usize)> {
        if !self.page_range().contains(&page) {
            return Err(PlannerError::OutOfRange {
                page,
                total: self.total_pages(),
            });
        }
        let position = self.spans.partition_point(|span| span.start <= page) - 1;
        let span = &self.spans[position];
        Ok((span, page - span.start))
    }

    /// Spans in document order
    pub fn spans(&self) -> &[PageSpan] {
        &self.spans
    }

    pub fn first_page(&self) -> usize {
        self.first_page
    }

    /// Valid page numbers
    pub fn page_range(&self) -> Range<usize> {
        self.first_page..self.first_page + self.total_pages()
    }

    pub fn total_pages(&self) -> usize {
        self.spans.iter().map(|span| span.len).sum()
    }

    pub fn page_counts(&self) -> PageCounts {
        let mut counts = PageCounts::default();
        for span in &self.spans {
            let bucket = match span.unit {
                LogicalUnit::Cover | LogicalUnit::MainIndex | LogicalUnit::YearIndex => {
                    &mut counts.front_matter_pages
                }
                LogicalUnit::Guide(_) => &mut counts.guide_pages,
                LogicalUnit::CollectionIndex(_) => &mut counts.collection_index_pages,
                LogicalUnit::FutureLog(_) => &mut counts.future_log_pages,
                LogicalUnit::Month(_) => &mut counts.monthly_pages,
                LogicalUnit::Week(_) => &mut counts.weekly_pages,
                LogicalUnit::Day(_) => &mut counts.daily_pages,
                LogicalUnit::CollectionEntry(_) => &mut counts.collection_pages,
            };
            *bucket += span.len;
            counts.total_pages += span.len;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn map_for(year: i32, settings: &Settings) -> PageMap {
        let calendar = Calendar::for_year(year).unwrap();
        build_page_map(&calendar, settings).unwrap()
    }

    #[test]
    fn test_front_matter_order() {
        let map = map_for(2024, &Settings::default());
        assert_eq!(map.page_of(LogicalUnit::Cover).unwrap(), 0);
        assert_eq!(map.page_of(LogicalUnit::MainIndex).unwrap(), 1);
        assert_eq!(map.page_of(LogicalUnit::YearIndex).unwrap(), 2);
        assert_eq!(map.page_of(LogicalUnit::Guide(0)).unwrap(), 3);
        assert_eq!(map.page_of(LogicalUnit::Guide(5)).unwrap(), 8);
        assert_eq!(map.page_of(LogicalUnit::CollectionIndex(0)).unwrap(), 9);
        assert_eq!(map.page_of(LogicalUnit::CollectionIndex(1)).unwrap(), 10);
        assert_eq!(map.page_of(LogicalUnit::FutureLog(0)).unwrap(), 11);
        assert_eq!(map.page_of(LogicalUnit::Month(1)).unwrap(), 15);
    }

    #[test]
    fn test_month_week_day_interleaving() {
        let map = map_for(2024, &Settings::default());
        // January 2024 starts on a Monday
        let week1 = LogicalUnit::Week(WeekId { iso_year: 2024, week: 1 });
        assert_eq!(map.pages_of(LogicalUnit::Month(1)).unwrap(), 15..17);
        assert_eq!(map.pages_of(week1).unwrap(), 17..19);
        assert_eq!(map.page_of(LogicalUnit::Day(date(2024, 1, 1))).unwrap(), 19);
        assert_eq!(map.page_of(LogicalUnit::Day(date(2024, 1, 7))).unwrap(), 25);
        let week2 = LogicalUnit::Week(WeekId { iso_year: 2024, week: 2 });
        assert_eq!(map.page_of(week2).unwrap(), 26);
    }

    #[test]
    fn test_total_pages_2024() {
        let map = map_for(2024, &Settings::default());
        let counts = map.page_counts();
        assert_eq!(counts.front_matter_pages, 3);
        assert_eq!(counts.guide_pages, 6);
        assert_eq!(counts.collection_index_pages, 2);
        assert_eq!(counts.future_log_pages, 4);
        assert_eq!(counts.monthly_pages, 24);
        assert_eq!(counts.weekly_pages, 106);
        assert_eq!(counts.daily_pages, 366);
        assert_eq!(counts.collection_pages, 36);
        assert_eq!(map.total_pages(), 547);
        assert_eq!(counts.total_pages, 547);
    }

    #[test]
    fn test_pages_per_day_multiplies_daily_section() {
        let settings = Settings {
            pages_per_day: 2,
            ..Default::default()
        };
        let map = map_for(2025, &settings);
        assert_eq!(map.page_counts().daily_pages, 730);
        let pages = map.pages_of(LogicalUnit::Day(date(2025, 3, 1))).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(map.unit_at(pages.start + 1).unwrap(), LogicalUnit::Day(date(2025, 3, 1)));
    }

    #[test]
    fn test_contiguous_and_gap_free() {
        for settings in [
            Settings::default(),
            Settings {
                pages_per_day: 3,
                pages_per_collection: 2,
                num_guide_pages: 0,
                num_future_log_pages: 0,
                ..Default::default()
            },
        ] {
            let map = map_for(2026, &settings);
            let mut expected = map.first_page();
            for span in map.spans() {
                assert_eq!(span.start, expected);
                assert!(span.len >= 1);
                expected = span.end();
            }
            assert_eq!(expected, map.first_page() + map.total_pages());
        }
    }

    #[test]
    fn test_round_trip() {
        let map = map_for(2021, &Settings::default());
        for span in map.spans() {
            assert_eq!(map.unit_at(map.page_of(span.unit).unwrap()).unwrap(), span.unit);
        }
    }

    #[test]
    fn test_idempotent() {
        let calendar = Calendar::for_year(2027).unwrap();
        let settings = Settings::default();
        let a = build_page_map(&calendar, &settings).unwrap();
        let b = build_page_map(&calendar, &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_unit_and_out_of_range() {
        let map = map_for(2024, &Settings::default());
        assert!(matches!(
            map.page_of(LogicalUnit::Guide(6)),
            Err(PlannerError::UnknownUnit(LogicalUnit::Guide(6)))
        ));
        assert!(matches!(
            map.page_of(LogicalUnit::Day(date(2023, 12, 31))),
            Err(PlannerError::UnknownUnit(_))
        ));
        assert!(matches!(
            map.unit_at(547),
            Err(PlannerError::OutOfRange { page: 547, total: 547 })
        ));
        assert_eq!(map.unit_at(546).unwrap(), LogicalUnit::CollectionEntry(35));
    }

    #[test]
    fn test_year_crossing_week_owned_by_december() {
        // 2025-12-29 .. 2026-01-04 starts in December 2025
        let map = map_for(2025, &Settings::default());
        let week = LogicalUnit::Week(WeekId { iso_year: 2026, week: 1 });
        let december = map.page_of(LogicalUnit::Month(12)).unwrap();
        let week_page = map.page_of(week).unwrap();
        let collections = map.page_of(LogicalUnit::CollectionEntry(0)).unwrap();
        assert!(december < week_page && week_page < collections);

        let weekly_spreads = map
            .spans()
            .iter()
            .filter(|span| span.unit == week)
            .count();
        assert_eq!(weekly_spreads, 1);
        assert_eq!(
            map.page_of(LogicalUnit::Day(date(2025, 12, 29))).unwrap(),
            week_page + WEEKLY_SPREAD_PAGES
        );
    }

    #[test]
    fn test_year_crossing_week_owned_by_january() {
        // 2025-12-29 .. 2026-01-04 leads 2026 and renders under January
        let map = map_for(2026, &Settings::default());
        let week = LogicalUnit::Week(WeekId { iso_year: 2026, week: 1 });
        let january = map.pages_of(LogicalUnit::Month(1)).unwrap();
        assert_eq!(map.page_of(week).unwrap(), january.end);
        assert_eq!(
            map.page_of(LogicalUnit::Day(date(2026, 1, 1))).unwrap(),
            january.end + WEEKLY_SPREAD_PAGES
        );
    }

    #[test]
    fn test_collection_pages_appended_last() {
        let settings = Settings {
            pages_per_collection: 3,
            num_collection_indexes: 2,
            num_collections_per_index: 18,
            ..Default::default()
        };
        let map = map_for(2024, &settings);
        let counts = map.page_counts();
        assert_eq!(counts.collection_pages, 108);

        let first_entry = map.page_of(LogicalUnit::CollectionEntry(0)).unwrap();
        assert_eq!(first_entry + 108, map.total_pages());
        let last_day = map.pages_of(LogicalUnit::Day(date(2024, 12, 31))).unwrap();
        assert_eq!(last_day.end, first_entry);
    }

    #[test]
    fn test_collection_index_labels() {
        assert_eq!(collection_index_label(0), "C");
        assert_eq!(collection_index_label(1), "D");
        assert_eq!(collection_index_label(23), "Z");
        assert_eq!(collection_index_label(24), "Z2");
    }
}
