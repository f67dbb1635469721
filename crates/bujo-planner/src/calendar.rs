//! Calendar model for a single year
//!
//! Derives months, Monday-aligned ISO weeks, days and quarters. Weeks at the
//! year boundaries may belong to a neighbouring ISO year; they are kept so
//! every day of the year has exactly one week, but their out-of-year dates
//! never become days of their own.

use crate::constants::QUARTERS_PER_YEAR;
use crate::settings::Settings;
use crate::types::*;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::ops::Range;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Supported years
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// ISO week identity: the ISO year and week number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekId {
    pub iso_year: i32,
    pub week: u32,
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.week)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthInfo {
    /// 1..=12
    pub ordinal: u32,
    pub name: &'static str,
    pub abbrev: &'static str,
    pub days: u32,
    /// Zero-based day-of-year of the 1st
    pub start_day_of_year: usize,
    /// Indices into `Calendar::weeks` of the weeks this month owns
    pub weeks: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekInfo {
    pub id: WeekId,
    pub monday: NaiveDate,
    /// Month whose section renders this week's spread
    pub owner_month: u32,
    /// Indices into `Calendar::days` of this week's in-year days
    pub day_range: Range<usize>,
}

impl WeekInfo {
    /// All seven dates, Monday first, including any outside the year
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(move |offset| self.monday + Duration::days(offset))
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(6)
    }

    /// Short label such as "W5"
    pub fn label(&self) -> String {
        format!("W{}", self.id.week)
    }

    /// Date range label such as "Dec 29 - Jan 4"
    pub fn range_label(&self) -> String {
        format!("{} - {}", short_date(self.monday), short_date(self.sunday()))
    }

    /// Whether this week belongs to the ISO numbering of `year`
    pub fn is_iso_week_of(&self, year: i32) -> bool {
        self.id.iso_year == year
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayInfo {
    pub date: NaiveDate,
    /// 1..=12
    pub month: u32,
    /// Index into `Calendar::weeks`
    pub week_index: usize,
    /// Zero-based day of the year
    pub day_of_year: usize,
}

impl DayInfo {
    /// Label such as "Mar 14"
    pub fn label(&self) -> String {
        short_date(self.date)
    }

    /// Abbreviated weekday name ("Mon", "Tue", ...)
    pub fn weekday_abbrev(&self) -> String {
        self.date.weekday().to_string()
    }

    pub fn is_last_day_of_week(&self) -> bool {
        self.date.weekday().num_days_from_monday() == 6
    }

    pub fn is_last_day_of_month(&self) -> bool {
        self.date.succ_opt().is_none_or(|next| next.month() != self.month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quarter {
    /// 1..=4
    pub ordinal: u32,
    pub months: [u32; 3],
}

/// Quarter ordinal (1..=4) for a month ordinal (1..=12)
pub fn quarter_of_month(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

/// Immutable calendar structure of one year
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    year: i32,
    months: Vec<MonthInfo>,
    weeks: Vec<WeekInfo>,
    days: Vec<DayInfo>,
    quarters: Vec<Quarter>,
}

/// Derive the calendar for `year`, rejecting settings that leave a unit pageless
pub fn derive_calendar(year: i32, settings: &Settings) -> Result<Calendar> {
    settings.validate()?;
    Calendar::for_year(year)
}

impl Calendar {
    pub fn for_year(year: i32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PlannerError::Config(format!(
                "Year {} is outside {}..={}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }

        let first = ymd(year, 1, 1)?;
        let last = ymd(year, 12, 31)?;
        let total_days = (last - first).num_days() as usize + 1;

        // Monday on or before January 1st
        let first_monday = first - Duration::days(first.weekday().num_days_from_monday() as i64);

        let mut weeks = Vec::new();
        let mut monday = first_monday;
        while monday <= last {
            let iso = monday.iso_week();
            let offset = (monday - first).num_days();
            let start = offset.max(0) as usize;
            let end = (offset + 7).min(total_days as i64) as usize;
            let owner_month = if monday.year() < year {
                1
            } else {
                monday.month()
            };
            weeks.push(WeekInfo {
                id: WeekId {
                    iso_year: iso.year(),
                    week: iso.week(),
                },
                monday,
                owner_month,
                day_range: start..end,
            });
            monday += Duration::days(7);
        }

        let days = (0..total_days)
            .map(|day_of_year| {
                let date = first + Duration::days(day_of_year as i64);
                DayInfo {
                    date,
                    month: date.month(),
                    week_index: ((date - first_monday).num_days() / 7) as usize,
                    day_of_year,
                }
            })
            .collect::<Vec<_>>();

        let mut months = Vec::with_capacity(12);
        for ordinal in 1..=12u32 {
            let start = ymd(year, ordinal, 1)?;
            let next = if ordinal == 12 {
                ymd(year + 1, 1, 1)?
            } else {
                ymd(year, ordinal + 1, 1)?
            };
            months.push(MonthInfo {
                ordinal,
                name: MONTH_NAMES[ordinal as usize - 1],
                abbrev: MONTH_ABBREVS[ordinal as usize - 1],
                days: (next - start).num_days() as u32,
                start_day_of_year: start.ordinal0() as usize,
                weeks: weeks
                    .iter()
                    .enumerate()
                    .filter(|(_, week)| week.owner_month == ordinal)
                    .map(|(index, _)| index)
                    .collect(),
            });
        }

        let mut quarters: Vec<Quarter> = (1..=QUARTERS_PER_YEAR as u32)
            .map(|ordinal| Quarter {
                ordinal,
                months: [0; 3],
            })
            .collect();
        for ordinal in 1..=12u32 {
            let quarter = &mut quarters[(quarter_of_month(ordinal) - 1) as usize];
            quarter.months[((ordinal - 1) % 3) as usize] = ordinal;
        }

        Ok(Self {
            year,
            months,
            weeks,
            days,
            quarters,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn months(&self) -> &[MonthInfo] {
        &self.months
    }

    /// Month by ordinal (1..=12)
    pub fn month(&self, ordinal: u32) -> Option<&MonthInfo> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.months.get(index as usize))
    }

    pub fn weeks(&self) -> &[WeekInfo] {
        &self.weeks
    }

    pub fn week(&self, id: WeekId) -> Option<&WeekInfo> {
        self.weeks.iter().find(|week| week.id == id)
    }

    /// Weeks owned by a month, in order
    pub fn weeks_of_month(&self, ordinal: u32) -> impl Iterator<Item = &WeekInfo> {
        self.month(ordinal)
            .into_iter()
            .flat_map(|month| month.weeks.iter().map(|&index| &self.weeks[index]))
    }

    pub fn days(&self) -> &[DayInfo] {
        &self.days
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayInfo> {
        if date.year() != self.year {
            return None;
        }
        self.days.get(date.ordinal0() as usize)
    }

    /// In-year days of a week, Monday first
    pub fn days_of_week(&self, week: &WeekInfo) -> &[DayInfo] {
        &self.days[week.day_range.clone()]
    }

    /// Days of a month, in order
    pub fn days_of_month(&self, ordinal: u32) -> &[DayInfo] {
        match self.month(ordinal) {
            Some(month) => {
                let start = month.start_day_of_year;
                &self.days[start..start + month.days as usize]
            }
            None => &[],
        }
    }

    /// Week containing an in-year date
    pub fn week_of(&self, date: NaiveDate) -> Option<&WeekInfo> {
        self.day(date).map(|day| &self.weeks[day.week_index])
    }

    pub fn quarters(&self) -> &[Quarter] {
        &self.quarters
    }

    pub fn total_days(&self) -> usize {
        self.days.len()
    }

    /// Number of weeks the ISO calendar assigns to this year (52 or 53)
    pub fn iso_weeks_in_year(&self) -> usize {
        self.weeks
            .iter()
            .filter(|week| week.is_iso_week_of(self.year))
            .count()
    }
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        PlannerError::Config(format!("Invalid date {:04}-{:02}-{:02}", year, month, day))
    })
}

fn short_date(date: NaiveDate) -> String {
    format!("{} {}", MONTH_ABBREVS[date.month0() as usize], date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_twelve_months_and_iso_week_counts() {
        for year in 1990..=2060 {
            let calendar = Calendar::for_year(year).unwrap();
            assert_eq!(calendar.months().len(), 12);

            let iso_weeks = calendar.iso_weeks_in_year();
            assert!(iso_weeks == 52 || iso_weeks == 53, "{} has {}", year, iso_weeks);
            assert_eq!(iso_weeks as u32, date(year, 12, 28).iso_week().week());

            let spans = calendar.weeks().len();
            assert!((53..=54).contains(&spans), "{} spans {} weeks", year, spans);
        }
    }

    #[test]
    fn test_every_day_has_one_week_and_month() {
        for year in [2020, 2021, 2024, 2025, 2026] {
            let calendar = Calendar::for_year(year).unwrap();
            let mut seen = vec![0usize; calendar.total_days()];

            for week in calendar.weeks() {
                for day in calendar.days_of_week(week) {
                    seen[day.day_of_year] += 1;
                    assert!(week.dates().any(|d| d == day.date));
                }
            }
            assert!(seen.iter().all(|&count| count == 1));

            for day in calendar.days() {
                assert_eq!(day.month, day.date.month());
                assert!(calendar.days_of_month(day.month).contains(day));
            }
        }
    }

    #[test]
    fn test_leap_year() {
        let calendar = Calendar::for_year(2024).unwrap();
        assert_eq!(calendar.total_days(), 366);
        assert_eq!(calendar.month(2).unwrap().days, 29);
        assert_eq!(calendar.iso_weeks_in_year(), 52);
        assert_eq!(calendar.weeks().len(), 53);

        let calendar = Calendar::for_year(2023).unwrap();
        assert_eq!(calendar.total_days(), 365);
        assert_eq!(calendar.month(2).unwrap().days, 28);
    }

    #[test]
    fn test_leading_week_from_previous_iso_year() {
        // January 1st 2021 is a Friday in 2020-W53
        let calendar = Calendar::for_year(2021).unwrap();
        let first = &calendar.weeks()[0];
        assert_eq!(first.id, WeekId { iso_year: 2020, week: 53 });
        assert_eq!(first.monday, date(2020, 12, 28));
        assert_eq!(first.owner_month, 1);

        let in_year = calendar.days_of_week(first);
        assert_eq!(in_year.len(), 3);
        assert_eq!(in_year[0].date, date(2021, 1, 1));
        assert!(calendar.day(date(2020, 12, 31)).is_none());
    }

    #[test]
    fn test_trailing_week_from_next_iso_year() {
        // December 29th 2025 is the Monday of 2026-W01
        let calendar = Calendar::for_year(2025).unwrap();
        let last = calendar.weeks().last().unwrap();
        assert_eq!(last.id, WeekId { iso_year: 2026, week: 1 });
        assert_eq!(last.owner_month, 12);
        assert_eq!(calendar.days_of_week(last).len(), 3);
        assert_eq!(last.range_label(), "Dec 29 - Jan 4");
    }

    #[test]
    fn test_week_of_date() {
        let calendar = Calendar::for_year(2026).unwrap();
        let week = calendar.week_of(date(2026, 1, 1)).unwrap();
        assert_eq!(week.id, WeekId { iso_year: 2026, week: 1 });
        assert_eq!(week.label(), "W1");
        assert_eq!(calendar.iso_weeks_in_year(), 53);
    }

    #[test]
    fn test_month_weeks_follow_monday() {
        let calendar = Calendar::for_year(2024).unwrap();
        // 2024-01-29 (Mon) .. 2024-02-04 belongs to January
        let january: Vec<_> = calendar.weeks_of_month(1).map(|w| w.monday).collect();
        assert_eq!(january.last(), Some(&date(2024, 1, 29)));
        let february: Vec<_> = calendar.weeks_of_month(2).map(|w| w.monday).collect();
        assert_eq!(february.first(), Some(&date(2024, 2, 5)));

        let owned: usize = calendar.months().iter().map(|m| m.weeks.len()).sum();
        assert_eq!(owned, calendar.weeks().len());
    }

    #[test]
    fn test_quarters() {
        let calendar = Calendar::for_year(2024).unwrap();
        assert_eq!(calendar.quarters().len(), 4);
        assert_eq!(calendar.quarters()[0].months, [1, 2, 3]);
        assert_eq!(calendar.quarters()[1].months, [4, 5, 6]);
        assert_eq!(calendar.quarters()[3].months, [10, 11, 12]);
        for quarter in calendar.quarters() {
            for month in quarter.months {
                assert_eq!(quarter_of_month(month), quarter.ordinal);
            }
        }
        assert_eq!(quarter_of_month(1), 1);
        assert_eq!(quarter_of_month(3), 1);
        assert_eq!(quarter_of_month(4), 2);
        assert_eq!(quarter_of_month(12), 4);
    }

    #[test]
    fn test_day_flags() {
        let calendar = Calendar::for_year(2024).unwrap();
        let feb29 = calendar.day(date(2024, 2, 29)).unwrap();
        assert!(feb29.is_last_day_of_month());
        assert_eq!(feb29.weekday_abbrev(), "Thu");
        assert_eq!(feb29.label(), "Feb 29");

        let sunday = calendar.day(date(2024, 1, 7)).unwrap();
        assert!(sunday.is_last_day_of_week());
        assert!(calendar.day(date(2024, 12, 31)).unwrap().is_last_day_of_month());
    }

    #[test]
    fn test_derive_rejects_pageless_units() {
        let settings = Settings {
            pages_per_day: 0,
            ..Default::default()
        };
        assert!(matches!(
            derive_calendar(2024, &settings),
            Err(PlannerError::Config(_))
        ));

        let settings = Settings {
            pages_per_collection: 0,
            ..Default::default()
        };
        assert!(matches!(
            derive_calendar(2024, &settings),
            Err(PlannerError::Config(_))
        ));
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(Calendar::for_year(0), Err(PlannerError::Config(_))));
        assert!(matches!(Calendar::for_year(10_000), Err(PlannerError::Config(_))));
    }
}
