//! Page routines for the calendar, index and collection pages

use super::PageContext;
use super::guides::GUIDE_TITLES;
use super::primitives::Canvas;
use super::surface::{FontFace, Paint};
use crate::calendar::{DayInfo, MonthInfo, WeekInfo};
use crate::constants::DOCUMENT_TITLE;
use crate::geometry::{Point, Rect};
use crate::page_map::{LogicalUnit, collection_index_label};
use chrono::Datelike;

const HINT_DAILY_LOG: &str = "Rapid log your thoughts as they bubble up.";
const HINT_WEEKLY_ACTION: &str = "Write only what you can get done this week.";
const HINT_WEEKLY_REFLECTION: &str = "Tidy, acknowledge, migrate, enact.";
const HINT_COLLECTION_INDEX: &str = "Organize related information by topic.";
const HINT_FUTURE_LOG: &str = "Store actions and events outside the current month.";
const HINT_MONTHLY_TIMELINE: &str = "Log events after they happen for an accurate record.";
const HINT_MONTHLY_ACTION: &str = "Organize and prioritize your monthly tasks.";

/// Nav row position below the safe zone
fn nav_y(canvas: &Canvas) -> f32 {
    canvas.layout.content_top() + 5.0
}

/// Page title position below the nav row
fn title_y(canvas: &Canvas) -> f32 {
    canvas.layout.content_top() + 50.0
}

pub fn cover(ctx: &PageContext, canvas: &mut Canvas) {
    let (width, height) = (canvas.layout.width, canvas.layout.height);
    let black = canvas.theme.black;
    let white = canvas.theme.white;
    canvas.rect(Rect::new(0.0, 0.0, width, height), Paint::fill(black));

    let left = 50.0;
    let mut y = height * 0.15;
    canvas.lightning(left, y + 20.0, 8.0, white);

    let text_x = left + 130.0;
    for word in DOCUMENT_TITLE.split_whitespace() {
        canvas.text_with(word, text_x, y, 90.0, white, FontFace::Regular);
        y += 95.0;
    }
    canvas.text_with(
        &ctx.calendar.year().to_string(),
        text_x,
        y + 35.0,
        140.0,
        white,
        FontFace::Regular,
    );
}

pub fn main_index(ctx: &PageContext, canvas: &mut Canvas) {
    let sizes = canvas.typography.sizes.clone();
    let left = canvas.layout.content_left();
    let right = canvas.layout.content_right();
    let line = canvas.theme.line;
    let gray = canvas.theme.gray;

    canvas.text("Index A", left, canvas.layout.content_top() + 10.0, sizes.title_page);

    let mut entries: Vec<(String, LogicalUnit)> = GUIDE_TITLES
        .iter()
        .take(ctx.settings.num_guide_pages)
        .enumerate()
        .map(|(i, title)| (title.to_string(), LogicalUnit::Guide(i)))
        .collect();
    if ctx.settings.num_guide_pages > GUIDE_TITLES.len() {
        entries.push(("Notes".to_string(), LogicalUnit::Guide(GUIDE_TITLES.len())));
    }
    if ctx.settings.num_future_log_pages > 0 {
        entries.push(("Future log".to_string(), LogicalUnit::FutureLog(0)));
    }

    let mut y = canvas.layout.content_top() + 80.0;
    let arrow = canvas.typography.arrow_size_large;
    for (title, target) in &entries {
        canvas.plain_link(title, *target, left, y, sizes.body);
        let arrow_x = right - 25.0;
        canvas.arrow_right(arrow_x, y + sizes.body * 0.65, arrow);
        canvas.link(
            Rect::new(arrow_x - 10.0, y - 5.0, right, y + sizes.body + 5.0),
            *target,
        );
        canvas.rule(y + 40.0, line, 0.5);
        y += 52.0;
    }

    canvas.rule(y + 10.0, gray, 1.5);
    y += 35.0;

    let month_col_width = 180.0;
    let week_col_start = left + month_col_width + 50.0;
    let week_col_width = 95.0;
    canvas.text("Monthly logs", left, y, sizes.body);
    canvas.text("Weekly logs", week_col_start, y, sizes.body);
    y += 55.0;

    let row_height = ((canvas.layout.content_bottom() - y - 20.0) / 12.0).floor();
    let small_arrow = canvas.typography.arrow_size_small;
    for month in ctx.calendar.months() {
        let text_y = y + (row_height - sizes.small) / 2.0 - 10.0;
        let arrow_y = text_y + sizes.small * 0.65;

        canvas.text(month.name, left, text_y, sizes.small);
        canvas.arrow_right(left + 120.0, arrow_y, small_arrow);
        canvas.link(
            Rect::new(left - 5.0, text_y - 5.0, month_col_width, text_y + sizes.small + 5.0),
            LogicalUnit::Month(month.ordinal),
        );

        let separator_x = week_col_start - 25.0;
        canvas.line(
            Point::new(separator_x, y),
            Point::new(separator_x, y + row_height - 12.0),
            line,
            0.5,
        );

        for (i, week) in ctx.calendar.weeks_of_month(month.ordinal).enumerate() {
            let week_x = week_col_start + i as f32 * week_col_width;
            canvas.text(&week.id.week.to_string(), week_x, text_y, sizes.small);
            canvas.arrow_right(week_x + 30.0, arrow_y, small_arrow);
            canvas.link(
                Rect::new(
                    week_x - 5.0,
                    text_y - 5.0,
                    week_x + week_col_width - 5.0,
                    text_y + sizes.small + 5.0,
                ),
                LogicalUnit::Week(week.id),
            );
        }

        canvas.rule(y + row_height - 12.0, line, 0.5);
        y += row_height;
    }
}

pub fn year_index(ctx: &PageContext, canvas: &mut Canvas) {
    let sizes = canvas.typography.sizes.clone();
    let left = canvas.layout.content_left();
    let top = canvas.layout.content_top();
    let line = canvas.theme.line;

    canvas.text("Index B", left, top + 10.0, sizes.title_page);
    canvas.text("Daily logs", left, top + 75.0, sizes.body);

    let mut y = top + 130.0;
    let block_height = ((canvas.layout.content_bottom() - y - 60.0) / 12.0).floor();

    let days_per_row = 16;
    let day_col_start = left + 115.0;
    let day_spacing = (canvas.layout.content_right() - day_col_start - 20.0) / days_per_row as f32;

    for month in ctx.calendar.months() {
        let first_row = y + 8.0;
        let second_row = y + block_height / 2.0 + 2.0;
        canvas.text(month.name, left, first_row, sizes.small);

        let row_gap = second_row - first_row - sizes.tiny;
        let padding = (row_gap / 2.0 - 1.0).min(8.0);

        for (i, day) in ctx.calendar.days_of_month(month.ordinal).iter().enumerate() {
            let (column, row_y) = if i < days_per_row {
                (i, first_row)
            } else {
                (i - days_per_row, second_row)
            };
            let cell_left = day_col_start + column as f32 * day_spacing;
            let label = day.date.day().to_string();
            let text_x = cell_left + (day_spacing - canvas.text_width(&label, sizes.tiny)) / 2.0;
            canvas.text(&label, text_x, row_y, sizes.tiny);
            canvas.link(
                Rect::new(
                    cell_left,
                    row_y - padding,
                    cell_left + day_spacing,
                    row_y + sizes.tiny + padding,
                ),
                LogicalUnit::Day(day.date),
            );
        }

        canvas.rule(y + block_height - 8.0, line, 0.5);
        y += block_height;
    }

    canvas.bottom_nav(&[("Index", LogicalUnit::MainIndex)]);
}

pub fn collection_index(ctx: &PageContext, canvas: &mut Canvas, index: usize) {
    let left = canvas.layout.content_left();
    let right = canvas.layout.content_right();
    let line = canvas.theme.line;
    let title_size = canvas.typography.sizes.title_page;
    let arrow = canvas.typography.arrow_size_large;

    canvas.nav_link("Index", LogicalUnit::MainIndex, left, nav_y(canvas));
    canvas.text(
        &format!("Index {}", collection_index_label(index)),
        left,
        title_y(canvas),
        title_size,
    );

    let per_index = ctx.settings.num_collections_per_index;
    let top = canvas.layout.content_top() + 130.0;
    let spacing = 60.0;
    for row in 0..per_index {
        let line_y = top + row as f32 * spacing;
        canvas.rule(line_y, line, 0.5);

        let arrow_x = right - 22.0;
        let arrow_y = line_y + spacing / 2.0;
        canvas.arrow_right(arrow_x, arrow_y, arrow);
        canvas.link(
            Rect::new(arrow_x - 15.0, arrow_y - 15.0, right, arrow_y + 15.0),
            LogicalUnit::CollectionEntry(index * per_index + row),
        );
    }
    canvas.rule(top + per_index as f32 * spacing, line, 0.5);

    canvas.footer(HINT_COLLECTION_INDEX);
}

pub fn future_log(ctx: &PageContext, canvas: &mut Canvas, index: usize) {
    let left = canvas.layout.content_left();
    let black = canvas.theme.black;
    let sizes = canvas.typography.sizes.clone();

    canvas.nav_link("Index", LogicalUnit::MainIndex, left, nav_y(canvas));
    canvas.text("Future Log", left, title_y(canvas), sizes.title_page);

    let grid_top = canvas.layout.content_top() + 115.0;
    let grid_bottom = canvas.layout.height - 70.0;
    canvas.page_grid();

    let quarters = ctx.calendar.quarters();
    if let Some(quarter) = quarters.get(index % quarters.len().max(1)) {
        let month_height = ((grid_bottom - grid_top) / 3.0).floor();
        for (i, ordinal) in quarter.months.iter().enumerate() {
            let Some(month) = ctx.calendar.month(*ordinal) else {
                continue;
            };
            let y = grid_top + i as f32 * month_height;
            canvas.text(month.name, left, y, sizes.body);
            canvas.rule(y + 45.0, black, 0.5);
        }
    }

    canvas.footer(HINT_FUTURE_LOG);
}

pub fn monthly_timeline(ctx: &PageContext, canvas: &mut Canvas, month: &MonthInfo) {
    let left = canvas.layout.content_left();
    let sizes = canvas.typography.sizes.clone();

    canvas.nav_link("Index", LogicalUnit::MainIndex, left, nav_y(canvas));
    canvas.text(month.name, left, title_y(canvas), sizes.title_page);

    let grid_top = canvas.layout.content_top() + 115.0;
    let grid_bottom = canvas.layout.height - 70.0;
    canvas.page_grid();

    let day_height = (grid_bottom - grid_top) / month.days as f32;
    for (i, day) in ctx.calendar.days_of_month(month.ordinal).iter().enumerate() {
        let y = grid_top + i as f32 * day_height + sizes.day_number / 2.0;
        canvas.text(&day.date.day().to_string(), left, y, sizes.day_number);
        canvas.link(
            Rect::new(left - 5.0, y - 5.0, left + 35.0, y + sizes.day_number + 5.0),
            LogicalUnit::Day(day.date),
        );
    }

    canvas.footer(HINT_MONTHLY_TIMELINE);
    canvas.bottom_nav(&[("Year", LogicalUnit::YearIndex)]);
}

pub fn monthly_action_plan(canvas: &mut Canvas, month: &MonthInfo) {
    let left = canvas.layout.content_left();
    let title_size = canvas.typography.sizes.title_page;

    canvas.nav_link("Index", LogicalUnit::MainIndex, left, nav_y(canvas));
    canvas.text(month.name, left, title_y(canvas), title_size);
    canvas.page_grid();
    canvas.footer(HINT_MONTHLY_ACTION);
}

/// Weekly spread page; `reflection` selects the second page of the spread
pub fn weekly_page(ctx: &PageContext, canvas: &mut Canvas, week: &WeekInfo, reflection: bool) {
    let left = canvas.layout.content_left();
    let right = canvas.layout.content_right();
    let top = canvas.layout.content_top();
    let sizes = canvas.typography.sizes.clone();
    let gray = canvas.theme.gray;
    let line = canvas.theme.line;

    canvas.nav_link("Index", LogicalUnit::MainIndex, left, nav_y(canvas));
    if let Some(month) = ctx.calendar.month(week.owner_month) {
        let x = right - canvas.text_width(month.name, sizes.nav) - 40.0;
        canvas.nav_link(month.name, LogicalUnit::Month(month.ordinal), x, nav_y(canvas));
    }

    let title = if reflection {
        "Weekly Reflection"
    } else {
        "Weekly Action plan"
    };
    canvas.text(title, left, title_y(canvas), sizes.title_page);

    let range = format!("{}  {}", week.label(), week.range_label());
    let range_x = right - canvas.text_width(&range, sizes.small);
    canvas.text_with(&range, range_x, top + 55.0, sizes.small, gray, FontFace::Italic);

    // weekday strip
    let strip_top = top + 115.0;
    let cell = canvas.layout.content_width() / 7.0;
    let in_year = ctx.calendar.days_of_week(week);
    for (i, date) in week.dates().enumerate() {
        let x = left + i as f32 * cell;
        let label = format!("{} {}", date.format("%a"), date.day());
        let linked = in_year.iter().find(|day| day.date == date);
        let color = if linked.is_some() {
            canvas.theme.black
        } else {
            gray
        };
        let text_x = x + (cell - canvas.text_width(&label, sizes.tiny)) / 2.0;
        canvas.text_with(&label, text_x, strip_top, sizes.tiny, color, FontFace::Regular);
        if let Some(day) = linked {
            canvas.link(
                Rect::new(x, strip_top - 6.0, x + cell, strip_top + sizes.tiny + 6.0),
                LogicalUnit::Day(day.date),
            );
        }
    }
    canvas.rule(strip_top + sizes.tiny + 14.0, line, 0.5);

    canvas.dot_grid(strip_top + 60.0, canvas.layout.height - 70.0);
    canvas.footer(if reflection {
        HINT_WEEKLY_REFLECTION
    } else {
        HINT_WEEKLY_ACTION
    });
}

/// Daily log page; pages after the first share the header but drop the footer
pub fn daily_log(ctx: &PageContext, canvas: &mut Canvas, day: &DayInfo, continuation: bool) {
    let left = canvas.layout.content_left();
    let right = canvas.layout.content_right();
    let top = canvas.layout.content_top();
    let sizes = canvas.typography.sizes.clone();
    let gray = canvas.theme.gray;

    canvas.nav_link("Index", LogicalUnit::YearIndex, left, nav_y(canvas));
    if let Some(week) = ctx.calendar.weeks().get(day.week_index) {
        canvas.nav_link(&week.label(), LogicalUnit::Week(week.id), left + 80.0, nav_y(canvas));
    }
    if let Some(month) = ctx.calendar.month(day.month) {
        let x = right - canvas.text_width(month.name, sizes.nav) - 40.0;
        canvas.nav_link(month.name, LogicalUnit::Month(month.ordinal), x, nav_y(canvas));
    }

    let label = day.label();
    canvas.text(&label, left, top + 70.0, sizes.title_page);
    let weekday_x = left + canvas.text_width(&label, sizes.title_page) + 20.0;
    canvas.text_with(
        &day.weekday_abbrev(),
        weekday_x,
        top + 70.0 + sizes.title_page - sizes.subheader,
        sizes.subheader,
        gray,
        FontFace::Italic,
    );

    if continuation {
        canvas.dot_grid(top + 145.0, canvas.layout.height - 50.0);
    } else {
        canvas.dot_grid(top + 145.0, canvas.layout.height - 70.0);
        canvas.footer(HINT_DAILY_LOG);
    }
}

pub fn collection_entry(ctx: &PageContext, canvas: &mut Canvas, entry: usize) {
    let left = canvas.layout.content_left();
    let index = entry
        .checked_div(ctx.settings.num_collections_per_index)
        .unwrap_or(0);
    let label = format!("Index {}", collection_index_label(index));

    canvas.nav_link(&label, LogicalUnit::CollectionIndex(index), left, nav_y(canvas));
    canvas.dot_grid(
        canvas.layout.content_top() + 50.0,
        canvas.layout.content_bottom() - 30.0,
    );
}

