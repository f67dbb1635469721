//! Method guide pages
//!
//! The first six guide slots have fixed content; any further guide pages
//! are plain dot-grid note pages.

use super::PageContext;
use super::primitives::Canvas;
use super::surface::{FontFace, Paint};
use crate::geometry::{Point, Rect};
use crate::page_map::LogicalUnit;

pub const GUIDE_TITLES: [&str; 6] = [
    "Symbol Reference",
    "The System",
    "The Practice",
    "Set up your logs",
    "Intention",
    "Goals",
];

const HINT_INTENTION: &str =
    "Intention is a commitment to a process. It guides your choices in the present moment.";
const HINT_GOALS: &str =
    "Goals define outcomes. They transform desires into tangible destinations.";

/// Bullet and signifier marks used throughout the guides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Dash,
    Dot,
    Double,
    Ring,
    Cross,
    Migrate,
    Schedule,
    Strike,
    Star,
    Bulb,
    Eye,
    UpDown,
    Forward,
    Play,
}

const MARK_STROKE: f32 = 2.6;

fn segment(canvas: &mut Canvas, x1: f32, y1: f32, x2: f32, y2: f32) {
    let black = canvas.theme.black;
    canvas.line(Point::new(x1, y1), Point::new(x2, y2), black, MARK_STROKE);
}

/// Draw `mark` centred on (`cx`, `cy`)
fn draw_mark(canvas: &mut Canvas, mark: Mark, cx: f32, cy: f32, size: f32) {
    let black = canvas.theme.black;
    let half = size / 2.0;
    let stroke = MARK_STROKE;

    match mark {
        Mark::Dash => segment(canvas, cx - half, cy, cx + half, cy),
        Mark::Dot => canvas.circle(Point::new(cx, cy), size / 3.0, Paint::fill(black)),
        Mark::Double => {
            for dy in [-size / 4.0, size / 4.0] {
                segment(canvas, cx - half, cy + dy, cx + half, cy + dy);
            }
        }
        Mark::Ring => canvas.circle(Point::new(cx, cy), size / 3.0, Paint::stroke(black, stroke)),
        Mark::Cross => {
            segment(canvas, cx - half, cy - half, cx + half, cy + half);
            segment(canvas, cx - half, cy + half, cx + half, cy - half);
        }
        Mark::Migrate => {
            segment(canvas, cx - half, cy - size / 3.0, cx + half, cy);
            segment(canvas, cx - half, cy + size / 3.0, cx + half, cy);
        }
        Mark::Schedule => {
            segment(canvas, cx + half, cy - size / 3.0, cx - half, cy);
            segment(canvas, cx + half, cy + size / 3.0, cx - half, cy);
        }
        Mark::Strike => {
            canvas.circle(Point::new(cx, cy), size / 3.0, Paint::fill(black));
            canvas.line(
                Point::new(cx + half, cy),
                Point::new(cx + size * 2.5, cy),
                black,
                1.5,
            );
        }
        Mark::Star => canvas.star(cx, cy, size * 0.6),
        Mark::Bulb => canvas.lightbulb(cx, cy, size),
        Mark::Eye => canvas.eye(cx, cy, size * 0.6),
        Mark::UpDown => {
            let s = size;
            segment(canvas, cx - s * 0.2, cy - s * 0.15, cx - s * 0.2, cy + s * 0.35);
            segment(canvas, cx - s * 0.35, cy + s * 0.05, cx - s * 0.2, cy - s * 0.25);
            segment(canvas, cx - s * 0.05, cy + s * 0.05, cx - s * 0.2, cy - s * 0.25);
            segment(canvas, cx + s * 0.2, cy - s * 0.35, cx + s * 0.2, cy + s * 0.15);
            segment(canvas, cx + s * 0.05, cy - s * 0.05, cx + s * 0.2, cy + s * 0.25);
            segment(canvas, cx + s * 0.35, cy - s * 0.05, cx + s * 0.2, cy + s * 0.25);
        }
        Mark::Forward => {
            segment(canvas, cx - size * 0.35, cy, cx + size * 0.35, cy);
            segment(canvas, cx + size * 0.1, cy - size * 0.3, cx + size * 0.4, cy);
            segment(canvas, cx + size * 0.1, cy + size * 0.3, cx + size * 0.4, cy);
        }
        Mark::Play => {
            let triangle = [
                Point::new(cx - size * 0.25, cy - size * 0.35),
                Point::new(cx - size * 0.25, cy + size * 0.35),
                Point::new(cx + size * 0.35, cy),
            ];
            canvas.path(&triangle, true, Paint::stroke(black, stroke));
        }
    }
}

pub fn guide_page(ctx: &PageContext, canvas: &mut Canvas, index: usize) {
    let left = canvas.layout.content_left();
    let top = canvas.layout.content_top();
    let header = canvas.typography.sizes.header;
    let title = GUIDE_TITLES
        .get(index)
        .map(|title| title.to_string())
        .unwrap_or_else(|| format!("Notes {}", index + 1 - GUIDE_TITLES.len()));

    canvas.nav_link("Index", LogicalUnit::MainIndex, left, top + 5.0);
    canvas.text(&title, left, top + 50.0, header);

    match index {
        0 => symbol_reference(canvas),
        1 => the_system(canvas),
        2 => the_practice(canvas),
        3 => set_up_logs(ctx, canvas),
        4 => writing_page(canvas, Some(HINT_INTENTION)),
        5 => writing_page(canvas, Some(HINT_GOALS)),
        _ => writing_page(canvas, None),
    }
}

fn writing_page(canvas: &mut Canvas, hint: Option<&str>) {
    let top = canvas.layout.content_top() + 100.0;
    match hint {
        Some(hint) => {
            canvas.dot_grid(top, canvas.layout.height - 70.0);
            canvas.footer(hint);
        }
        None => canvas.dot_grid(top, canvas.layout.height - 50.0),
    }
}

/// Bordered card
fn card(canvas: &mut Canvas, x: f32, y: f32, width: f32, height: f32) {
    let gray = canvas.theme.gray;
    canvas.rect(Rect::from_size(x, y, width, height), Paint::stroke(gray, 0.5));
}

fn symbol_reference(canvas: &mut Canvas) {
    let left = canvas.layout.content_left();
    let right = canvas.layout.content_right();
    let top = canvas.layout.content_top();
    let gray = canvas.theme.gray;
    let black = canvas.theme.black;
    let (font_section, font_desc, font_header) = (22.0, 22.0, 28.0);
    let row_height = font_desc * 1.8;

    let columns: [(&str, &[(Mark, &str)]); 3] = [
        (
            "Rapid Logging",
            &[
                (Mark::Dash, "Notes"),
                (Mark::Dot, "Actions"),
                (Mark::Double, "Moods"),
                (Mark::Ring, "Events"),
            ],
        ),
        (
            "Action States",
            &[
                (Mark::Dot, "Incomplete"),
                (Mark::Cross, "Complete"),
                (Mark::Migrate, "Migrated"),
                (Mark::Schedule, "Scheduled"),
                (Mark::Dot, "Irrelevant"),
            ],
        ),
        (
            "Signifiers",
            &[
                (Mark::Star, "Priority"),
                (Mark::Bulb, "Inspiration"),
                (Mark::Eye, "Explore"),
            ],
        ),
    ];

    let gap = 25.0;
    let padding = 20.0;
    let card_width = ((canvas.layout.content_width() - gap * 2.0) / 3.0).floor();
    let max_rows = columns.iter().map(|(_, rows)| rows.len()).max().unwrap_or(0);
    let card_height = 45.0 + row_height * max_rows as f32 + padding;
    let card_top = top + 130.0;

    for (i, (heading, rows)) in columns.iter().enumerate() {
        let x = left + i as f32 * (card_width + gap);
        card(canvas, x, card_top, card_width, card_height);
        canvas.text(heading, x + padding, card_top + padding, font_section);

        let mut y = card_top + padding + 45.0;
        for &(mark, label) in rows.iter() {
            let mark_y = y + font_desc * 0.55;
            draw_mark(canvas, mark, x + padding + 12.0, mark_y, 14.0);
            canvas.text(label, x + padding + 50.0, y, font_desc);
            if label == "Irrelevant" {
                let end = x + padding + 50.0 + canvas.text_width(label, font_desc);
                canvas.line(
                    Point::new(x + padding + 5.0, mark_y),
                    Point::new(end, mark_y),
                    black,
                    1.0,
                );
            }
            y += row_height;
        }
    }

    // worked example
    let example_top = card_top + card_height + 50.0;
    canvas.text("Example", left, example_top, font_header);
    let rule_start = left + canvas.text_width("Example", font_header) + 15.0;
    let rule_y = example_top + font_header * 0.5;
    canvas.line(Point::new(rule_start, rule_y), Point::new(right, rule_y), gray, 0.5);

    let subtitle_y = example_top + 50.0;
    canvas.text_with(
        "Planning a Surprise Party",
        left,
        subtitle_y,
        font_section,
        gray,
        FontFace::Italic,
    );

    let header_y = subtitle_y + 50.0;
    let left_col_width = 380.0;
    let right_col = left + left_col_width + 50.0;
    canvas.text("Recorded", left, header_y, font_section);
    canvas.text("After reflection", right_col, header_y, font_section);
    let underline_y = header_y + 35.0;
    canvas.line(
        Point::new(left, underline_y),
        Point::new(left + left_col_width - 30.0, underline_y),
        gray,
        0.5,
    );
    canvas.line(Point::new(right_col, underline_y), Point::new(right, underline_y), gray, 0.5);

    struct Row {
        signifier: Option<Mark>,
        bullet: Mark,
        entry: &'static str,
        after: Option<Mark>,
        outcome: &'static str,
    }
    let rows = [
        Row {
            signifier: Some(Mark::Star),
            bullet: Mark::Dot,
            entry: "Book venue",
            after: Some(Mark::Cross),
            outcome: "completed",
        },
        Row {
            signifier: None,
            bullet: Mark::Dot,
            entry: "Order cake",
            after: Some(Mark::Migrate),
            outcome: "moved to tomorrow",
        },
        Row {
            signifier: None,
            bullet: Mark::Dot,
            entry: "Buy balloons",
            after: Some(Mark::Schedule),
            outcome: "scheduled to Friday",
        },
        Row {
            signifier: None,
            bullet: Mark::Dot,
            entry: "Print invites",
            after: Some(Mark::Strike),
            outcome: "use group chat",
        },
        Row {
            signifier: Some(Mark::Eye),
            bullet: Mark::Dash,
            entry: "Music options?",
            after: Some(Mark::Dot),
            outcome: "new action: ask Tom for a playlist",
        },
        Row {
            signifier: Some(Mark::Bulb),
            bullet: Mark::Dash,
            entry: "80s theme!",
            after: None,
            outcome: "(unchanged)",
        },
        Row {
            signifier: None,
            bullet: Mark::Ring,
            entry: "Party 6pm",
            after: None,
            outcome: "(events are facts)",
        },
        Row {
            signifier: None,
            bullet: Mark::Double,
            entry: "Nervous",
            after: None,
            outcome: "moved toward my goal",
        },
    ];

    let (font_entry, font_note) = (34.0, 16.0);
    let available = canvas.layout.content_bottom() - 30.0 - (underline_y + 20.0) - 50.0;
    let line_height = (available / rows.len() as f32).floor();
    let mut y = underline_y + 20.0;
    for row in &rows {
        let mark_y = y + font_entry * 0.5;
        if let Some(signifier) = row.signifier {
            draw_mark(canvas, signifier, left + 10.0, mark_y, 18.0);
        }
        draw_mark(canvas, row.bullet, left + 45.0, mark_y, 16.0);
        canvas.text_with(row.entry, left + 70.0, y, font_entry, black, FontFace::Italic);

        let note_x = match row.after {
            Some(mark) => {
                draw_mark(canvas, mark, right_col + 10.0, mark_y, 14.0);
                right_col + 35.0
            }
            None => right_col,
        };
        canvas.text_with(row.outcome, note_x, y + 10.0, font_note, gray, FontFace::Italic);
        y += line_height;
    }
}

/// Lettered 2x2 card grid; returns the y below the grid
fn letter_cards(
    canvas: &mut Canvas,
    cards: &[(&str, &str, Mark, &str)],
    y: f32,
    height: f32,
) -> f32 {
    let left = canvas.layout.content_left();
    let gap = 25.0;
    let padding = 22.0;
    let width = ((canvas.layout.content_width() - gap) / 2.0).floor();

    for (i, &(letter, name, mark, description)) in cards.iter().enumerate() {
        let x = left + (i % 2) as f32 * (width + gap);
        let card_y = y + (i / 2) as f32 * (height + gap);
        card(canvas, x, card_y, width, height);

        let letter_x = x + padding;
        let letter_y = card_y + padding;
        canvas.text(letter, letter_x, letter_y, 42.0);
        draw_mark(canvas, mark, letter_x + 55.0, letter_y + 26.0, 22.0);
        canvas.text(name, x + padding + 90.0, letter_y + 8.0, 22.0);
        canvas.rich_text(
            description,
            x + padding,
            card_y + padding + 60.0,
            18.0,
            width - padding * 2.0,
            1.4,
        );
    }

    let rows = cards.len().div_ceil(2) as f32;
    y + rows * (height + gap) - gap
}

fn the_system(canvas: &mut Canvas) {
    let left = canvas.layout.content_left();
    let right = canvas.layout.content_right();
    let width = canvas.layout.content_width();
    let gray = canvas.theme.gray;
    let (font_body, font_small) = (22.0, 18.0);

    let mut y = canvas.layout.content_top() + 100.0;
    y += canvas.rich_text(
        "The Bullet Journal Method is a mindfulness practice designed to work like a \
         productivity system. Use |Rapid Logging| to capture thoughts quickly with minimal syntax.",
        left,
        y,
        font_body,
        width - 20.0,
        1.45,
    ) + 30.0;

    canvas.section_title("N.A.M.E.", y);
    y += 40.0;
    y = letter_cards(
        canvas,
        &[
            ("N", "Notes", Mark::Dash, "Ideas, insights, information to remember. Capture what you learn."),
            ("A", "Actions", Mark::Dot, "Things to do - your tasks. The backbone of your productivity."),
            ("M", "Moods", Mark::Double, "How you feel, emotionally or physically. Track your inner state."),
            ("E", "Events", Mark::Ring, "Experiences, appointments, milestones. Record what happens."),
        ],
        y,
        160.0,
    ) + 40.0;

    canvas.section_title("Action States", y);
    y += 30.0;
    canvas.text_with(
        "A dot can transform to reflect multiple states. Each transformation is a moment of reflection.",
        left,
        y,
        font_small,
        gray,
        FontFace::Italic,
    );
    y += 65.0;

    let states = [
        ("Incomplete", Mark::Dot),
        ("Complete", Mark::Cross),
        ("Migrated", Mark::Migrate),
        ("Scheduled", Mark::Schedule),
        ("Irrelevant", Mark::Strike),
    ];
    let spacing = (width / states.len() as f32).floor();
    canvas.line(
        Point::new(left + spacing / 2.0 + 20.0, y),
        Point::new(left + spacing * 4.5 - 20.0, y),
        gray,
        1.0,
    );
    for (i, &(name, mark)) in states.iter().enumerate() {
        let x = left + spacing * i as f32 + spacing / 2.0;
        draw_mark(canvas, mark, x, y, 16.0);
        let label_x = x - canvas.text_width(name, font_small) / 2.0;
        canvas.text(name, label_x, y + 30.0, font_small);
    }
    y += 75.0;

    canvas.section_title("Signifiers", y);
    y += 30.0;
    canvas.text_with(
        "Add context to any bullet by placing a signifier in front:",
        left,
        y,
        font_small,
        gray,
        FontFace::Italic,
    );
    y += 35.0;

    let gap = 25.0;
    let card_width = ((width - gap * 2.0) / 3.0).floor();
    let card_height = 140.0;
    let signifiers = [
        (Mark::Star, "Priority", "Important and urgent"),
        (Mark::Bulb, "Inspiration", "Great idea worth remembering"),
        (Mark::Eye, "Explore", "Requires further research"),
    ];
    for (i, &(mark, name, description)) in signifiers.iter().enumerate() {
        let x = left + (card_width + gap) * i as f32;
        card(canvas, x, y, card_width, card_height);
        let center = x + card_width / 2.0;
        draw_mark(canvas, mark, center, y + 45.0, 40.0);
        let name_x = center - canvas.text_width(name, 24.0) / 2.0;
        canvas.text(name, name_x, y + 80.0, 24.0);
        let description_x = center - canvas.text_width(description, font_small) / 2.0;
        canvas.text_with(description, description_x, y + 115.0, font_small, gray, FontFace::Regular);
    }
    y += card_height + 35.0;

    canvas.text_with(
        "Define your own signifiers as your practice evolves. Keep it minimal - too many symbols slow you down.",
        left,
        y,
        font_small,
        gray,
        FontFace::Italic,
    );
    y += 40.0;

    let padding = 25.0;
    canvas.rect(Rect::new(left, y, right, y + 120.0), Paint::stroke(gray, 0.5));
    canvas.text("The Core Insight", left + padding, y + padding, 22.0);
    canvas.rich_text(
        "The power of Bullet Journal lies not in the symbols, but in the reflection they \
         encourage. Every time you transform a bullet, you ask: does this still deserve my \
         time and attention?",
        left + padding,
        y + 60.0,
        font_small + 1.0,
        width - padding * 2.0,
        1.45,
    );
}

fn the_practice(canvas: &mut Canvas) {
    let left = canvas.layout.content_left();
    let width = canvas.layout.content_width();
    let gray = canvas.theme.gray;
    let font_rhythm = 20.0;
    let rhythm_step = font_rhythm * 1.5;

    let mut y = canvas.layout.content_top() + 100.0;
    y += canvas.rich_text(
        "|N.A.M.E.| captures your experiences. |T.A.M.E.| transforms them into clarity and \
         action. Recording feeds reflection; reflection guides recording. This cycle is the \
         heart of the practice.",
        left,
        y,
        22.0,
        width - 20.0,
        1.45,
    ) + 30.0;

    canvas.section_title("T.A.M.E.", y);
    y += 40.0;
    y = letter_cards(
        canvas,
        &[
            ("T", "Tidy", Mark::Cross, "Cross off completed tasks. Strike through what no longer matters. Clear space before moving forward."),
            ("A", "Acknowledge", Mark::UpDown, "Look back at what happened. Mark things that moved you toward or away from your goals."),
            ("M", "Migrate", Mark::Forward, "Carry forward what still matters. Rewriting confirms your commitment to each task."),
            ("E", "Enact", Mark::Play, "Turn insights into action. Set clear priorities for the next day, week, or month."),
        ],
        y,
        165.0,
    ) + 40.0;

    canvas.section_title("Reflection Rhythm", y);
    y += 35.0;

    let rhythm = [
        (
            "|Daily:| Morning and evening - quick review and planning.",
            "For deeper reflection, use a digital journal or note-taking app.",
        ),
        (
            "|Weekly:| Sunday evening - tidy the week, acknowledge progress.",
            "Review what worked and what didn't. Adjust your approach for next week.",
        ),
        (
            "|Monthly:| End of month - identify patterns, adjust direction.",
            "Consider a longer writing session to explore what you've learned.",
        ),
    ];
    for (cadence, hint) in rhythm {
        y += canvas.rich_text(cadence, left + 20.0, y, font_rhythm, width - 60.0, 1.5) + 5.0;
        canvas.text_with(hint, left + 40.0, y, font_rhythm - 2.0, gray, FontFace::Italic);
        y += rhythm_step + 10.0;
    }
}

fn set_up_logs(ctx: &PageContext, canvas: &mut Canvas) {
    let left = canvas.layout.content_left();
    let right = canvas.layout.content_right();
    let width = canvas.layout.content_width();
    let gray = canvas.theme.gray;
    let subheader = canvas.typography.sizes.subheader;
    let arrow = canvas.typography.arrow_size_small;
    let (font_body, font_small, font_section) = (22.0, 19.0, 20.0);
    let padding = 20.0;

    let future_log = (ctx.settings.num_future_log_pages > 0).then_some(LogicalUnit::FutureLog(0));
    let first_week = ctx.calendar.weeks().first().map(|week| LogicalUnit::Week(week.id));
    let first_day = ctx.calendar.days().first().map(|day| LogicalUnit::Day(day.date));

    let logs: [(&str, Option<LogicalUnit>, Option<&str>, &[(&str, &str)]); 4] = [
        (
            "Future log",
            future_log,
            Some("The Future Log lets you see your future. Store |actions| and |events| that fall outside the current month. It provides an overview of your commitments over time."),
            &[],
        ),
        (
            "Monthly log",
            Some(LogicalUnit::Month(1)),
            Some("Two pages to reset, reprioritize, and recommit to what you allow into your life every month."),
            &[
                ("Timeline", "Log events after they've happened. An accurate record of your life."),
                ("Action Plan", "Organize and prioritize monthly |Tasks.| New tasks and Future Log items."),
            ],
        ),
        (
            "Weekly log",
            first_week,
            None,
            &[
                ("Reflection", "Tidy entries. Acknowledge what moved you toward and away. Migrate relevant |Actions.|"),
                ("Action plan", "Write only what you can get done this week. Number your top three priorities."),
            ],
        ),
        (
            "Daily log",
            first_day,
            Some("Declutter your mind and stay focused. |Rapid Log| your thoughts as they bubble up. This is your main workspace - the heart of daily practice."),
            &[],
        ),
    ];

    let top = canvas.layout.content_top() + 120.0;
    let gap = 20.0;
    let card_height =
        ((canvas.layout.content_bottom() - top - 30.0 - gap * (logs.len() - 1) as f32) / logs.len() as f32).floor();

    let mut y = top;
    for (name, target, description, columns) in logs {
        card(canvas, left, y, width, card_height);

        let name_y = y + padding;
        canvas.text(name, left + padding, name_y, subheader);
        let rule_start = left + padding + canvas.text_width(name, subheader) + 15.0;
        let mut rule_end = right - padding;

        if let Some(target) = target {
            let label = "Get started";
            let label_x = right - padding - canvas.text_width(label, font_small) - 25.0;
            canvas.text(label, label_x, name_y, font_small);
            canvas.arrow_right(right - padding - 10.0, name_y + font_small / 2.0, arrow);
            canvas.link(
                Rect::new(label_x - 5.0, name_y - 5.0, right - padding, name_y + font_small + 10.0),
                target,
            );
            rule_end = label_x - 20.0;
        }
        let rule_y = name_y + subheader * 0.45;
        canvas.line(Point::new(rule_start, rule_y), Point::new(rule_end, rule_y), gray, 0.5);

        let mut content_y = name_y + subheader + 15.0;
        if let Some(description) = description {
            canvas.rich_text(description, left + padding, content_y, font_body, width - padding * 2.0, 1.45);
            if !columns.is_empty() {
                content_y += font_body * 1.45 * 2.0 + 10.0;
            }
        }

        let column_gap = 30.0;
        let column_width = ((width - padding * 2.0 - column_gap) / 2.0).floor();
        for (i, (title, text)) in columns.iter().enumerate() {
            let x = left + padding + i as f32 * (column_width + column_gap);
            canvas.text_with(title, x, content_y, font_section, canvas.theme.black, FontFace::Italic);
            canvas.rich_text(text, x, content_y + font_section * 1.3, font_small, column_width - 10.0, 1.45);
        }

        y += card_height + gap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::links::LinkRegistry;
    use crate::render::surface::{DryRunSurface, Surface};
    use crate::settings::Settings;
    use crate::style::{Layout, Theme, Typography};

    fn render_guide(index: usize, settings: &Settings) -> LinkRegistry {
        let calendar = Calendar::for_year(2024).unwrap();
        let (layout, theme, typography) = (Layout::default(), Theme::default(), Typography::default());
        let ctx = PageContext {
            calendar: &calendar,
            settings,
            layout: &layout,
            theme: &theme,
            typography: &typography,
        };
        let mut surface = DryRunSurface::new();
        let mut links = LinkRegistry::new();
        let page = surface.begin_page();
        let mut canvas = Canvas::new(&mut surface, &mut links, page, &layout, &theme, &typography);
        guide_page(&ctx, &mut canvas, index);
        links
    }

    #[test]
    fn test_every_guide_links_home() {
        let settings = Settings::default();
        for index in 0..8 {
            let links = render_guide(index, &settings);
            assert_eq!(links.intents()[0].target, LogicalUnit::MainIndex, "guide {index}");
        }
    }

    #[test]
    fn test_set_up_logs_links_each_log() {
        let links = render_guide(3, &Settings::default());
        let targets: Vec<LogicalUnit> = links.intents().iter().map(|i| i.target).collect();
        assert_eq!(targets.len(), 5);
        assert!(targets.contains(&LogicalUnit::FutureLog(0)));
        assert!(targets.contains(&LogicalUnit::Month(1)));
        assert!(targets.iter().any(|t| matches!(t, LogicalUnit::Week(_))));
        assert!(targets.iter().any(|t| matches!(t, LogicalUnit::Day(_))));
    }

    #[test]
    fn test_set_up_logs_without_future_log() {
        let settings = Settings {
            num_future_log_pages: 0,
            ..Settings::default()
        };
        let links = render_guide(3, &settings);
        assert!(
            !links
                .intents()
                .iter()
                .any(|i| matches!(i.target, LogicalUnit::FutureLog(_)))
        );
    }
}
