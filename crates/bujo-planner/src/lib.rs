pub mod calendar;
pub mod constants;
pub mod geometry;
mod io;
pub mod links;
pub mod page_map;
mod planner;
pub mod render;
mod settings;
pub mod style;
mod types;
pub mod validate;

pub use calendar::{Calendar, DayInfo, MonthInfo, Quarter, WeekId, WeekInfo, derive_calendar};
pub use io::{load_pdf, save_pdf};
pub use links::{LinkIntent, LinkRegistry, ResolvedLink, apply_links, count_link_annotations};
pub use page_map::{LogicalUnit, PageCounts, PageMap, PageSpan, build_page_map};
pub use planner::{DryRun, Planner, PlannerOptions, build_planner, dry_run, generate};
pub use settings::Settings;
pub use style::{Color, FontSizes, Layout, Theme, Typography};
pub use types::*;
pub use validate::{ValidationReport, Violation, validate, validate_layout};
