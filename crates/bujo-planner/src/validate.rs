//! Post-generation consistency checks
//!
//! Validation never fails; it reports what it finds and leaves the decision
//! to fail the build to the caller.

use crate::links::{ResolvedLink, count_link_annotations};
use crate::page_map::{LogicalUnit, PageMap, PageSpan};
use lopdf::Document;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The document does not have as many pages as the page map
    PageCountMismatch { expected: usize, actual: usize },
    LinkTargetOutOfRange {
        source_page: usize,
        target_page: usize,
        total: usize,
    },
    LinkSourceOutOfRange { source_page: usize, total: usize },
    /// A unit owns no pages
    EmptyUnit(LogicalUnit),
    /// Two units claim the same page
    OverlappingUnits {
        page: usize,
        first: LogicalUnit,
        second: LogicalUnit,
    },
    /// Link annotations in the document differ from the resolved links
    AnnotationCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PageCountMismatch { expected, actual } => write!(
                f,
                "document has {} pages, page map expects {}",
                actual, expected
            ),
            Violation::LinkTargetOutOfRange {
                source_page,
                target_page,
                total,
            } => write!(
                f,
                "link on page {} targets page {} of {}",
                source_page, target_page, total
            ),
            Violation::LinkSourceOutOfRange { source_page, total } => write!(
                f,
                "link source page {} is outside the {} page document",
                source_page, total
            ),
            Violation::EmptyUnit(unit) => write!(f, "{} owns no pages", unit),
            Violation::OverlappingUnits {
                page,
                first,
                second,
            } => write!(f, "page {} claimed by both {} and {}", page, first, second),
            Violation::AnnotationCountMismatch { expected, actual } => write!(
                f,
                "document carries {} link annotations, expected {}",
                actual, expected
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable lines, "validation ok" when nothing was found
    pub fn summary_lines(&self) -> Vec<String> {
        if self.is_ok() {
            return vec!["validation ok".to_string()];
        }
        let mut lines = vec![format!(
            "validation found {} problem(s)",
            self.violations.len()
        )];
        lines.extend(self.violations.iter().map(|v| format!("  {}", v)));
        lines
    }

    fn logged(self) -> Self {
        for violation in &self.violations {
            log::warn!("Validation: {}", violation);
        }
        self
    }
}

/// Check a finished document against its page map and resolved links
pub fn validate(doc: &Document, page_map: &PageMap, links: &[ResolvedLink]) -> ValidationReport {
    let mut violations = layout_violations(doc.get_pages().len(), page_map, links);

    let annotations = count_link_annotations(doc);
    if annotations != links.len() {
        violations.push(Violation::AnnotationCountMismatch {
            expected: links.len(),
            actual: annotations,
        });
    }

    ValidationReport { violations }.logged()
}

/// Check a rendered page count and resolved links without a document
pub fn validate_layout(
    page_count: usize,
    page_map: &PageMap,
    links: &[ResolvedLink],
) -> ValidationReport {
    ValidationReport {
        violations: layout_violations(page_count, page_map, links),
    }
    .logged()
}

fn layout_violations(
    page_count: usize,
    page_map: &PageMap,
    links: &[ResolvedLink],
) -> Vec<Violation> {
    let expected = page_map.total_pages();
    let mut violations = Vec::new();

    if page_count != expected {
        violations.push(Violation::PageCountMismatch {
            expected,
            actual: page_count,
        });
    }

    let pages = page_map.page_range();
    for link in links {
        if !pages.contains(&link.source_page) {
            violations.push(Violation::LinkSourceOutOfRange {
                source_page: link.source_page,
                total: expected,
            });
        }
        if !pages.contains(&link.target_page) {
            violations.push(Violation::LinkTargetOutOfRange {
                source_page: link.source_page,
                target_page: link.target_page,
                total: expected,
            });
        }
    }

    violations.extend(span_violations(page_map.spans()));
    violations
}

fn span_violations(spans: &[PageSpan]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut previous: Option<&PageSpan> = None;

    for span in spans {
        if span.len == 0 {
            violations.push(Violation::EmptyUnit(span.unit));
            continue;
        }
        if let Some(prev) = previous
            && span.start < prev.end()
        {
            violations.push(Violation::OverlappingUnits {
                page: span.start,
                first: prev.unit,
                second: span.unit,
            });
        }
        previous = Some(span);
    }

    violations
}
