//! Deferred navigation links
//!
//! Pages are drawn in a single forward pass, and most navigation targets
//! (a week spread linked from the main index, a day linked from the year
//! index) are drawn later than the page that points at them. Renderers
//! therefore record a [`LinkIntent`] naming the target *unit*; once every
//! page exists the registry is drained and each intent resolved against the
//! page map, then written into the document as link annotations.

use crate::geometry::Rect;
use crate::page_map::{LogicalUnit, PageMap};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;

/// A request to link a region of a source page to a logical unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkIntent {
    pub source_page: usize,
    pub target: LogicalUnit,
    /// Clickable region in page space (top-left origin)
    pub anchor: Rect,
}

/// A link whose target page is known
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLink {
    pub source_page: usize,
    pub target_page: usize,
    pub anchor: Rect,
}

/// Append-only store of link intents, filled during rendering
#[derive(Debug, Default)]
pub struct LinkRegistry {
    intents: Vec<LinkIntent>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link from `source_page` to `target`
    pub fn record(&mut self, source_page: usize, target: LogicalUnit, anchor: Rect) {
        self.intents.push(LinkIntent {
            source_page,
            target,
            anchor,
        });
    }

    pub fn intents(&self) -> &[LinkIntent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Resolve every intent in insertion order, consuming the registry
    ///
    /// Fails with a single error listing every intent whose target is
    /// missing from the page map.
    pub fn resolve_all(self, page_map: &PageMap) -> Result<Vec<ResolvedLink>> {
        let mut resolved = Vec::with_capacity(self.intents.len());
        let mut unresolved = Vec::new();

        for intent in self.intents {
            match page_map.page_of(intent.target) {
                Ok(target_page) => resolved.push(ResolvedLink {
                    source_page: intent.source_page,
                    target_page,
                    anchor: intent.anchor,
                }),
                Err(_) => unresolved.push(intent),
            }
        }

        if !unresolved.is_empty() {
            return Err(PlannerError::UnresolvedLinks(unresolved));
        }

        log::info!("Resolved {} navigation links", resolved.len());
        Ok(resolved)
    }
}

/// Write resolved links into `doc` as `/Link` annotations
///
/// `page_height` flips anchors from page space into PDF space.
pub fn apply_links(doc: &mut Document, links: &[ResolvedLink], page_height: f32) -> Result<()> {
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let total = page_ids.len();

    let mut annotations: BTreeMap<usize, Vec<Object>> = BTreeMap::new();
    for link in links {
        let target_id = *page_ids
            .get(link.target_page)
            .ok_or(PlannerError::OutOfRange {
                page: link.target_page,
                total,
            })?;
        if link.source_page >= total {
            return Err(PlannerError::OutOfRange {
                page: link.source_page,
                total,
            });
        }

        let annotation = link_annotation(link.anchor, target_id, page_height);
        let annotation_id = doc.add_object(annotation);
        annotations
            .entry(link.source_page)
            .or_default()
            .push(Object::Reference(annotation_id));
    }

    for (page, refs) in annotations {
        let page_dict = doc.get_object_mut(page_ids[page])?.as_dict_mut()?;
        let mut existing = match page_dict.get(b"Annots") {
            Ok(Object::Array(items)) => items.clone(),
            _ => Vec::new(),
        };
        existing.extend(refs);
        page_dict.set("Annots", Object::Array(existing));
    }

    Ok(())
}

/// Count `/Link` annotations across every page of `doc`
pub fn count_link_annotations(doc: &Document) -> usize {
    doc.get_pages()
        .values()
        .filter_map(|&page_id| doc.get_dictionary(page_id).ok())
        .filter_map(|page| match page.get(b"Annots") {
            Ok(Object::Array(items)) => Some(items.clone()),
            _ => None,
        })
        .flatten()
        .filter_map(|item| match item {
            Object::Reference(id) => doc.get_dictionary(id).ok(),
            _ => None,
        })
        .filter(|annotation| {
            matches!(annotation.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Link")
        })
        .count()
}

fn link_annotation(anchor: Rect, target_id: ObjectId, page_height: f32) -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Annot".to_vec())),
        ("Subtype", Object::Name(b"Link".to_vec())),
        (
            "Rect",
            Object::Array(vec![
                Object::Real(anchor.left),
                Object::Real(page_height - anchor.bottom),
                Object::Real(anchor.right),
                Object::Real(page_height - anchor.top),
            ]),
        ),
        (
            "Border",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(0),
            ]),
        ),
        (
            "Dest",
            Object::Array(vec![
                Object::Reference(target_id),
                Object::Name(b"XYZ".to_vec()),
                Object::Null,
                Object::Null,
                Object::Null,
            ]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::page_map::build_page_map;
    use crate::settings::Settings;

    fn page_map() -> PageMap {
        let calendar = Calendar::for_year(2024).unwrap();
        build_page_map(&calendar, &Settings::default()).unwrap()
    }

    fn anchor() -> Rect {
        Rect::new(10.0, 10.0, 50.0, 30.0)
    }

    #[test]
    fn test_resolves_to_page_of_target() {
        let map = page_map();
        let mut links = LinkRegistry::new();
        links.record(1, LogicalUnit::Month(3), anchor());
        links.record(2, LogicalUnit::CollectionEntry(4), anchor());
        links.record(0, LogicalUnit::MainIndex, anchor());

        let resolved = links.resolve_all(&map).unwrap();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].target_page, map.page_of(LogicalUnit::Month(3)).unwrap());
        assert_eq!(
            resolved[1].target_page,
            map.page_of(LogicalUnit::CollectionEntry(4)).unwrap()
        );
        assert_eq!(resolved[2].target_page, 1);
        // insertion order is kept
        assert_eq!(
            resolved.iter().map(|l| l.source_page).collect::<Vec<_>>(),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn test_reports_every_unresolved_intent() {
        let map = page_map();
        let mut links = LinkRegistry::new();
        links.record(1, LogicalUnit::Guide(40), anchor());
        links.record(1, LogicalUnit::Month(1), anchor());
        links.record(2, LogicalUnit::CollectionEntry(999), anchor());

        match links.resolve_all(&map) {
            Err(PlannerError::UnresolvedLinks(intents)) => {
                assert_eq!(intents.len(), 2);
                assert_eq!(intents[0].target, LogicalUnit::Guide(40));
                assert_eq!(intents[1].target, LogicalUnit::CollectionEntry(999));
            }
            other => panic!("Expected UnresolvedLinks, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_message_lists_targets() {
        let error = PlannerError::UnresolvedLinks(vec![
            LinkIntent {
                source_page: 3,
                target: LogicalUnit::Guide(9),
                anchor: anchor(),
            },
            LinkIntent {
                source_page: 4,
                target: LogicalUnit::FutureLog(7),
                anchor: anchor(),
            },
        ]);
        let message = error.to_string();
        assert!(message.starts_with("2 unresolved link(s)"));
        assert!(message.contains("page 3 -> guide page 10"));
        assert!(message.contains("page 4 -> future log page 8"));
    }

    #[test]
    fn test_empty_registry_resolves() {
        let links = LinkRegistry::new();
        assert!(links.is_empty());
        assert!(links.resolve_all(&page_map()).unwrap().is_empty());
    }
}
