//! The merged tool catalog.

use std::collections::HashMap;

use tracing::{debug, info};

use super::data::builtin_records;
use super::error::CatalogError;
use super::model::{CategoryFilter, ToolRecord};
use crate::domains::tools::Widget;

/// How a catalog record is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetBinding {
    /// The record has a working widget.
    Ready(Widget),
    /// No widget exists yet; the placeholder is shown.
    ComingSoon,
}

impl WidgetBinding {
    /// The bound widget, if any.
    pub fn widget(self) -> Option<Widget> {
        match self {
            WidgetBinding::Ready(widget) => Some(widget),
            WidgetBinding::ComingSoon => None,
        }
    }
}

/// A record together with its widget binding.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub record: ToolRecord,
    pub binding: WidgetBinding,
}

impl CatalogEntry {
    /// Placeholder heading for tools without a widget.
    pub fn coming_soon_title(&self) -> String {
        format!("Tool {} Coming Soon", self.record.name)
    }
}

/// Registry of every tool, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_slug: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from the built-in records and widget table.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_records(builtin_records(), Widget::for_tool_id)
    }

    /// Merge `records` with the widgets returned by `lookup`.
    ///
    /// Ids and slugs must be unique; a record whose id has no widget is
    /// bound to the placeholder.
    pub fn from_records<F>(records: Vec<ToolRecord>, lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<Widget>,
    {
        let mut entries = Vec::with_capacity(records.len());
        let mut by_slug = HashMap::new();
        let mut by_id = HashMap::new();

        for record in records {
            let index = entries.len();

            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if let Some(previous) = by_slug.insert(record.slug.clone(), index) {
                let first: &CatalogEntry = &entries[previous];
                return Err(CatalogError::DuplicateSlug {
                    slug: record.slug.clone(),
                    first: first.record.id.clone(),
                    second: record.id,
                });
            }

            let binding = match lookup(&record.id) {
                Some(widget) => WidgetBinding::Ready(widget),
                None => {
                    debug!("Tool '{}' has no widget, using placeholder", record.id);
                    WidgetBinding::ComingSoon
                }
            };

            entries.push(CatalogEntry { record, binding });
        }

        info!("Catalog built with {} tools", entries.len());

        Ok(Self {
            entries,
            by_slug,
            by_id,
        })
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a tool by its URL slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&CatalogEntry> {
        self.by_slug.get(slug).map(|&i| &self.entries[i])
    }

    /// Look up a tool by its id.
    pub fn find_by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Whether `id` names a registered tool.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Tools matching the free-text query and category filter, in display order.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.record.matches_query(query) && filter.matches(e.record.category))
            .collect()
    }
}
