//! Catalog record types.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CatalogError;

/// The six tool categories shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ToolCategory {
    #[serde(rename = "AI")]
    Ai,
    Media,
    Developer,
    Utility,
    Text,
    Social,
}

impl ToolCategory {
    /// All categories in sidebar order.
    pub const ALL: [ToolCategory; 6] = [
        ToolCategory::Ai,
        ToolCategory::Media,
        ToolCategory::Developer,
        ToolCategory::Utility,
        ToolCategory::Text,
        ToolCategory::Social,
    ];

    /// Display label, also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::Ai => "AI",
            ToolCategory::Media => "Media",
            ToolCategory::Developer => "Developer",
            ToolCategory::Utility => "Utility",
            ToolCategory::Text => "Text",
            ToolCategory::Social => "Social",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Category filter applied to the tool grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ToolCategory),
}

impl CategoryFilter {
    /// Whether a tool in `category` passes this filter.
    pub fn matches(self, category: ToolCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    /// Heading label ("All" or the category name).
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Sidebar entries: "All" followed by each category.
    pub fn sidebar_entries() -> Vec<&'static str> {
        std::iter::once("All")
            .chain(ToolCategory::ALL.iter().map(|c| c.label()))
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Whether a tool is offered to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Active,
    Inactive,
}

impl ToolStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            ToolStatus::Active => ToolStatus::Inactive,
            ToolStatus::Inactive => ToolStatus::Active,
        }
    }
}

/// Metadata for one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    /// Icon reference (Font Awesome class name).
    pub icon: String,
    pub category: ToolCategory,
    pub seo_title: String,
    pub seo_description: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub status: ToolStatus,
}

impl ToolRecord {
    /// Case-insensitive substring match on name or description.
    ///
    /// An empty query matches every record.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ToolRecord {
        ToolRecord {
            id: "json-format".to_string(),
            name: "JSON Formatter".to_string(),
            description: "Beautify, validate, and minify JSON data.".to_string(),
            slug: "json-formatter".to_string(),
            icon: "fa-code".to_string(),
            category: ToolCategory::Developer,
            seo_title: "t".to_string(),
            seo_description: "d".to_string(),
            keywords: vec!["json".to_string()],
            is_premium: false,
            status: ToolStatus::Active,
        }
    }

    #[test]
    fn test_category_parse_and_serialize() {
        assert_eq!("ai".parse::<ToolCategory>().unwrap(), ToolCategory::Ai);
        assert_eq!("Media".parse::<ToolCategory>().unwrap(), ToolCategory::Media);
        assert!("Games".parse::<ToolCategory>().is_err());
        assert_eq!(serde_json::to_string(&ToolCategory::Ai).unwrap(), "\"AI\"");
    }

    #[test]
    fn test_category_filter() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        let text = "text".parse::<CategoryFilter>().unwrap();
        assert!(text.matches(ToolCategory::Text));
        assert!(!text.matches(ToolCategory::Ai));
        assert!(CategoryFilter::All.matches(ToolCategory::Social));
        assert_eq!(CategoryFilter::sidebar_entries().len(), 7);
    }

    #[test]
    fn test_matches_query() {
        let r = record();
        assert!(r.matches_query(""));
        assert!(r.matches_query("json"));
        assert!(r.matches_query("BEAUTIFY"));
        assert!(!r.matches_query("password"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["seoTitle"], "t");
        assert_eq!(value["status"], "active");
        assert_eq!(value["isPremium"], false);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(ToolStatus::Active.toggled(), ToolStatus::Inactive);
        assert_eq!(ToolStatus::Inactive.toggled(), ToolStatus::Active);
    }
}
