//! Admin dashboard panels.
//!
//! The dashboard keeps its own copy of the catalog records. Status toggles
//! and edits change that copy only and are lost on restart.

use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::AdminError;
use crate::core::storage::StorageError;
use crate::domains::catalog::{Catalog, ToolCategory, ToolRecord, ToolStatus};

/// Dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Manage,
    Analytics,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Overview, AdminTab::Manage, AdminTab::Analytics];

    pub fn as_str(self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Manage => "manage",
            AdminTab::Analytics => "analytics",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminTab {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminTab::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AdminError::UnknownTab(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityItem {
    pub message: &'static str,
    pub when: &'static str,
}

/// One row of the tool inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: ToolCategory,
    pub status: ToolStatus,
    pub is_premium: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsBar {
    pub label: &'static str,
    pub visits: u32,
}

/// Contents of one tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum DashboardView {
    Overview {
        stats: Vec<StatCard>,
        recent_activity: Vec<ActivityItem>,
    },
    Manage {
        tools: Vec<ToolRow>,
    },
    Analytics {
        visits: Vec<AnalyticsBar>,
    },
}

/// Partial update applied by the tool editor. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolEdit {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub category: Option<ToolCategory>,
    pub is_premium: Option<bool>,
}

// Sample figures shown on the overview and analytics tabs.
const TOTAL_IMPRESSIONS: &str = "48,291";
const USERS_TODAY: &str = "1,204";
const RECENT_ACTIVITY: [ActivityItem; 3] = [
    ActivityItem {
        message: "New tool published: Markdown Editor",
        when: "2 hours ago",
    },
    ActivityItem {
        message: "SEO metadata updated: JSON Formatter",
        when: "5 hours ago",
    },
    ActivityItem {
        message: "Tool enabled: Password Generator",
        when: "1 day ago",
    },
];
const WEEKLY_VISITS: [(&str, u32); 7] = [
    ("Mon", 6120),
    ("Tue", 7045),
    ("Wed", 6890),
    ("Thu", 7410),
    ("Fri", 8032),
    ("Sat", 5214),
    ("Sun", 4870),
];

/// In-memory management view over the catalog.
pub struct AdminDashboard {
    tools: RwLock<Vec<ToolRecord>>,
}

impl AdminDashboard {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            tools: RwLock::new(catalog.entries().iter().map(|e| e.record.clone()).collect()),
        }
    }

    /// Render `tab`.
    pub fn view(&self, tab: AdminTab) -> Result<DashboardView, AdminError> {
        let tools = self.tools.read().map_err(|_| StorageError::Poisoned)?;

        Ok(match tab {
            AdminTab::Overview => {
                let active = tools.iter().filter(|t| t.status == ToolStatus::Active).count();
                DashboardView::Overview {
                    stats: vec![
                        StatCard {
                            icon: "fa-chart-line",
                            label: "Total Impressions",
                            value: TOTAL_IMPRESSIONS.to_string(),
                        },
                        StatCard {
                            icon: "fa-bolt",
                            label: "Active Tools",
                            value: active.to_string(),
                        },
                        StatCard {
                            icon: "fa-users",
                            label: "Users (Today)",
                            value: USERS_TODAY.to_string(),
                        },
                    ],
                    recent_activity: RECENT_ACTIVITY.to_vec(),
                }
            }
            AdminTab::Manage => DashboardView::Manage {
                tools: tools
                    .iter()
                    .map(|t| ToolRow {
                        id: t.id.clone(),
                        name: t.name.clone(),
                        slug: t.slug.clone(),
                        category: t.category,
                        status: t.status,
                        is_premium: t.is_premium,
                    })
                    .collect(),
            },
            AdminTab::Analytics => DashboardView::Analytics {
                visits: WEEKLY_VISITS
                    .iter()
                    .map(|&(label, visits)| AnalyticsBar { label, visits })
                    .collect(),
            },
        })
    }

    /// Flip a tool between active and inactive; returns the new status.
    pub fn toggle_status(&self, id: &str) -> Result<ToolStatus, AdminError> {
        let mut tools = self.tools.write().map_err(|_| StorageError::Poisoned)?;
        let tool = tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AdminError::UnknownTool(id.to_string()))?;

        tool.status = tool.status.toggled();
        info!("Tool '{}' is now {:?}", id, tool.status);
        Ok(tool.status)
    }

    /// Apply an editor change to one tool and return the updated record.
    pub fn edit(&self, id: &str, edit: ToolEdit) -> Result<ToolRecord, AdminError> {
        let mut tools = self.tools.write().map_err(|_| StorageError::Poisoned)?;
        let index = tools
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AdminError::UnknownTool(id.to_string()))?;

        if edit.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AdminError::invalid_edit("Name cannot be empty"));
        }
        if let Some(slug) = &edit.slug {
            validate_slug(slug)?;
            if tools.iter().enumerate().any(|(i, t)| i != index && &t.slug == slug) {
                return Err(AdminError::SlugTaken(slug.clone()));
            }
        }

        let tool = &mut tools[index];
        if let Some(name) = edit.name {
            tool.name = name;
        }
        if let Some(slug) = edit.slug {
            tool.slug = slug;
        }
        if let Some(seo_title) = edit.seo_title {
            tool.seo_title = seo_title;
        }
        if let Some(seo_description) = edit.seo_description {
            tool.seo_description = seo_description;
        }
        if let Some(category) = edit.category {
            tool.category = category;
        }
        if let Some(is_premium) = edit.is_premium {
            tool.is_premium = is_premium;
        }

        info!("Tool '{}' edited", id);
        Ok(tool.clone())
    }

    /// Snapshot of every record.
    pub fn records(&self) -> Vec<ToolRecord> {
        self.tools.read().map(|t| t.clone()).unwrap_or_default()
    }
}

fn validate_slug(slug: &str) -> Result<(), AdminError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(AdminError::invalid_edit(format!(
            "Slug '{}' must be lowercase letters, digits and dashes",
            slug
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> AdminDashboard {
        AdminDashboard::new(&Catalog::builtin().unwrap())
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("manage".parse::<AdminTab>().unwrap(), AdminTab::Manage);
        assert_eq!("Analytics".parse::<AdminTab>().unwrap(), AdminTab::Analytics);
        assert!("billing".parse::<AdminTab>().is_err());
    }

    #[test]
    fn test_overview_counts_active_tools() {
        let dashboard = dashboard();
        let DashboardView::Overview { stats, recent_activity } =
            dashboard.view(AdminTab::Overview).unwrap()
        else {
            panic!("expected overview");
        };
        assert_eq!(stats[1].value, "24");
        assert_eq!(recent_activity.len(), 3);

        dashboard.toggle_status("qr-gen").unwrap();
        let DashboardView::Overview { stats, .. } = dashboard.view(AdminTab::Overview).unwrap()
        else {
            panic!("expected overview");
        };
        assert_eq!(stats[1].value, "23");
    }

    #[test]
    fn test_toggle_status_round_trip() {
        let dashboard = dashboard();
        assert_eq!(dashboard.toggle_status("json-format").unwrap(), ToolStatus::Inactive);
        assert_eq!(dashboard.toggle_status("json-format").unwrap(), ToolStatus::Active);
        assert!(matches!(
            dashboard.toggle_status("nope"),
            Err(AdminError::UnknownTool(_))
        ));
    }

    #[test]
    fn test_edit_fields() {
        let dashboard = dashboard();
        let edit = ToolEdit {
            name: Some("JSON Beautifier".to_string()),
            slug: Some("json-beautifier".to_string()),
            category: Some(ToolCategory::Text),
            is_premium: Some(true),
            ..ToolEdit::default()
        };
        let updated = dashboard.edit("json-format", edit).unwrap();
        assert_eq!(updated.name, "JSON Beautifier");
        assert_eq!(updated.slug, "json-beautifier");
        assert_eq!(updated.category, ToolCategory::Text);
        assert!(updated.is_premium);

        let DashboardView::Manage { tools } = dashboard.view(AdminTab::Manage).unwrap() else {
            panic!("expected manage");
        };
        assert!(tools.iter().any(|t| t.slug == "json-beautifier"));
    }

    #[test]
    fn test_edit_rejects_taken_slug() {
        let dashboard = dashboard();
        let edit = ToolEdit {
            slug: Some("password-generator".to_string()),
            ..ToolEdit::default()
        };
        let err = dashboard.edit("json-format", edit).unwrap_err();
        assert!(matches!(err, AdminError::SlugTaken(_)));

        // Keeping its own slug is fine.
        let own = ToolEdit {
            slug: Some("json-formatter".to_string()),
            ..ToolEdit::default()
        };
        assert!(dashboard.edit("json-format", own).is_ok());
    }

    #[test]
    fn test_edit_rejects_bad_values() {
        let dashboard = dashboard();
        let bad_slug = ToolEdit {
            slug: Some("Has Spaces".to_string()),
            ..ToolEdit::default()
        };
        assert!(matches!(
            dashboard.edit("json-format", bad_slug),
            Err(AdminError::InvalidEdit(_))
        ));

        let empty_name = ToolEdit {
            name: Some("  ".to_string()),
            ..ToolEdit::default()
        };
        assert!(dashboard.edit("json-format", empty_name).is_err());
    }

    #[test]
    fn test_analytics_series() {
        let view = dashboard().view(AdminTab::Analytics).unwrap();
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["tab"], "analytics");
        assert_eq!(value["visits"].as_array().unwrap().len(), 7);
    }
}
