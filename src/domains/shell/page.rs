//! Page views and shared chrome.
//!
//! Pages are plain serializable data. `Page::to_html` renders a minimal
//! document around them for clients that ask for HTML.

use serde::Serialize;

use super::error::ShellError;
use super::seo::SeoHead;
use super::share::ShareLink;
use crate::domains::admin::{AdminState, AdminTab, DashboardView};
use crate::domains::catalog::{ToolCategory, ToolStatus};
use crate::domains::preferences::Theme;
use crate::domains::tools::definitions::MinifyLanguage;
use crate::domains::tools::definitions::text::escape_html;

// ============================================================================
// Chrome
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navbar {
    pub brand: String,
    pub search_query: String,
    pub search_placeholder: &'static str,
    pub admin_href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarCategory {
    pub label: &'static str,
    pub active: bool,
}

/// A favorite tool as linked from the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteLink {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub categories: Vec<SidebarCategory>,
    pub favorites: Vec<FavoriteLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub groups: Vec<LinkGroup>,
    pub bottom_links: Vec<&'static str>,
    pub copyright: String,
}

impl Footer {
    pub fn new(brand: &str) -> Self {
        Self {
            groups: vec![
                LinkGroup {
                    title: "Popular Categories",
                    links: vec![
                        "AI Content Tools",
                        "Developer Utilities",
                        "PDF & Image Tools",
                        "Security Tools",
                    ],
                },
                LinkGroup {
                    title: "Company",
                    links: vec![
                        "About Us",
                        "Privacy Policy",
                        "Terms of Service",
                        "Contact Support",
                    ],
                },
            ],
            bottom_links: vec!["Site Map", "Status", "API"],
            copyright: format!("© 2024 {}. All rights reserved.", brand),
        }
    }
}

// ============================================================================
// Bodies
// ============================================================================

/// A tool as shown in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: ToolCategory,
    pub status: ToolStatus,
    pub is_premium: bool,
    pub is_favorite: bool,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
    pub heading: String,
    pub tools: Vec<ToolCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crumb {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// What fills the tool page body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    Widget {
        /// MCP tool that runs the widget.
        tool: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<MinifyLanguage>,
        /// Where to POST widget input.
        endpoint: String,
    },
    ComingSoon {
        title: String,
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: ToolCategory,
    pub is_premium: bool,
    pub is_favorite: bool,
    pub seo: SeoHead,
    /// Navigating here scrolls back to the top.
    pub reset_scroll: bool,
    pub breadcrumb: Vec<Crumb>,
    pub share: Vec<ShareLink>,
    pub content: ToolContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginForm {
    pub remaining_attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminView {
    pub session: AdminState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<LoginForm>,
    pub tabs: Vec<AdminTab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    Grid(GridView),
    Tool(Box<ToolView>),
    Admin(AdminView),
    NotFound { path: String },
}

// ============================================================================
// Page
// ============================================================================

/// A full page: chrome plus body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub theme: Theme,
    pub head: SeoHead,
    pub navbar: Navbar,
    pub sidebar: Sidebar,
    pub footer: Footer,
    pub body: PageBody,
}

impl Page {
    /// Whether the page is the not-found page.
    pub fn is_not_found(&self) -> bool {
        matches!(self.body, PageBody::NotFound { .. })
    }

    /// Minimal HTML document for the page.
    pub fn to_html(&self) -> Result<String, ShellError> {
        let mut body = String::new();
        body.push_str(&format!(
            "<nav><a href=\"/\">{}</a> <a href=\"{}\">Admin</a></nav>\n",
            escape_html(&self.navbar.brand),
            self.navbar.admin_href
        ));

        match &self.body {
            PageBody::Grid(grid) => {
                body.push_str(&format!("<h1>{}</h1>\n<ul>\n", escape_html(&grid.heading)));
                for card in &grid.tools {
                    body.push_str(&format!(
                        "<li><a href=\"{}\">{}</a> {}</li>\n",
                        escape_html(&card.href),
                        escape_html(&card.name),
                        escape_html(&card.description)
                    ));
                }
                body.push_str("</ul>\n");
            }
            PageBody::Tool(tool) => {
                body.push_str(&format!(
                    "<h1>{}</h1>\n<p>{}</p>\n",
                    escape_html(&tool.name),
                    escape_html(&tool.description)
                ));
                match &tool.content {
                    ToolContent::Widget { tool, endpoint, .. } => body.push_str(&format!(
                        "<section data-tool=\"{}\" data-endpoint=\"{}\"></section>\n",
                        tool,
                        escape_html(endpoint)
                    )),
                    ToolContent::ComingSoon { title, message } => body.push_str(&format!(
                        "<section><h2>{}</h2><p>{}</p></section>\n",
                        escape_html(title),
                        message
                    )),
                }
            }
            PageBody::Admin(_) => body.push_str("<h1>Admin Dashboard</h1>\n"),
            PageBody::NotFound { path } => body.push_str(&format!(
                "<h1>Page not found</h1>\n<p>{}</p>\n",
                escape_html(path)
            )),
        }

        body.push_str(&format!("<footer>{}</footer>\n", escape_html(&self.footer.copyright)));

        Ok(format!(
            "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n{}</head>\n<body>\n{}</body>\n</html>\n",
            self.theme,
            self.head.to_html()?,
            body
        ))
    }
}
