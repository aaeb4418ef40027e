//! Shell domain module.
//!
//! Resolves paths to routes and builds the page each route shows, wrapped
//! in the shared chrome (navbar, sidebar, footer).
//!
//! ## Architecture
//!
//! - `routes.rs` - Path to [`Route`] resolution
//! - `page.rs` - Page, chrome and body view types
//! - `seo.rs` - Document head metadata and JSON-LD
//! - `share.rs` - Social share links
//! - `error.rs` - Shell-specific error types

mod error;
mod page;
mod routes;
mod seo;
mod share;

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

pub use error::ShellError;
pub use page::{
    AdminView, Crumb, FavoriteLink, Footer, GridView, LoginForm, Navbar, Page, PageBody, Sidebar,
    SidebarCategory, ToolCard, ToolContent, ToolView,
};
pub use routes::Route;
pub use seo::SeoHead;
pub use share::{ShareLink, share_links};

use crate::core::config::SiteConfig;
use crate::domains::admin::{AdminDashboard, AdminSession, AdminState, AdminTab};
use crate::domains::catalog::{Catalog, CatalogEntry, CategoryFilter, WidgetBinding};
use crate::domains::preferences::{FavoritesStore, ThemeStore};
use crate::domains::tools::Widget;

const COMING_SOON_MESSAGE: &str =
    "We are currently developing the full implementation for this tool.";

/// Query parameters understood by page routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Free-text search.
    pub q: Option<String>,
    /// `All` or a category name.
    pub category: Option<String>,
    /// Admin dashboard tab.
    pub tab: Option<String>,
}

/// The site: catalog, visitor preferences and admin area behind one facade.
pub struct Shell {
    site: SiteConfig,
    catalog: Arc<Catalog>,
    favorites: Arc<FavoritesStore>,
    theme: Arc<ThemeStore>,
    session: Arc<AdminSession>,
    dashboard: Arc<AdminDashboard>,
}

impl Shell {
    pub fn new(
        site: SiteConfig,
        catalog: Arc<Catalog>,
        favorites: Arc<FavoritesStore>,
        theme: Arc<ThemeStore>,
        session: Arc<AdminSession>,
        dashboard: Arc<AdminDashboard>,
    ) -> Self {
        Self {
            site,
            catalog,
            favorites,
            theme,
            session,
            dashboard,
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn dashboard(&self) -> &AdminDashboard {
        &self.dashboard
    }

    /// Build the page shown at `path`.
    #[instrument(skip(self, query))]
    pub fn render(&self, path: &str, query: &PageQuery) -> Result<Page, ShellError> {
        let filter: CategoryFilter = query.category.as_deref().unwrap_or("All").parse()?;
        let search = query.q.clone().unwrap_or_default();

        let (head, body) = match Route::resolve(&self.catalog, path) {
            Route::Home => (
                SeoHead::for_site(format!("{} | Free Online Tools", self.site.brand), "/", &self.site),
                PageBody::Grid(self.grid(&search, filter)),
            ),
            Route::Admin => (
                SeoHead::for_site(format!("Admin Dashboard | {}", self.site.brand), "/admin", &self.site),
                PageBody::Admin(self.admin_view(query.tab.as_deref())?),
            ),
            Route::Tool(entry) => {
                let view = self.tool_view(entry)?;
                (view.seo.clone(), PageBody::Tool(Box::new(view)))
            }
            Route::NotFound => {
                debug!("No route for {}", path);
                (
                    SeoHead::for_site(format!("Page Not Found | {}", self.site.brand), path, &self.site),
                    PageBody::NotFound {
                        path: path.to_string(),
                    },
                )
            }
        };

        Ok(Page {
            theme: self.theme.get()?,
            head,
            navbar: Navbar {
                brand: self.site.brand.clone(),
                search_query: search,
                search_placeholder: "Search 30+ tools...",
                admin_href: "/admin",
            },
            sidebar: self.sidebar(filter),
            footer: Footer::new(&self.site.brand),
            body,
        })
    }

    /// The tool grid for a search and category filter.
    pub fn grid(&self, search: &str, filter: CategoryFilter) -> GridView {
        let heading = match filter {
            CategoryFilter::All => "All Tools".to_string(),
            CategoryFilter::Only(category) => format!("{} Tools", category),
        };

        let tools = self
            .catalog
            .search(search, filter)
            .into_iter()
            .map(|entry| {
                let r = &entry.record;
                ToolCard {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    description: r.description.clone(),
                    icon: r.icon.clone(),
                    category: r.category,
                    status: r.status,
                    is_premium: r.is_premium,
                    is_favorite: self.favorites.is_favorite(&r.id),
                    href: format!("/{}", r.slug),
                }
            })
            .collect();

        GridView { heading, tools }
    }

    /// The page view for one catalog entry.
    pub fn tool_view(&self, entry: &CatalogEntry) -> Result<ToolView, ShellError> {
        let record = &entry.record;
        let seo = SeoHead::for_tool(record, &self.site);
        let share = share_links(&seo.canonical_url, &record.name)?;

        let content = match entry.binding {
            WidgetBinding::Ready(widget) => ToolContent::Widget {
                tool: widget.tool_name(),
                language: match widget {
                    Widget::Minifier(language) => Some(language),
                    _ => None,
                },
                endpoint: format!("/{}", record.slug),
            },
            WidgetBinding::ComingSoon => ToolContent::ComingSoon {
                title: entry.coming_soon_title(),
                message: COMING_SOON_MESSAGE,
            },
        };

        Ok(ToolView {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            icon: record.icon.clone(),
            category: record.category,
            is_premium: record.is_premium,
            is_favorite: self.favorites.is_favorite(&record.id),
            seo,
            reset_scroll: true,
            breadcrumb: vec![
                Crumb {
                    label: "Home".to_string(),
                    href: Some("/".to_string()),
                },
                Crumb {
                    label: record.name.clone(),
                    href: None,
                },
            ],
            share,
            content,
        })
    }

    fn admin_view(&self, tab: Option<&str>) -> Result<AdminView, ShellError> {
        let session = self.session.state()?;

        let view = match session {
            AdminState::LoggedOut => AdminView {
                session,
                login: Some(LoginForm {
                    remaining_attempts: self.session.remaining_attempts(),
                }),
                tabs: Vec::new(),
                dashboard: None,
            },
            AdminState::LoggedIn { .. } => {
                let tab: AdminTab = match tab {
                    Some(name) => name.parse()?,
                    None => AdminTab::default(),
                };
                AdminView {
                    session,
                    login: None,
                    tabs: AdminTab::ALL.to_vec(),
                    dashboard: Some(self.dashboard.view(tab)?),
                }
            }
        };
        Ok(view)
    }

    fn sidebar(&self, active: CategoryFilter) -> Sidebar {
        let categories = CategoryFilter::sidebar_entries()
            .into_iter()
            .map(|label| SidebarCategory {
                label,
                active: label == active.label(),
            })
            .collect();

        // Favorites that no longer name a tool are skipped.
        let favorites = self
            .favorites
            .list()
            .iter()
            .filter_map(|id| self.catalog.find_by_id(id))
            .map(|entry| FavoriteLink {
                id: entry.record.id.clone(),
                name: entry.record.name.clone(),
                icon: entry.record.icon.clone(),
                href: format!("/{}", entry.record.slug),
            })
            .collect();

        Sidebar {
            categories,
            favorites,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::config::AdminConfig;
    use crate::core::storage::{KeyValueStore, MemoryStore};
    use crate::domains::admin::ConfiguredAuthenticator;
    use crate::domains::catalog::ToolCategory;

    /// Shell over an in-memory store with admin account `operator`/`s3cret`.
    pub(crate) fn test_shell() -> Shell {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let admin = AdminConfig {
            username: Some("operator".to_string()),
            password: Some("s3cret".to_string()),
            ..AdminConfig::default()
        };
        let catalog = Arc::new(Catalog::builtin().unwrap());
        Shell::new(
            SiteConfig::default(),
            catalog.clone(),
            Arc::new(FavoritesStore::load(storage.clone()).unwrap()),
            Arc::new(ThemeStore::new(storage.clone())),
            Arc::new(AdminSession::new(
                storage,
                Arc::new(ConfiguredAuthenticator::new(&admin)),
                &admin,
            )),
            Arc::new(AdminDashboard::new(&catalog)),
        )
    }

    #[test]
    fn test_home_lists_every_tool() {
        let shell = test_shell();
        let page = shell.render("/", &PageQuery::default()).unwrap();
        let PageBody::Grid(grid) = page.body else {
            panic!("expected grid");
        };
        assert_eq!(grid.heading, "All Tools");
        assert_eq!(grid.tools.len(), 24);
        assert_eq!(page.sidebar.categories.len(), 7);
        assert!(page.sidebar.categories[0].active);
    }

    #[test]
    fn test_home_filters() {
        let shell = test_shell();
        let query = PageQuery {
            category: Some("Developer".to_string()),
            q: Some("minif".to_string()),
            ..PageQuery::default()
        };
        let page = shell.render("/", &query).unwrap();
        assert_eq!(page.navbar.search_query, "minif");
        let PageBody::Grid(grid) = page.body else {
            panic!("expected grid");
        };
        assert_eq!(grid.heading, "Developer Tools");
        assert!(!grid.tools.is_empty());
        assert!(grid.tools.iter().all(|t| t.category == ToolCategory::Developer));

        let bad = PageQuery {
            category: Some("Games".to_string()),
            ..PageQuery::default()
        };
        assert!(matches!(shell.render("/", &bad), Err(ShellError::Catalog(_))));
    }

    #[test]
    fn test_tool_page() {
        let shell = test_shell();
        let page = shell.render("#/json-formatter", &PageQuery::default()).unwrap();
        assert_eq!(page.head.title, page.head.og_title);

        let PageBody::Tool(view) = page.body else {
            panic!("expected tool page");
        };
        assert!(view.reset_scroll);
        assert_eq!(view.breadcrumb.len(), 2);
        assert_eq!(view.share.len(), 4);
        assert_eq!(
            view.content,
            ToolContent::Widget {
                tool: "json_formatter",
                language: None,
                endpoint: "/json-formatter".to_string(),
            }
        );
    }

    #[test]
    fn test_minifier_page_carries_language() {
        let shell = test_shell();
        let page = shell.render("/css-minifier", &PageQuery::default()).unwrap();
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["body"]["kind"], "tool");
        assert_eq!(value["body"]["content"]["tool"], "code_minifier");
        assert_eq!(value["body"]["content"]["language"], "css");
    }

    #[test]
    fn test_placeholder_page() {
        let shell = test_shell();
        let page = shell.render("/pdf-compressor", &PageQuery::default()).unwrap();
        let PageBody::Tool(view) = page.body else {
            panic!("expected tool page");
        };
        let ToolContent::ComingSoon { title, .. } = view.content else {
            panic!("expected placeholder");
        };
        assert_eq!(title, "Tool PDF Compressor Coming Soon");
    }

    #[test]
    fn test_not_found() {
        let shell = test_shell();
        let page = shell.render("/no-such-tool", &PageQuery::default()).unwrap();
        assert!(page.is_not_found());
        assert!(page.to_html().unwrap().contains("Page not found"));
    }

    #[test]
    fn test_sidebar_shows_known_favorites() {
        let shell = test_shell();
        shell.favorites().toggle("pw-gen").unwrap();
        shell.favorites().toggle("gone-tool").unwrap();

        let page = shell.render("/", &PageQuery::default()).unwrap();
        assert_eq!(page.sidebar.favorites.len(), 1);
        assert_eq!(page.sidebar.favorites[0].href, "/password-generator");

        let PageBody::Grid(grid) = page.body else {
            panic!("expected grid");
        };
        assert!(grid.tools.iter().find(|t| t.id == "pw-gen").unwrap().is_favorite);
    }

    #[tokio::test]
    async fn test_admin_page_states() {
        let shell = test_shell();
        let page = shell.render("/admin", &PageQuery::default()).unwrap();
        let PageBody::Admin(view) = page.body else {
            panic!("expected admin page");
        };
        assert_eq!(view.login, Some(LoginForm { remaining_attempts: 5 }));
        assert!(view.dashboard.is_none());

        shell.session().login("operator", "s3cret").await.unwrap();
        let query = PageQuery {
            tab: Some("manage".to_string()),
            ..PageQuery::default()
        };
        let page = shell.render("/admin", &query).unwrap();
        let value = serde_json::to_value(&page.body).unwrap();
        assert_eq!(value["session"]["state"], "logged_in");
        assert_eq!(value["dashboard"]["tab"], "manage");
        assert_eq!(value["dashboard"]["tools"].as_array().unwrap().len(), 24);
    }

    #[test]
    fn test_tool_page_html() {
        let shell = test_shell();
        shell.theme().set(crate::domains::preferences::Theme::Dark).unwrap();
        let html = shell
            .render("/word-counter", &PageQuery::default())
            .unwrap()
            .to_html()
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("data-tool=\"word_counter\""));
        assert!(html.contains("<link rel=\"canonical\""));
    }
}
