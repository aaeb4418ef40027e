//! Path to route resolution.

use crate::domains::catalog::{Catalog, CatalogEntry};

/// What a path points at.
#[derive(Debug, Clone, Copy)]
pub enum Route<'a> {
    /// The tool grid.
    Home,
    /// The admin dashboard.
    Admin,
    /// One tool's page.
    Tool(&'a CatalogEntry),
    /// Nothing is registered at this path.
    NotFound,
}

impl<'a> Route<'a> {
    /// Resolve `path` against the catalog.
    ///
    /// Accepts plain (`/json-formatter`) and fragment (`#/json-formatter`)
    /// forms; a trailing slash and any query string are ignored.
    pub fn resolve(catalog: &'a Catalog, path: &str) -> Self {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segment = path.trim_matches('/');

        match segment {
            "" => Route::Home,
            "admin" => Route::Admin,
            slug => match catalog.find_by_slug(slug) {
                Some(entry) => Route::Tool(entry),
                None => Route::NotFound,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_home_and_admin() {
        let catalog = catalog();
        for path in ["/", "", "#/", "#", "/?q=json"] {
            assert!(matches!(Route::resolve(&catalog, path), Route::Home), "{path}");
        }
        for path in ["/admin", "#/admin", "/admin/", "/admin?tab=manage"] {
            assert!(matches!(Route::resolve(&catalog, path), Route::Admin), "{path}");
        }
    }

    #[test]
    fn test_tool_slugs() {
        let catalog = catalog();
        for path in ["/json-formatter", "#/json-formatter", "/json-formatter/", "json-formatter"] {
            match Route::resolve(&catalog, path) {
                Route::Tool(entry) => assert_eq!(entry.record.id, "json-format"),
                other => panic!("{path} resolved to {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_paths() {
        let catalog = catalog();
        assert!(matches!(Route::resolve(&catalog, "/nope"), Route::NotFound));
        assert!(matches!(
            Route::resolve(&catalog, "/json-formatter/extra"),
            Route::NotFound
        ));
    }
}
