//! Document head metadata for tool pages.

use serde::Serialize;
use serde_json::{Value, json};

use super::error::ShellError;
use crate::core::config::SiteConfig;
use crate::domains::catalog::ToolRecord;
use crate::domains::tools::definitions::text::escape_html;

const PREMIUM_PRICE: &str = "9.99";

/// Title, meta tags, canonical link and structured data for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoHead {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    pub twitter_card: &'static str,
    /// schema.org `WebApplication` block, tool pages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<Value>,
}

impl SeoHead {
    /// Head for a tool page.
    pub fn for_tool(record: &ToolRecord, site: &SiteConfig) -> Self {
        let url = format!("{}/{}", site.base_url, record.slug);
        let price = if record.is_premium { PREMIUM_PRICE } else { "0" };

        let json_ld = json!({
            "@context": "https://schema.org",
            "@type": "WebApplication",
            "name": record.name,
            "description": record.description,
            "url": url,
            "applicationCategory": record.category,
            "operatingSystem": "All",
            "offers": {
                "@type": "Offer",
                "price": price,
                "priceCurrency": "USD"
            },
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": "4.8",
                "reviewCount": "1250"
            }
        });

        Self {
            title: record.seo_title.clone(),
            description: record.seo_description.clone(),
            keywords: record.keywords.join(", "),
            canonical_url: url.clone(),
            og_title: record.seo_title.clone(),
            og_description: record.seo_description.clone(),
            og_url: url,
            twitter_card: "summary_large_image",
            json_ld: Some(json_ld),
        }
    }

    /// Head for site-level pages (grid, admin, not found).
    pub fn for_site(title: impl Into<String>, path: &str, site: &SiteConfig) -> Self {
        let title = title.into();
        let description = format!(
            "{} offers free online tools for developers, writers and creators.",
            site.brand
        );
        let url = format!("{}{}", site.base_url, path);

        Self {
            og_title: title.clone(),
            og_description: description.clone(),
            og_url: url.clone(),
            title,
            description,
            keywords: "online tools, free tools, developer tools".to_string(),
            canonical_url: url,
            twitter_card: "summary_large_image",
            json_ld: None,
        }
    }

    /// Render as `<head>` inner markup.
    pub fn to_html(&self) -> Result<String, ShellError> {
        let mut html = String::new();
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        push_meta(&mut html, "name", "description", &self.description);
        push_meta(&mut html, "name", "keywords", &self.keywords);
        push_meta(&mut html, "property", "og:title", &self.og_title);
        push_meta(&mut html, "property", "og:description", &self.og_description);
        push_meta(&mut html, "property", "og:url", &self.og_url);
        push_meta(&mut html, "name", "twitter:card", self.twitter_card);
        html.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape_html(&self.canonical_url)
        ));

        if let Some(json_ld) = &self.json_ld {
            // "</" would close the script element early.
            let data = serde_json::to_string(json_ld)?.replace("</", "<\\/");
            html.push_str(&format!(
                "<script id=\"json-ld\" type=\"application/ld+json\">{}</script>\n",
                data
            ));
        }

        Ok(html)
    }
}

fn push_meta(html: &mut String, attr: &str, key: &str, content: &str) {
    html.push_str(&format!(
        "<meta {}=\"{}\" content=\"{}\">\n",
        attr,
        key,
        escape_html(content)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::Catalog;

    fn record(id: &str) -> ToolRecord {
        Catalog::builtin().unwrap().find_by_id(id).unwrap().record.clone()
    }

    #[test]
    fn test_tool_head() {
        let site = SiteConfig::default();
        let head = SeoHead::for_tool(&record("json-format"), &site);

        assert_eq!(head.canonical_url, format!("{}/json-formatter", site.base_url));
        assert_eq!(head.og_url, head.canonical_url);
        let json_ld = head.json_ld.as_ref().unwrap();
        assert_eq!(json_ld["@type"], "WebApplication");
        assert_eq!(json_ld["applicationCategory"], "Developer");
        assert_eq!(json_ld["offers"]["price"], "0");
    }

    #[test]
    fn test_premium_price() {
        let mut premium = record("ai-img");
        premium.is_premium = true;
        let head = SeoHead::for_tool(&premium, &SiteConfig::default());
        assert_eq!(head.json_ld.unwrap()["offers"]["price"], "9.99");
    }

    #[test]
    fn test_head_html() {
        let mut r = record("json-format");
        r.seo_title = "JSON <Formatter> & Validator".to_string();
        let html = SeoHead::for_tool(&r, &SiteConfig::default()).to_html().unwrap();

        assert!(html.contains("<title>JSON &lt;Formatter&gt; &amp; Validator</title>"));
        assert!(html.contains("<link rel=\"canonical\""));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("property=\"og:title\""));
    }

    #[test]
    fn test_site_head_has_no_structured_data() {
        let site = SiteConfig::default();
        let head = SeoHead::for_site("Admin Dashboard", "/admin", &site);
        assert!(head.json_ld.is_none());
        assert_eq!(head.canonical_url, format!("{}/admin", site.base_url));
        assert!(!head.to_html().unwrap().contains("json-ld"));
    }
}
