//! Social share links for a tool page.

use serde::Serialize;

use super::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub platform: &'static str,
    pub icon: &'static str,
    pub href: String,
}

/// Share links for `url`, the last one being the plain link to copy.
pub fn share_links(url: &str, title: &str) -> Result<Vec<ShareLink>, ShellError> {
    let twitter = serde_urlencoded::to_string(&[("text", title), ("url", url)])?;
    let facebook = serde_urlencoded::to_string(&[("u", url)])?;
    let whatsapp = serde_urlencoded::to_string(&[("text", format!("{} {}", title, url))])?;

    Ok(vec![
        ShareLink {
            platform: "Twitter",
            icon: "fa-x-twitter",
            href: format!("https://twitter.com/intent/tweet?{}", twitter),
        },
        ShareLink {
            platform: "Facebook",
            icon: "fa-facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?{}", facebook),
        },
        ShareLink {
            platform: "WhatsApp",
            icon: "fa-whatsapp",
            href: format!("https://wa.me/?{}", whatsapp),
        },
        ShareLink {
            platform: "Copy Link",
            icon: "fa-link",
            href: url.to_string(),
        },
    ])
}
