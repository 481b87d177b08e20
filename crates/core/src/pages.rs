//! Built-in static page copy (about, terms of service, privacy).
//!
//! These pages are service-owned content, not database state: the routing
//! surface serves them directly and they change only with a deploy.

use serde::Serialize;

/// A static content page addressed by slug.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StaticPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// All static pages, in sidebar order.
pub const STATIC_PAGES: &[StaticPage] = &[
    StaticPage {
        slug: "about",
        title: "About Us",
        body: "Vodboard is a curated video directory organised into boards. \
               Each board collects videos of one category so new uploads are \
               easy to find, and every video links back to its board for \
               more of the same.",
    },
    StaticPage {
        slug: "tos",
        title: "Terms of Service",
        body: "Vodboard links to and embeds media hosted by third parties. \
               By using the site you agree that availability of embedded \
               content is outside our control, that listings may change or \
               disappear without notice, and that use of the service is at \
               your own discretion.",
    },
    StaticPage {
        slug: "privacy",
        title: "Privacy Policy",
        body: "Vodboard does not require an account to browse and does not \
               profile visitors. Server logs are kept only as long as needed \
               for operating the service. Embedded third-party players and \
               advertising partners may set their own cookies under their \
               own policies.",
    },
];

/// Look up a static page by slug.
pub fn find_page(slug: &str) -> Option<&'static StaticPage> {
    STATIC_PAGES.iter().find(|p| p.slug == slug)
}
