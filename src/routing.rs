//! Path to page routing.
//!
//! A pure, exact-match table with no guards, parameters, or redirects.
//! Rendering a page is the embedding UI's job.

/// Top-level pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Products,
    Login,
    Register,
    Checkout,
    Thanks,
}

impl Page {
    /// The canonical path for this page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Products => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Checkout => "/checkout",
            Page::Thanks => "/thanks",
        }
    }
}

/// Resolve a browser path to a page. Unknown paths resolve to nothing.
pub fn resolve(path: &str) -> Option<Page> {
    match path {
        "/" => Some(Page::Products),
        "/login" => Some(Page::Login),
        "/register" => Some(Page::Register),
        "/checkout" => Some(Page::Checkout),
        "/thanks" => Some(Page::Thanks),
        _ => None,
    }
}
