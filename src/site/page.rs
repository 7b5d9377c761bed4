use std::fmt;

/// Identifier of the top-level page being displayed.
///
/// The set is closed; any other token is kept verbatim in
/// [`Page::NotFound`] so the router can render its fallback instead of
/// rejecting the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Features,
    Pricing,
    Changelog,
    Docs,
    Download,
    Login,
    Account,
    NotFound(String),
}

impl Page {
    /// Every recognized page, in navbar-ish order.
    pub const RECOGNIZED: [Page; 8] = [
        Page::Home,
        Page::Features,
        Page::Pricing,
        Page::Changelog,
        Page::Docs,
        Page::Download,
        Page::Login,
        Page::Account,
    ];

    /// Parse an identifier. Total: unknown tokens become `NotFound`.
    ///
    /// Matching is exact, so `"Home"` is not `home`.
    pub fn parse(id: &str) -> Self {
        match id {
            "home" => Page::Home,
            "features" => Page::Features,
            "pricing" => Page::Pricing,
            "changelog" => Page::Changelog,
            "docs" => Page::Docs,
            "download" => Page::Download,
            "login" => Page::Login,
            "account" => Page::Account,
            other => Page::NotFound(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Page::Home => "home",
            Page::Features => "features",
            Page::Pricing => "pricing",
            Page::Changelog => "changelog",
            Page::Docs => "docs",
            Page::Download => "download",
            Page::Login => "login",
            Page::Account => "account",
            Page::NotFound(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Page::NotFound(_))
    }

    /// Login and account both land on the self-contained dashboard.
    pub fn is_dashboard(&self) -> bool {
        matches!(self, Page::Login | Page::Account)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_ids_round_trip() {
        for page in Page::RECOGNIZED {
            assert_eq!(Page::parse(page.id()), page);
            assert!(page.is_recognized());
        }
    }

    #[test]
    fn unknown_id_is_kept_verbatim() {
        let page = Page::parse("blog");
        assert_eq!(page, Page::NotFound("blog".to_string()));
        assert_eq!(page.id(), "blog");
        assert!(!page.is_recognized());
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(Page::parse("Pricing"), Page::NotFound(_)));
    }

    #[test]
    fn empty_id_is_not_found() {
        assert_eq!(Page::parse(""), Page::NotFound(String::new()));
    }

    #[test]
    fn default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn dashboard_pages() {
        assert!(Page::Login.is_dashboard());
        assert!(Page::Account.is_dashboard());
        assert!(!Page::Docs.is_dashboard());
    }
}
