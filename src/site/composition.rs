use crate::site::page::Page;

/// A composable block of the site. Pages are ordered lists of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Navbar,
    Hero,
    FeatureGrid,
    FeatureDeepDive,
    Pricing,
    Changelog,
    Docs,
    Downloads,
    /// Replaces the whole page chrome; never combined with navbar or footer.
    Dashboard,
    Footer,
    NotFound,
}

/// Map a page to the sections it renders, top to bottom.
///
/// Total over every `Page`, including unrecognized identifiers.
pub fn compose(page: &Page) -> Vec<Section> {
    use Section::*;

    match page {
        Page::Home => vec![Navbar, Hero, FeatureGrid, Footer],
        Page::Features => vec![Navbar, FeatureDeepDive, Footer],
        Page::Pricing => vec![Navbar, Pricing, Footer],
        Page::Changelog => vec![Navbar, Changelog, Footer],
        Page::Docs => vec![Navbar, Docs],
        Page::Download => vec![Navbar, Downloads, Footer],
        Page::Login | Page::Account => vec![Dashboard],
        Page::NotFound(_) => vec![Navbar, NotFound],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_has_hero_grid_and_footer() {
        assert_eq!(
            compose(&Page::Home),
            vec![
                Section::Navbar,
                Section::Hero,
                Section::FeatureGrid,
                Section::Footer
            ]
        );
    }

    #[test]
    fn docs_has_no_footer() {
        let sections = compose(&Page::Docs);
        assert!(sections.contains(&Section::Docs));
        assert!(!sections.contains(&Section::Footer));
    }

    #[test]
    fn dashboard_pages_drop_the_chrome() {
        for page in [Page::Login, Page::Account] {
            assert_eq!(compose(&page), vec![Section::Dashboard]);
        }
    }

    #[test]
    fn unknown_page_falls_back() {
        let sections = compose(&Page::parse("does-not-exist"));
        assert_eq!(sections, vec![Section::Navbar, Section::NotFound]);
    }

    #[test]
    fn every_recognized_page_avoids_the_fallback() {
        for page in Page::RECOGNIZED {
            assert!(!compose(&page).contains(&Section::NotFound), "{page}");
        }
    }
}
