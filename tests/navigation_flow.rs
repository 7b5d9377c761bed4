//! End-to-end navigation through the rendered terminal.

mod common;

use common::*;
use crossterm::event::KeyCode;
use nomad_site::site::content::{COPYRIGHT, FEATURES_HEADING_ACCENT, HERO_TITLE, NOT_FOUND};
use nomad_site::site::{Page, Section};
use nomad_site::ui::components::Action;
use nomad_site::ui::dashboard::DashboardTab;
use nomad_site::ui::input::handle_key;

// -- Full flow -----------------------------------------------------------------

#[test]
fn home_to_pricing_to_download() {
    let mut app = make_app("home", 120, TALL);
    let home = render_text(&app);
    assert!(home.contains(HERO_TITLE));

    app.perform(Action::Navigate(Page::Pricing));
    let pricing = render_text(&app);
    assert!(pricing.contains("$0"));
    assert!(pricing.contains("$199"));

    app.perform(Action::Navigate(Page::Download));
    let rows = render_rows(&app);
    let builds = rows.iter().filter(|row| row.contains("Download ]")).count();
    let betas = rows.iter().filter(|row| row.contains("Beta")).count();
    assert_eq!(builds, 4);
    assert_eq!(betas, 1);
}

#[test]
fn keyboard_can_reach_pricing() {
    let mut app = make_app("home", 120, 40);
    // logo, Features, Docs, Pricing
    for _ in 0..4 {
        handle_key(&mut app, press_key(KeyCode::Tab));
    }
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(app.page(), &Page::Pricing);
    assert!(render_text(&app).contains("Simple, honest pricing"));
}

// -- Composition -----------------------------------------------------------------

#[test]
fn every_recognized_page_renders_its_sections() {
    for page in Page::RECOGNIZED {
        let app = make_app(page.id(), 120, TALL);
        let text = render_text(&app);
        let sections = app.composition();
        assert_eq!(
            text.contains(COPYRIGHT),
            sections.contains(&Section::Footer),
            "footer mismatch on {page}"
        );
        assert_eq!(
            text.contains("Sign in"),
            sections.contains(&Section::Navbar),
            "navbar mismatch on {page}"
        );
    }
}

#[test]
fn home_has_hero_grid_and_footer() {
    let text = render_text(&make_app("home", 120, TALL));
    assert!(text.contains(HERO_TITLE));
    assert!(text.contains(FEATURES_HEADING_ACCENT));
    assert!(text.contains(COPYRIGHT));
}

#[test]
fn docs_never_show_footer() {
    for cols in [60, 120] {
        let text = render_text(&make_app("docs", cols, TALL));
        assert!(text.contains("Welcome to Nomad"));
        assert!(!text.contains(COPYRIGHT));
    }
}

#[test]
fn unknown_pages_render_not_found() {
    for id in ["nope", "", "Home", "PRICING", "../etc"] {
        let mut app = make_app("home", 120, 40);
        app.navigate(id);
        let text = render_text(&app);
        assert!(text.contains(NOT_FOUND), "{id:?} should be not found");
        assert!(text.contains("Sign in"));
    }
}

// -- Scroll reset ------------------------------------------------------------------

#[test]
fn scroll_resets_once_per_change() {
    let mut app = make_app("home", 120, 30);
    app.scroll_by(12);
    app.navigate("changelog");
    assert_eq!(app.viewport().offset(), 0);
    assert_eq!(app.viewport().resets(), 1);

    app.navigate("home");
    assert_eq!(app.viewport().resets(), 2);
    app.scroll_by(3);
    app.navigate("home");
    assert_eq!(app.viewport().offset(), 3);
    assert_eq!(app.viewport().resets(), 2);

    app.navigate("features");
    app.navigate("nowhere");
    assert_eq!(app.viewport().resets(), 4);
}

#[test]
fn login_to_account_is_a_change() {
    let mut app = make_app("login", 120, 30);
    app.perform(Action::SelectTab(DashboardTab::Plugins));
    app.navigate("account");
    assert_eq!(app.viewport().resets(), 1);
    assert_eq!(app.dashboard().tab, DashboardTab::Overview);
}

// -- Leaf state ----------------------------------------------------------------------

#[test]
fn dashboard_tab_resets_on_fresh_mount() {
    let mut app = make_app("account", 120, TALL);
    app.perform(Action::SelectTab(DashboardTab::Support));
    assert!(render_text(&app).contains("Open a Ticket"));

    app.perform(Action::Navigate(Page::Home));
    app.perform(Action::Navigate(Page::Account));
    assert_eq!(app.dashboard().tab, DashboardTab::Overview);
    assert!(render_text(&app).contains("Installation History"));
}

#[test]
fn mobile_menu_toggle_twice_is_closed() {
    let mut app = make_app("home", 60, TALL);
    let closed = render_text(&app);
    assert!(!closed.contains("Download Trial"));

    handle_key(&mut app, press_key(KeyCode::Char('m')));
    assert!(app.navbar().mobile_open);
    assert!(render_text(&app).contains("Download Trial"));

    handle_key(&mut app, press_key(KeyCode::Char('m')));
    assert!(!app.navbar().mobile_open);
    assert_eq!(render_text(&app), closed);
}

#[test]
fn narrow_navbar_hides_links() {
    let app = make_app("home", 60, 30);
    let header = &render_rows(&app)[0];
    assert!(!header.contains("Changelog"));
    assert!(!header.contains("Sign in"));
}
