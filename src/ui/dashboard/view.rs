use crate::site::content::{
    Icon, ACCOUNT_INITIALS, ACCOUNT_PLAN, ACCOUNT_USER, CURRENT_VERSION, INSTALLATIONS,
    LATEST_BUILD_RELEASED, LICENSE_EXPIRY, LICENSE_KEY, PLUGIN_SYNC_BADGE, PLUGIN_SYNC_COPY,
    PLUGIN_SYNC_TITLE, PRODUCT, SUPPORT_PLACEHOLDER, SUPPORT_TITLE,
};
use crate::site::Page;
use crate::ui::components::{
    glyph, Action, Badge, Button, ButtonSize, ButtonVariant, Card,
};
use crate::ui::dashboard::state::{DashboardState, DashboardTab};
use crate::ui::document::Document;
use crate::ui::layout::column_width;
use crate::ui::theme::{
    BORDER, STATUS_OK, TEXT, TEXT_BODY, TEXT_FAINT, TEXT_MUTED, VIOLET, VIOLET_LIGHT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const SIDEBAR_WIDTH: u16 = 24;
const SIDEBAR_GAP: u16 = 3;
const CONTENT_MAX_WIDTH: u16 = 90;
const CARD_GAP: u16 = 3;
const TICKET_ROWS: usize = 5;
const TAB_GAP: usize = 2;

/// The whole dashboard screen. Below the breakpoint the sidebar turns into
/// a tab strip above the content.
pub fn render_dashboard(doc: &mut Document, state: &DashboardState, narrow: bool) {
    doc.blank();
    if narrow {
        render_tab_strip(doc, state.tab);
        doc.blank();
        let mut content = doc.child(doc.width());
        render_content(&mut content, state.tab, true);
        doc.append(content);
        return;
    }

    let mut sidebar = doc.child(SIDEBAR_WIDTH);
    render_sidebar(&mut sidebar, state.tab);
    let content_width = doc
        .width()
        .saturating_sub(SIDEBAR_WIDTH + SIDEBAR_GAP)
        .min(CONTENT_MAX_WIDTH)
        .max(1);
    let mut content = doc.child(content_width);
    render_content(&mut content, state.tab, false);
    doc.append_columns(vec![sidebar, content], SIDEBAR_GAP);
}

fn logo(doc: &mut Document) -> Span<'static> {
    doc.button(
        Button::link(PRODUCT).icon(Icon::Music).active(true),
        Action::Navigate(Page::Home),
    )
}

fn tab_button(doc: &mut Document, tab: DashboardTab, active: DashboardTab) -> Span<'static> {
    doc.button(
        Button::link(tab.label())
            .icon(tab.icon())
            .active(tab == active),
        Action::SelectTab(tab),
    )
}

fn render_sidebar(doc: &mut Document, active: DashboardTab) {
    let logo = logo(doc);
    doc.push(logo);
    doc.blank();
    doc.blank();
    for tab in DashboardTab::ALL {
        let marker = if tab == active {
            Span::styled("▌ ", Style::default().fg(VIOLET_LIGHT))
        } else {
            Span::raw("  ")
        };
        let link = tab_button(doc, tab, active);
        doc.push(Line::from(vec![marker, link]));
    }
    doc.blank();
    doc.blank();

    let mut user = doc.child(Card::inner_width(doc.width()));
    user.push(Line::from(vec![
        Span::styled(
            format!(" {ACCOUNT_INITIALS} "),
            Style::default()
                .fg(TEXT)
                .bg(VIOLET)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {ACCOUNT_USER}"), Style::default().fg(TEXT)),
    ]));
    user.push(Span::styled(
        format!("     {ACCOUNT_PLAN}"),
        Style::default().fg(TEXT_FAINT),
    ));
    doc.append(Card::new().frame(user));
}

fn render_tab_strip(doc: &mut Document, active: DashboardTab) {
    let logo = logo(doc);
    doc.push(logo);
    doc.blank();
    let tabs = DashboardTab::ALL
        .into_iter()
        .map(|tab| tab_button(doc, tab, active))
        .collect();
    doc.push_flow(tabs, TAB_GAP);
    doc.rule(Style::default().fg(BORDER));
}

fn render_content(doc: &mut Document, tab: DashboardTab, narrow: bool) {
    let sign_out = doc.button(
        Button::new("Sign Out")
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Sm),
        Action::Navigate(Page::Home),
    );
    doc.push_split(
        vec![Span::styled(
            tab.title(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )],
        vec![sign_out],
    );
    doc.blank();

    match tab {
        DashboardTab::Overview => render_overview(doc, narrow),
        DashboardTab::Plugins => render_plugins(doc),
        DashboardTab::Support => render_support(doc),
        DashboardTab::Licenses => {}
    }
}

fn installer_button() -> Button {
    Button::new("Download Installer").icon(Icon::Download)
}

fn render_overview(doc: &mut Document, narrow: bool) {
    // Side by side only while the installer button fits a half-width card.
    let half = Card::inner_width(column_width(doc.width(), 2, CARD_GAP));
    let per_row: u16 = if narrow || (half as usize) < installer_button().width() {
        1
    } else {
        2
    };
    let inner_width = Card::inner_width(column_width(doc.width(), per_row, CARD_GAP));
    let heading = Style::default().fg(TEXT_MUTED);

    let mut license = doc.child(inner_width);
    license.push(Span::styled("Active License", heading));
    license.blank();
    license.push(Line::from(vec![
        Span::styled(
            " ACTIVE ",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {LICENSE_EXPIRY}"), Style::default().fg(TEXT_FAINT)),
    ]));
    license.blank();
    license.push_split(
        vec![Span::styled(LICENSE_KEY, Style::default().fg(TEXT_BODY))],
        vec![Span::styled(glyph(Icon::Check), Style::default().fg(TEXT_FAINT))],
    );

    let mut build = doc.child(inner_width);
    build.push(Span::styled("Latest Build", heading));
    build.blank();
    build.push_split(
        vec![Span::styled(
            format!("{PRODUCT} v{CURRENT_VERSION}"),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )],
        vec![Span::styled(LATEST_BUILD_RELEASED, Style::default().fg(TEXT_FAINT))],
    );
    build.blank();
    let download = build.button(
        installer_button().fit_to(inner_width as usize),
        Action::Inert,
    );
    build.push(download);

    let tallest = license.len().max(build.len());
    let cards: Vec<Document> = [license, build]
        .into_iter()
        .map(|mut body| {
            while body.len() < tallest {
                body.blank();
            }
            Card::new().frame(body)
        })
        .collect();
    doc.append_grid(cards, per_row as usize, CARD_GAP);
    doc.blank();

    doc.push(Span::styled(
        "Installation History",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    doc.blank();
    let mut history = doc.child(Card::inner_width(doc.width()));
    for (i, install) in INSTALLATIONS.iter().enumerate() {
        if i > 0 {
            history.rule(Style::default().fg(BORDER));
        }
        history.push_split(
            vec![
                Span::styled(
                    format!("{}  ", glyph(Icon::Cpu)),
                    Style::default().fg(TEXT_FAINT),
                ),
                Span::styled(install.label, Style::default().fg(TEXT_BODY)),
            ],
            vec![Span::styled(install.date, Style::default().fg(TEXT_FAINT))],
        );
        history.push(Span::styled(
            format!("   {} • Downloaded via Web", install.version),
            Style::default().fg(TEXT_FAINT),
        ));
    }
    doc.append(Card::new().frame(history));
}

fn render_plugins(doc: &mut Document) {
    doc.blank();
    doc.blank();
    doc.push_centered(Span::styled(
        format!("( {} )", glyph(Icon::Zap)),
        Style::default().fg(TEXT_FAINT),
    ));
    doc.blank();
    doc.paragraph_centered(
        PLUGIN_SYNC_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    );
    doc.blank();
    let mut copy = doc.child(doc.width().min(48));
    copy.paragraph(PLUGIN_SYNC_COPY, Style::default().fg(TEXT_MUTED));
    doc.append_centered(copy);
    doc.blank();
    doc.push_centered(Badge::outline(PLUGIN_SYNC_BADGE).span());
}

fn render_support(doc: &mut Document) {
    let inner_width = Card::inner_width(doc.width());
    let mut ticket = doc.child(inner_width);
    ticket.push(Span::styled(
        SUPPORT_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    ticket.blank();

    let mut field = ticket.child(Card::inner_width(inner_width));
    field.push(Span::styled(SUPPORT_PLACEHOLDER, Style::default().fg(TEXT_FAINT)));
    while field.len() < TICKET_ROWS {
        field.blank();
    }
    ticket.append(Card::new().frame(field));
    ticket.blank();
    let submit = ticket.button(
        Button::new("Submit Request").fit_to(inner_width as usize),
        Action::Inert,
    );
    ticket.push(submit);
    doc.append(Card::new().frame(ticket));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tab: DashboardTab, width: u16, narrow: bool) -> Document {
        let mut doc = Document::new(width, None);
        render_dashboard(&mut doc, &DashboardState { tab }, narrow);
        doc
    }

    fn text(doc: &Document) -> String {
        doc.lines().iter().map(|l| l.to_string() + "\n").collect()
    }

    #[test]
    fn overview_shows_license_build_and_history() {
        let doc = render(DashboardTab::Overview, 120, false);
        let text = text(&doc);
        assert!(text.contains(LICENSE_KEY));
        assert!(text.contains("Nomad v1.0.4"));
        assert!(text.contains(LATEST_BUILD_RELEASED));
        assert_eq!(text.matches("Downloaded via Web").count(), 3);
        assert!(text.contains("v1.0.1 • Downloaded via Web"));
        assert!(text.contains(ACCOUNT_USER));
    }

    #[test]
    fn title_follows_tab() {
        let doc = render(DashboardTab::Plugins, 120, false);
        let text = text(&doc);
        assert!(text.contains(PLUGIN_SYNC_BADGE));
        assert!(text.lines().any(|l| l.contains("Plugins") && l.contains("Sign Out")));
    }

    #[test]
    fn licenses_tab_is_title_only() {
        let doc = render(DashboardTab::Licenses, 120, false);
        let text = text(&doc);
        assert!(!text.contains(LICENSE_KEY));
        assert!(!text.contains(SUPPORT_TITLE));
    }

    #[test]
    fn support_tab_has_ticket_form() {
        let doc = render(DashboardTab::Support, 120, false);
        let text = text(&doc);
        assert!(text.contains(SUPPORT_TITLE));
        assert!(text.contains(SUPPORT_PLACEHOLDER));
        assert!(text.contains("Submit Request"));
    }

    #[test]
    fn hotspots_cover_logo_tabs_and_sign_out() {
        let doc = render(DashboardTab::Licenses, 120, false);
        let actions: Vec<Action> = doc.hotspots().iter().map(|h| h.action.clone()).collect();
        assert_eq!(actions[0], Action::Navigate(Page::Home));
        let tabs: Vec<Action> = DashboardTab::ALL.into_iter().map(Action::SelectTab).collect();
        assert_eq!(actions[1..5], tabs[..]);
        assert_eq!(actions[5], Action::Navigate(Page::Home));
        assert_eq!(actions.len(), 6);
    }

    #[test]
    fn overview_cards_stack_when_installer_button_would_clip() {
        for width in [79, 84, 90] {
            let doc = render(DashboardTab::Overview, width, false);
            let text = text(&doc);
            assert!(text.contains("[  ↓ Download Installer  ]"), "width {width}");
            assert!(text.contains(glyph(Icon::Check)), "width {width}");
        }
    }

    #[test]
    fn tab_strip_wraps_on_tiny_terminals() {
        let doc = render(DashboardTab::Overview, 26, true);
        let lines: Vec<String> = doc.lines().iter().map(|l| l.to_string()).collect();
        for hotspot in &doc.hotspots()[1..5] {
            assert!(lines[hotspot.line].contains(&hotspot.label));
            assert!(lines[hotspot.line].chars().count() <= 26);
        }
    }

    #[test]
    fn narrow_dashboard_uses_tab_strip() {
        let doc = render(DashboardTab::Overview, 60, true);
        let text = text(&doc);
        assert!(!text.contains(ACCOUNT_USER));
        assert!(text
            .lines()
            .any(|l| l.contains("Overview") && l.contains("Support")));
    }
}
