use crate::site::content::{Icon, CURRENT_VERSION, NAV_LINKS, PRODUCT};
use crate::site::Page;
use crate::ui::components::{Action, Button, ButtonSize, ButtonVariant};
use crate::ui::document::Document;
use crate::ui::navbar::state::NavbarState;
use crate::ui::theme::BORDER;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const LINK_GAP: &str = "   ";
/// Least padding on either side of the link group.
const GROUP_GAP: usize = 2;

fn logo_button() -> Button {
    Button::link(PRODUCT).icon(Icon::Music).active(true)
}

fn download_button() -> Button {
    Button::new(format!("Download v{CURRENT_VERSION}"))
        .icon(Icon::Download)
        .size(ButtonSize::Sm)
}

/// Columns the full-width bar needs to show every link and action.
pub fn wide_row_width() -> usize {
    let links: usize = NAV_LINKS
        .iter()
        .map(|link| Button::link(link.label).width())
        .sum::<usize>()
        + LINK_GAP.len() * NAV_LINKS.len().saturating_sub(1);
    logo_button().width()
        + GROUP_GAP
        + links
        + GROUP_GAP
        + Button::link("Sign in").width()
        + LINK_GAP.len()
        + download_button().width()
}

/// Render the bar into `doc`. `active` is the page whose link is
/// emphasised; `narrow` swaps the links for the menu toggle.
pub fn render_navbar(doc: &mut Document, active: &Page, state: &NavbarState, narrow: bool) {
    let logo = doc.button(logo_button(), Action::Navigate(Page::Home));

    if narrow {
        let icon = if state.mobile_open {
            Icon::Close
        } else {
            Icon::Menu
        };
        let toggle = doc.button(
            Button::new("Menu")
                .icon(icon)
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Icon),
            Action::ToggleMobileMenu,
        );
        doc.push_split(vec![logo], vec![toggle]);
        if state.mobile_open {
            render_mobile_menu(doc);
        }
    } else {
        let mut links: Vec<Span<'static>> = Vec::new();
        for (i, link) in NAV_LINKS.iter().enumerate() {
            if i > 0 {
                links.push(Span::raw(LINK_GAP));
            }
            links.push(doc.button(
                Button::link(link.label).active(&link.page == active),
                Action::Navigate(link.page.clone()),
            ));
        }
        let sign_in = doc.button(Button::link("Sign in"), Action::Navigate(Page::Login));
        let download = doc.button(download_button(), Action::Navigate(Page::Download));

        let left_width = logo.width();
        let links_width: usize = links.iter().map(Span::width).sum();
        let right_width = sign_in.width() + LINK_GAP.len() + download.width();
        let free = (doc.width() as usize).saturating_sub(left_width + links_width + right_width);
        let before = (free / 2).max(GROUP_GAP);
        let after = free.saturating_sub(before).max(GROUP_GAP);

        let mut spans = vec![logo, Span::raw(" ".repeat(before))];
        spans.extend(links);
        spans.push(Span::raw(" ".repeat(after)));
        spans.push(sign_in);
        spans.push(Span::raw(LINK_GAP));
        spans.push(download);
        doc.push(Line::from(spans));
    }

    if state.scrolled {
        doc.rule(Style::default().fg(BORDER));
    } else {
        doc.blank();
    }
}

fn render_mobile_menu(doc: &mut Document) {
    doc.blank();
    for link in NAV_LINKS.iter() {
        let span = doc.button(
            Button::link(link.label),
            Action::MenuNavigate(link.page.clone()),
        );
        doc.push(Line::from(vec![Span::raw("  "), span]));
    }
    doc.push(Line::from(Span::styled(
        format!("  {}", "─".repeat((doc.width() as usize).saturating_sub(4))),
        Style::default().fg(BORDER),
    )));
    let sign_in = doc.button(Button::link("Sign in"), Action::Navigate(Page::Login));
    doc.push(Line::from(vec![Span::raw("  "), sign_in]));
    let trial = doc.button(
        Button::new("Download Trial").fit_to((doc.width() as usize).saturating_sub(2)),
        Action::Navigate(Page::Download),
    );
    doc.push(Line::from(vec![Span::raw("  "), trial]));
}
