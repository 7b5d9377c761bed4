use crate::site::content::{
    DEEP_DIVE_COPY, DEEP_DIVE_TITLE, FEATURES, FEATURES_HEADING, FEATURES_HEADING_ACCENT,
    FEATURES_INTRO,
};
use crate::site::Page;
use crate::ui::components::{glyph, Action, Button, Card};
use crate::ui::document::Document;
use crate::ui::layout::column_width;
use crate::ui::theme::{TEXT, TEXT_MUTED, VIOLET, VIOLET_LIGHT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const GRID_GAP: u16 = 2;
const INTRO_MAX_WIDTH: u16 = 72;

/// Home page feature grid: heading, intro and six cards.
pub fn render_feature_grid(doc: &mut Document, narrow: bool) {
    doc.blank();
    let bold = Style::default().add_modifier(Modifier::BOLD);
    doc.push(Line::from(vec![
        Span::styled(format!("{FEATURES_HEADING} "), bold.fg(TEXT)),
        Span::styled(FEATURES_HEADING_ACCENT, bold.fg(VIOLET)),
    ]));
    doc.blank();
    let mut intro = doc.child(doc.width().min(INTRO_MAX_WIDTH));
    intro.paragraph(FEATURES_INTRO, Style::default().fg(TEXT_MUTED));
    doc.append(intro);
    doc.blank();

    let per_row: u16 = if narrow { 1 } else { 3 };
    let outer = column_width(doc.width(), per_row, GRID_GAP);
    let inner_width = Card::inner_width(outer);

    let mut bodies: Vec<Document> = FEATURES
        .iter()
        .map(|feature| {
            let mut body = doc.child(inner_width);
            body.push(Span::styled(
                format!("[{}]", glyph(feature.icon)),
                Style::default().fg(VIOLET_LIGHT),
            ));
            body.blank();
            body.push(Span::styled(feature.title, bold.fg(TEXT)));
            body.paragraph(feature.description, Style::default().fg(TEXT_MUTED));
            body
        })
        .collect();

    let tallest = bodies.iter().map(Document::len).max().unwrap_or(0);
    for body in &mut bodies {
        while body.len() < tallest {
            body.blank();
        }
    }

    let cards = bodies.into_iter().map(|body| Card::new().frame(body)).collect();
    doc.append_grid(cards, per_row as usize, GRID_GAP);
    doc.blank();
}

/// The `features` page body: a teaser with a way back home.
pub fn render_feature_deep_dive(doc: &mut Document) {
    doc.blank();
    doc.blank();
    doc.push_centered(Span::styled(
        DEEP_DIVE_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    doc.blank();
    doc.paragraph_centered(DEEP_DIVE_COPY, Style::default().fg(TEXT_MUTED));
    doc.blank();
    let back = doc.button(Button::new("Back Home"), Action::Navigate(Page::Home));
    doc.push_centered(back);
    doc.blank();
    doc.blank();
}
