use crate::site::content::{
    Icon, DOCS_BREADCRUMB, DOCS_CURRENT_TOPIC, DOCS_INTRO, DOCS_NEXT, DOCS_PHILOSOPHY,
    DOCS_PHILOSOPHY_TITLE, DOCS_PREVIOUS, DOCS_PRINCIPLES, DOCS_SEARCH_PLACEHOLDER, DOCS_TIP,
    DOCS_TIP_TITLE, DOCS_TITLE, DOC_GROUPS,
};
use crate::ui::components::{glyph, Action, Button, ButtonVariant, Card, CardAccent};
use crate::ui::document::Document;
use crate::ui::layout::wrap;
use crate::ui::theme::{
    BORDER, TEXT, TEXT_BODY, TEXT_FAINT, TEXT_MUTED, VIOLET_LIGHT, VIOLET_PALE,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const SIDEBAR_WIDTH: u16 = 26;
const SIDEBAR_GAP: u16 = 3;
const ARTICLE_MAX_WIDTH: u16 = 80;

/// Documentation layout: topic sidebar (wide only) and the article.
pub fn render_docs(doc: &mut Document, narrow: bool) {
    doc.blank();
    if narrow {
        let mut article = doc.child(doc.width());
        render_article(&mut article);
        doc.append(article);
        return;
    }

    let mut sidebar = doc.child(SIDEBAR_WIDTH);
    render_sidebar(&mut sidebar);
    let article_width = doc
        .width()
        .saturating_sub(SIDEBAR_WIDTH + SIDEBAR_GAP)
        .min(ARTICLE_MAX_WIDTH);
    let mut article = doc.child(article_width.max(1));
    render_article(&mut article);
    doc.append_columns(vec![sidebar, article], SIDEBAR_GAP);
}

fn render_sidebar(doc: &mut Document) {
    let mut search = doc.child(Card::inner_width(doc.width()));
    search.push(Span::styled(
        format!("{} {}", glyph(Icon::Search), DOCS_SEARCH_PLACEHOLDER),
        Style::default().fg(TEXT_FAINT),
    ));
    doc.append(Card::new().frame(search));
    doc.blank();

    for group in DOC_GROUPS.iter() {
        doc.push(Span::styled(
            group.title.to_uppercase(),
            Style::default().fg(TEXT_FAINT).add_modifier(Modifier::BOLD),
        ));
        for topic in group.topics {
            let current = *topic == DOCS_CURRENT_TOPIC;
            let link = doc.button(Button::link(*topic).active(current), Action::Inert);
            let marker = if current {
                Span::styled("▌ ", Style::default().fg(VIOLET_LIGHT))
            } else {
                Span::raw("  ")
            };
            doc.push(Line::from(vec![marker, link]));
        }
        doc.blank();
    }
}

fn render_article(doc: &mut Document) {
    doc.push(Span::styled(DOCS_BREADCRUMB, Style::default().fg(VIOLET_LIGHT)));
    doc.blank();
    doc.push(Span::styled(
        DOCS_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    doc.blank();
    doc.paragraph(DOCS_INTRO, Style::default().fg(TEXT_BODY));
    doc.blank();

    let mut tip = doc.child(Card::inner_width(doc.width()));
    tip.push(Span::styled(
        format!("{} {}", glyph(Icon::Zap), DOCS_TIP_TITLE),
        Style::default().fg(VIOLET_PALE).add_modifier(Modifier::BOLD),
    ));
    tip.paragraph(DOCS_TIP, Style::default().fg(TEXT_BODY));
    doc.append(Card::new().accent(CardAccent::Highlight).frame(tip));
    doc.blank();

    doc.push(Span::styled(
        DOCS_PHILOSOPHY_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    doc.blank();
    doc.paragraph(DOCS_PHILOSOPHY, Style::default().fg(TEXT_MUTED));
    doc.blank();

    let width = doc.width() as usize;
    for (label, text) in DOCS_PRINCIPLES.iter() {
        let label = Span::styled(*label, Style::default().fg(TEXT).add_modifier(Modifier::BOLD));
        let bullet = Span::styled("• ", Style::default().fg(TEXT_MUTED));
        if 2 + label.width() + 1 + text.chars().count() <= width {
            doc.push(Line::from(vec![
                bullet,
                label,
                Span::styled(format!(" {text}"), Style::default().fg(TEXT_MUTED)),
            ]));
        } else {
            doc.push(Line::from(vec![bullet, label]));
            for row in wrap(text, width.saturating_sub(2)) {
                doc.push(Span::styled(format!("  {row}"), Style::default().fg(TEXT_MUTED)));
            }
        }
    }
    doc.blank();
    doc.rule(Style::default().fg(BORDER));
    doc.blank();

    let width = doc.width() as usize;
    let previous = doc.button(
        Button::new(DOCS_PREVIOUS)
            .variant(ButtonVariant::Secondary)
            .fit_to(width),
        Action::Inert,
    );
    let next = doc.button(
        Button::new(DOCS_NEXT)
            .variant(ButtonVariant::Secondary)
            .trailing_icon(Icon::ArrowRight)
            .fit_to(width),
        Action::Inert,
    );
    doc.push_split(vec![previous], vec![next]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(doc: &Document) -> String {
        doc.lines().iter().map(|l| l.to_string() + "\n").collect()
    }

    #[test]
    fn wide_docs_show_sidebar_and_article() {
        let mut doc = Document::new(120, None);
        render_docs(&mut doc, false);
        let text = text(&doc);
        assert!(text.contains(DOCS_SEARCH_PLACEHOLDER));
        assert!(text.contains("Plugin Sandboxing"));
        assert!(text.contains(DOCS_TITLE));
        assert!(text.contains("Cmd + K"));
    }

    #[test]
    fn narrow_docs_hide_sidebar() {
        let mut doc = Document::new(60, None);
        render_docs(&mut doc, true);
        let text = text(&doc);
        assert!(!text.contains(DOCS_SEARCH_PLACEHOLDER));
        assert!(text.contains(DOCS_TITLE));
        // previous + next
        assert_eq!(doc.hotspots().len(), 2);
    }

    #[test]
    fn sidebar_topics_come_first_in_focus_order() {
        let mut doc = Document::new(120, None);
        render_docs(&mut doc, false);
        let topics: usize = DOC_GROUPS.iter().map(|g| g.topics.len()).sum();
        assert_eq!(doc.hotspots().len(), topics + 2);
        let indices: Vec<usize> = doc.hotspots().iter().map(|h| h.index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn next_button_drops_below_previous_when_cramped() {
        let mut doc = Document::new(40, None);
        render_docs(&mut doc, true);
        let lines: Vec<String> = doc.lines().iter().map(|l| l.to_string()).collect();
        let [previous, next] = doc.hotspots() else {
            panic!("expected previous and next");
        };
        assert_eq!(next.line, previous.line + 1);
        assert!(lines[next.line].contains("[  Next: Installation →  ]"));
    }
}
