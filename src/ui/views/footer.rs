use crate::site::content::{FooterLink, Icon, COPYRIGHT, FOOTER_BLURB, FOOTER_COLUMNS, PRODUCT};
use crate::ui::components::{glyph, Action, Button};
use crate::ui::document::Document;
use crate::ui::layout::column_width;
use crate::ui::theme::{BORDER, TEXT, TEXT_FAINT, TEXT_MUTED, VIOLET_LIGHT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const BRAND_WIDTH: u16 = 44;
const COLUMN_GAP: u16 = 4;

pub fn render_footer(doc: &mut Document, narrow: bool) {
    doc.blank();
    doc.rule(Style::default().fg(BORDER));
    doc.blank();

    if narrow {
        let mut brand = doc.child(doc.width());
        render_brand(&mut brand);
        doc.append(brand);
        for column in FOOTER_COLUMNS.iter() {
            doc.blank();
            let mut links = doc.child(doc.width());
            render_links(&mut links, column.title, column.links);
            doc.append(links);
        }
    } else {
        let brand_width = BRAND_WIDTH.min(doc.width() / 2);
        let mut brand = doc.child(brand_width);
        render_brand(&mut brand);
        let rest = doc.width().saturating_sub(brand_width + COLUMN_GAP);
        let link_width = column_width(rest, FOOTER_COLUMNS.len() as u16, COLUMN_GAP);

        let mut columns = vec![brand];
        for column in FOOTER_COLUMNS.iter() {
            let mut links = doc.child(link_width);
            render_links(&mut links, column.title, column.links);
            columns.push(links);
        }
        doc.append_columns(columns, COLUMN_GAP);
    }
    doc.blank();
}

fn render_brand(doc: &mut Document) {
    doc.push(Line::from(vec![
        Span::styled(
            format!("{} ", glyph(Icon::Music)),
            Style::default().fg(VIOLET_LIGHT),
        ),
        Span::styled(PRODUCT, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
    ]));
    doc.blank();
    doc.paragraph(FOOTER_BLURB, Style::default().fg(TEXT_MUTED));
    doc.blank();
    doc.push(Span::styled(COPYRIGHT, Style::default().fg(TEXT_FAINT)));
}

fn render_links(doc: &mut Document, title: &str, links: &[FooterLink]) {
    doc.push(Span::styled(
        title.to_string(),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    for link in links {
        let action = link
            .target
            .clone()
            .map_or(Action::Inert, Action::Navigate);
        let span = doc.button(Button::link(link.label), action);
        doc.push(span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Page;

    #[test]
    fn resources_link_documentation_to_docs() {
        let mut doc = Document::new(100, None);
        render_footer(&mut doc, false);
        let actions: Vec<Action> = doc.hotspots().iter().map(|h| h.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                Action::Navigate(Page::Features),
                Action::Navigate(Page::Pricing),
                Action::Navigate(Page::Changelog),
                Action::Navigate(Page::Download),
                Action::Navigate(Page::Docs),
                Action::Inert,
                Action::Inert,
                Action::Inert,
            ]
        );
    }

    #[test]
    fn wide_footer_puts_columns_beside_brand() {
        let mut doc = Document::new(100, None);
        render_footer(&mut doc, false);
        let row = doc
            .lines()
            .iter()
            .map(|l| l.to_string())
            .find(|l| l.contains(PRODUCT))
            .expect("brand row");
        assert!(row.contains("Product"));
        assert!(row.contains("Resources"));
    }

    #[test]
    fn narrow_footer_stacks() {
        let mut doc = Document::new(40, None);
        render_footer(&mut doc, true);
        let text: String = doc.lines().iter().map(|l| l.to_string() + "\n").collect();
        assert!(text.contains(COPYRIGHT));
        assert!(text.contains("Developer SDK"));
        assert!(!text.lines().any(|l| l.contains("Product") && l.contains("Resources")));
    }
}
