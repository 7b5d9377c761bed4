use crate::site::content::{Icon, PRICING_CONTACT, PRICING_COPY, PRICING_TITLE, TIERS};
use crate::ui::components::{glyph, Action, Button, ButtonVariant, Card, CardAccent};
use crate::ui::document::Document;
use crate::ui::layout::column_width;
use crate::ui::theme::{TEXT, TEXT_BODY, TEXT_FAINT, TEXT_MUTED, VIOLET_LIGHT, VIOLET_PALE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const TIERS_MAX_WIDTH: u16 = 84;
const TIER_GAP: u16 = 4;

pub fn render_pricing(doc: &mut Document, narrow: bool) {
    doc.blank();
    doc.blank();
    doc.push_centered(Span::styled(
        PRICING_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    doc.blank();
    doc.paragraph_centered(PRICING_COPY, Style::default().fg(TEXT_MUTED));
    doc.blank();
    doc.blank();

    let region = doc.width().min(TIERS_MAX_WIDTH);
    let per_row: u16 = if narrow { 1 } else { 2 };
    let outer = column_width(region, per_row, TIER_GAP);
    let inner_width = Card::inner_width(outer);

    let mut container = doc.child(region);
    let mut bodies: Vec<Document> = Vec::with_capacity(TIERS.len());
    for tier in TIERS.iter() {
        let mut body = container.child(inner_width);
        body.blank();
        body.push(Span::styled(tier.name, Style::default().fg(TEXT)));
        body.push(Span::styled(
            tier.price,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ));
        let blurb = if tier.recommended {
            VIOLET_PALE
        } else {
            TEXT_MUTED
        };
        body.paragraph(tier.blurb, Style::default().fg(blurb));
        body.blank();
        let check = if tier.recommended {
            VIOLET_LIGHT
        } else {
            TEXT_FAINT
        };
        for perk in tier.perks {
            body.push(Line::from(vec![
                Span::styled(format!("{}  ", glyph(Icon::Check)), Style::default().fg(check)),
                Span::styled(*perk, Style::default().fg(TEXT_BODY)),
            ]));
        }
        body.blank();
        let variant = if tier.recommended {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Secondary
        };
        let cta = body.button(
            Button::new(tier.cta)
                .variant(variant)
                .fit_to(inner_width as usize),
            Action::Navigate(tier.target.clone()),
        );
        body.push(cta);
        bodies.push(body);
    }

    let tallest = bodies.iter().map(Document::len).max().unwrap_or(0);
    let cards: Vec<Document> = TIERS
        .iter()
        .zip(bodies)
        .map(|(tier, mut body)| {
            while body.len() < tallest {
                body.blank();
            }
            if tier.recommended {
                Card::new()
                    .accent(CardAccent::Highlight)
                    .corner_label("RECOMMENDED")
                    .frame(body)
            } else {
                Card::new().frame(body)
            }
        })
        .collect();
    container.append_grid(cards, per_row as usize, TIER_GAP);
    doc.append_centered(container);

    doc.blank();
    doc.blank();
    let faint = Style::default().fg(TEXT_FAINT);
    let contact = Button::link("Contact us");
    if PRICING_CONTACT.chars().count() + 1 + contact.width() + 1 <= doc.width() as usize {
        let contact = doc.button(contact, Action::Inert);
        doc.push_centered(Line::from(vec![
            Span::styled(format!("{PRICING_CONTACT} "), faint),
            contact,
            Span::styled(".", faint),
        ]));
    } else {
        doc.paragraph_centered(PRICING_CONTACT, faint);
        let contact = doc.button(contact, Action::Inert);
        doc.push_centered(Line::from(vec![contact, Span::styled(".", faint)]));
    }
    doc.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Page;

    fn text(doc: &Document) -> String {
        doc.lines().iter().map(|l| l.to_string() + "\n").collect()
    }

    #[test]
    fn shows_both_tiers_with_prices() {
        let mut doc = Document::new(100, None);
        render_pricing(&mut doc, false);
        let text = text(&doc);
        assert!(text.contains("Nomad Evaluation"));
        assert!(text.contains("Nomad Studio"));
        assert!(text.contains("$0"));
        assert!(text.contains("$199"));
        assert!(text.contains("RECOMMENDED"));
    }

    #[test]
    fn ctas_route_to_download_and_account() {
        let mut doc = Document::new(100, None);
        render_pricing(&mut doc, false);
        let actions: Vec<Action> = doc.hotspots().iter().map(|h| h.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                Action::Navigate(Page::Download),
                Action::Navigate(Page::Account),
                Action::Inert
            ]
        );
    }

    #[test]
    fn wide_tiers_sit_side_by_side() {
        let mut doc = Document::new(100, None);
        render_pricing(&mut doc, false);
        let line = doc
            .lines()
            .iter()
            .map(|l| l.to_string())
            .find(|l| l.contains("$0"))
            .expect("price row");
        assert!(line.contains("$199"));
    }

    #[test]
    fn narrow_tiers_stack() {
        let mut doc = Document::new(44, None);
        render_pricing(&mut doc, true);
        let line = doc
            .lines()
            .iter()
            .map(|l| l.to_string())
            .find(|l| l.contains("$0"))
            .expect("price row");
        assert!(!line.contains("$199"));
    }

    #[test]
    fn contact_link_gets_its_own_line_when_cramped() {
        let mut doc = Document::new(30, None);
        render_pricing(&mut doc, true);
        let contact = doc.hotspots().last().expect("contact link");
        let line = doc.lines()[contact.line].to_string();
        assert!(line.contains("Contact us."));
        assert!(line.chars().count() <= 30);
    }
}
