use crate::site::content::{ChangeKind, Icon, CHANGELOG_STATUS, RELEASES};
use crate::ui::components::{glyph, Badge};
use crate::ui::document::Document;
use crate::ui::layout::wrap;
use crate::ui::theme::{
    BORDER, STATUS_ERROR, STATUS_INFO, STATUS_OK, TEXT, TEXT_BODY, TEXT_FAINT, TEXT_MUTED,
    VIOLET,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Width of the `[CHANGE] ` tag column.
const TAG_WIDTH: usize = 9;

fn tag_style(kind: ChangeKind) -> Style {
    let color = match kind {
        ChangeKind::New => STATUS_OK,
        ChangeKind::Fix => STATUS_ERROR,
        ChangeKind::Perf => STATUS_INFO,
        ChangeKind::Change => TEXT_MUTED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn render_changelog(doc: &mut Document, narrow: bool) {
    doc.blank();
    doc.blank();
    let title = Span::styled(
        "Changelog",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    );
    let status = vec![
        Span::styled(format!("{} ", glyph(Icon::Activity)), Style::default().fg(TEXT_FAINT)),
        Span::styled("● ", Style::default().fg(STATUS_OK)),
        Span::styled(CHANGELOG_STATUS, Style::default().fg(TEXT_FAINT)),
    ];
    if narrow {
        doc.push(title);
        doc.push(Line::from(status));
    } else {
        doc.push_split(vec![title], status);
    }
    doc.blank();
    doc.blank();

    let rail = || Span::styled("│", Style::default().fg(BORDER));
    let text_width = (doc.width() as usize).saturating_sub(4 + TAG_WIDTH);

    for (i, release) in RELEASES.iter().enumerate() {
        if i > 0 {
            doc.push(rail());
            doc.push(rail());
        }
        doc.push(Line::from(vec![
            Span::styled("●", Style::default().fg(VIOLET)),
            Span::raw("  "),
            Span::styled(
                format!("v{}", release.version),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(release.date, Style::default().fg(TEXT_FAINT)),
            Span::raw("  "),
            release_badge(release.kind).span(),
        ]));
        doc.push(rail());

        for change in release.changes {
            let tag = format!("{:<width$}", format!("[{}]", change.kind.tag()), width = TAG_WIDTH);
            for (row, text) in wrap(change.text, text_width).into_iter().enumerate() {
                let lead = if row == 0 {
                    Span::styled(tag.clone(), tag_style(change.kind))
                } else {
                    Span::raw(" ".repeat(TAG_WIDTH))
                };
                doc.push(Line::from(vec![
                    rail(),
                    Span::raw("   "),
                    lead,
                    Span::styled(text, Style::default().fg(TEXT_BODY)),
                ]));
            }
        }
    }
    doc.blank();
}

/// Major releases get the filled badge.
fn release_badge(kind: &str) -> Badge {
    if kind == "Major" {
        Badge::new(kind.to_uppercase())
    } else {
        Badge::outline(kind.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(doc: &Document) -> String {
        doc.lines().iter().map(|l| l.to_string() + "\n").collect()
    }

    #[test]
    fn lists_every_release_newest_first() {
        let mut doc = Document::new(100, None);
        render_changelog(&mut doc, false);
        let text = text(&doc);
        let first = text.find("v1.0.4").expect("1.0.4");
        let last = text.find("v1.0.0").expect("1.0.0");
        assert!(first < last);
        assert!(text.contains("MAJOR"));
        assert!(text.contains(CHANGELOG_STATUS));
    }

    #[test]
    fn changes_are_tagged() {
        let mut doc = Document::new(100, None);
        render_changelog(&mut doc, false);
        let text = text(&doc);
        for tag in ["[NEW]", "[FIX]", "[PERF]", "[CHANGE]"] {
            assert!(text.contains(tag), "missing {tag}");
        }
    }

    #[test]
    fn major_release_badge_is_filled() {
        assert_eq!(release_badge("Major").span().content, " MAJOR ");
        assert_eq!(release_badge("Stable").span().content, "( ● STABLE )");
    }

    #[test]
    fn tags_differ_in_style() {
        assert_ne!(tag_style(ChangeKind::New), tag_style(ChangeKind::Fix));
        assert_ne!(tag_style(ChangeKind::Perf), tag_style(ChangeKind::Change));
    }

    #[test]
    fn changelog_has_no_buttons() {
        let mut doc = Document::new(100, None);
        render_changelog(&mut doc, false);
        assert!(doc.hotspots().is_empty());
    }
}
