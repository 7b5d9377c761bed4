use crate::site::content::NOT_FOUND;
use crate::ui::document::Document;
use crate::ui::theme::TEXT;
use ratatui::style::Style;
use ratatui::text::Span;

pub fn render_not_found(doc: &mut Document) {
    for _ in 0..4 {
        doc.blank();
    }
    doc.push_centered(Span::styled(NOT_FOUND, Style::default().fg(TEXT)));
}
