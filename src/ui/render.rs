use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{BACKGROUND, TEXT_BODY};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let screen = app.screen();
    let (header, body) = layout_regions(area, screen.header_height());

    frame.render_widget(
        Block::default().style(Style::default().bg(BACKGROUND).fg(TEXT_BODY)),
        area,
    );

    if let Some(navbar) = screen.header().filter(|navbar| !navbar.is_empty()) {
        frame.render_widget(Paragraph::new(navbar.lines().to_vec()), header);
    }

    // The incoming page is drawn dimmed for the length of its fade.
    let body_style = if app.is_fading() {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(screen.body().lines().to_vec())
            .style(body_style)
            .scroll((app.viewport().offset(), 0)),
        body,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn frame(app: &App) -> Buffer {
        let (cols, rows) = app.size();
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal.backend().buffer().clone()
    }

    /// Modifiers of every non-blank cell in rows `rows`.
    fn glyph_modifiers(buffer: &Buffer, rows: std::ops::Range<u16>) -> Vec<Modifier> {
        let width = buffer.area.width;
        rows.flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|pos| &buffer[pos])
            .filter(|cell| !cell.symbol().trim().is_empty())
            .map(|cell| cell.style().add_modifier)
            .collect()
    }

    #[test]
    fn incoming_page_is_dim_until_the_tick() {
        let mut app = App::new(DisplayConfig::default(), "home");
        app.on_resize(120, 40);
        app.navigate("pricing");
        assert!(app.is_fading());

        let header = app.screen().header_height();
        let fading = frame(&app);
        let body = glyph_modifiers(&fading, header..40);
        assert!(!body.is_empty());
        assert!(body.iter().all(|m| m.contains(Modifier::DIM)));
        let navbar = glyph_modifiers(&fading, 0..header);
        assert!(navbar.iter().all(|m| !m.contains(Modifier::DIM)));

        app.on_tick();
        let settled = frame(&app);
        let body = glyph_modifiers(&settled, header..40);
        assert!(body.iter().all(|m| !m.contains(Modifier::DIM)));
    }
}
