//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nomad_site::config::DisplayConfig;
use nomad_site::ui::app::App;
use nomad_site::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Tall enough for every page to fit without scrolling.
pub const TALL: u16 = 400;

/// App on `page` in a terminal `cols` x `rows`.
pub fn make_app(page: &str, cols: u16, rows: u16) -> App {
    let mut app = App::new(DisplayConfig::default(), page);
    app.on_resize(cols, rows);
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Draw `app` into a test backend of its own size and return the rows.
pub fn render_rows(app: &App) -> Vec<String> {
    let (cols, rows) = app.size();
    let mut terminal = Terminal::new(TestBackend::new(cols, rows)).expect("test terminal");
    terminal
        .draw(|frame| draw(frame, app))
        .expect("draw into test backend");
    let buffer = terminal.backend().buffer();
    (0..rows)
        .map(|y| {
            (0..cols)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn render_text(app: &App) -> String {
    render_rows(app).join("\n")
}
