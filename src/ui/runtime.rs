use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Run the site in the current terminal until the user quits or a
/// termination signal arrives.
pub fn run(config: &Config, start_page: &str) -> io::Result<()> {
    let display = config.display;
    let tick_rate = display.tick_rate();

    let shutdown = ShutdownHandle::new();
    shutdown.register_signals()?;

    let (mut terminal, guard) = setup_terminal(display.mouse_capture)?;
    let mut app = App::new(display, start_page);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let events = EventHandler::new(tick_rate, shutdown.clone());
    tracing::info!(page = %app.page(), "Site started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Scroll(lines)) => app.scroll_by(lines),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the reader thread before the terminal leaves raw mode.
    shutdown.signal();
    drop(guard);
    tracing::info!("Site closed");
    Ok(())
}
