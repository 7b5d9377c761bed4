use crate::shutdown::ShutdownHandle;
use crossterm::event::{self, Event, KeyEvent, MouseEventKind};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Lines one mouse wheel notch scrolls.
pub const WHEEL_LINES: i32 = 3;

/// Longest the reader blocks before re-checking the shutdown flag.
const POLL_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Mouse wheel, in lines; positive scrolls down.
    Scroll(i32),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

/// Background reader forwarding terminal events and ticks over a channel.
/// It never touches application state.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                let timeout = tick_rate.saturating_sub(last_tick.elapsed()).min(POLL_SLICE);
                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(event) => match translate(event) {
                            Some(app_event) => tx.send(app_event).is_ok(),
                            None => true,
                        },
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => true,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        break;
                    }
                };
                if !forwarded {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Map a raw terminal event to the events the app reacts to.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(AppEvent::Scroll(WHEEL_LINES)),
            MouseEventKind::ScrollUp => Some(AppEvent::Scroll(-WHEEL_LINES)),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEvent};

    fn wheel(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn wheel_scrolls_three_lines() {
        assert_eq!(
            translate(wheel(MouseEventKind::ScrollDown)),
            Some(AppEvent::Scroll(3))
        );
        assert_eq!(
            translate(wheel(MouseEventKind::ScrollUp)),
            Some(AppEvent::Scroll(-3))
        );
        assert_eq!(translate(wheel(MouseEventKind::Moved)), None);
    }

    #[test]
    fn keys_and_resizes_pass_through() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(translate(Event::Key(key)), Some(AppEvent::Key(key)));
        assert_eq!(
            translate(Event::Resize(100, 40)),
            Some(AppEvent::Resize(100, 40))
        );
        assert_eq!(translate(Event::FocusGained), None);
    }

    #[test]
    fn shutdown_flag_becomes_event() {
        let shutdown = ShutdownHandle::new();
        shutdown.signal();
        let events = EventHandler::new(Duration::from_millis(10), shutdown);
        assert_eq!(
            events.next(Duration::from_secs(2)),
            Ok(AppEvent::Shutdown)
        );
    }
}
