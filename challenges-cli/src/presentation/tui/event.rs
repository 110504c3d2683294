use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Interval between ticks; also the granularity of the form shake
pub const TICK: Duration = Duration::from_millis(100);

pub enum AppEvent {
    Key(KeyCode),
    Tick,
}

pub fn read_event() -> std::io::Result<AppEvent> {
    // Poll for events with timeout
    if event::poll(TICK)? {
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(AppEvent::Key(code)),
            _ => Ok(AppEvent::Tick),
        }
    } else {
        Ok(AppEvent::Tick)
    }
}
