use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal events the screen reacts to.
///
/// Produced by the input task from the crossterm [`EventStream`]
/// (`crossterm::event::EventStream`); focus and paste events have no meaning
/// on this screen and are dropped at the conversion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event (clicks drive the title, controls, and grid).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl Event {
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) => Some(Event::Key(k)),
            crossterm::event::Event::Mouse(m) => Some(Event::Mouse(m)),
            crossterm::event::Event::Resize(w, h) => Some(Event::Resize(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn key_events_pass_through() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        let event = Event::from_crossterm(crossterm::event::Event::Key(key));
        assert_eq!(event, Some(Event::Key(key)));
    }

    #[test]
    fn resize_passes_through() {
        let event = Event::from_crossterm(crossterm::event::Event::Resize(80, 24));
        assert_eq!(event, Some(Event::Resize(80, 24)));
    }

    #[test]
    fn focus_events_are_dropped() {
        assert_eq!(
            Event::from_crossterm(crossterm::event::Event::FocusGained),
            None
        );
        assert_eq!(
            Event::from_crossterm(crossterm::event::Event::Paste("55".into())),
            None
        );
    }
}
