use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use housie_core::{Game, POOL_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ui::GRID_COLUMNS;

/// A user intent aimed at one of the screen's press targets.
///
/// Mouse clicks resolve to a `Press` through hit-testing; keys map to the
/// same intents, so the state machine never knows which input produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Title,
    Start,
    Reset,
    AutoSwitch,
    NextNumber,
    Cell(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Messages processed by [`App::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Press(Press),
    /// Press the cell under the keyboard cursor.
    PressSelected,
    /// Move the keyboard cursor on the grid.
    Move(Direction),
    /// The periodic caller fired.
    AutoTick,
    Quit,
}

/// A side effect for the runtime to execute after an update.
///
/// This screen has exactly three effects, so they are plain data rather
/// than boxed futures; `update` stays synchronous and directly testable.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Announce a freshly drawn number.
    Speak(u8),
    /// Cut off any in-flight announcement.
    SilenceSpeech,
    Quit,
}

/// The screen model: game state plus the UI-only bits (RNG, grid cursor).
pub struct App {
    game: Game,
    rng: StdRng,
    cursor: u8,
}

impl App {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Construct with a caller-supplied RNG. Tests seed this to make draws
    /// deterministic.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            game: Game::new(),
            rng,
            cursor: 1,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The grid cell the keyboard cursor is on.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Process one message. Control gating lives here: presses on disabled
    /// controls fall through without touching the game.
    pub fn update(&mut self, msg: Msg) -> Effect {
        match msg {
            Msg::Press(Press::Start) => {
                if !self.game.is_active() {
                    self.game.start();
                }
                Effect::None
            }
            Msg::Press(Press::Reset) => {
                self.game.reset();
                Effect::SilenceSpeech
            }
            Msg::Press(Press::AutoSwitch) => {
                self.game.toggle_auto();
                Effect::None
            }
            Msg::Press(Press::NextNumber) => {
                if self.game.is_active() && !self.game.auto_mode() {
                    self.call_next()
                } else {
                    Effect::None
                }
            }
            Msg::Press(Press::Title) => {
                self.game.press_title();
                Effect::None
            }
            Msg::Press(Press::Cell(number)) => {
                self.cursor = number;
                self.game.press_cell(number);
                Effect::None
            }
            Msg::PressSelected => {
                self.game.press_cell(self.cursor);
                Effect::None
            }
            Msg::Move(direction) => {
                self.move_cursor(direction);
                Effect::None
            }
            Msg::AutoTick => {
                // A tick that raced a reset or the end of the game is inert.
                if self.game.auto_calling() {
                    self.call_next()
                } else {
                    Effect::None
                }
            }
            Msg::Quit => Effect::Quit,
        }
    }

    fn call_next(&mut self) -> Effect {
        match self.game.call_next(&mut self.rng) {
            Some(number) => Effect::Speak(number),
            None => Effect::None,
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let columns = GRID_COLUMNS as u8;
        match direction {
            Direction::Up => {
                if self.cursor > columns {
                    self.cursor -= columns;
                }
            }
            Direction::Down => {
                if self.cursor + columns <= POOL_SIZE {
                    self.cursor += columns;
                }
            }
            Direction::Left => {
                if (self.cursor - 1) % columns > 0 {
                    self.cursor -= 1;
                }
            }
            Direction::Right => {
                if (self.cursor - 1) % columns < columns - 1 {
                    self.cursor += 1;
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a key press to a message. Unbound keys are discarded.
pub fn key_to_msg(key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
        KeyCode::Char('s') => Some(Msg::Press(Press::Start)),
        KeyCode::Char('r') => Some(Msg::Press(Press::Reset)),
        KeyCode::Char('a') => Some(Msg::Press(Press::AutoSwitch)),
        KeyCode::Char('n') | KeyCode::Char(' ') => Some(Msg::Press(Press::NextNumber)),
        KeyCode::Char('t') => Some(Msg::Press(Press::Title)),
        KeyCode::Enter => Some(Msg::PressSelected),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Msg::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Msg::Move(Direction::Right)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use housie_core::{Phase, SECRET_KEY};

    fn app() -> App {
        App::with_rng(StdRng::seed_from_u64(99))
    }

    #[test]
    fn start_then_next_speaks_the_draw() {
        let mut app = app();
        assert_eq!(app.update(Msg::Press(Press::Start)), Effect::None);
        let effect = app.update(Msg::Press(Press::NextNumber));
        let Effect::Speak(n) = effect else {
            panic!("expected a spoken announcement, got {effect:?}");
        };
        assert_eq!(app.game().current(), Some(n));
        assert!(app.game().called().contains(n));
    }

    #[test]
    fn next_is_gated_while_idle() {
        let mut app = app();
        assert_eq!(app.update(Msg::Press(Press::NextNumber)), Effect::None);
        assert!(app.game().called().is_empty());
    }

    #[test]
    fn next_is_gated_while_auto_is_on() {
        let mut app = app();
        app.update(Msg::Press(Press::Start));
        app.update(Msg::Press(Press::AutoSwitch));
        assert!(app.game().auto_mode());
        assert_eq!(app.update(Msg::Press(Press::NextNumber)), Effect::None);
        assert!(app.game().called().is_empty());
    }

    #[test]
    fn start_is_gated_while_active() {
        let mut app = app();
        app.update(Msg::Press(Press::Start));
        app.update(Msg::Press(Press::NextNumber));
        app.update(Msg::Press(Press::Start));
        assert_eq!(app.game().called().len(), 1);
    }

    #[test]
    fn auto_switch_is_gated_while_idle() {
        let mut app = app();
        app.update(Msg::Press(Press::AutoSwitch));
        assert!(!app.game().auto_mode());
    }

    #[test]
    fn reset_silences_speech() {
        let mut app = app();
        app.update(Msg::Press(Press::Start));
        app.update(Msg::Press(Press::NextNumber));
        assert_eq!(app.update(Msg::Press(Press::Reset)), Effect::SilenceSpeech);
        assert_eq!(app.game().phase(), Phase::Idle);
        assert!(app.game().called().is_empty());
    }

    #[test]
    fn auto_tick_calls_while_auto_calling() {
        let mut app = app();
        app.update(Msg::Press(Press::Start));
        app.update(Msg::Press(Press::AutoSwitch));
        assert!(matches!(app.update(Msg::AutoTick), Effect::Speak(_)));
        assert_eq!(app.game().called().len(), 1);
    }

    #[test]
    fn stale_auto_tick_is_inert() {
        let mut app = app();
        app.update(Msg::Press(Press::Start));
        app.update(Msg::Press(Press::AutoSwitch));
        app.update(Msg::Press(Press::Reset));
        assert_eq!(app.update(Msg::AutoTick), Effect::None);
        assert!(app.game().called().is_empty());
    }

    #[test]
    fn cell_press_routes_to_game_and_moves_cursor() {
        let mut app = app();
        for _ in 0..3 {
            app.update(Msg::Press(Press::Title));
        }
        app.update(Msg::Press(Press::Cell(SECRET_KEY)));
        assert!(app.game().secret().enabled());
        assert_eq!(app.cursor(), SECRET_KEY);

        app.update(Msg::Press(Press::Cell(12)));
        assert_eq!(app.game().secret().picks(), &[12]);
    }

    #[test]
    fn enter_presses_the_cell_under_the_cursor() {
        let mut app = app();
        for _ in 0..3 {
            app.update(Msg::Press(Press::Title));
        }
        // Walk the cursor from 1 to 55: down five rows, right four columns.
        for _ in 0..5 {
            app.update(Msg::Move(Direction::Down));
        }
        for _ in 0..4 {
            app.update(Msg::Move(Direction::Right));
        }
        assert_eq!(app.cursor(), SECRET_KEY);
        app.update(Msg::PressSelected);
        assert!(app.game().secret().enabled());
    }

    #[test]
    fn cursor_stays_on_the_grid() {
        let mut app = app();
        app.update(Msg::Move(Direction::Up));
        app.update(Msg::Move(Direction::Left));
        assert_eq!(app.cursor(), 1);

        app.update(Msg::Press(Press::Cell(90)));
        app.update(Msg::Move(Direction::Down));
        app.update(Msg::Move(Direction::Right));
        assert_eq!(app.cursor(), 90);
    }

    #[test]
    fn quit_message_quits() {
        let mut app = app();
        assert_eq!(app.update(Msg::Quit), Effect::Quit);
    }

    #[test]
    fn key_bindings_map_to_intents() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_to_msg(key(KeyCode::Char('s'))), Some(Msg::Press(Press::Start)));
        assert_eq!(key_to_msg(key(KeyCode::Char('r'))), Some(Msg::Press(Press::Reset)));
        assert_eq!(key_to_msg(key(KeyCode::Char('a'))), Some(Msg::Press(Press::AutoSwitch)));
        assert_eq!(
            key_to_msg(key(KeyCode::Char('n'))),
            Some(Msg::Press(Press::NextNumber))
        );
        assert_eq!(key_to_msg(key(KeyCode::Char('t'))), Some(Msg::Press(Press::Title)));
        assert_eq!(key_to_msg(key(KeyCode::Enter)), Some(Msg::PressSelected));
        assert_eq!(key_to_msg(key(KeyCode::Char('q'))), Some(Msg::Quit));
        assert_eq!(
            key_to_msg(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
        assert_eq!(key_to_msg(key(KeyCode::Char('x'))), None);
    }
}
