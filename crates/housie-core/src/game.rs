use crate::board::CalledSet;
use crate::draw::draw_uncalled;
use crate::secret::SecretState;
use rand::Rng;

/// Derived lifecycle view of a [`Game`].
///
/// `Finished` is not stored anywhere -- it is the condition "inactive with a
/// full board". Keeping it derived means it can never drift from the called
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game running.
    Idle,
    /// A game is in progress.
    Active,
    /// Every number has been called.
    Finished,
}

/// The game controller.
///
/// Owns all game state and sequences draws; the embedding layer routes user
/// intents (button, title, and cell presses) into it and executes the side
/// effects its return values imply. Announcing a drawn number and silencing
/// speech on reset are the caller's job, as is scheduling auto-mode ticks
/// while [`auto_calling`](Game::auto_calling) holds.
#[derive(Debug, Clone, Default)]
pub struct Game {
    called: CalledSet,
    current: Option<u8>,
    active: bool,
    auto: bool,
    secret: SecretState,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new game. No-op while a game is already running.
    ///
    /// Clears the board and the last-called readout and rewinds the secret
    /// cursor. Auto mode, secret mode, and the pick list deliberately carry
    /// over from before: only [`reset`](Game::reset) clears those.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.called.clear();
        self.current = None;
        self.active = true;
        self.secret.rewind();
    }

    /// Return everything to the mount state: empty board, no current number,
    /// inactive, auto mode off, secret state dropped. Valid from any phase.
    pub fn reset(&mut self) {
        self.called.clear();
        self.current = None;
        self.active = false;
        self.auto = false;
        self.secret = SecretState::new();
    }

    /// Call the next number, manually or from a timer tick.
    ///
    /// With a full board this deactivates the game and returns `None`
    /// without drawing. Otherwise the next planned secret number is
    /// consumed if one is pending, else a random uncalled number is drawn;
    /// the result joins the called set, becomes the current number, and is
    /// returned for announcement.
    pub fn call_next<R: Rng>(&mut self, rng: &mut R) -> Option<u8> {
        if self.called.is_full() {
            self.active = false;
            return None;
        }

        let number = match self.secret.take_planned() {
            Some(planned) => planned,
            None => draw_uncalled(rng, &self.called)?,
        };

        self.called.insert(number);
        self.current = Some(number);
        Some(number)
    }

    /// Flip auto mode. Only meaningful while a game is running.
    pub fn toggle_auto(&mut self) {
        if self.active {
            self.auto = !self.auto;
        }
    }

    /// Whether timer-driven calling should be scheduled right now.
    pub fn auto_calling(&self) -> bool {
        self.active && self.auto
    }

    /// A press on the title text (part of the unlock gesture).
    pub fn press_title(&mut self) {
        self.secret.title_tap();
    }

    /// A press on a numbered cell.
    ///
    /// Disambiguated by state: during key entry it is a key attempt
    /// (regardless of game phase); with secret mode on and no game running
    /// it toggles the number's pick; otherwise it is informational only.
    pub fn press_cell(&mut self, number: u8) {
        if self.secret.awaiting_key() {
            self.secret.try_unlock(number);
            return;
        }
        if self.secret.enabled() && !self.active {
            self.secret.toggle_pick(number);
        }
    }

    pub fn phase(&self) -> Phase {
        if self.active {
            Phase::Active
        } else if self.called.is_full() {
            Phase::Finished
        } else {
            Phase::Idle
        }
    }

    pub fn called(&self) -> &CalledSet {
        &self.called
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn auto_mode(&self) -> bool {
        self.auto
    }

    pub fn secret(&self) -> &SecretState {
        &self.secret
    }
}
