/// The number that unlocks secret mode when pressed during key entry.
pub const SECRET_KEY: u8 = 55;

/// Title presses needed to trigger the gesture.
const GESTURE_TAPS: u8 = 3;

/// The hidden pre-selection feature.
///
/// Three consecutive presses on the title arm key entry; pressing the cell
/// holding [`SECRET_KEY`] then unlocks secret mode. While unlocked and the
/// game is idle, cell presses toggle membership in an ordered pick list, and
/// the next game consumes those picks in insertion order before falling back
/// to random draws.
///
/// The tap counter resets on every third press whether or not the gesture
/// fires, so it is only ever observed as 0, 1, or 2.
#[derive(Debug, Clone, Default)]
pub struct SecretState {
    enabled: bool,
    picks: Vec<u8>,
    cursor: usize,
    taps: u8,
    awaiting_key: bool,
}

impl SecretState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether secret mode is unlocked.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the next cell press is treated as a key attempt.
    pub fn awaiting_key(&self) -> bool {
        self.awaiting_key
    }

    /// The planned call order, in insertion order.
    pub fn picks(&self) -> &[u8] {
        &self.picks
    }

    /// Whether `number` is currently picked.
    pub fn is_picked(&self, number: u8) -> bool {
        self.picks.contains(&number)
    }

    /// Consecutive title presses so far (0..=2).
    pub fn taps(&self) -> u8 {
        self.taps
    }

    /// Register a title press.
    ///
    /// On the third press: if secret mode is on, turn it off and drop the
    /// picks; otherwise arm key entry. Either way the counter starts over.
    pub fn title_tap(&mut self) {
        self.taps += 1;
        if self.taps == GESTURE_TAPS {
            if self.enabled {
                self.enabled = false;
                self.picks.clear();
                self.awaiting_key = false;
            } else {
                self.awaiting_key = true;
            }
            self.taps = 0;
        }
    }

    /// Check a pressed number against the key. Unlocks on a match; key entry
    /// ends either way.
    pub fn try_unlock(&mut self, number: u8) {
        if number == SECRET_KEY {
            self.enabled = true;
        }
        self.awaiting_key = false;
    }

    /// Toggle a number's membership in the pick list. Removal keeps the
    /// insertion order of the remaining picks.
    pub fn toggle_pick(&mut self, number: u8) {
        if let Some(index) = self.picks.iter().position(|&n| n == number) {
            self.picks.remove(index);
        } else {
            self.picks.push(number);
        }
    }

    /// Take the next planned number, if secret mode is on and any remain.
    pub fn take_planned(&mut self) -> Option<u8> {
        if self.enabled && self.cursor < self.picks.len() {
            let number = self.picks[self.cursor];
            self.cursor += 1;
            Some(number)
        } else {
            None
        }
    }

    /// Restart consumption from the first pick. Called on game start.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}
