/// Upper bound of the number pool. Housie is played with 90 balls.
pub const POOL_SIZE: u8 = 90;

/// The set of numbers called so far in the current game.
///
/// Backed by a fixed boolean array indexed by number, so `insert` and
/// `contains` are O(1) and the set can never hold a value outside
/// `1..=POOL_SIZE`. The set only grows while a game is running; `clear`
/// empties it on start and reset.
#[derive(Debug, Clone)]
pub struct CalledSet {
    called: [bool; POOL_SIZE as usize],
    count: usize,
}

impl Default for CalledSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CalledSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            called: [false; POOL_SIZE as usize],
            count: 0,
        }
    }

    /// Add a number to the set. Returns `false` if it was already present
    /// or lies outside the pool.
    pub fn insert(&mut self, number: u8) -> bool {
        let Some(slot) = self.slot(number) else {
            return false;
        };
        if self.called[slot] {
            return false;
        }
        self.called[slot] = true;
        self.count += 1;
        true
    }

    /// Whether the number has been called.
    pub fn contains(&self, number: u8) -> bool {
        self.slot(number).is_some_and(|slot| self.called[slot])
    }

    /// Number of called numbers.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no number has been called yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether every number in the pool has been called.
    pub fn is_full(&self) -> bool {
        self.count == POOL_SIZE as usize
    }

    /// Remove all numbers.
    pub fn clear(&mut self) {
        self.called = [false; POOL_SIZE as usize];
        self.count = 0;
    }

    /// Iterate over the called numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.called
            .iter()
            .enumerate()
            .filter(|(_, called)| **called)
            .map(|(i, _)| i as u8 + 1)
    }

    fn slot(&self, number: u8) -> Option<usize> {
        (1..=POOL_SIZE)
            .contains(&number)
            .then(|| number as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let set = CalledSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.is_full());
    }

    #[test]
    fn insert_and_contains() {
        let mut set = CalledSet::new();
        assert!(set.insert(42));
        assert!(set.contains(42));
        assert!(!set.contains(41));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut set = CalledSet::new();
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut set = CalledSet::new();
        assert!(!set.insert(0));
        assert!(!set.insert(91));
        assert!(set.is_empty());
        assert!(!set.contains(0));
        assert!(!set.contains(91));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut set = CalledSet::new();
        assert!(set.insert(1));
        assert!(set.insert(POOL_SIZE));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn fills_up_at_pool_size() {
        let mut set = CalledSet::new();
        for n in 1..=POOL_SIZE {
            assert!(set.insert(n));
        }
        assert!(set.is_full());
        assert_eq!(set.len(), POOL_SIZE as usize);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = CalledSet::new();
        set.insert(3);
        set.insert(88);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(3));
    }

    #[test]
    fn iter_is_ascending() {
        let mut set = CalledSet::new();
        set.insert(50);
        set.insert(2);
        set.insert(90);
        let collected: Vec<u8> = set.iter().collect();
        assert_eq!(collected, vec![2, 50, 90]);
    }
}
