use crate::board::{CalledSet, POOL_SIZE};
use rand::Rng;

/// Draw a uniformly random number from the pool that has not been called.
///
/// Uses rejection sampling: pick a number in `1..=POOL_SIZE` and retry while
/// it is already in `called`. Returns `None` when the board is full, so the
/// loop is guaranteed to terminate without the caller having to check first.
/// Each uncalled number is equally likely.
pub fn draw_uncalled<R: Rng>(rng: &mut R, called: &CalledSet) -> Option<u8> {
    if called.is_full() {
        return None;
    }
    loop {
        let candidate = rng.gen_range(1..=POOL_SIZE);
        if !called.contains(candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draw_is_in_range_and_fresh() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut called = CalledSet::new();
        for _ in 0..POOL_SIZE {
            let n = draw_uncalled(&mut rng, &called).unwrap();
            assert!((1..=POOL_SIZE).contains(&n));
            assert!(!called.contains(n));
            called.insert(n);
        }
        assert!(called.is_full());
    }

    #[test]
    fn full_board_yields_none() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut called = CalledSet::new();
        for n in 1..=POOL_SIZE {
            called.insert(n);
        }
        assert_eq!(draw_uncalled(&mut rng, &called), None);
    }

    #[test]
    fn last_remaining_number_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut called = CalledSet::new();
        for n in 1..=POOL_SIZE {
            if n != 37 {
                called.insert(n);
            }
        }
        assert_eq!(draw_uncalled(&mut rng, &called), Some(37));
    }
}
