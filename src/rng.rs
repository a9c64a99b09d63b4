use rand::{Rng, SeedableRng, XorShiftRng};

/// A source of uniformly distributed random integers in `[0, n)`.
///
/// The maze generators draw all of their randomness through this trait, so
/// tests can supply deterministic or scripted sequences instead of a real
/// generator.
pub trait RandomSource {
    /// A uniformly distributed integer in `[0, exclusive_upper_bound)`.
    ///
    /// Panics if `exclusive_upper_bound` is zero.
    fn gen_below(&mut self, exclusive_upper_bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn gen_below(&mut self, exclusive_upper_bound: usize) -> usize {
        self.gen::<usize>() % exclusive_upper_bound
    }
}

/// Uniform in-place Fisher–Yates shuffle (Durstenfeld variant).
///
/// Walks `upper` from `len - 1` down to `1` and swaps the element at `upper`
/// with a uniformly chosen element in `[0, upper]` inclusive, so every
/// permutation is equally likely given an unbiased `RandomSource`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
    where R: RandomSource + ?Sized
{
    for upper in (1..items.len()).rev() {
        let chosen = rng.gen_below(upper + 1);
        items.swap(upper, chosen);
    }
}

/// A fast non-cryptographic generator with a reproducible seed.
///
/// The same seed always yields the same draw sequence, which combined with a
/// fixed start cell makes maze generation fully deterministic.
pub fn seeded_rng(seed: u32) -> XorShiftRng {
    // XorShiftRng rejects an all zeroes seed, `seed | 1` keeps one word nonzero.
    XorShiftRng::from_seed([
        seed | 1,
        seed.wrapping_add(0x9E37_79B9),
        seed.wrapping_mul(0x85EB_CA6B).wrapping_add(1),
        seed ^ 0xC2B2_AE35,
    ])
}

#[cfg(test)]
mod tests {

    use super::*;

    struct ScriptedDraws {
        draws: Vec<usize>,
        next: usize,
    }

    impl RandomSource for ScriptedDraws {
        fn gen_below(&mut self, exclusive_upper_bound: usize) -> usize {
            let draw = self.draws[self.next % self.draws.len()];
            self.next += 1;
            draw % exclusive_upper_bound
        }
    }

    #[test]
    fn identity_draws_leave_order_unchanged() {
        // Drawing `upper` at every step swaps each element with itself.
        let mut rng = ScriptedDraws { draws: vec![3, 2, 1], next: 0 };
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, ['a', 'b', 'c', 'd']);
    }

    #[test]
    fn always_zero_draws_rotate_the_slice() {
        // Swapping index upper with 0 for upper = 3, 2, 1 on [a, b, c, d]:
        // [d, b, c, a] -> [c, b, d, a] -> [b, c, d, a]
        let mut rng = ScriptedDraws { draws: vec![0], next: 0 };
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, ['b', 'c', 'd', 'a']);
    }

    #[test]
    fn shuffle_of_empty_and_single_slices_is_a_noop() {
        let mut rng = seeded_rng(7);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut single = [42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = seeded_rng(99);
        let mut b = seeded_rng(99);
        for _ in 0..100 {
            assert_eq!(a.gen_below(1000), b.gen_below(1000));
        }
    }

    #[test]
    fn zero_seed_is_accepted() {
        let mut rng = seeded_rng(0);
        let _ = rng.gen_below(10);
    }

    #[test]
    fn gen_below_stays_in_range() {
        let mut rng = seeded_rng(3);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(rng.gen_below(bound) < bound);
            }
        }
    }
}
