use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rps_gameplay::*;
use rps_hands::Sign;

/// Computer player that throws uniformly at random.
pub struct Fish {
    rng: SmallRng,
}

impl Fish {
    /// Reproducible sequence of throws for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Opponent for Fish {
    fn throw(&mut self) -> Sign {
        let sign = Sign::playable()
            .choose(&mut self.rng)
            .copied()
            .expect("non empty playable signs");
        log::debug!("[fish] throws {}", sign);
        sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throws_only_playable_signs() {
        let mut fish = Fish::default();
        assert!((0..256).map(|_| fish.throw()).all(|s| s.is_known()));
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = (0..32).map({
            let mut fish = Fish::seeded(7);
            move |_| fish.throw()
        });
        let b = (0..32).map({
            let mut fish = Fish::seeded(7);
            move |_| fish.throw()
        });
        assert!(a.eq(b));
    }

    #[test]
    fn roughly_uniform() {
        let mut fish = Fish::seeded(42);
        let throws = (0..3000).map(|_| fish.throw()).collect::<Vec<_>>();
        for sign in Sign::playable() {
            let n = throws.iter().filter(|&&s| s == sign).count();
            assert!(n > 800 && n < 1200, "{} thrown {} times", sign, n);
        }
    }
}
