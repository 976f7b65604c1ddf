use powerai_core::Delta;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Draws battery deltas: a change with probability `change_probability`,
/// split evenly between down and up; otherwise hold.
#[derive(Debug, Clone)]
pub struct DeltaSource {
    rng: StdRng,
    change_probability: f64,
}

impl DeltaSource {
    pub fn new(change_probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            change_probability: change_probability.clamp(0.0, 1.0),
        }
    }

    pub fn next_delta(&mut self) -> Delta {
        let change_roll: f64 = self.rng.gen();
        let direction_roll: f64 = self.rng.gen();
        Delta::from_rolls(change_roll, direction_roll, self.change_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_percent_of_ticks_move() {
        let mut source = DeltaSource::new(0.3, Some(42));
        let draws = 10_000;
        let (mut down, mut up) = (0u32, 0u32);
        for _ in 0..draws {
            match source.next_delta() {
                Delta::Down => down += 1,
                Delta::Up => up += 1,
                Delta::Hold => {}
            }
        }

        let moved = f64::from(down + up) / f64::from(draws);
        assert!((0.27..0.33).contains(&moved), "moved fraction {moved}");
        let down = f64::from(down) / f64::from(draws);
        let up = f64::from(up) / f64::from(draws);
        assert!((0.12..0.18).contains(&down), "down fraction {down}");
        assert!((0.12..0.18).contains(&up), "up fraction {up}");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = DeltaSource::new(0.5, Some(7));
        let mut b = DeltaSource::new(0.5, Some(7));
        let xs: Vec<_> = (0..64).map(|_| a.next_delta()).collect();
        let ys: Vec<_> = (0..64).map(|_| b.next_delta()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn zero_probability_always_holds() {
        let mut source = DeltaSource::new(0.0, Some(1));
        assert!((0..1_000).all(|_| source.next_delta() == Delta::Hold));
    }
}
