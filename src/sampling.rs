//! Weighted categorical sampling, used by every field that is drawn
//! from a fixed table of labelled probabilities.

use rand::distributions::{Distribution, WeightedIndex};
use rand_chacha::ChaCha8Rng;

/// Draw one label from an ordered table of (label, weight) pairs.
///
/// Weights do not need to sum to one; `WeightedIndex` normalises
/// them internally. Tables are written out at the call sites so
/// that the probabilities sit next to the field they control.
pub fn weighted_choice<T: Copy>(rng: &mut ChaCha8Rng, choices: &[(T, f64)]) -> T {
    let dist = WeightedIndex::new(choices.iter().map(|(_, weight)| *weight))
        .expect("weights must be non-empty, finite and not all zero");
    choices[dist.sample(rng)].0
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::seeded_rng::make_rng;

    #[test]
    fn zero_weight_labels_are_never_drawn() {
        let mut rng = make_rng(7, "sampling");
        let choices = [("always", 1.0), ("never", 0.0)];
        for _ in 0..1000 {
            assert_eq!(weighted_choice(&mut rng, &choices), "always");
        }
    }

    #[test]
    fn heavier_labels_are_drawn_more_often() {
        let mut rng = make_rng(7, "sampling_freq");
        let choices = [("common", 0.9), ("rare", 0.1)];
        let common = (0..1000)
            .filter(|_| weighted_choice(&mut rng, &choices) == "common")
            .count();
        assert!(common > 800);
    }
}
