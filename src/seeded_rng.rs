use blake2::{Blake2b512, Digest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Make a random number generator from a global seed
/// and a string id.
///
/// The global seed is a single piece of information intended
/// to control all randomness in the program. In order to be
/// able to create independent random number generators for
/// the different tables (one for the sleep health table,
/// another for the appointments table), a unique string id is
/// passed to make the resulting random number generator
/// different from the others. That way, changing how many
/// draws one table consumes does not disturb the data in the
/// other table.
///
/// It is up to the user of the function to ensure that no id
/// is used more than once with the same global seed (unless
/// the same random numbers are desired).
///
/// The id is concatenated with the global seed and the result
/// is hashed. The resulting hash seeds the random number
/// generator.
pub fn make_rng(global_seed: u64, id: &str) -> ChaCha8Rng {
    let message = format!("{id}{global_seed}");
    let mut hasher = Blake2b512::new();
    hasher.update(message);
    let seed = hasher.finalize()[0..32]
        .try_into()
        .expect("Unexpectedly failed to obtain correct-length slice");
    ChaCha8Rng::from_seed(seed)
}
