use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one element uniformly at random.  The RNG comes from the
/// caller so deterministic seeds can drive it in tests.
pub(crate) fn random_choice<T, R>(choices: &[T], rng: &mut R) -> T
where
    T: Copy,
    R: Rng,
{
    *choices
        .choose(rng)
        .expect("attempted to pick a random choice from an empty slice")
}
