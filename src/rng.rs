use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Random source handed to the game. Pass a seed for a reproducible run.
pub fn game_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => {
            tracing::debug!("Seeding game RNG with {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_os_rng(),
    }
}
