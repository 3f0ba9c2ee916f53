//! Substitution key generation command.

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use cipherlab::SubstitutionKey;

use super::CommandExecutor;

/// Generate a random substitution key.
///
/// Prints a random permutation of the 26 letters, suitable for
/// `cipherlab substitution --key`. With `--seed` the key is deterministic:
/// the same seed always produces the same key, which lets two parties
/// derive a shared key from a shared number.
#[derive(Args, Debug)]
pub struct KeygenCommand {
    /// Derive the key deterministically from this seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl CommandExecutor for KeygenCommand {
    fn execute(&self) -> Result<()> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };

        println!("{}", SubstitutionKey::random(&mut rng));
        Ok(())
    }
}
