//! Secret code sources
//!
//! Player-vs-Computer rounds need the computer to pick a secret. The source is
//! injected so tests and replays can fix or seed it.

use crate::core::{Code, GameConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces secret codes for new rounds
pub trait SecretSource {
    /// Generate a secret that fits `config`
    fn generate(&mut self, config: &GameConfig) -> Code;
}

/// Uniformly random secrets, each slot drawn independently from the palette
pub struct RandomSecret {
    rng: StdRng,
}

impl RandomSecret {
    /// Deterministic source for tests and reproducible games
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomSecret {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SecretSource for RandomSecret {
    fn generate(&mut self, config: &GameConfig) -> Code {
        let palette = config.palette();
        Code::new(
            (0..config.length())
                .map(|_| palette[self.rng.random_range(0..palette.len())])
                .collect::<Vec<_>>(),
        )
    }
}

/// Always hands out the same secret
#[derive(Debug, Clone)]
pub struct FixedSecret(pub Code);

impl SecretSource for FixedSecret {
    fn generate(&mut self, _config: &GameConfig) -> Code {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn random_secrets_fit_config() {
        let config = GameConfig::new(vec![Color::Red, Color::Blue, Color::White], 5).unwrap();
        let mut source = RandomSecret::seeded(7);
        for _ in 0..100 {
            let secret = source.generate(&config);
            assert!(config.validate(&secret).is_ok());
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let config = GameConfig::default();
        let mut a = RandomSecret::seeded(42);
        let mut b = RandomSecret::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.generate(&config), b.generate(&config));
        }
    }

    #[test]
    fn random_secrets_vary() {
        let config = GameConfig::default();
        let mut source = RandomSecret::seeded(1);
        let secrets: std::collections::HashSet<Code> =
            (0..50).map(|_| source.generate(&config)).collect();
        assert!(secrets.len() > 1);
    }

    #[test]
    fn fixed_secret_repeats() {
        let code: Code = "OYBG".parse().unwrap();
        let mut source = FixedSecret(code.clone());
        assert_eq!(source.generate(&GameConfig::default()), code);
        assert_eq!(source.generate(&GameConfig::default()), code);
    }
}
