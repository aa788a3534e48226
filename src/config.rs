use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

/// Runtime configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Weight of the rating dimension in the final score blend
    pub rating_weight: Decimal,
    /// Weight of the achievement dimension in the final score blend
    pub achievement_weight: Decimal,
    /// Number of employees the demo binary enrolls
    pub demo_participants: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `SCORE_RATING_WEIGHT` (default 0.7)
    /// - `SCORE_ACHIEVEMENT_WEIGHT` (default 0.3)
    /// - `DEMO_PARTICIPANTS` (default 3)
    pub fn from_env() -> Result<Self> {
        let rating_weight = env_decimal("SCORE_RATING_WEIGHT", dec!(0.7))?;
        let achievement_weight = env_decimal("SCORE_ACHIEVEMENT_WEIGHT", dec!(0.3))?;
        let demo_participants = env::var("DEMO_PARTICIPANTS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<usize>()
            .context("Invalid DEMO_PARTICIPANTS")?;

        Self::from_parts(rating_weight, achievement_weight, demo_participants)
    }

    /// Validate and assemble a configuration.
    pub fn from_parts(
        rating_weight: Decimal,
        achievement_weight: Decimal,
        demo_participants: usize,
    ) -> Result<Self> {
        if rating_weight < Decimal::ZERO || achievement_weight < Decimal::ZERO {
            anyhow::bail!(
                "Score weights must be non-negative, got {} and {}",
                rating_weight,
                achievement_weight
            );
        }
        if rating_weight + achievement_weight != Decimal::ONE {
            anyhow::bail!(
                "Score weights must sum to 1, got {} + {}",
                rating_weight,
                achievement_weight
            );
        }

        Ok(Self {
            rating_weight,
            achievement_weight,
            demo_participants,
        })
    }
}

fn env_decimal(key: &str, default: Decimal) -> Result<Decimal> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<Decimal>()
            .with_context(|| format!("Invalid {}: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        let config = Config::from_parts(dec!(0.7), dec!(0.3), 3).unwrap();
        assert_eq!(config.rating_weight, dec!(0.7));
        assert_eq!(config.achievement_weight, dec!(0.3));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        assert!(Config::from_parts(dec!(0.7), dec!(0.2), 3).is_err());
        assert!(Config::from_parts(dec!(0.6), dec!(0.4), 3).is_ok());
    }

    #[test]
    fn test_negative_weights_are_rejected() {
        assert!(Config::from_parts(dec!(1.3), dec!(-0.3), 3).is_err());
    }
}
