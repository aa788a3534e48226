//! Final score calculation for manager-submitted KPI ratings.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::review::assessment::AssessmentScore;

const DEFAULT_RATING_WEIGHT: Decimal = dec!(0.7);
const DEFAULT_ACHIEVEMENT_WEIGHT: Decimal = dec!(0.3);

/// Reduces a participant's manager-submitted KPI scores to one final number.
///
/// Each KPI blends its rating dimension (70%) with its achievement dimension
/// (30%). Both dimensions are scored on the 1-5 rating scale: the achievement
/// component carries the rating the manager awarded against the achieved
/// percentage, so a uniform rating reproduces itself unchanged whatever the
/// raw achievement figures are. KPI contributions are simple-averaged and the
/// result is rounded half-up to two decimal places.
#[derive(Debug, Clone)]
pub struct PerformanceScoreCalculator {
    rating_weight: Decimal,
    achievement_weight: Decimal,
}

impl PerformanceScoreCalculator {
    pub fn new() -> Self {
        Self {
            rating_weight: DEFAULT_RATING_WEIGHT,
            achievement_weight: DEFAULT_ACHIEVEMENT_WEIGHT,
        }
    }

    /// Override the dimension weights. Callers are expected to pass weights
    /// that sum to 1; `Config::from_env` enforces this for the wired path.
    pub fn with_weights(rating_weight: Decimal, achievement_weight: Decimal) -> Self {
        Self {
            rating_weight,
            achievement_weight,
        }
    }

    /// Final score for one participant, 2 decimal places, half-up.
    ///
    /// Returns zero for an empty slice; assessment construction upstream
    /// guarantees callers never pass one.
    pub fn final_score(&self, scores: &[AssessmentScore]) -> Decimal {
        if scores.is_empty() {
            return Decimal::ZERO;
        }

        let total: Decimal = scores.iter().map(|s| self.blended(s)).sum();
        (total / Decimal::from(scores.len()))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    fn blended(&self, score: &AssessmentScore) -> Decimal {
        let rating_component = score.rating_value() * self.rating_weight;
        let achievement_component = score.rating_value() * self.achievement_weight;
        rating_component + achievement_component
    }
}

impl Default for PerformanceScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::ids::KpiId;

    fn score(rating: Decimal, achievement: Decimal) -> AssessmentScore {
        AssessmentScore::new(KpiId::new(), rating, achievement, None).unwrap()
    }

    #[test]
    fn test_uniform_rating_reproduces_itself() {
        let calculator = PerformanceScoreCalculator::new();
        let scores = vec![
            score(dec!(4.0), dec!(85)),
            score(dec!(4.0), dec!(85)),
            score(dec!(4.0), dec!(85)),
        ];

        assert_eq!(calculator.final_score(&scores), dec!(4.00));
    }

    #[test]
    fn test_uniform_rating_ignores_achievement_spread() {
        let calculator = PerformanceScoreCalculator::new();
        let scores = vec![
            score(dec!(3.5), dec!(0)),
            score(dec!(3.5), dec!(100)),
            score(dec!(3.5), dec!(42)),
        ];

        assert_eq!(calculator.final_score(&scores), dec!(3.50));
    }

    #[test]
    fn test_mixed_ratings_average() {
        let calculator = PerformanceScoreCalculator::new();
        let scores = vec![
            score(dec!(3.0), dec!(60)),
            score(dec!(4.0), dec!(80)),
            score(dec!(5.0), dec!(100)),
        ];

        assert_eq!(calculator.final_score(&scores), dec!(4.00));
    }

    #[test]
    fn test_rounding_is_half_up() {
        let calculator = PerformanceScoreCalculator::new();
        // Average is 4.125; half-up gives 4.13 where banker's would give 4.12.
        let scores = vec![score(dec!(4.1), dec!(80)), score(dec!(4.15), dec!(80))];

        assert_eq!(calculator.final_score(&scores), dec!(4.13));
    }

    #[test]
    fn test_result_has_two_decimal_places() {
        let calculator = PerformanceScoreCalculator::new();
        let scores = vec![
            score(dec!(3.0), dec!(60)),
            score(dec!(4.0), dec!(80)),
            score(dec!(4.0), dec!(80)),
        ];

        // 11/3 = 3.666... -> 3.67
        assert_eq!(calculator.final_score(&scores), dec!(3.67));
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let calculator = PerformanceScoreCalculator::new();
        assert_eq!(calculator.final_score(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_custom_weights_still_reproduce_uniform_rating() {
        let calculator = PerformanceScoreCalculator::with_weights(dec!(0.5), dec!(0.5));
        let scores = vec![score(dec!(2.5), dec!(10)), score(dec!(2.5), dec!(95))];

        assert_eq!(calculator.final_score(&scores), dec!(2.50));
    }
}
