//! Assessment value objects and entities.
//!
//! `AssessmentScore` is a self-validating value object; `SelfAssessment` and
//! `ManagerAssessment` are immutable bundles of scores plus narrative fields,
//! stamped with their submission time at construction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ReviewCycleError;
use crate::domain::review::ids::{AssessmentId, KpiId};

/// Lowest rating a manager or employee can award
pub const MIN_RATING: Decimal = dec!(1.0);
/// Highest rating a manager or employee can award
pub const MAX_RATING: Decimal = dec!(5.0);
/// Achievement floor, in percent of target
pub const MIN_ACHIEVEMENT: Decimal = dec!(0);
/// Achievement ceiling, in percent of target
pub const MAX_ACHIEVEMENT: Decimal = dec!(100);

/// One KPI's rating within an assessment.
///
/// Ratings live on a closed 1.0-5.0 scale; achievement is a percentage of
/// target in [0, 100]. Both bounds are inclusive. Instances are validated on
/// construction and immutable afterwards; equality and hashing are structural
/// over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentScore {
    kpi_id: KpiId,
    rating_value: Decimal,
    achievement_percentage: Decimal,
    comment: Option<String>,
}

impl AssessmentScore {
    pub fn new(
        kpi_id: KpiId,
        rating_value: Decimal,
        achievement_percentage: Decimal,
        comment: Option<String>,
    ) -> Result<Self, ReviewCycleError> {
        if rating_value < MIN_RATING || rating_value > MAX_RATING {
            return Err(ReviewCycleError::RatingOutOfRange {
                value: rating_value,
            });
        }
        if achievement_percentage < MIN_ACHIEVEMENT || achievement_percentage > MAX_ACHIEVEMENT {
            return Err(ReviewCycleError::AchievementOutOfRange {
                value: achievement_percentage,
            });
        }

        Ok(Self {
            kpi_id,
            rating_value,
            achievement_percentage,
            comment,
        })
    }

    pub fn kpi_id(&self) -> KpiId {
        self.kpi_id
    }

    pub fn rating_value(&self) -> Decimal {
        self.rating_value
    }

    pub fn achievement_percentage(&self) -> Decimal {
        self.achievement_percentage
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// The employee's own KPI ratings and narrative, submitted first in the cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfAssessment {
    id: AssessmentId,
    submitted_date: DateTime<Utc>,
    comments: Option<String>,
    extra_mile_efforts: Option<String>,
    kpi_scores: Vec<AssessmentScore>,
}

impl SelfAssessment {
    /// Build a self-assessment from at least one KPI score.
    ///
    /// The submission time is captured here, not when the aggregate persists.
    pub fn new(
        kpi_scores: Vec<AssessmentScore>,
        comments: Option<String>,
        extra_mile_efforts: Option<String>,
    ) -> Result<Self, ReviewCycleError> {
        if kpi_scores.is_empty() {
            return Err(ReviewCycleError::NoScores);
        }

        Ok(Self {
            id: AssessmentId::new(),
            submitted_date: Utc::now(),
            comments,
            extra_mile_efforts,
            kpi_scores,
        })
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn submitted_date(&self) -> DateTime<Utc> {
        self.submitted_date
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn extra_mile_efforts(&self) -> Option<&str> {
        self.extra_mile_efforts.as_deref()
    }

    pub fn kpi_scores(&self) -> &[AssessmentScore] {
        &self.kpi_scores
    }
}

/// The supervisor's KPI ratings and overall comments; drives the final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerAssessment {
    id: AssessmentId,
    submitted_date: DateTime<Utc>,
    overall_comments: Option<String>,
    kpi_scores: Vec<AssessmentScore>,
}

impl ManagerAssessment {
    pub fn new(
        kpi_scores: Vec<AssessmentScore>,
        overall_comments: Option<String>,
    ) -> Result<Self, ReviewCycleError> {
        if kpi_scores.is_empty() {
            return Err(ReviewCycleError::NoScores);
        }

        Ok(Self {
            id: AssessmentId::new(),
            submitted_date: Utc::now(),
            overall_comments,
            kpi_scores,
        })
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn submitted_date(&self) -> DateTime<Utc> {
        self.submitted_date
    }

    pub fn overall_comments(&self) -> Option<&str> {
        self.overall_comments.as_deref()
    }

    pub fn kpi_scores(&self) -> &[AssessmentScore] {
        &self.kpi_scores
    }
}
