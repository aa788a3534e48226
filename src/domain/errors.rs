use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::review::ids::{ParticipantId, ReviewCycleId};

/// Errors raised by the review-cycle aggregate and its value objects
#[derive(Debug, Clone, Error)]
pub enum ReviewCycleError {
    #[error("Rating must be between 1.0 and 5.0, got {value}")]
    RatingOutOfRange { value: Decimal },

    #[error("Achievement percentage must be between 0 and 100, got {value}")]
    AchievementOutOfRange { value: Decimal },

    #[error("An assessment requires at least one KPI score")]
    NoScores,

    #[error("Cannot modify completed review cycle")]
    CycleCompleted,

    #[error("Self-assessment already submitted for participant {participant_id}")]
    SelfAssessmentAlreadySubmitted { participant_id: ParticipantId },

    #[error("Manager assessment already submitted for participant {participant_id}")]
    ManagerAssessmentAlreadySubmitted { participant_id: ParticipantId },

    #[error(
        "Self-assessment must be submitted before manager assessment for participant {participant_id}"
    )]
    SelfAssessmentMissing { participant_id: ParticipantId },

    #[error("All participants must have manager assessments before completing cycle")]
    ParticipantsIncomplete,

    #[error("Participant not found: {participant_id}")]
    ParticipantNotFound { participant_id: ParticipantId },

    #[error("Review cycle not found: {cycle_id}")]
    CycleNotFound { cycle_id: ReviewCycleId },

    #[error("Cycle name must not be empty")]
    EmptyCycleName,

    #[error("Cycle end date {end} is before start date {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}
