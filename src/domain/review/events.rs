//! Domain events emitted by the review cycle aggregate.
//!
//! Events are immutable fact records accumulated on the aggregate and drained
//! by the application layer for publication. They belong to the aggregate
//! instance, not to any process-wide bus.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::domain::review::assessment::AssessmentScore;
use crate::domain::review::ids::{ParticipantId, ReviewCycleId, UserId};

/// An employee handed in their self-assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfAssessmentSubmitted {
    pub event_id: Uuid,
    pub cycle_id: ReviewCycleId,
    pub participant_id: ParticipantId,
    pub employee_id: UserId,
    pub supervisor_id: UserId,
    pub submitted_date: DateTime<Utc>,
    pub kpi_scores: Vec<AssessmentScore>,
    pub comments: Option<String>,
    pub extra_mile_efforts: Option<String>,
}

/// A supervisor handed in their assessment, fixing the participant's final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerAssessmentSubmitted {
    pub event_id: Uuid,
    pub cycle_id: ReviewCycleId,
    pub participant_id: ParticipantId,
    pub employee_id: UserId,
    pub supervisor_id: UserId,
    pub submitted_date: DateTime<Utc>,
    pub kpi_scores: Vec<AssessmentScore>,
    pub overall_comments: Option<String>,
    pub final_score: Decimal,
}

/// A review cycle reached its terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCycleCompleted {
    pub event_id: Uuid,
    pub cycle_id: ReviewCycleId,
    pub cycle_name: String,
    pub completed_date: DateTime<Utc>,
    pub participant_count: usize,
    pub average_score: Decimal,
}

/// Union of every event the review aggregate can emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReviewEvent {
    SelfAssessmentSubmitted(SelfAssessmentSubmitted),
    ManagerAssessmentSubmitted(ManagerAssessmentSubmitted),
    ReviewCycleCompleted(ReviewCycleCompleted),
}

impl ReviewEvent {
    /// Stable dot-namespaced identifier used for routing and audit logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            ReviewEvent::SelfAssessmentSubmitted(_) => "review.self_assessment.submitted",
            ReviewEvent::ManagerAssessmentSubmitted(_) => "review.manager_assessment.submitted",
            ReviewEvent::ReviewCycleCompleted(_) => "review.cycle.completed",
        }
    }

    pub fn event_id(&self) -> Uuid {
        match self {
            ReviewEvent::SelfAssessmentSubmitted(e) => e.event_id,
            ReviewEvent::ManagerAssessmentSubmitted(e) => e.event_id,
            ReviewEvent::ReviewCycleCompleted(e) => e.event_id,
        }
    }

    pub fn cycle_id(&self) -> ReviewCycleId {
        match self {
            ReviewEvent::SelfAssessmentSubmitted(e) => e.cycle_id,
            ReviewEvent::ManagerAssessmentSubmitted(e) => e.cycle_id,
            ReviewEvent::ReviewCycleCompleted(e) => e.cycle_id,
        }
    }

    /// Business time of the underlying fact.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ReviewEvent::SelfAssessmentSubmitted(e) => e.submitted_date,
            ReviewEvent::ManagerAssessmentSubmitted(e) => e.submitted_date,
            ReviewEvent::ReviewCycleCompleted(e) => e.completed_date,
        }
    }
}

/// Receives review events published on the bus
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &ReviewEvent);
}

/// Listener that reports every event through tracing
pub struct LoggingListener;

impl EventListener for LoggingListener {
    fn on_event(&self, event: &ReviewEvent) {
        info!(
            event_type = event.event_type(),
            event_id = %event.event_id(),
            cycle_id = %event.cycle_id(),
            "domain event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_type_identifiers_are_stable() {
        let completed = ReviewEvent::ReviewCycleCompleted(ReviewCycleCompleted {
            event_id: Uuid::new_v4(),
            cycle_id: ReviewCycleId::new(),
            cycle_name: "FY25".into(),
            completed_date: Utc::now(),
            participant_count: 2,
            average_score: dec!(4.17),
        });

        assert_eq!(completed.event_type(), "review.cycle.completed");
    }

    #[test]
    fn test_occurred_at_reflects_business_time() {
        let submitted = Utc::now();
        let event = ReviewEvent::SelfAssessmentSubmitted(SelfAssessmentSubmitted {
            event_id: Uuid::new_v4(),
            cycle_id: ReviewCycleId::new(),
            participant_id: ParticipantId::new(),
            employee_id: UserId::new(),
            supervisor_id: UserId::new(),
            submitted_date: submitted,
            kpi_scores: Vec::new(),
            comments: None,
            extra_mile_efforts: None,
        });

        assert_eq!(event.occurred_at(), submitted);
        assert_eq!(event.event_type(), "review.self_assessment.submitted");
    }
}
