//! The review cycle aggregate root.
//!
//! `ReviewCycle` owns its participants, enforces the cross-participant
//! submission rules, drives all status transitions, and accumulates domain
//! events for the application layer to drain and publish. Callers never
//! mutate participants or assessments directly.
//!
//! # Invariants
//!
//! - Self-assessment precedes manager assessment for every participant
//! - One submission of each kind per participant
//! - A completed cycle rejects every further mutation
//! - Each operation either fully succeeds (state and event updated together)
//!   or leaves the aggregate untouched

use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::ReviewCycleError;
use crate::domain::review::assessment::{AssessmentScore, ManagerAssessment, SelfAssessment};
use crate::domain::review::events::{
    ManagerAssessmentSubmitted, ReviewCycleCompleted, ReviewEvent, SelfAssessmentSubmitted,
};
use crate::domain::review::ids::{ParticipantId, ReviewCycleId, UserId};
use crate::domain::review::participant::ReviewParticipant;
use crate::domain::scoring::PerformanceScoreCalculator;

/// Lifecycle state of a review cycle.
///
/// `Active -> InProgress` on the first self-assessment submission anywhere in
/// the cycle; `InProgress -> Completed` once every participant has a manager
/// assessment. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewCycleStatus {
    Active,
    InProgress,
    Completed,
}

impl fmt::Display for ReviewCycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewCycleStatus::Active => write!(f, "ACTIVE"),
            ReviewCycleStatus::InProgress => write!(f, "IN_PROGRESS"),
            ReviewCycleStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// A time-boxed performance-evaluation period containing its participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCycle {
    id: ReviewCycleId,
    cycle_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ReviewCycleStatus,
    participants: Vec<ReviewParticipant>,
    // Transient: drained by the caller, never persisted.
    #[serde(skip)]
    pending_events: Vec<ReviewEvent>,
}

impl ReviewCycle {
    /// Open a new cycle in `Active` state.
    ///
    /// The period is inclusive; `start_date == end_date` is a valid one-day
    /// cycle.
    pub fn new(
        cycle_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ReviewCycleError> {
        if cycle_name.trim().is_empty() {
            return Err(ReviewCycleError::EmptyCycleName);
        }
        if end_date < start_date {
            return Err(ReviewCycleError::InvalidPeriod {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            id: ReviewCycleId::new(),
            cycle_name: cycle_name.to_string(),
            start_date,
            end_date,
            status: ReviewCycleStatus::Active,
            participants: Vec::new(),
            pending_events: Vec::new(),
        })
    }

    pub fn id(&self) -> ReviewCycleId {
        self.id
    }

    pub fn cycle_name(&self) -> &str {
        &self.cycle_name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn status(&self) -> ReviewCycleStatus {
        self.status
    }

    pub fn participants(&self) -> &[ReviewParticipant] {
        &self.participants
    }

    pub fn participant(&self, participant_id: ParticipantId) -> Option<&ReviewParticipant> {
        self.participants
            .iter()
            .find(|p| p.id() == participant_id)
    }

    /// Enroll an employee/supervisor pairing. The participant starts in
    /// `Pending` and is owned by this cycle.
    pub fn add_participant(
        &mut self,
        employee_id: UserId,
        supervisor_id: UserId,
    ) -> Result<ParticipantId, ReviewCycleError> {
        self.ensure_open()?;

        let participant = ReviewParticipant::new(employee_id, supervisor_id);
        let participant_id = participant.id();
        self.participants.push(participant);
        Ok(participant_id)
    }

    /// Record an employee's self-assessment.
    ///
    /// The first successful submission anywhere in the cycle moves the cycle
    /// from `Active` to `InProgress`; later submissions leave it there.
    pub fn submit_self_assessment(
        &mut self,
        participant_id: ParticipantId,
        kpi_scores: Vec<AssessmentScore>,
        comments: Option<String>,
        extra_mile_efforts: Option<String>,
    ) -> Result<(), ReviewCycleError> {
        self.ensure_open()?;
        let idx = self.participant_index(participant_id)?;
        if self.participants[idx].has_self_assessment() {
            return Err(ReviewCycleError::SelfAssessmentAlreadySubmitted { participant_id });
        }

        // Last fallible step; nothing is mutated before this succeeds.
        let assessment = SelfAssessment::new(kpi_scores, comments, extra_mile_efforts)?;

        let event = SelfAssessmentSubmitted {
            event_id: Uuid::new_v4(),
            cycle_id: self.id,
            participant_id,
            employee_id: self.participants[idx].employee_id(),
            supervisor_id: self.participants[idx].supervisor_id(),
            submitted_date: assessment.submitted_date(),
            kpi_scores: assessment.kpi_scores().to_vec(),
            comments: assessment.comments().map(str::to_owned),
            extra_mile_efforts: assessment.extra_mile_efforts().map(str::to_owned),
        };

        self.participants[idx].attach_self_assessment(assessment);
        if self.status == ReviewCycleStatus::Active {
            self.status = ReviewCycleStatus::InProgress;
        }
        self.pending_events
            .push(ReviewEvent::SelfAssessmentSubmitted(event));
        Ok(())
    }

    /// Record a supervisor's assessment and fix the participant's final score.
    ///
    /// Requires the participant's self-assessment to already be in. Cycle
    /// status is not advanced here; only `complete` closes the cycle.
    pub fn submit_manager_assessment(
        &mut self,
        participant_id: ParticipantId,
        kpi_scores: Vec<AssessmentScore>,
        overall_comments: Option<String>,
        calculator: &PerformanceScoreCalculator,
    ) -> Result<Decimal, ReviewCycleError> {
        self.ensure_open()?;
        let idx = self.participant_index(participant_id)?;
        if !self.participants[idx].has_self_assessment() {
            return Err(ReviewCycleError::SelfAssessmentMissing { participant_id });
        }
        if self.participants[idx].has_manager_assessment() {
            return Err(ReviewCycleError::ManagerAssessmentAlreadySubmitted { participant_id });
        }

        let assessment = ManagerAssessment::new(kpi_scores, overall_comments)?;
        let final_score = calculator.final_score(assessment.kpi_scores());

        let event = ManagerAssessmentSubmitted {
            event_id: Uuid::new_v4(),
            cycle_id: self.id,
            participant_id,
            employee_id: self.participants[idx].employee_id(),
            supervisor_id: self.participants[idx].supervisor_id(),
            submitted_date: assessment.submitted_date(),
            kpi_scores: assessment.kpi_scores().to_vec(),
            overall_comments: assessment.overall_comments().map(str::to_owned),
            final_score,
        };

        self.participants[idx].attach_manager_assessment(assessment, final_score);
        self.pending_events
            .push(ReviewEvent::ManagerAssessmentSubmitted(event));
        Ok(final_score)
    }

    /// Close the cycle once every participant has a manager assessment.
    ///
    /// Returns the arithmetic mean of all final scores, 2 decimal places
    /// half-up, zero for a cycle with no participants. A cycle without
    /// participants completes trivially.
    pub fn complete(&mut self) -> Result<Decimal, ReviewCycleError> {
        self.ensure_open()?;
        if !self
            .participants
            .iter()
            .all(|p| p.has_manager_assessment())
        {
            return Err(ReviewCycleError::ParticipantsIncomplete);
        }

        let average_score = self.average_final_score();
        self.status = ReviewCycleStatus::Completed;
        for participant in &mut self.participants {
            participant.mark_completed();
        }

        let event = ReviewCycleCompleted {
            event_id: Uuid::new_v4(),
            cycle_id: self.id,
            cycle_name: self.cycle_name.clone(),
            completed_date: Utc::now(),
            participant_count: self.participants.len(),
            average_score,
        };
        self.pending_events
            .push(ReviewEvent::ReviewCycleCompleted(event));
        Ok(average_score)
    }

    /// Return all events accumulated since the last drain and clear the
    /// buffer. The caller owns publication; events not published before the
    /// next drain are gone.
    pub fn drain_events(&mut self) -> Vec<ReviewEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn ensure_open(&self) -> Result<(), ReviewCycleError> {
        if self.status == ReviewCycleStatus::Completed {
            return Err(ReviewCycleError::CycleCompleted);
        }
        Ok(())
    }

    fn participant_index(
        &self,
        participant_id: ParticipantId,
    ) -> Result<usize, ReviewCycleError> {
        self.participants
            .iter()
            .position(|p| p.id() == participant_id)
            .ok_or(ReviewCycleError::ParticipantNotFound { participant_id })
    }

    fn average_final_score(&self) -> Decimal {
        if self.participants.is_empty() {
            return Decimal::ZERO;
        }

        let total: Decimal = self
            .participants
            .iter()
            .filter_map(|p| p.final_score())
            .sum();
        (total / Decimal::from(self.participants.len()))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
