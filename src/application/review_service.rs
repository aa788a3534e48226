//! Review Cycle Application Service
//!
//! Coordinates the aggregate with its collaborators: loads a cycle from the
//! repository, invokes one mutating operation, persists the result and
//! publishes the drained events on the bus. The aggregate stays the single
//! source of truth for what is a legal transition; this layer never checks
//! business rules itself.
//!
//! Each service call works on one loaded aggregate instance at a time; the
//! single-writer discipline per cycle is owned here, not by the domain.

use crate::domain::errors::ReviewCycleError;
use crate::domain::repositories::ReviewCycleRepository;
use crate::domain::review::assessment::AssessmentScore;
use crate::domain::review::cycle::ReviewCycle;
use crate::domain::review::ids::{ParticipantId, ReviewCycleId, UserId};
use crate::domain::scoring::PerformanceScoreCalculator;
use crate::infrastructure::EventBus;
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

/// Application service driving the review workflow
pub struct ReviewCycleService {
    repository: Arc<dyn ReviewCycleRepository>,
    event_bus: EventBus,
    calculator: PerformanceScoreCalculator,
}

impl ReviewCycleService {
    pub fn new(
        repository: Arc<dyn ReviewCycleRepository>,
        event_bus: EventBus,
        calculator: PerformanceScoreCalculator,
    ) -> Self {
        Self {
            repository,
            event_bus,
            calculator,
        }
    }

    /// Open a new review cycle
    pub async fn create_cycle(
        &self,
        cycle_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<ReviewCycleId> {
        let cycle = ReviewCycle::new(cycle_name, start_date, end_date)?;
        let cycle_id = cycle.id();
        self.repository.save(&cycle).await?;
        info!(cycle_id = %cycle_id, cycle_name, "review cycle created");
        Ok(cycle_id)
    }

    /// Enroll an employee/supervisor pairing in a cycle
    pub async fn add_participant(
        &self,
        cycle_id: ReviewCycleId,
        employee_id: UserId,
        supervisor_id: UserId,
    ) -> Result<ParticipantId> {
        let mut cycle = self.load(cycle_id).await?;
        let participant_id = cycle.add_participant(employee_id, supervisor_id)?;
        self.repository.save(&cycle).await?;
        debug!(cycle_id = %cycle_id, participant_id = %participant_id, "participant enrolled");
        Ok(participant_id)
    }

    /// Record an employee's self-assessment
    pub async fn submit_self_assessment(
        &self,
        cycle_id: ReviewCycleId,
        participant_id: ParticipantId,
        kpi_scores: Vec<AssessmentScore>,
        comments: Option<String>,
        extra_mile_efforts: Option<String>,
    ) -> Result<()> {
        let mut cycle = self.load(cycle_id).await?;
        cycle.submit_self_assessment(participant_id, kpi_scores, comments, extra_mile_efforts)?;
        self.persist_and_publish(cycle).await
    }

    /// Record a supervisor's assessment; returns the computed final score
    pub async fn submit_manager_assessment(
        &self,
        cycle_id: ReviewCycleId,
        participant_id: ParticipantId,
        kpi_scores: Vec<AssessmentScore>,
        overall_comments: Option<String>,
    ) -> Result<Decimal> {
        let mut cycle = self.load(cycle_id).await?;
        let final_score = cycle.submit_manager_assessment(
            participant_id,
            kpi_scores,
            overall_comments,
            &self.calculator,
        )?;
        self.persist_and_publish(cycle).await?;
        Ok(final_score)
    }

    /// Close a cycle; returns the cycle-wide average score
    pub async fn complete_cycle(&self, cycle_id: ReviewCycleId) -> Result<Decimal> {
        let mut cycle = self.load(cycle_id).await?;
        let average_score = cycle.complete()?;
        self.persist_and_publish(cycle).await?;
        info!(cycle_id = %cycle_id, %average_score, "review cycle completed");
        Ok(average_score)
    }

    /// Fetch a cycle snapshot for read-side consumers
    pub async fn get_cycle(&self, cycle_id: ReviewCycleId) -> Result<ReviewCycle> {
        self.load(cycle_id).await
    }

    async fn load(&self, cycle_id: ReviewCycleId) -> Result<ReviewCycle> {
        self.repository
            .find_by_id(cycle_id)
            .await?
            .ok_or_else(|| ReviewCycleError::CycleNotFound { cycle_id }.into())
    }

    // Drain before save so the stored snapshot never carries unpublished
    // events; the bus is fire-and-forget.
    async fn persist_and_publish(&self, mut cycle: ReviewCycle) -> Result<()> {
        let events = cycle.drain_events();
        self.repository.save(&cycle).await?;
        for event in events {
            self.event_bus.publish(event).await;
        }
        Ok(())
    }
}
