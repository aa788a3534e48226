//! In-Memory Repository Implementations
//!
//! This module provides a thread-safe, in-memory implementation of the
//! repository trait defined in `domain::repositories`.
//!
//! # Features
//!
//! - **Thread-safe**: Uses `Arc<RwLock>` for concurrent access
//! - **Async**: All operations are async-ready
//! - **Testing**: Ideal for unit tests and development
//! - **Production**: Suitable for single-instance deployments
//!
//! # Limitations
//!
//! - Data is lost on application restart
//! - No persistence across multiple instances
//!
//! For production persistence, implement `ReviewCycleRepository` against a
//! database.

use crate::domain::repositories::ReviewCycleRepository;
use crate::domain::review::cycle::ReviewCycle;
use crate::domain::review::ids::ReviewCycleId;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of ReviewCycleRepository
/// Suitable for testing and single-instance deployments
pub struct InMemoryReviewCycleRepository {
    cycles: Arc<RwLock<HashMap<ReviewCycleId, ReviewCycle>>>,
}

impl InMemoryReviewCycleRepository {
    pub fn new() -> Self {
        Self {
            cycles: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryReviewCycleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewCycleRepository for InMemoryReviewCycleRepository {
    async fn find_by_id(&self, id: ReviewCycleId) -> Result<Option<ReviewCycle>> {
        Ok(self.cycles.read().await.get(&id).cloned())
    }

    async fn save(&self, cycle: &ReviewCycle) -> Result<()> {
        self.cycles.write().await.insert(cycle.id(), cycle.clone());
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<ReviewCycle>> {
        Ok(self.cycles.read().await.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.cycles.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::assessment::AssessmentScore;
    use crate::domain::review::cycle::ReviewCycleStatus;
    use crate::domain::review::ids::{KpiId, UserId};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn test_cycle(name: &str) -> ReviewCycle {
        ReviewCycle::new(
            name,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryReviewCycleRepository::new();

        let cycle = test_cycle("H1 2025");
        repo.save(&cycle).await.unwrap();

        let loaded = repo.find_by_id(cycle.id()).await.unwrap().unwrap();
        assert_eq!(loaded.id(), cycle.id());
        assert_eq!(loaded.cycle_name(), "H1 2025");
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryReviewCycleRepository::new();

        let missing = repo.find_by_id(ReviewCycleId::new()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_count_and_get_all() {
        let repo = InMemoryReviewCycleRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.save(&test_cycle("H1 2025")).await.unwrap();
        repo.save(&test_cycle("H2 2025")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_state() {
        let repo = InMemoryReviewCycleRepository::new();

        let mut cycle = test_cycle("H1 2025");
        let participant_id = cycle
            .add_participant(UserId::new(), UserId::new())
            .unwrap();
        repo.save(&cycle).await.unwrap();

        let scores =
            vec![AssessmentScore::new(KpiId::new(), dec!(4.0), dec!(85), None).unwrap()];
        cycle
            .submit_self_assessment(participant_id, scores, None, None)
            .unwrap();
        cycle.drain_events();
        repo.save(&cycle).await.unwrap();

        let reloaded = repo.find_by_id(cycle.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.status(), ReviewCycleStatus::InProgress);
        assert!(reloaded
            .participant(participant_id)
            .unwrap()
            .has_self_assessment());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
