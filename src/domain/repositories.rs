//! Repository Pattern Abstractions
//!
//! This module defines the repository trait for review cycle persistence,
//! enabling clean separation between business logic and storage implementation.
//!
//! # Current Implementation
//!
//! The `InMemory` implementation provides thread-safe, in-memory storage
//! using `Arc<RwLock>` for concurrent access.
//!
//! # Future
//!
//! The trait is designed to support database-backed implementations for
//! production persistence without changing business logic.

use crate::domain::review::cycle::ReviewCycle;
use crate::domain::review::ids::ReviewCycleId;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for persisting and retrieving review cycles
#[async_trait]
pub trait ReviewCycleRepository: Send + Sync {
    /// Load a cycle by its identifier
    async fn find_by_id(&self, id: ReviewCycleId) -> Result<Option<ReviewCycle>>;

    /// Persist the aggregate state
    async fn save(&self, cycle: &ReviewCycle) -> Result<()>;

    /// Get all stored cycles
    async fn get_all(&self) -> Result<Vec<ReviewCycle>>;

    /// Count stored cycles
    async fn count(&self) -> Result<usize>;
}
