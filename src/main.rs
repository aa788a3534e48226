//! Talentflow - Headless review-cycle runner
//!
//! Runs one complete performance review workflow against the in-memory
//! infrastructure and reports the emitted domain events via structured logs
//! on stdout.
//!
//! # Usage
//! ```sh
//! DEMO_PARTICIPANTS=5 cargo run
//! ```
//!
//! # Environment Variables
//! - `SCORE_RATING_WEIGHT` / `SCORE_ACHIEVEMENT_WEIGHT` - final score blend (default: 0.7 / 0.3)
//! - `DEMO_PARTICIPANTS` - number of enrolled employees (default: 3)

use anyhow::Result;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use std::sync::Arc;
use talentflow::application::review_service::ReviewCycleService;
use talentflow::config::Config;
use talentflow::domain::review::assessment::AssessmentScore;
use talentflow::domain::review::events::LoggingListener;
use talentflow::domain::review::ids::{KpiId, UserId};
use talentflow::domain::scoring::PerformanceScoreCalculator;
use talentflow::infrastructure::{EventBus, InMemoryReviewCycleRepository};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Talentflow {} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: weights {}/{}, {} demo participants",
        config.rating_weight, config.achievement_weight, config.demo_participants
    );

    // Wire the in-memory collaborators
    let repository = Arc::new(InMemoryReviewCycleRepository::new());
    let event_bus = EventBus::new();
    event_bus.subscribe(Arc::new(LoggingListener)).await;
    let calculator =
        PerformanceScoreCalculator::with_weights(config.rating_weight, config.achievement_weight);
    let service = ReviewCycleService::new(repository, event_bus, calculator);

    // Run one full review workflow
    let today = Utc::now().date_naive();
    let cycle_id = service
        .create_cycle("Annual Review", today, today + Duration::days(90))
        .await?;

    for n in 1..=config.demo_participants {
        let participant_id = service
            .add_participant(cycle_id, UserId::new(), UserId::new())
            .await?;

        let kpi_scores = vec![
            AssessmentScore::new(KpiId::new(), dec!(4.0), dec!(85), Some("Delivery".into()))?,
            AssessmentScore::new(KpiId::new(), dec!(3.5), dec!(70), None)?,
            AssessmentScore::new(KpiId::new(), dec!(4.5), dec!(90), None)?,
        ];

        service
            .submit_self_assessment(
                cycle_id,
                participant_id,
                kpi_scores.clone(),
                Some("Solid quarter".into()),
                None,
            )
            .await?;
        let final_score = service
            .submit_manager_assessment(cycle_id, participant_id, kpi_scores, Some("Agreed".into()))
            .await?;

        info!(%participant_id, %final_score, "participant {} assessed", n);
    }

    let average_score = service.complete_cycle(cycle_id).await?;
    info!(%average_score, "review workflow finished");

    Ok(())
}
