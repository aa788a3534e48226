pub mod event_bus;
pub mod repositories;

pub use event_bus::EventBus;
pub use repositories::InMemoryReviewCycleRepository;
