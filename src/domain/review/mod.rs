// Performance review domain entities and value objects
pub mod assessment;
pub mod cycle;
pub mod events;
pub mod ids;
pub mod participant;
