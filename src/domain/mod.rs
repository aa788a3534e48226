// Review cycle aggregate and its entities
pub mod review;

// Final score calculation policy
pub mod scoring;

// Repository traits
pub mod repositories;

// Domain-specific error types
pub mod errors;
