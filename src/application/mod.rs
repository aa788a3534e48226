// Review workflow coordination
pub mod review_service;
