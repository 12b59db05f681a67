//! Booking intake, pricing, and job records for removal moves.
//!
//! A submission flows through intake screening, the quote calculator, and the
//! job repository, then fans out to notification sinks. The router exposes
//! the same pipeline over HTTP. Storage and notification transports sit
//! behind traits so hosts choose their own backends.

pub mod domain;
pub(crate) mod intake;
pub mod memory;
pub mod notify;
pub mod pricing;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    format_display_id, parse_display_job_id, short_job_ref, AddressDetails, BookingSubmission,
    ContactDetails, CostBreakdown, DateDetails, DisplayJobId, FurnitureItem, JobId, JobStatus,
    PackingMaterial, PricingInput, QuoteRecommendationRequest,
};
pub use intake::IntakeError;
pub use memory::InMemoryJobRepository;
pub use notify::{BookingConfirmation, MessageReceipt, NotificationChannel, NotificationSink};
pub use repository::{JobRecord, JobRepository, RepositoryError};
pub use router::booking_router;
pub use service::{BookingService, BookingServiceError};
