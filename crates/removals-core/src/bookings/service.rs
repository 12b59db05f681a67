use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::autoquote::{self, ItemCatalog, QuoteInputs, QuoteRecommendation};
use crate::business::BusinessDirectory;

use super::domain::{
    BookingSubmission, CostBreakdown, JobId, JobStatus, PricingInput, QuoteRecommendationRequest,
};
use super::intake::{IntakeError, IntakeGuard};
use super::notify::{BookingConfirmation, NotificationSink};
use super::pricing;
use super::repository::{JobRecord, JobRepository, RepositoryError};

/// Service composing the intake guard, quote calculator, job store, and
/// confirmation fan-out.
pub struct BookingService<R, N> {
    guard: IntakeGuard,
    repository: Arc<R>,
    notifications: Arc<N>,
    catalog: ItemCatalog,
}

impl<R, N> BookingService<R, N>
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    pub fn new(
        directory: Arc<BusinessDirectory>,
        repository: Arc<R>,
        notifications: Arc<N>,
    ) -> Self {
        Self::with_catalog(directory, repository, notifications, ItemCatalog::standard())
    }

    pub fn with_catalog(
        directory: Arc<BusinessDirectory>,
        repository: Arc<R>,
        notifications: Arc<N>,
        catalog: ItemCatalog,
    ) -> Self {
        Self {
            guard: IntakeGuard::new(directory),
            repository,
            notifications,
            catalog,
        }
    }

    pub fn directory(&self) -> &BusinessDirectory {
        self.guard.directory()
    }

    /// Screen, price, and persist a submission, then fan out the confirmation.
    /// Returns the generated job id; the stored breakdown never changes after
    /// this point.
    pub fn submit(&self, submission: BookingSubmission) -> Result<JobId, BookingServiceError> {
        self.guard.screen(&submission)?;

        let breakdown = pricing::quote(&submission.pricing_input());
        let job_id = JobId::generate();
        let record = JobRecord::from_submission(job_id.clone(), Utc::now(), submission, breakdown);

        self.repository.insert(record.clone())?;
        self.dispatch_confirmation(&record);

        Ok(job_id)
    }

    /// Price a quote without touching storage.
    pub fn quote(&self, input: &PricingInput) -> CostBreakdown {
        pricing::quote(input)
    }

    /// Fetch one stored job.
    pub fn job(&self, job_id: &JobId) -> Result<JobRecord, BookingServiceError> {
        self.repository
            .fetch(job_id)?
            .ok_or_else(|| BookingServiceError::JobNotFound(job_id.clone()))
    }

    /// Every stored job, newest first.
    pub fn jobs(&self) -> Result<Vec<JobRecord>, BookingServiceError> {
        Ok(self.repository.list_all()?)
    }

    /// Move a job to a new review status. Any of the four statuses may follow
    /// any other; ordering is a UI concern.
    pub fn set_status(&self, job_id: &JobId, status: JobStatus) -> Result<(), BookingServiceError> {
        if self.repository.update_status(job_id, status)? {
            Ok(())
        } else {
            Err(BookingServiceError::JobNotFound(job_id.clone()))
        }
    }

    /// Replace a job's internal notes wholesale.
    pub fn set_notes(&self, job_id: &JobId, notes: &str) -> Result<(), BookingServiceError> {
        if self.repository.update_notes(job_id, notes)? {
            Ok(())
        } else {
            Err(BookingServiceError::JobNotFound(job_id.clone()))
        }
    }

    /// Run the auto-quote engine for a tenant: inventory analysis, vehicle and
    /// crew selection, time estimate, and price. Stateless; nothing is stored.
    pub fn recommendation(
        &self,
        request: &QuoteRecommendationRequest,
    ) -> Result<QuoteRecommendation, BookingServiceError> {
        self.guard.screen_business(&request.business_ref)?;
        if request.home_size.trim().is_empty() {
            return Err(IntakeError::MissingHomeSize.into());
        }

        let analysis = autoquote::analyze_inventory(&request.furniture_items, &self.catalog);
        let inputs = QuoteInputs {
            total_volume: analysis.total_volume,
            num_heavy_items: analysis.num_heavy_items,
            customer_assistance: request.customer_assistance,
            num_rooms: autoquote::rooms_for_home_size(&request.home_size),
            difficult_access: request.difficult_access,
            distance_miles: request.distance_miles,
            no_parking: request.no_parking,
            no_lift: request.no_lift,
            driving_minutes: request.driving_minutes,
        };

        Ok(autoquote::recommendation(&inputs))
    }

    /// Delivery failures are logged and dropped; the booking already exists
    /// and must stay booked.
    fn dispatch_confirmation(&self, record: &JobRecord) {
        let confirmation = BookingConfirmation::for_record(record);
        for receipt in self.notifications.send(&confirmation) {
            if !receipt.success {
                warn!(
                    channel = receipt.channel.label(),
                    job_id = %record.job_id,
                    error = receipt.error.as_deref().unwrap_or("unspecified"),
                    "booking confirmation delivery failed"
                );
            }
        }
    }
}

/// Error raised by the booking service.
#[derive(Debug, thiserror::Error)]
pub enum BookingServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("job not found: {0}")]
    JobNotFound(JobId),
}
