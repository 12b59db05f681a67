use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    format_display_id, AddressDetails, BookingSubmission, ContactDetails, CostBreakdown,
    DateDetails, FurnitureItem, JobId, JobStatus, PackingMaterial,
};

/// Stored booking plus review metadata. The cost breakdown is frozen at
/// creation; later edits touch only `status` and `internal_notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(rename = "job_id")]
    pub job_id: JobId,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    pub business_ref: String,
    pub status: JobStatus,
    pub home_size: String,
    pub furniture_items: Vec<FurnitureItem>,
    pub initial_furniture_items: Vec<FurnitureItem>,
    pub packing_service: String,
    pub packing_materials: Vec<PackingMaterial>,
    pub dismantle_package: bool,
    pub collection_address: Option<AddressDetails>,
    pub delivery_address: Option<AddressDetails>,
    pub collection_date: Option<DateDetails>,
    pub materials_delivery_date: Option<DateDetails>,
    pub contact: ContactDetails,
    pub internal_notes: String,
    pub cost_breakdown: CostBreakdown,
}

impl JobRecord {
    /// Assemble the record stored for a freshly priced submission.
    pub fn from_submission(
        job_id: JobId,
        created_at: DateTime<Utc>,
        submission: BookingSubmission,
        cost_breakdown: CostBreakdown,
    ) -> Self {
        JobRecord {
            job_id,
            created_at,
            business_ref: submission.business_ref,
            status: JobStatus::Pending,
            home_size: submission.home_size,
            furniture_items: submission.furniture_items,
            initial_furniture_items: submission.initial_furniture_items,
            packing_service: submission.packing_service,
            packing_materials: submission.packing_materials,
            dismantle_package: submission.dismantle_package,
            collection_address: submission.collection_address,
            delivery_address: submission.delivery_address,
            collection_date: submission.collection_date,
            materials_delivery_date: submission.materials_delivery_date,
            contact: submission.contact,
            internal_notes: String::new(),
            cost_breakdown,
        }
    }

    /// Human-facing reference. Stored jobs carry no assigned display id, so
    /// this is always the derived form.
    pub fn display_reference(&self) -> String {
        format_display_id(&self.job_id, None)
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.contact.first_name, self.contact.last_name)
            .trim()
            .to_string()
    }
}

/// Storage abstraction so the booking service can run against any backend.
pub trait JobRepository: Send + Sync {
    fn insert(&self, record: JobRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<JobRecord>, RepositoryError>;
    /// Every stored record, newest first.
    fn list_all(&self) -> Result<Vec<JobRecord>, RepositoryError>;
    /// Replace the review status; `Ok(false)` when the id is unknown.
    fn update_status(&self, id: &JobId, status: JobStatus) -> Result<bool, RepositoryError>;
    /// Replace the internal notes wholesale; `Ok(false)` when the id is unknown.
    fn update_notes(&self, id: &JobId, notes: &str) -> Result<bool, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
